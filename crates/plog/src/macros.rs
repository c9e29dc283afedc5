//! 面向用户的日志宏
//!
//! 每个宏接受 `(logger, tag, fmt, args...)`，展开为写入的字节数。
//! `logger` 可以是 `Logger` 变量、`*logger_ref`，或 `SharedLogger::lock()` 的结果。
//!
//! ```rust
//! use plog::{Logger, plog_warn};
//!
//! let mut log = Logger::new(Vec::new());
//! let n = plog_warn!(log, "adc", "ch{} saturated", 2);
//! assert_eq!(log.sink().as_slice(), b"w/adc: ch2 saturated\n");
//! assert_eq!(n, 21);
//! ```

/// 带级别过滤的内部实现宏
#[doc(hidden)]
#[macro_export]
macro_rules! __plog_println_filtered {
    ($logger:expr, $priority:expr, $tag:expr, $($arg:tt)*) => {
        match $logger {
            ref mut logger => {
                if logger.would_emit($priority) {
                    logger.println($priority, $tag, format_args!($($arg)*))
                } else {
                    0usize
                }
            }
        }
    };
}

/// 以 **ASSERT** 优先级记录一行
#[macro_export]
macro_rules! plog_assert {
    ($logger:expr, $tag:expr, $($arg:tt)*) => {
        $crate::__plog_println_filtered!($logger, $crate::Priority::Assert, $tag, $($arg)*)
    };
}

/// 以 **DEBUG** 优先级记录一行
#[macro_export]
macro_rules! plog_debug {
    ($logger:expr, $tag:expr, $($arg:tt)*) => {
        $crate::__plog_println_filtered!($logger, $crate::Priority::Debug, $tag, $($arg)*)
    };
}

/// 以 **ERROR** 优先级记录一行
#[macro_export]
macro_rules! plog_error {
    ($logger:expr, $tag:expr, $($arg:tt)*) => {
        $crate::__plog_println_filtered!($logger, $crate::Priority::Error, $tag, $($arg)*)
    };
}

/// 以 **INFO** 优先级记录一行
#[macro_export]
macro_rules! plog_info {
    ($logger:expr, $tag:expr, $($arg:tt)*) => {
        $crate::__plog_println_filtered!($logger, $crate::Priority::Info, $tag, $($arg)*)
    };
}

/// 以 **VERBOSE** 优先级记录一行
#[macro_export]
macro_rules! plog_verbose {
    ($logger:expr, $tag:expr, $($arg:tt)*) => {
        $crate::__plog_println_filtered!($logger, $crate::Priority::Verbose, $tag, $($arg)*)
    };
}

/// 以 **WARN** 优先级记录一行
#[macro_export]
macro_rules! plog_warn {
    ($logger:expr, $tag:expr, $($arg:tt)*) => {
        $crate::__plog_println_filtered!($logger, $crate::Priority::Warn, $tag, $($arg)*)
    };
}
