//! 日志优先级定义
//!
//! 六个优先级各自带有一个单字符显示代码，用于消息头 `<code>/<tag>: `。
//! [`Priority::Verbose`] 作为过滤器时表示"全部匹配"。

use core::fmt;
use core::str::FromStr;

/// 日志优先级
///
/// 这是一个封闭枚举，判别值就是其显示代码的 ASCII 值，
/// 因此 `priority as u8` 可以直接写入输出端。
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Priority {
    /// 断言失败
    Assert = b'a',
    /// 调试信息
    Debug = b'd',
    /// 错误
    Error = b'e',
    /// 一般信息
    Info = b'i',
    /// 详细信息；作为过滤器时匹配所有优先级
    Verbose = b'v',
    /// 警告
    Warn = b'w',
}

impl Priority {
    /// 全部优先级，按显示代码排序
    pub const ALL: [Priority; 6] = [
        Priority::Assert,
        Priority::Debug,
        Priority::Error,
        Priority::Info,
        Priority::Verbose,
        Priority::Warn,
    ];

    /// 返回单字符显示代码
    pub const fn code(self) -> char {
        self as u8 as char
    }

    /// 返回优先级名称
    pub const fn as_str(self) -> &'static str {
        match self {
            Priority::Assert => "ASSERT",
            Priority::Debug => "DEBUG",
            Priority::Error => "ERROR",
            Priority::Info => "INFO",
            Priority::Verbose => "VERBOSE",
            Priority::Warn => "WARN",
        }
    }

    /// 由显示代码解析优先级
    pub const fn from_code(code: char) -> Option<Self> {
        match code {
            'a' => Some(Priority::Assert),
            'd' => Some(Priority::Debug),
            'e' => Some(Priority::Error),
            'i' => Some(Priority::Info),
            'v' => Some(Priority::Verbose),
            'w' => Some(Priority::Warn),
            _ => None,
        }
    }

    /// 以 `self` 作为过滤器时，`priority` 是否可以通过
    ///
    /// 只有相同优先级或过滤器为 [`Priority::Verbose`] 时才通过。
    #[inline(always)]
    pub fn admits(self, priority: Priority) -> bool {
        self == Priority::Verbose || self == priority
    }

    /// 转换为 `log` crate 的级别
    ///
    /// `Assert` 映射为 `Error`，`Verbose` 映射为 `Trace`。
    pub const fn to_level(self) -> log::Level {
        match self {
            Priority::Assert | Priority::Error => log::Level::Error,
            Priority::Warn => log::Level::Warn,
            Priority::Info => log::Level::Info,
            Priority::Debug => log::Level::Debug,
            Priority::Verbose => log::Level::Trace,
        }
    }
}

impl From<log::Level> for Priority {
    fn from(level: log::Level) -> Self {
        match level {
            log::Level::Error => Priority::Error,
            log::Level::Warn => Priority::Warn,
            log::Level::Info => Priority::Info,
            log::Level::Debug => Priority::Debug,
            log::Level::Trace => Priority::Verbose,
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 优先级解析错误
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsePriorityError;

impl fmt::Display for ParsePriorityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("unknown log priority")
    }
}

impl FromStr for Priority {
    type Err = ParsePriorityError;

    /// 接受单字符代码（`"e"`）或不区分大小写的名称（`"error"`）
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            return Priority::from_code(c).ok_or(ParsePriorityError);
        }
        Priority::ALL
            .into_iter()
            .find(|p| p.as_str().eq_ignore_ascii_case(s))
            .ok_or(ParsePriorityError)
    }
}
