//! 可共享的日志器
//!
//! [`Logger`] 本身只允许单写者。[`SharedLogger`] 用自旋锁把它包装起来，
//! 可以放进 `static`，并作为 `log` crate 的后端注册。

use crate::logger::Logger;
use crate::sink::Sink;
use core::hint;
use core::sync::atomic::{AtomicBool, Ordering};
use log::{LevelFilter, Log, Metadata, Record, SetLoggerError};

/// 基于原子操作的自旋锁，作为 `lock_api` 的底层锁
///
/// 不可重入，也不屏蔽中断：中断处理程序里打印日志时，
/// [`SharedLogger`] 的 `log` 路径使用 `try_lock` 避免死锁。
#[derive(Debug)]
pub struct RawSpinLock {
    locked: AtomicBool,
}

impl RawSpinLock {
    /// 创建一个未加锁的自旋锁
    pub const fn new() -> Self {
        Self {
            locked: AtomicBool::new(false),
        }
    }
}

impl Default for RawSpinLock {
    fn default() -> Self {
        Self::new()
    }
}

unsafe impl lock_api::RawMutex for RawSpinLock {
    #[allow(clippy::declare_interior_mutable_const)]
    const INIT: Self = Self::new();

    type GuardMarker = lock_api::GuardSend;

    fn lock(&self) {
        while self
            .locked
            .compare_exchange_weak(false, true, Ordering::Acquire, Ordering::Relaxed)
            .is_err()
        {
            while self.locked.load(Ordering::Relaxed) {
                hint::spin_loop();
            }
        }
    }

    fn try_lock(&self) -> bool {
        self.locked
            .compare_exchange(false, true, Ordering::Acquire, Ordering::Relaxed)
            .is_ok()
    }

    unsafe fn unlock(&self) {
        self.locked.store(false, Ordering::Release);
    }

    fn is_locked(&self) -> bool {
        self.locked.load(Ordering::Relaxed)
    }
}

/// 持有 [`SharedLogger`] 锁时得到的守卫
pub type LoggerGuard<'a, S> = lock_api::MutexGuard<'a, RawSpinLock, Logger<S>>;

/// 用自旋锁保护的日志器
///
/// # 示例
///
/// ```rust
/// use plog::{Logger, NullSink, SharedLogger};
///
/// static LOG: SharedLogger<NullSink> = SharedLogger::new(Logger::new(NullSink));
///
/// assert_eq!(LOG.lock().info("boot", "ok"), 11);
/// ```
pub struct SharedLogger<S> {
    inner: lock_api::Mutex<RawSpinLock, Logger<S>>,
}

impl<S: Sink> SharedLogger<S> {
    /// 包装一个日志器
    pub const fn new(logger: Logger<S>) -> Self {
        Self {
            inner: lock_api::Mutex::const_new(RawSpinLock::new(), logger),
        }
    }

    /// 获取锁，必要时自旋等待
    pub fn lock(&self) -> LoggerGuard<'_, S> {
        self.inner.lock()
    }

    /// 尝试获取锁，锁被占用时返回 `None`
    pub fn try_lock(&self) -> Option<LoggerGuard<'_, S>> {
        self.inner.try_lock()
    }

    /// 取回内部日志器
    pub fn into_inner(self) -> Logger<S> {
        self.inner.into_inner()
    }
}

impl<S: Sink + Send + 'static> SharedLogger<S> {
    /// 注册为 `log` crate 的全局后端
    ///
    /// 最大级别设为 `Trace`，过滤完全交给日志器自己的过滤器。
    /// 只能成功注册一次。
    pub fn install(&'static self) -> Result<(), SetLoggerError> {
        log::set_logger(self).map(|()| log::set_max_level(LevelFilter::Trace))
    }
}

impl<S: Sink + Default> Default for SharedLogger<S> {
    fn default() -> Self {
        Self::new(Logger::default())
    }
}

/// `log` 后端：记录的 target 作为标签，级别映射为 [`Priority`](crate::Priority)
///
/// 锁被占用时（例如输出端内部又触发了日志）记录会被丢弃，而不是死锁。
impl<S: Sink + Send> Log for SharedLogger<S> {
    fn enabled(&self, metadata: &Metadata) -> bool {
        self.inner
            .try_lock()
            .is_some_and(|logger| logger.would_emit(metadata.level().into()))
    }

    fn log(&self, record: &Record) {
        if let Some(mut logger) = self.inner.try_lock() {
            logger.println(record.level().into(), record.target(), record.args());
        }
    }

    fn flush(&self) {}
}
