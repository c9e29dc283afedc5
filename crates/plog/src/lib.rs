//! 带优先级过滤的标签日志
//!
//! 该 crate 为固件提供一个**简单的行式日志器**：把优先级代码和标签作为消息头，
//! 连同消息文本写到任意字节输出端。
//!
//! # 组件
//!
//! - [`priority`] - 优先级定义（`a`/`d`/`e`/`i`/`v`/`w`）
//! - [`config`] - 默认配置常量、[`Header`] 消息头字段和 [`Config`] 快照
//! - [`sink`] - 字节输出端 trait 和常用实现
//! - [`logger`] - 核心日志器 [`Logger`]
//! - [`stream`] - 逻辑消息的流式拼接
//! - [`shared`] - 自旋锁保护的 [`SharedLogger`]，以及 `log` crate 后端
//! - [`macros`] - 面向用户的日志宏 (`plog_info!`, `plog_error!`, 等)
//!
//! # 输出格式
//!
//! ```text
//! <code>/<tag>: <message>
//! ```
//!
//! 两段消息头都可以单独隐藏。
//!
//! # 过滤规则
//!
//! 消息只在日志器启用，并且过滤器等于消息优先级或过滤器为
//! [`Priority::Verbose`] 时输出。被过滤的调用不产生 I/O，返回 0；
//! `println` 在 `print` 没有写出字节时也不会追加换行。
//!
//! # 架构解耦
//!
//! 日志器对输出端是泛型的，通过 [`Sink`] trait 接入串口、内存缓冲等任意传输方式。
//! 默认输出端由构造参数显式给出，不依赖全局单例。

#![no_std]

extern crate alloc;

pub mod config;
pub mod logger;
pub mod macros;
pub mod priority;
pub mod shared;
pub mod sink;
pub mod stream;

pub use config::{Config, Header};
pub use logger::Logger;
pub use priority::{ParsePriorityError, Priority};
pub use shared::{LoggerGuard, RawSpinLock, SharedLogger};
pub use sink::{FmtSink, NullSink, Sink};
pub use stream::StreamPhase;

#[cfg(test)]
mod tests;
