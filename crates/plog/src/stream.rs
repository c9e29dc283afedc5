//! 流式拼接
//!
//! 一条逻辑消息由 [`Logger::start`] 开始，随后的第一个 [`Logger::append`]
//! 值作为标签，之后的每个值都追加到同一条消息里。消息头只在第一次输出时打印。
//!
//! ```rust
//! use plog::{Logger, Priority};
//!
//! let mut log = Logger::new(Vec::new());
//! log.start(Priority::Info).append("net").append("link up, port ").append(3);
//! log.end_line();
//! assert_eq!(log.sink().as_slice(), b"i/net: link up, port 3\n");
//! ```

use crate::config::{Header, LINE_ENDING};
use crate::logger::Logger;
use crate::priority::Priority;
use crate::sink::Sink;
use alloc::string::String;
use core::fmt::{self, Write};

/// 流式拼接所处的阶段
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreamPhase {
    /// 没有正在进行的逻辑消息
    Idle,
    /// 已收到优先级，下一个值作为标签
    CapturingTag,
    /// 后续的值直接输出
    Emitting,
}

/// 逻辑消息的累积状态
#[derive(Debug)]
pub(crate) struct StreamState {
    phase: StreamPhase,
    priority: Priority,
    tag: String,
    header_pending: bool,
    line_bytes: usize,
}

impl StreamState {
    pub(crate) const fn new() -> Self {
        Self {
            phase: StreamPhase::Idle,
            priority: Priority::Verbose,
            tag: String::new(),
            header_pending: true,
            line_bytes: 0,
        }
    }

    fn reset(&mut self) {
        self.phase = StreamPhase::Idle;
        self.priority = Priority::Verbose;
        self.tag.clear();
        self.header_pending = true;
        self.line_bytes = 0;
    }
}

impl<S: Sink> Logger<S> {
    /// 以 `priority` 开始一条新的逻辑消息
    ///
    /// 清空已捕获的标签，并让下一次输出重新打印消息头。
    /// 上一条消息不会自动换行。
    pub fn start(&mut self, priority: Priority) -> &mut Self {
        let stream = &mut self.stream;
        stream.phase = StreamPhase::CapturingTag;
        stream.priority = priority;
        stream.tag.clear();
        stream.header_pending = true;
        stream.line_bytes = 0;
        self
    }

    /// 向当前逻辑消息追加一个值
    ///
    /// 在 [`StreamPhase::CapturingTag`] 阶段该值成为标签；否则通过
    /// [`Logger::print_with`] 输出，只有第一次输出带消息头。
    /// 没有调用 [`Logger::start`] 时按 `Verbose` 优先级和空标签输出。
    pub fn append(&mut self, value: impl fmt::Display) -> &mut Self {
        match self.stream.phase {
            StreamPhase::CapturingTag => {
                // Writing into a String cannot fail.
                let _ = write!(self.stream.tag, "{value}");
                self.stream.phase = StreamPhase::Emitting;
            }
            StreamPhase::Idle | StreamPhase::Emitting => self.flush_value(value),
        }
        self
    }

    /// 结束当前逻辑消息
    ///
    /// 只有这条消息确实输出过字节才写入换行符。返回换行写入的字节数，
    /// 之后回到 [`StreamPhase::Idle`]。
    pub fn end_line(&mut self) -> usize {
        let written = if self.stream.line_bytes > 0 {
            Sink::write_byte(self, LINE_ENDING)
        } else {
            0
        };
        self.stream.reset();
        written
    }

    /// 当前逻辑消息已经输出的字节数（不含 [`Logger::end_line`] 的换行）
    pub fn line_bytes(&self) -> usize {
        self.stream.line_bytes
    }

    /// 当前流式拼接阶段
    pub fn stream_phase(&self) -> StreamPhase {
        self.stream.phase
    }

    fn flush_value(&mut self, value: impl fmt::Display) {
        let header = if self.stream.header_pending {
            Header::all()
        } else {
            Header::empty()
        };
        let tag = core::mem::take(&mut self.stream.tag);
        let written = self.print_with(self.stream.priority, &tag, value, header);

        let stream = &mut self.stream;
        stream.tag = tag;
        stream.header_pending = false;
        stream.line_bytes += written;
        stream.phase = StreamPhase::Emitting;
    }
}
