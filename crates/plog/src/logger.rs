//! 日志器核心实现
//!
//! [`Logger`] 把所有过滤状态和输出端封装在一个结构体里，
//! 每个实例独立拥有自己的输出端和过滤器，可以同时存在多个。

use crate::config::{Config, HEADER_SEPARATOR, Header, LINE_ENDING, TAG_SEPARATOR};
use crate::priority::Priority;
use crate::sink::Sink;
use crate::stream::StreamState;
use core::fmt;

/// 带优先级过滤的日志器
///
/// 输出格式为：
///
/// ```text
/// <code>/<tag>: <message>
/// ```
///
/// 消息只在日志器启用，并且过滤器等于消息优先级或过滤器为
/// [`Priority::Verbose`] 时输出。被过滤的调用不产生任何 I/O，返回 0。
///
/// # 线程安全性
///
/// `Logger` 是单写者结构，所有方法都需要 `&mut self`。
/// 需要跨上下文共享时使用 [`SharedLogger`](crate::SharedLogger)。
///
/// # 示例
///
/// ```rust
/// use plog::{Logger, Priority};
///
/// let mut log = Logger::new(Vec::new());
/// assert_eq!(log.error("net", "fail"), 12);
/// assert_eq!(log.sink().as_slice(), b"e/net: fail\n");
///
/// log.set_filter(Priority::Debug);
/// assert_eq!(log.info("net", "up"), 0);
/// ```
pub struct Logger<S> {
    /// 输出端
    sink: S,
    /// 当前过滤器
    filter: Priority,
    /// 是否启用
    enabled: bool,
    /// 消息头显示字段
    header: Header,
    /// 流式拼接状态
    pub(crate) stream: StreamState,
}

impl<S: Sink> Logger<S> {
    /// 使用默认配置创建日志器
    ///
    /// 这是一个 `const fn`，可以用于 `static` 初始化。
    pub const fn new(sink: S) -> Self {
        Self::with_config(sink, Config::new())
    }

    /// 使用指定配置创建日志器
    pub const fn with_config(sink: S, config: Config) -> Self {
        Self {
            sink,
            filter: config.filter,
            enabled: config.enabled,
            header: config.header,
            stream: StreamState::new(),
        }
    }

    // ========== 状态控制 ==========

    /// 启用日志器
    pub fn enable(&mut self) {
        self.enabled = true;
    }

    /// 禁用日志器；其余状态保持不变
    pub fn disable(&mut self) {
        self.enabled = false;
    }

    /// 日志器是否启用
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// 设置过滤器
    pub fn set_filter(&mut self, filter: Priority) {
        self.filter = filter;
    }

    /// 获取当前过滤器
    pub fn filter(&self) -> Priority {
        self.filter
    }

    /// 快照当前配置
    pub fn config(&self) -> Config {
        Config {
            filter: self.filter,
            enabled: self.enabled,
            header: self.header,
        }
    }

    /// 恢复配置快照
    pub fn apply(&mut self, config: Config) {
        self.filter = config.filter;
        self.enabled = config.enabled;
        self.header = config.header;
    }

    /// 该优先级的消息当前是否会输出
    #[inline(always)]
    pub fn would_emit(&self, priority: Priority) -> bool {
        self.enabled && self.filter.admits(priority)
    }

    // ========== 输出端 ==========

    /// 替换输出端，返回旧的输出端
    pub fn set_sink(&mut self, sink: S) -> S {
        core::mem::replace(&mut self.sink, sink)
    }

    /// 获取输出端的引用
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// 获取输出端的可变引用
    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// 取回输出端
    pub fn into_sink(self) -> S {
        self.sink
    }

    // ========== 消息头 ==========

    /// 获取消息头显示字段
    pub fn header(&self) -> Header {
        self.header
    }

    /// 设置消息头显示字段
    pub fn set_header(&mut self, header: Header) {
        self.header = header;
    }

    /// 隐藏标签
    pub fn hide_tag(&mut self) {
        self.header.remove(Header::TAG);
    }

    /// 显示标签
    pub fn show_tag(&mut self) {
        self.header.insert(Header::TAG);
    }

    /// 隐藏优先级
    pub fn hide_priority(&mut self) {
        self.header.remove(Header::PRIORITY);
    }

    /// 显示优先级
    pub fn show_priority(&mut self) {
        self.header.insert(Header::PRIORITY);
    }

    /// 同时隐藏优先级和标签
    pub fn hide_header(&mut self) {
        self.header = Header::empty();
    }

    /// 同时显示优先级和标签
    pub fn show_header(&mut self) {
        self.header = Header::all();
    }

    // ========== 打印 ==========

    /// 打印消息头和消息，返回写入的字节数
    pub fn print(&mut self, priority: Priority, tag: &str, message: impl fmt::Display) -> usize {
        self.print_with(priority, tag, message, Header::all())
    }

    /// 打印消息，并按 `header` 进一步屏蔽消息头字段
    ///
    /// 某个字段只有在日志器设置和 `header` 都允许时才显示。
    pub fn print_with(
        &mut self,
        priority: Priority,
        tag: &str,
        message: impl fmt::Display,
        header: Header,
    ) -> usize {
        if !self.would_emit(priority) {
            return 0;
        }

        let shown = self.header & header;
        let mut written = 0;

        if shown.contains(Header::PRIORITY) {
            written += self.sink.write_byte(priority as u8);
            written += self.sink.write_str(HEADER_SEPARATOR);
        }
        if shown.contains(Header::TAG) {
            written += self.sink.write_str(tag);
            written += self.sink.write_str(TAG_SEPARATOR);
        }

        written + self.sink.write_display(&message)
    }

    /// 打印消息并换行
    ///
    /// 只有 [`Logger::print`] 写出了字节才追加换行符，被过滤的消息不会留下空行。
    pub fn println(&mut self, priority: Priority, tag: &str, message: impl fmt::Display) -> usize {
        self.println_with(priority, tag, message, Header::all())
    }

    /// 带消息头屏蔽的 [`Logger::println`]
    pub fn println_with(
        &mut self,
        priority: Priority,
        tag: &str,
        message: impl fmt::Display,
        header: Header,
    ) -> usize {
        let written = self.print_with(priority, tag, message, header);
        if written == 0 {
            return 0;
        }
        written + self.sink.write_byte(LINE_ENDING)
    }

    /// 以 **ASSERT** 优先级打印一行
    pub fn assert(&mut self, tag: &str, message: impl fmt::Display) -> usize {
        self.println(Priority::Assert, tag, message)
    }

    /// 以 **DEBUG** 优先级打印一行
    pub fn debug(&mut self, tag: &str, message: impl fmt::Display) -> usize {
        self.println(Priority::Debug, tag, message)
    }

    /// 以 **ERROR** 优先级打印一行
    pub fn error(&mut self, tag: &str, message: impl fmt::Display) -> usize {
        self.println(Priority::Error, tag, message)
    }

    /// 以 **INFO** 优先级打印一行
    pub fn info(&mut self, tag: &str, message: impl fmt::Display) -> usize {
        self.println(Priority::Info, tag, message)
    }

    /// 以 **VERBOSE** 优先级打印一行
    pub fn verbose(&mut self, tag: &str, message: impl fmt::Display) -> usize {
        self.println(Priority::Verbose, tag, message)
    }

    /// 以 **WARN** 优先级打印一行
    pub fn warn(&mut self, tag: &str, message: impl fmt::Display) -> usize {
        self.println(Priority::Warn, tag, message)
    }
}

impl<S: Sink + Default> Default for Logger<S> {
    fn default() -> Self {
        Self::new(S::default())
    }
}

/// 日志器本身也是输出端：写入只在启用时转发，否则返回 0
impl<S: Sink> Sink for Logger<S> {
    fn write_byte(&mut self, byte: u8) -> usize {
        if !self.enabled {
            return 0;
        }
        self.sink.write_byte(byte)
    }

    fn write_bytes(&mut self, buf: &[u8]) -> usize {
        if !self.enabled {
            return 0;
        }
        self.sink.write_bytes(buf)
    }

    fn write_str(&mut self, s: &str) -> usize {
        if !self.enabled {
            return 0;
        }
        self.sink.write_str(s)
    }

    fn write_display(&mut self, value: &dyn fmt::Display) -> usize {
        if !self.enabled {
            return 0;
        }
        self.sink.write_display(value)
    }
}

impl<S: Sink> fmt::Write for Logger<S> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        Sink::write_str(self, s);
        Ok(())
    }
}

impl<S: fmt::Debug> fmt::Debug for Logger<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("sink", &self.sink)
            .field("filter", &self.filter)
            .field("enabled", &self.enabled)
            .field("header", &self.header)
            .finish_non_exhaustive()
    }
}
