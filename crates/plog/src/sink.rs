//! 字节输出端
//!
//! [`Sink`] 是日志器写出文本的唯一接口。任何传输方式（串口、内存缓冲、
//! 测试替身）只要实现单字节写和缓冲区写即可接入。

use alloc::vec::Vec;
use core::fmt;

/// 字节输出能力
///
/// 所有写方法都返回输出端实际报告写入的字节数。日志器不检测传输错误，
/// 返回值原样向上传递。
pub trait Sink {
    /// 写入单个字节
    fn write_byte(&mut self, byte: u8) -> usize;

    /// 写入一段字节
    ///
    /// 默认实现逐字节调用 [`Sink::write_byte`]。
    fn write_bytes(&mut self, buf: &[u8]) -> usize {
        buf.iter().map(|&b| self.write_byte(b)).sum()
    }

    /// 写入一段 UTF-8 文本
    fn write_str(&mut self, s: &str) -> usize {
        self.write_bytes(s.as_bytes())
    }

    /// 写入任意值的文本表示
    ///
    /// 通过计数适配器逐段格式化，不需要堆分配。
    fn write_display(&mut self, value: &dyn fmt::Display) -> usize {
        let mut counter = Counter {
            sink: self,
            written: 0,
        };
        // Counter never reports an error, so the result carries no information.
        let _ = fmt::write(&mut counter, format_args!("{value}"));
        counter.written
    }
}

/// 把 `fmt::Write` 调用转发到 [`Sink`] 并累计字节数
struct Counter<'a, S: Sink + ?Sized> {
    sink: &'a mut S,
    written: usize,
}

impl<S: Sink + ?Sized> fmt::Write for Counter<'_, S> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.written += self.sink.write_str(s);
        Ok(())
    }
}

impl<T: Sink + ?Sized> Sink for &mut T {
    fn write_byte(&mut self, byte: u8) -> usize {
        (**self).write_byte(byte)
    }

    fn write_bytes(&mut self, buf: &[u8]) -> usize {
        (**self).write_bytes(buf)
    }

    fn write_str(&mut self, s: &str) -> usize {
        (**self).write_str(s)
    }

    fn write_display(&mut self, value: &dyn fmt::Display) -> usize {
        (**self).write_display(value)
    }
}

impl Sink for Vec<u8> {
    fn write_byte(&mut self, byte: u8) -> usize {
        self.push(byte);
        1
    }

    fn write_bytes(&mut self, buf: &[u8]) -> usize {
        self.extend_from_slice(buf);
        buf.len()
    }
}

/// 丢弃所有数据的输出端
///
/// 报告全部字节都已写入，适合作为没有控制台时的默认输出端。
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct NullSink;

impl Sink for NullSink {
    fn write_byte(&mut self, _byte: u8) -> usize {
        1
    }

    fn write_bytes(&mut self, buf: &[u8]) -> usize {
        buf.len()
    }
}

/// 把任意 [`fmt::Write`] 文本写入器适配为 [`Sink`]
///
/// 控制台驱动通常只提供 `fmt::Write`。无效的 UTF-8 字节会被替换为
/// U+FFFD，但仍按原始字节计数；写入器报错的片段计为 0。
/// 多字节字符必须通过 [`Sink::write_bytes`] 整体写入。
#[derive(Debug, Default)]
pub struct FmtSink<W> {
    inner: W,
}

impl<W: fmt::Write> FmtSink<W> {
    /// 包装一个文本写入器
    pub const fn new(inner: W) -> Self {
        Self { inner }
    }

    /// 获取内部写入器的引用
    pub fn get_ref(&self) -> &W {
        &self.inner
    }

    /// 获取内部写入器的可变引用
    pub fn get_mut(&mut self) -> &mut W {
        &mut self.inner
    }

    /// 取回内部写入器
    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: fmt::Write> Sink for FmtSink<W> {
    fn write_byte(&mut self, byte: u8) -> usize {
        self.write_bytes(&[byte])
    }

    fn write_bytes(&mut self, buf: &[u8]) -> usize {
        let mut written = 0;
        for chunk in buf.utf8_chunks() {
            let valid = chunk.valid();
            if !valid.is_empty() && self.inner.write_str(valid).is_ok() {
                written += valid.len();
            }
            let invalid = chunk.invalid();
            if !invalid.is_empty() && self.inner.write_char(char::REPLACEMENT_CHARACTER).is_ok() {
                written += invalid.len();
            }
        }
        written
    }

    fn write_str(&mut self, s: &str) -> usize {
        match self.inner.write_str(s) {
            Ok(()) => s.len(),
            Err(_) => 0,
        }
    }
}
