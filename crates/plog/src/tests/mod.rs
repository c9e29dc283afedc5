// Unit tests for plog.
//
// Every test drives a local `Logger` over `MockSink`, which records the bytes it
// receives and the number of write calls so suppressed output can be told apart
// from empty output.

extern crate alloc;

use crate::{Logger, Sink};
use alloc::vec::Vec;

/// Recording sink with an optional capacity.
#[derive(Debug, Default)]
struct MockSink {
    data: Vec<u8>,
    calls: usize,
    limit: Option<usize>,
}

impl MockSink {
    fn new() -> Self {
        Self::default()
    }

    /// Accepts at most `limit` bytes in total, then reports short writes.
    fn with_limit(limit: usize) -> Self {
        Self {
            limit: Some(limit),
            ..Self::default()
        }
    }

    fn text(&self) -> &str {
        core::str::from_utf8(&self.data).unwrap()
    }

    fn room(&self) -> usize {
        match self.limit {
            Some(limit) => limit.saturating_sub(self.data.len()),
            None => usize::MAX,
        }
    }
}

impl Sink for MockSink {
    fn write_byte(&mut self, byte: u8) -> usize {
        self.calls += 1;
        if self.room() == 0 {
            return 0;
        }
        self.data.push(byte);
        1
    }

    fn write_bytes(&mut self, buf: &[u8]) -> usize {
        self.calls += 1;
        let n = buf.len().min(self.room());
        self.data.extend_from_slice(&buf[..n]);
        n
    }
}

/// Logger with default configuration over a fresh `MockSink`.
fn logger() -> Logger<MockSink> {
    Logger::new(MockSink::new())
}

mod byte_counting;
mod priority;
