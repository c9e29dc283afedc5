//! Integration tests for the public macros and the shared logger.

use plog::{
    Header, Logger, Priority, SharedLogger, plog_assert, plog_debug, plog_error, plog_info,
    plog_verbose, plog_warn,
};

#[test]
fn test_all_level_macros() {
    let mut log = Logger::new(Vec::new());

    plog_assert!(log, "m", "{}", 0);
    plog_debug!(log, "m", "{}", 1);
    plog_error!(log, "m", "{}", 2);
    plog_info!(log, "m", "{}", 3);
    plog_verbose!(log, "m", "{}", 4);
    plog_warn!(log, "m", "{}", 5);

    let out = String::from_utf8(log.into_sink()).unwrap();
    assert_eq!(out, "a/m: 0\nd/m: 1\ne/m: 2\ni/m: 3\nv/m: 4\nw/m: 5\n");
}

#[test]
fn test_macro_returns_byte_count() {
    let mut log = Logger::new(Vec::new());

    let n = plog_error!(log, "net", "fail");

    assert_eq!(n, 12);
    assert_eq!(log.sink().as_slice(), b"e/net: fail\n");
}

#[test]
fn test_filtered_macro_skips_formatting() {
    struct Panics;

    impl core::fmt::Display for Panics {
        fn fmt(&self, _f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
            panic!("formatted a filtered message");
        }
    }

    let mut log = Logger::new(Vec::new());
    log.set_filter(Priority::Error);

    assert_eq!(plog_info!(log, "t", "{}", Panics), 0);
    assert!(log.sink().is_empty());
}

#[test]
fn test_macro_through_reference() {
    fn emit(log: &mut Logger<Vec<u8>>) -> usize {
        plog_warn!(*log, "ref", "x={}", 9)
    }

    let mut log = Logger::new(Vec::new());
    assert_eq!(emit(&mut log), 11);
    assert_eq!(log.sink().as_slice(), b"w/ref: x=9\n");
}

#[test]
fn test_macro_through_shared_logger() {
    let shared = SharedLogger::new(Logger::new(Vec::new()));

    plog_info!(shared.lock(), "sh", "one");
    {
        let mut guard = shared.lock();
        guard.hide_priority();
        plog_info!(guard, "sh", "two");
    }

    let out = String::from_utf8(shared.into_inner().into_sink()).unwrap();
    assert_eq!(out, "i/sh: one\nsh: two\n");
}

#[test]
fn test_shared_try_lock() {
    let shared = SharedLogger::new(Logger::new(Vec::<u8>::new()));

    let guard = shared.lock();
    assert!(shared.try_lock().is_none());
    drop(guard);

    let mut guard = shared.try_lock().unwrap();
    guard.set_header(Header::empty());
    assert_eq!(guard.info("t", "bare"), 5);
}
