// Returned byte counts must equal what the sink reports, including short writes.

use super::*;
use crate::Priority;

#[test]
fn test_count_matches_sink_bytes() {
    let mut log = logger();

    let mut total = 0;
    total += log.println(Priority::Error, "net", "fail");
    total += log.print(Priority::Info, "a", 12345);
    total += log.warn("longer-tag", "with a longer message body");

    assert_eq!(total, log.sink().data.len());
}

#[test]
fn test_count_per_level_method() {
    let mut log = logger();
    for (n, expected) in [
        (log.assert("x", "y"), 7),
        (log.debug("xx", "y"), 8),
        (log.info("x", "yyy"), 9),
    ] {
        assert_eq!(n, expected);
    }
}

#[test]
fn test_short_write_is_propagated() {
    let mut log = Logger::new(MockSink::with_limit(5));

    // Only "e/net" fits.
    let n = log.println(Priority::Error, "net", "fail");

    assert_eq!(log.sink().text(), "e/net");
    assert_eq!(n, 5);
}

#[test]
fn test_full_sink_println_adds_no_newline() {
    let mut log = Logger::new(MockSink::with_limit(0));

    assert_eq!(log.print(Priority::Info, "t", "m"), 0);
    let calls_after_print = log.sink().calls;

    assert_eq!(log.println(Priority::Info, "t", "m"), 0);

    // println attempted the same writes as print, and no newline on top.
    assert_eq!(log.sink().calls, calls_after_print * 2);
    assert!(log.sink().data.is_empty());
}

#[test]
fn test_newline_counted_once() {
    let mut log = logger();

    let printed = log.print(Priority::Info, "t", "m");
    let line = log.println(Priority::Info, "t", "m");

    assert_eq!(line, printed + 1);
}
