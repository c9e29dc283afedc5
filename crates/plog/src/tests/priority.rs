use crate::{ParsePriorityError, Priority};

#[test]
fn test_display_codes() {
    let codes: alloc::string::String = Priority::ALL.iter().map(|p| p.code()).collect();
    assert_eq!(codes, "adeivw");
}

#[test]
fn test_from_code() {
    for p in Priority::ALL {
        assert_eq!(Priority::from_code(p.code()), Some(p));
    }
    assert_eq!(Priority::from_code('x'), None);
    assert_eq!(Priority::from_code('E'), None);
}

#[test]
fn test_parse_code_and_name() {
    assert_eq!("e".parse::<Priority>(), Ok(Priority::Error));
    assert_eq!("warn".parse::<Priority>(), Ok(Priority::Warn));
    assert_eq!("VERBOSE".parse::<Priority>(), Ok(Priority::Verbose));
    assert_eq!("Assert".parse::<Priority>(), Ok(Priority::Assert));
    assert_eq!("".parse::<Priority>(), Err(ParsePriorityError));
    assert_eq!("trace".parse::<Priority>(), Err(ParsePriorityError));
}

#[test]
fn test_verbose_admits_everything() {
    for p in Priority::ALL {
        assert!(Priority::Verbose.admits(p));
    }
    assert!(Priority::Info.admits(Priority::Info));
    assert!(!Priority::Info.admits(Priority::Verbose));
    assert!(!Priority::Info.admits(Priority::Error));
}

#[test]
fn test_log_level_mapping() {
    assert_eq!(Priority::from(log::Level::Error), Priority::Error);
    assert_eq!(Priority::from(log::Level::Warn), Priority::Warn);
    assert_eq!(Priority::from(log::Level::Info), Priority::Info);
    assert_eq!(Priority::from(log::Level::Debug), Priority::Debug);
    assert_eq!(Priority::from(log::Level::Trace), Priority::Verbose);

    assert_eq!(Priority::Assert.to_level(), log::Level::Error);
    assert_eq!(Priority::Verbose.to_level(), log::Level::Trace);
}

#[test]
fn test_name_display() {
    use alloc::string::ToString;

    assert_eq!(Priority::Warn.to_string(), "WARN");
    assert_eq!(ParsePriorityError.to_string(), "unknown log priority");
}
