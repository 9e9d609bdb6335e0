
use dlog::{
    writers::{SyslogFacility, SyslogPriority},
    Severity,
};
use std::fs::read_to_string;
use temp_dir::TempDir;
use test_utils::{recording_logger, strip_timestamp};

#[test]
fn test_syslog_wins_over_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.child("app.log");

    let (logger, buffer, exits, syslog) = recording_logger();
    logger.init("myapp", Severity::Debug, "local4");
    logger.set_use_syslog(true);
    logger.set_log_file(&path);

    dlog::warnf!(logger: logger, "disk at {}%", 91);
    logger.notice("  padded\n");

    assert_eq!(
        *syslog.connects.lock().unwrap(),
        vec![(
            SyslogPriority::Info,
            SyslogFacility::LocalUse4,
            "myapp".to_string()
        )]
    );
    assert_eq!(
        *syslog.messages.lock().unwrap(),
        vec![
            (SyslogPriority::Warning, "disk at 91%".to_string()),
            (SyslogPriority::Notice, "padded".to_string()),
        ]
    );
    assert!(!path.exists(), "file must not be created when syslog is used");
    assert!(!buffer.was_touched());
    assert!(exits.aborts.lock().unwrap().is_empty());
}

#[test]
fn test_syslog_priorities() {
    let (logger, _buffer, exits, syslog) = recording_logger();
    logger.init("myapp", Severity::Debug, "");
    logger.set_use_syslog(true);

    for severity in Severity::ALL {
        logger.log_value(severity, &"msg");
    }

    let priorities: Vec<SyslogPriority> = syslog
        .messages
        .lock()
        .unwrap()
        .iter()
        .map(|(p, _)| *p)
        .collect();
    assert_eq!(
        priorities,
        vec![
            SyslogPriority::Debug,
            SyslogPriority::Info,
            SyslogPriority::Notice,
            SyslogPriority::Warning,
            SyslogPriority::Error,
            SyslogPriority::Critical,
            SyslogPriority::Alert,
        ]
    );
    // default facility
    assert_eq!(
        syslog.connects.lock().unwrap()[0].1,
        SyslogFacility::SystemDaemons
    );
    // connected once
    assert_eq!(syslog.connects.lock().unwrap().len(), 1);
    assert_eq!(*exits.exits.lock().unwrap(), vec![255]);
}

#[test]
fn test_unknown_facility_aborts() {
    let (logger, buffer, exits, syslog) = recording_logger();
    logger.init("myapp", Severity::Debug, "NOT_A_FACILITY");
    logger.set_use_syslog(true);

    logger.fatal("never written");

    assert_eq!(
        *exits.aborts.lock().unwrap(),
        vec!["invalid syslog facility: NOT_A_FACILITY".to_string()]
    );
    // an aborted write is not followed by the fatal exit
    assert!(exits.exits.lock().unwrap().is_empty());
    assert!(syslog.connects.lock().unwrap().is_empty());
    assert!(!buffer.was_touched());
}

#[test]
fn test_file_only() {
    let dir = TempDir::new().unwrap();
    let path = dir.child("app.log");

    let (logger, buffer, _exits, syslog) = recording_logger();
    logger.init("myapp", Severity::Info, "");
    logger.set_log_file(&path);

    logger.info("first");
    dlog::errorf!(logger: logger, "second {}", 2);

    let content = read_to_string(&path).unwrap();
    let lines: Vec<&str> = content.lines().map(strip_timestamp).collect();
    assert_eq!(
        lines,
        vec![" [myapp] [INFO] first", " [myapp] [ERROR] second 2"]
    );
    assert!(content.ends_with('\n'));
    assert!(!buffer.was_touched());
    assert!(syslog.connects.lock().unwrap().is_empty());
}

#[test]
fn test_file_is_appended_to() {
    let dir = TempDir::new().unwrap();
    let path = dir.child("existing.log");
    std::fs::write(&path, "an older line\n").unwrap();

    let (logger, _buffer, _exits, _syslog) = recording_logger();
    logger.init("myapp", Severity::Info, "");
    logger.set_log_file(&path);
    logger.info("a newer line");

    let content = read_to_string(&path).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0], "an older line");
    assert_eq!(strip_timestamp(lines[1]), " [myapp] [INFO] a newer line");
}

// A removed file is not recreated, because the handle from the first write is reused.
#[cfg(unix)]
#[test]
fn test_file_is_opened_once() {
    let dir = TempDir::new().unwrap();
    let path = dir.child("once.log");

    let (logger, _buffer, _exits, _syslog) = recording_logger();
    logger.init("myapp", Severity::Info, "");
    logger.set_log_file(&path);

    logger.info("opens the file");
    assert!(path.exists());
    std::fs::remove_file(&path).unwrap();

    logger.info("goes to the unlinked file");
    assert!(!path.exists());
}

#[test]
fn test_unopenable_file_aborts() {
    let dir = TempDir::new().unwrap();
    let path = dir.child("no_such_dir").join("app.log");

    let (logger, buffer, exits, _syslog) = recording_logger();
    logger.init("myapp", Severity::Info, "");
    logger.set_log_file(&path);
    logger.info("never written");

    assert_eq!(exits.aborts.lock().unwrap().len(), 1);
    assert!(!buffer.was_touched());
}

#[test]
fn test_stderr_until_file_is_configured() {
    let dir = TempDir::new().unwrap();
    let path = dir.child("late.log");

    let (logger, buffer, _exits, _syslog) = recording_logger();
    logger.init("myapp", Severity::Info, "");

    logger.info("before configuration");
    logger.set_log_file(&path);
    logger.info("after configuration");

    let lines = buffer.lines();
    assert_eq!(lines.len(), 1);
    assert_eq!(strip_timestamp(&lines[0]), " [myapp] [INFO] before configuration");

    let content = read_to_string(&path).unwrap();
    assert_eq!(content.lines().count(), 1);
    assert!(content.ends_with("[myapp] [INFO] after configuration\n"));
}

#[test]
fn test_file_handle_is_sticky() {
    let dir = TempDir::new().unwrap();
    let first = dir.child("first.log");
    let second = dir.child("second.log");

    let (logger, _buffer, _exits, _syslog) = recording_logger();
    logger.init("myapp", Severity::Info, "");
    logger.set_log_file(&first);
    logger.info("one");
    logger.set_log_file(&second);
    logger.info("two");

    assert_eq!(read_to_string(&first).unwrap().lines().count(), 2);
    assert!(!second.exists());
}
