
use dlog::Severity;
use std::fs::read_to_string;
use temp_dir::TempDir;
use test_utils::strip_timestamp;

// The process-wide logger is shared by everything in this test binary,
// hence a single test.
#[test]
fn test_global_logger_and_log_bridge() {
    let dir = TempDir::new().unwrap();
    let path = dir.child("global.log");

    // not initialized yet: nothing is accepted
    assert_eq!(dlog::global().level(), Severity::Last);
    dlog::critical("dropped before init");

    dlog::init("globalapp", Severity::Info, "");
    assert_eq!(dlog::global().app_name(), "globalapp");
    assert_eq!(dlog::global().facility(), "DAEMON");
    dlog::global().set_log_file(&path);

    dlog::debug("dropped");
    dlog::infof!("plain {} and {:?}", 1, "two");
    dlog::notice(17);
    dlog::noticef!("noticed");
    dlog::warn("warned");
    dlog::error(std::io::Error::other("failed"));
    dlog::criticalf!("critical {}", 'x');

    dlog::install_log_bridge().unwrap();
    assert!(dlog::install_log_bridge().is_err());
    log::error!("via log error");
    log::warn!("via log warn");
    log::info!("via log info");
    log::debug!("via log debug");
    log::trace!("via log trace");

    dlog::global().set_level(Severity::Debug);
    log::trace!("trace maps to debug");

    let content = read_to_string(&path).unwrap();
    let lines: Vec<&str> = content.lines().map(strip_timestamp).collect();
    assert_eq!(
        lines,
        vec![
            " [globalapp] [INFO] plain 1 and \"two\"",
            " [globalapp] [NOTICE] 17",
            " [globalapp] [NOTICE] noticed",
            " [globalapp] [WARNING] warned",
            " [globalapp] [ERROR] failed",
            " [globalapp] [CRITICAL] critical x",
            " [globalapp] [ERROR] via log error",
            " [globalapp] [WARNING] via log warn",
            " [globalapp] [INFO] via log info",
            " [globalapp] [DEBUG] trace maps to debug",
        ]
    );
}
