//! The system logger, as one of the three possible log destinations.
//!
//! When [`Logger::set_use_syslog`](crate::Logger::set_use_syslog) is switched on,
//! the first accepted log message makes the [`Logger`](crate::Logger) ask its
//! [`SyslogConnector`] for a [`SyslogSink`], and all subsequent messages go there.
//! The default connector is [`LocalSyslog`], which talks to the syslog daemon
//! of the local machine.
//!
//! Messages are handed to the syslog without the timestamp, application name and
//! severity name that file and stderr lines carry; the system logger adds its own.
//! The [`Severity`](crate::Severity) is mapped to a [`SyslogPriority`]:
//!
//! | `Severity` | `SyslogPriority` |
//! |------------|------------------|
//! | `Debug`    | `Debug`          |
//! | `Info`     | `Info`           |
//! | `Notice`   | `Notice`         |
//! | `Warning`  | `Warning`        |
//! | `Error`    | `Error`          |
//! | `Critical` | `Critical`       |
//! | `Fatal`    | `Alert`          |
//!
//! To send to a remote syslog server instead, use [`RemoteSyslog`]:
//!
//! ```rust,no_run
//! use dlog::{writers::RemoteSyslog, Logger, Severity};
//!
//! let logger = Logger::new().syslog_connector(RemoteSyslog::udp("0.0.0.0:0", "loghost:514"));
//! logger.init("myapp", Severity::Info, "LOCAL0");
//! logger.set_use_syslog(true);
//! logger.info("sent to loghost");
//! ```

mod syslog;

pub use self::syslog::{
    LocalSyslog, RemoteSyslog, SyslogConnector, SyslogFacility, SyslogPriority, SyslogSink,
    SyslogWriter, LOCAL_SYSLOG_PATHS,
};
