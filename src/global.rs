use crate::{Logger, Severity};
use std::{fmt::Display, sync::LazyLock};

static GLOBAL: LazyLock<Logger> = LazyLock::new(Logger::new);

/// The process-wide [`Logger`] that the free functions and macros of this crate use.
///
/// It writes to stderr, a file, or the local syslog, and really ends the process
/// on fatal messages.
pub fn global() -> &'static Logger {
    &GLOBAL
}

/// Initializes the process-wide logger, see [`Logger::init`].
///
/// Call it once, early, before other threads log. Without it nothing is logged.
///
/// ```rust,no_run
/// dlog::init("myapp", dlog::Severity::Info, "");
/// dlog::infof!("listening on port {}", 8080);
/// ```
pub fn init(app_name: &str, level: Severity, facility: &str) {
    GLOBAL.init(app_name, level, facility);
}

/// Logs `value` with severity `Debug` to the process-wide logger.
pub fn debug(value: impl Display) {
    GLOBAL.debug(value);
}

/// Logs `value` with severity `Info` to the process-wide logger.
pub fn info(value: impl Display) {
    GLOBAL.info(value);
}

/// Logs `value` with severity `Notice` to the process-wide logger.
pub fn notice(value: impl Display) {
    GLOBAL.notice(value);
}

/// Logs `value` with severity `Warning` to the process-wide logger.
pub fn warn(value: impl Display) {
    GLOBAL.warn(value);
}

/// Logs `value` with severity `Error` to the process-wide logger.
pub fn error(value: impl Display) {
    GLOBAL.error(value);
}

/// Logs `value` with severity `Critical` to the process-wide logger.
pub fn critical(value: impl Display) {
    GLOBAL.critical(value);
}

/// Logs `value` with severity `Fatal` to the process-wide logger,
/// and ends the process with exit code 255 if `value` does not render empty.
pub fn fatal(value: impl Display) {
    GLOBAL.fatal(value);
}

#[doc(hidden)]
#[macro_export]
macro_rules! __logf {
    ($severity:expr, logger: $logger:expr, $($arg:tt)+) => {
        $logger.log($severity, ::std::format_args!($($arg)+))
    };
    ($severity:expr, $($arg:tt)+) => {
        $crate::global().log($severity, ::std::format_args!($($arg)+))
    };
}

/// Logs a formatted message with severity `Debug`.
///
/// Takes the arguments of `format!`. Writes to the process-wide logger,
/// or to the one given with a leading `logger: <expr>,`.
#[macro_export]
macro_rules! debugf {
    ($($arg:tt)+) => ($crate::__logf!($crate::Severity::Debug, $($arg)+));
}

/// Logs a formatted message with severity `Info`, see [`debugf!`].
#[macro_export]
macro_rules! infof {
    ($($arg:tt)+) => ($crate::__logf!($crate::Severity::Info, $($arg)+));
}

/// Logs a formatted message with severity `Notice`, see [`debugf!`].
#[macro_export]
macro_rules! noticef {
    ($($arg:tt)+) => ($crate::__logf!($crate::Severity::Notice, $($arg)+));
}

/// Logs a formatted message with severity `Warning`, see [`debugf!`].
#[macro_export]
macro_rules! warnf {
    ($($arg:tt)+) => ($crate::__logf!($crate::Severity::Warning, $($arg)+));
}

/// Logs a formatted message with severity `Error`, see [`debugf!`].
#[macro_export]
macro_rules! errorf {
    ($($arg:tt)+) => ($crate::__logf!($crate::Severity::Error, $($arg)+));
}

/// Logs a formatted message with severity `Critical`, see [`debugf!`].
#[macro_export]
macro_rules! criticalf {
    ($($arg:tt)+) => ($crate::__logf!($crate::Severity::Critical, $($arg)+));
}

/// Logs a formatted message with severity `Fatal`, see [`debugf!`].
///
/// Ends the process with exit code 255, unless the message is empty after trimming.
#[macro_export]
macro_rules! fatalf {
    ($($arg:tt)+) => ($crate::__logf!($crate::Severity::Fatal, $($arg)+));
}
