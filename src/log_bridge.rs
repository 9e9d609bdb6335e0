use crate::{global, DlogError, Logger, Severity};

/// Lets `Logger` serve as backend of the [`log`] facade.
///
/// `log::Level`s are mapped to severities: `Error` → `Error`, `Warn` → `Warning`,
/// `Info` → `Info`, `Debug` and `Trace` → `Debug`. `Notice`, `Critical` and `Fatal`
/// can only be reached through this crate's own API.
impl log::Log for Logger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        Logger::enabled(self, Severity::from_log_level(metadata.level()))
    }

    fn log(&self, record: &log::Record) {
        Logger::log(self, Severity::from_log_level(record.level()), *record.args());
    }

    fn flush(&self) {
        Logger::flush(self);
    }
}

/// Routes the macros of the [`log`] crate to the process-wide logger.
///
/// The `log` crate's max level is opened completely, so that the threshold of
/// the process-wide logger is the only filter.
///
/// # Errors
///
/// `DlogError::SetLogger` if some other logger was installed before.
pub fn install_log_bridge() -> Result<(), DlogError> {
    log::set_logger(global())?;
    log::set_max_level(log::LevelFilter::Trace);
    Ok(())
}
