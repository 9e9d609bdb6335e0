/// Describes the errors that can occur when a log destination is set up.
///
/// None of the logging calls return these errors. A destination that cannot be
/// established terminates the process, see [`Terminate::abort`](crate::Terminate::abort).
#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum DlogError {
    /// The log file could not be opened for appending.
    #[error("can't open log file {}: {source}", .path.display())]
    LogFile {
        /// The configured path.
        path: std::path::PathBuf,
        /// The cause.
        source: std::io::Error,
    },

    /// A syslog socket or connection could not be used.
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// The facility name given to [`Logger::init`](crate::Logger::init) is not known.
    #[error("invalid syslog facility: {0}")]
    UnknownFacility(String),

    /// None of the well-known local syslog sockets could be reached.
    #[error("no local syslog daemon found")]
    NoSyslogDaemon,

    /// The requested syslog transport is not available on this platform.
    #[error("{0} is not supported on this platform")]
    Unsupported(&'static str),

    /// The `log` crate bridge could not be installed.
    #[error(transparent)]
    SetLogger(#[from] log::SetLoggerError),
}
