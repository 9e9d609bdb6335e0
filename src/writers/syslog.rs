mod connection;
mod connector;
mod facility;
mod priority;
mod writer;

#[allow(clippy::module_name_repetitions)]
pub use self::{
    connector::{LocalSyslog, RemoteSyslog, SyslogConnector, LOCAL_SYSLOG_PATHS},
    facility::SyslogFacility,
    priority::SyslogPriority,
    writer::SyslogWriter,
};

/// A connected system logger that accepts leveled messages.
///
/// The system logger is responsible for its own formatting and timestamping;
/// it gets the bare message.
pub trait SyslogSink: Send {
    /// Sends one message with the given priority.
    ///
    /// # Errors
    ///
    /// `std::io::Error` if the message could not be delivered.
    fn write_level(&mut self, priority: SyslogPriority, message: &[u8]) -> std::io::Result<()>;
}
