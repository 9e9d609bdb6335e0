use crate::{util::trim_message, Severity};
use chrono::{DateTime, Local};
use std::io::Write;

/// Timestamp format of file and stderr log lines, e.g. `2026-10-18 09:46:03`.
pub const TS_DASHES_BLANK_COLONS: &str = "%Y-%m-%d %H:%M:%S";

/// A message that passed the threshold, ready to be written.
///
/// Exists only during a single log call.
#[derive(Debug)]
pub struct Record<'a> {
    severity: Severity,
    timestamp: DateTime<Local>,
    message: &'a str,
}
impl<'a> Record<'a> {
    /// Trims the message and takes the timestamp.
    ///
    /// Returns `None` if nothing remains of the message after trimming,
    /// or if the severity is the `Last` sentinel.
    #[must_use]
    pub fn new(severity: Severity, message: &'a str) -> Option<Self> {
        severity.name()?;
        let message = trim_message(message);
        if message.is_empty() {
            return None;
        }
        Some(Self {
            severity,
            timestamp: Local::now(),
            message,
        })
    }

    /// The severity of the message.
    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// The point in time when the record was created.
    #[must_use]
    pub fn timestamp(&self) -> &DateTime<Local> {
        &self.timestamp
    }

    /// The trimmed message.
    #[must_use]
    pub fn message(&self) -> &str {
        self.message
    }
}

/// Writes the line for file and stderr output, like
///
/// ```text
/// [2026-10-18 09:46:03] [myapp] [WARNING] disk at 91%
/// ```
///
/// including the terminating newline.
///
/// # Errors
///
/// `std::io::Error` from writing to the given output stream.
pub fn line_format(
    w: &mut dyn Write,
    app_name: &str,
    record: &Record,
) -> Result<(), std::io::Error> {
    writeln!(
        w,
        "[{}] [{}] [{}] {}",
        record.timestamp.format(TS_DASHES_BLANK_COLONS),
        app_name,
        record.severity.name().unwrap_or_default(),
        record.message
    )
}
