use crate::writers::SyslogPriority;
use std::{
    convert::Infallible,
    fmt,
    str::FromStr,
    sync::atomic::{AtomicI32, Ordering},
};

/// Importance of a log message, from `Debug` (least) to `Fatal` (most).
///
/// `Last` is not a real level: it ranks above all of them and is the default
/// threshold, so nothing is written before a threshold is configured.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(i32)]
pub enum Severity {
    /// Debug-level messages.
    Debug = 0,
    /// Informational messages.
    Info = 1,
    /// Normal but significant conditions.
    Notice = 2,
    /// Warning conditions.
    Warning = 3,
    /// Error conditions.
    Error = 4,
    /// Critical conditions.
    Critical = 5,
    /// The process cannot continue; logging at this level terminates it.
    Fatal = 6,
    /// Sentinel above all real levels; used as threshold it disables all output.
    Last = 7,
}

// Indexed by the enum's discriminants; must stay in lockstep with it.
const SEVERITY_NAMES: [&str; 7] = [
    "DEBUG", "INFO", "NOTICE", "WARNING", "ERROR", "CRITICAL", "FATAL",
];

const SYSLOG_PRIORITIES: [SyslogPriority; 7] = [
    SyslogPriority::Debug,
    SyslogPriority::Info,
    SyslogPriority::Notice,
    SyslogPriority::Warning,
    SyslogPriority::Error,
    SyslogPriority::Critical,
    SyslogPriority::Alert,
];

impl Severity {
    /// All real levels, in ascending order.
    pub const ALL: [Severity; 7] = [
        Self::Debug,
        Self::Info,
        Self::Notice,
        Self::Warning,
        Self::Error,
        Self::Critical,
        Self::Fatal,
    ];

    /// Converts an integer into a `Severity`.
    ///
    /// Values below zero become `Debug`, values above `Last` become `Last`;
    /// both keep the filtering effect the raw integer would have had.
    #[must_use]
    pub fn from_i32(value: i32) -> Self {
        match value {
            i32::MIN..=0 => Self::Debug,
            1 => Self::Info,
            2 => Self::Notice,
            3 => Self::Warning,
            4 => Self::Error,
            5 => Self::Critical,
            6 => Self::Fatal,
            _ => Self::Last,
        }
    }

    /// The upper-case display name, as it appears in log lines.
    ///
    /// `Last` has no name.
    #[must_use]
    pub fn name(self) -> Option<&'static str> {
        SEVERITY_NAMES.get(self as usize).copied()
    }

    /// The priority with which messages of this level are sent to the syslog.
    #[must_use]
    pub fn syslog_priority(self) -> Option<SyslogPriority> {
        SYSLOG_PRIORITIES.get(self as usize).copied()
    }

    /// Parses a severity leniently.
    ///
    /// Accepts a base-10 integer or a display name (case-insensitive).
    /// Anything else, including surrounding whitespace, yields `Debug`, i.e. the value zero.
    #[must_use]
    pub fn parse_lenient(s: &str) -> Self {
        if let Ok(value) = s.parse::<i32>() {
            return Self::from_i32(value);
        }
        Self::ALL
            .iter()
            .copied()
            .find(|sev| sev.name().is_some_and(|name| name.eq_ignore_ascii_case(s)))
            .unwrap_or(Self::Debug)
    }

    pub(crate) fn from_log_level(level: log::Level) -> Self {
        match level {
            log::Level::Error => Self::Error,
            log::Level::Warn => Self::Warning,
            log::Level::Info => Self::Info,
            log::Level::Debug | log::Level::Trace => Self::Debug,
        }
    }
}

/// Renders the base-10 integer value, for round trips through flags.
impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", *self as i32)
    }
}

impl FromStr for Severity {
    type Err = Infallible;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse_lenient(s))
    }
}

/// A `Severity` that can be read and written concurrently without a lock.
///
/// Is used as the threshold, which every log call checks before it formats
/// anything or takes the logger's lock.
#[derive(Debug)]
pub struct AtomicSeverity(AtomicI32);
impl AtomicSeverity {
    /// Creates a new instance with the given value.
    #[must_use]
    pub const fn new(severity: Severity) -> Self {
        Self(AtomicI32::new(severity as i32))
    }

    /// Current value.
    pub fn get(&self) -> Severity {
        Severity::from_i32(self.0.load(Ordering::Acquire))
    }

    /// Replaces the value.
    pub fn set(&self, severity: Severity) {
        self.0.store(severity as i32, Ordering::Release);
    }

    /// Replaces the value with the leniently parsed content of `s`.
    ///
    /// Never fails; malformed input sets the value zero (`Debug`).
    pub fn set_str(&self, s: &str) {
        self.set(Severity::parse_lenient(s));
    }
}
impl Default for AtomicSeverity {
    fn default() -> Self {
        Self::new(Severity::Last)
    }
}
impl fmt::Display for AtomicSeverity {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.get().fmt(f)
    }
}
