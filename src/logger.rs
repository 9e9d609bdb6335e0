use crate::{
    formats::{line_format, Record},
    util::{eprint_err, ErrorCode},
    writers::{LocalSyslog, SyslogConnector, SyslogFacility, SyslogPriority, SyslogSink},
    AtomicSeverity, DlogError, Severity,
};
use std::{
    borrow::Cow,
    fmt,
    fs::{File, OpenOptions},
    io::Write,
    path::{Path, PathBuf},
    sync::{Mutex, MutexGuard},
};

/// Exit code of the process after a message of severity [`Severity::Fatal`].
pub const FATAL_EXIT_CODE: i32 = 255;

/// Application name that is used until [`Logger::init`] sets one.
pub const DEFAULT_APP_NAME: &str = "-";

/// Ends the process on behalf of the [`Logger`].
///
/// The default, [`ProcessTerminator`], really ends the process.
/// Tests can install an implementation that only records what happened;
/// the `Logger` then returns from the log call as if nothing was written.
pub trait Terminate: Send + Sync {
    /// Is called after a non-empty message of severity `Fatal` was written,
    /// with [`FATAL_EXIT_CODE`].
    fn exit(&self, code: i32);

    /// Is called when the configured log destination cannot be established.
    fn abort(&self, err: &DlogError);
}

/// Exits with `std::process::exit`, and aborts with `std::process::abort`
/// after reporting the cause to stderr.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessTerminator;
impl Terminate for ProcessTerminator {
    fn exit(&self, code: i32) {
        std::process::exit(code);
    }

    fn abort(&self, err: &DlogError) {
        let code = match err {
            DlogError::LogFile { .. } => ErrorCode::LogFile,
            _ => ErrorCode::Syslog,
        };
        eprint_err(code, "can't establish the log destination", err);
        std::process::abort();
    }
}

/// The logger: a threshold, a destination, and the lock that serializes writing.
///
/// Most programs use the process-wide instance behind [`global()`](crate::global)
/// and the free functions and macros of this crate.
/// Independent instances are useful in tests, or where the destination
/// collaborators need to be replaced:
///
/// ```rust
/// use dlog::{Logger, Severity};
///
/// let logger = Logger::new().fallback_writer(Vec::<u8>::new());
/// logger.init("myapp", Severity::Warning, "");
/// logger.info("starting"); // filtered
/// dlog::warnf!(logger: logger, "disk at {}%", 91);
/// ```
///
/// Until [`Logger::init`] is called, the threshold is [`Severity::Last`]
/// and nothing is written.
///
/// The destination is chosen lazily, when the first accepted message is written:
/// the syslog if [`use_syslog`](Logger::set_use_syslog) is set, else the
/// [log file](Logger::set_log_file) if one is set, else stderr.
/// A syslog connection or file handle, once established, is kept for the lifetime
/// of the logger. Failing to establish either ends the process.
pub struct Logger {
    threshold: AtomicSeverity,
    state: Mutex<State>,
    terminator: Box<dyn Terminate>,
    syslog_connector: Box<dyn SyslogConnector>,
}

struct State {
    app_name: String,
    facility: String,
    use_syslog: bool,
    log_file: Option<PathBuf>,
    syslogger: Option<Box<dyn SyslogSink>>,
    file: Option<File>,
    fallback: Box<dyn Write + Send>,
    buf: Vec<u8>,
}

impl Logger {
    /// Creates a logger that writes to stderr, to a file, or to the local syslog,
    /// and that ends the process on fatal messages.
    #[must_use]
    pub fn new() -> Self {
        Self {
            threshold: AtomicSeverity::default(),
            state: Mutex::new(State {
                app_name: DEFAULT_APP_NAME.to_string(),
                facility: SyslogFacility::DEFAULT_NAME.to_string(),
                use_syslog: false,
                log_file: None,
                syslogger: None,
                file: None,
                fallback: Box::new(std::io::stderr()),
                buf: Vec::with_capacity(200),
            }),
            terminator: Box::new(ProcessTerminator),
            syslog_connector: Box::new(LocalSyslog::new()),
        }
    }

    /// Replaces the way the process is ended.
    #[must_use]
    pub fn terminator(mut self, terminator: impl Terminate + 'static) -> Self {
        self.terminator = Box::new(terminator);
        self
    }

    /// Replaces the way the syslog is connected; the default is [`LocalSyslog`].
    #[must_use]
    pub fn syslog_connector(mut self, connector: impl SyslogConnector + 'static) -> Self {
        self.syslog_connector = Box::new(connector);
        self
    }

    /// Replaces stderr as the destination that is used when neither syslog
    /// nor a log file are configured.
    #[must_use]
    pub fn fallback_writer(self, w: impl Write + Send + 'static) -> Self {
        self.lock_state().fallback = Box::new(w);
        self
    }

    /// Sets the threshold, the application name, and the syslog facility.
    ///
    /// An empty `facility` means `DAEMON`. The facility name is only evaluated
    /// when the syslog is connected; an unknown name ends the process then.
    ///
    /// Must be done before other threads start logging.
    pub fn init(&self, app_name: &str, level: Severity, facility: &str) {
        self.threshold.set(level);
        let mut state = self.lock_state();
        state.app_name = app_name.to_string();
        state.facility = if facility.is_empty() {
            SyslogFacility::DEFAULT_NAME.to_string()
        } else {
            facility.to_string()
        };
    }

    /// Current threshold.
    pub fn level(&self) -> Severity {
        self.threshold.get()
    }

    /// Sets the threshold; messages with a lower severity are dropped.
    pub fn set_level(&self, level: Severity) {
        self.threshold.set(level);
    }

    /// Sets the threshold from its integer representation.
    ///
    /// Malformed input is not rejected but yields `Debug` (the value zero).
    pub fn set_level_str(&self, s: &str) {
        self.threshold.set_str(s);
    }

    /// The threshold as base-10 integer.
    pub fn level_string(&self) -> String {
        self.threshold.to_string()
    }

    /// Whether the syslog is to be used.
    pub fn use_syslog(&self) -> bool {
        self.lock_state().use_syslog
    }

    /// Chooses the syslog as destination; it takes precedence over a log file.
    pub fn set_use_syslog(&self, use_syslog: bool) {
        self.lock_state().use_syslog = use_syslog;
    }

    /// The path of the log file, if one is set.
    pub fn log_file(&self) -> Option<PathBuf> {
        self.lock_state().log_file.clone()
    }

    /// Chooses a file as destination. It is opened for appending, and created
    /// if necessary, when the first message is written. An empty path unsets it.
    pub fn set_log_file<P: AsRef<Path>>(&self, path: P) {
        let path = path.as_ref();
        self.lock_state().log_file = if path.as_os_str().is_empty() {
            None
        } else {
            Some(path.to_path_buf())
        };
    }

    /// The application name that appears in log lines and syslog tags.
    pub fn app_name(&self) -> String {
        self.lock_state().app_name.clone()
    }

    /// The name of the syslog facility.
    pub fn facility(&self) -> String {
        self.lock_state().facility.clone()
    }

    /// Returns `true` if a message of the given severity would pass the threshold.
    #[inline]
    pub fn enabled(&self, severity: Severity) -> bool {
        severity >= self.threshold.get()
    }

    /// Writes a message with the given severity, if it passes the threshold.
    ///
    /// The message is trimmed; if nothing remains, nothing is written.
    /// After a non-empty [`Severity::Fatal`] message the process ends with
    /// [`FATAL_EXIT_CODE`].
    pub fn log(&self, severity: Severity, args: fmt::Arguments) {
        if !self.enabled(severity) {
            return;
        }
        let message = match args.as_str() {
            Some(s) => Cow::Borrowed(s),
            None => Cow::Owned(args.to_string()),
        };
        let Some(record) = Record::new(severity, &message) else {
            return;
        };

        if let Err(e) = self.write(&record) {
            self.terminator.abort(&e);
            return;
        }

        if severity >= Severity::Fatal {
            self.terminator.exit(FATAL_EXIT_CODE);
        }
    }

    /// Writes the `Display` rendering of `value` with the given severity.
    pub fn log_value(&self, severity: Severity, value: &dyn fmt::Display) {
        self.log(severity, format_args!("{value}"));
    }

    /// Logs `value` with severity `Debug`.
    pub fn debug(&self, value: impl fmt::Display) {
        self.log_value(Severity::Debug, &value);
    }

    /// Logs `value` with severity `Info`.
    pub fn info(&self, value: impl fmt::Display) {
        self.log_value(Severity::Info, &value);
    }

    /// Logs `value` with severity `Notice`.
    pub fn notice(&self, value: impl fmt::Display) {
        self.log_value(Severity::Notice, &value);
    }

    /// Logs `value` with severity `Warning`.
    pub fn warn(&self, value: impl fmt::Display) {
        self.log_value(Severity::Warning, &value);
    }

    /// Logs `value` with severity `Error`.
    pub fn error(&self, value: impl fmt::Display) {
        self.log_value(Severity::Error, &value);
    }

    /// Logs `value` with severity `Critical`.
    pub fn critical(&self, value: impl fmt::Display) {
        self.log_value(Severity::Critical, &value);
    }

    /// Logs `value` with severity `Fatal`, and ends the process unless
    /// `value` renders to an empty or all-whitespace string.
    pub fn fatal(&self, value: impl fmt::Display) {
        self.log_value(Severity::Fatal, &value);
    }

    /// Flushes the current destination.
    pub fn flush(&self) {
        let mut guard = self.lock_state();
        let state = &mut *guard;
        let result = match state.file {
            Some(ref mut file) => file.flush(),
            None => state.fallback.flush(),
        };
        result.unwrap_or_else(|e| eprint_err(ErrorCode::Flush, "flushing failed", &e));
    }

    // Establishes the destination if necessary, and writes the record, all under the lock.
    // Only failing to establish the destination is returned; write errors are reported
    // to stderr and otherwise ignored.
    fn write(&self, record: &Record) -> Result<(), DlogError> {
        let mut state = self.lock_state();
        state.resolve_destination(self.syslog_connector.as_ref())?;
        state
            .write(record)
            .unwrap_or_else(|e| eprint_err(ErrorCode::Write, "writing log line failed", &e));
        Ok(())
    }

    fn lock_state(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(|e| {
            eprint_err(ErrorCode::Poison, "log state was poisoned, continuing", &e);
            self.state.clear_poison();
            e.into_inner()
        })
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Logger")
            .field("threshold", &self.threshold.get())
            .finish_non_exhaustive()
    }
}

impl State {
    fn resolve_destination(&mut self, connector: &dyn SyslogConnector) -> Result<(), DlogError> {
        if self.use_syslog {
            if self.syslogger.is_none() {
                let facility = self.facility.parse::<SyslogFacility>()?;
                self.syslogger =
                    Some(connector.connect(SyslogPriority::Info, facility, &self.app_name)?);
            }
        } else if let Some(ref path) = self.log_file {
            if self.file.is_none() {
                self.file = Some(open_log_file(path).map_err(|source| DlogError::LogFile {
                    path: path.clone(),
                    source,
                })?);
            }
        }
        Ok(())
    }

    fn write(&mut self, record: &Record) -> std::io::Result<()> {
        if let Some(ref mut syslogger) = self.syslogger {
            let priority = record
                .severity()
                .syslog_priority()
                .unwrap_or(SyslogPriority::Info);
            return syslogger.write_level(priority, record.message().as_bytes());
        }

        self.buf.clear();
        line_format(&mut self.buf, &self.app_name, record)?;
        match self.file {
            Some(ref mut file) => {
                file.write_all(&self.buf)?;
                file.sync_all()
            }
            None => {
                self.fallback.write_all(&self.buf)?;
                self.fallback.flush()
            }
        }
    }
}

fn open_log_file(path: &Path) -> std::io::Result<File> {
    let mut options = OpenOptions::new();
    options.create(true).append(true);
    #[cfg(unix)]
    std::os::unix::fs::OpenOptionsExt::mode(&mut options, 0o644);
    options.open(path)
}
