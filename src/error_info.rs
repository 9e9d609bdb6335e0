//! Error codes of `dlog`.
//!
//! `dlog` never returns errors from its logging calls, and it does not log about
//! itself through itself. When something goes wrong, it prints a line to stderr
//! that starts with one of the following codes.
//!
//! ## `Write`
//!
//! Writing the log line to the established destination failed.
//!
//! Example:
//!
//! ```text
//! [dlog][ERRCODE::Write] writing log line failed, caused by No space left on device (os error 28)
//! ```
//!
//! The log call then returns as if the line was written; the line is lost.
//! A fatal message still ends the process.
//!
//! ## `Flush`
//!
//! An explicit call to `Logger::flush`, or the `flush` of the `log` facade, failed.
//!
//! ## `LogFile`
//!
//! The configured log file cannot be opened for appending.
//! This is unrecoverable: the process is aborted right after this line.
//!
//! ## `Syslog`
//!
//! The system logger cannot be reached, or the configured facility name is unknown.
//! This is unrecoverable: the process is aborted right after this line.
//!
//! ## `Poison`
//!
//! Log entries can be written by all threads of your program. The logger thus keeps its
//! mutable parts in a `Mutex`. In case that a thread panics while owning this lock,
//! the lock is subsequently considered "poisoned". `dlog` continues with the state
//! as it was left.
//!
//! Messages are rendered before the lock is taken, so the root cause is a panic! in
//! a writer given to `Logger::fallback_writer`, or in a custom `SyslogSink`.
