// only enables the `doc_cfg` feature when the `docsrs` configuration attribute is defined
#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::needless_pass_by_value)]
//! A process-wide logger for long-running services.
//!
//! Log lines go to exactly one destination: stderr, a file, or the system logger.
//! Which one is decided lazily, when the first message is written.
//!
//! ```rust,no_run
//! dlog::init("myapp", dlog::Severity::Warning, "");
//!
//! dlog::infof!("starting");             // dropped, Info is below Warning
//! dlog::warnf!("disk at {}%", 91);      // [2026-10-18 09:46:03] [myapp] [WARNING] disk at 91%
//! dlog::fatal("cannot continue");       // written, then the process exits with 255
//! ```
//!
//! There are two families of logging calls per [`Severity`]: macros that take the
//! arguments of `format!` ([`debugf!`], [`infof!`], [`noticef!`], [`warnf!`],
//! [`errorf!`], [`criticalf!`], [`fatalf!`]), and functions that take a single
//! `Display` value ([`debug`], [`info`], [`notice`], [`warn`], [`error`],
//! [`critical`], [`fatal`]).
//!
//! Messages are trimmed; messages that are empty after trimming are not written,
//! and then also a `Fatal` message does not end the process.
//!
//! The destination is configured with
//! [`Logger::set_use_syslog`] and [`Logger::set_log_file`] on [`global()`],
//! or from the command line with [`LogArgs`] (crate feature `args`).
//! The syslog takes precedence over a file, a file over stderr.
//!
//! With [`install_log_bridge`], the macros of the [`log`] crate write here, too.
//!
//! Everything that is written is written synchronously, under a single lock.

#[cfg(feature = "args")]
mod args;
mod error;
mod formats;
mod global;
mod log_bridge;
mod logger;
mod severity;
mod util;

pub mod error_info;
pub mod writers;

#[cfg_attr(docsrs, doc(cfg(feature = "args")))]
#[cfg(feature = "args")]
pub use crate::args::LogArgs;
pub use crate::error::DlogError;
pub use crate::formats::{line_format, Record, TS_DASHES_BLANK_COLONS};
pub use crate::global::{critical, debug, error, fatal, global, info, init, notice, warn};
pub use crate::log_bridge::install_log_bridge;
pub use crate::logger::{
    Logger, ProcessTerminator, Terminate, DEFAULT_APP_NAME, FATAL_EXIT_CODE,
};
pub use crate::severity::{AtomicSeverity, Severity};
