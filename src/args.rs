use crate::{Logger, Severity};
use std::{convert::Infallible, path::PathBuf};

/// The command line options of the logger, for flattening into a program's
/// own `clap` parser.
///
/// ```rust,no_run
/// use clap::Parser;
///
/// #[derive(Parser)]
/// struct Cli {
///     #[command(flatten)]
///     log: dlog::LogArgs,
///     // the program's own options follow here
/// }
///
/// dlog::init("myapp", dlog::Severity::Info, "");
/// let cli = Cli::parse();
/// dlog::global().apply_args(&cli.log);
/// ```
///
/// Only available with crate feature `args`.
#[derive(clap::Args, Clone, Debug, Default, PartialEq, Eq)]
#[allow(clippy::module_name_repetitions)]
pub struct LogArgs {
    /// Send logs to the local system logger
    #[arg(long)]
    pub syslog: bool,

    /// Write logs to file
    #[arg(long, value_name = "PATH")]
    pub logfile: Option<PathBuf>,

    /// Log level (0-6)
    #[arg(long, value_name = "LEVEL", value_parser = parse_level)]
    pub loglevel: Option<Severity>,
}

// Malformed values become level 0 rather than a usage error.
fn parse_level(s: &str) -> Result<Severity, Infallible> {
    Ok(Severity::parse_lenient(s))
}

impl Logger {
    /// Applies parsed [`LogArgs`]; options that were not given leave the
    /// current settings untouched.
    pub fn apply_args(&self, args: &LogArgs) {
        if args.syslog {
            self.set_use_syslog(true);
        }
        if let Some(ref path) = args.logfile {
            self.set_log_file(path);
        }
        if let Some(level) = args.loglevel {
            self.set_level(level);
        }
    }
}
