use std::io::Write;

#[derive(Copy, Clone, Debug)]
pub(crate) enum ErrorCode {
    Write,
    Flush,
    LogFile,
    Syslog,
    Poison,
}
impl ErrorCode {
    fn as_index(self) -> &'static str {
        match self {
            Self::Write => "write",
            Self::Flush => "flush",
            Self::LogFile => "logfile",
            Self::Syslog => "syslog",
            Self::Poison => "poison",
        }
    }
}

// Reports problems of dlog itself; they never go through the logger.
pub(crate) fn eprint_err(error_code: ErrorCode, msg: &str, err: &dyn std::error::Error) {
    let s = format!(
        "[dlog][ERRCODE::{code:?}] {msg}, caused by {err}\n    \
         See https://docs.rs/dlog/latest/dlog/error_info/index.html#{code_lc}",
        msg = msg,
        err = err,
        code = error_code,
        code_lc = error_code.as_index(),
    );
    eprint_msg(&s);
}

fn eprint_msg(msg: &str) {
    // stderr may be gone, too; nothing left to report to then
    let mut stderr = std::io::stderr().lock();
    writeln!(stderr, "{msg}").ok();
}

#[cfg(all(unix, feature = "syslog_call"))]
pub(crate) fn io_err(s: &'static str) -> std::io::Error {
    std::io::Error::other(s)
}

// Cuts a single trailing newline, then surrounding whitespace.
pub(crate) fn trim_message(message: &str) -> &str {
    message.strip_suffix('\n').unwrap_or(message).trim()
}

#[cfg(test)]
mod test {
    use super::trim_message;

    #[test]
    fn test_trim_message() {
        assert_eq!(trim_message("hello\n"), "hello");
        assert_eq!(trim_message("  hello world \t\n"), "hello world");
        assert_eq!(trim_message("two\n\n"), "two");
        assert_eq!(trim_message("\n"), "");
        assert_eq!(trim_message(" \t "), "");
        assert_eq!(trim_message(""), "");
        assert_eq!(trim_message("inner\nnewline"), "inner\nnewline");
    }
}
