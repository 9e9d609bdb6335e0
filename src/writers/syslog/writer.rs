use super::{connection::Connection, SyslogFacility, SyslogPriority, SyslogSink};
use std::io::{Result as IoResult, Write};

/// The syslog client that [`LocalSyslog`](crate::writers::LocalSyslog) and
/// [`RemoteSyslog`](crate::writers::RemoteSyslog) hand out.
///
/// Every message is sent as one RFC 3164 line,
/// `<PRI>Mmm dd hh:mm:ss tag[pid]: message`, unless the POSIX `syslog` call
/// is used, which does its own formatting.
#[allow(clippy::module_name_repetitions)]
#[derive(Debug)]
pub struct SyslogWriter {
    conn: Connection,
    facility: SyslogFacility,
    default_priority: SyslogPriority,
    tag: String,
    pid: u32,
    buf: Vec<u8>,
}
impl SyslogWriter {
    pub(crate) fn new(
        conn: Connection,
        default_priority: SyslogPriority,
        facility: SyslogFacility,
        tag: &str,
    ) -> Self {
        Self {
            conn,
            facility,
            default_priority,
            tag: tag.to_string(),
            pid: std::process::id(),
            buf: Vec::with_capacity(200),
        }
    }

    /// The facility this writer tags its messages with.
    #[must_use]
    pub fn facility(&self) -> SyslogFacility {
        self.facility
    }

    fn fill_buffer(&mut self, priority: SyslogPriority, message: &[u8]) -> IoResult<()> {
        self.buf.clear();
        write!(
            self.buf,
            "<{pri}>{timestamp} {tag}[{procid}]: ",
            pri = self.facility as u8 | priority as u8,
            timestamp = chrono::Local::now().format("%b %e %H:%M:%S"),
            tag = self.tag,
            procid = self.pid,
        )?;
        self.buf.extend_from_slice(message);
        Ok(())
    }
}

impl SyslogSink for SyslogWriter {
    fn write_level(&mut self, priority: SyslogPriority, message: &[u8]) -> IoResult<()> {
        #[cfg(all(unix, feature = "syslog_call"))]
        if let Connection::SyslogCall = self.conn {
            use std::{ffi::OsStr, os::unix::ffi::OsStrExt};
            return Ok(nix::syslog::syslog(
                priority.to_nix(),
                OsStr::from_bytes(message),
            )?);
        }

        // we _have_ to buffer because each write generates a syslog entry
        self.fill_buffer(priority, message)?;
        self.conn.write_all(&self.buf)?;
        self.conn.flush()
    }
}

/// Writes with the default priority given at construction.
impl Write for SyslogWriter {
    fn write(&mut self, buf: &[u8]) -> IoResult<usize> {
        self.write_level(self.default_priority, buf)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> IoResult<()> {
        self.conn.flush()
    }
}

#[cfg(test)]
mod test {
    use super::{Connection, SyslogWriter};
    use crate::writers::{SyslogFacility, SyslogPriority, SyslogSink};
    use std::net::UdpSocket;

    #[test]
    fn test_rfc3164_line() {
        let server = UdpSocket::bind("127.0.0.1:0").unwrap();
        let client = UdpSocket::bind("127.0.0.1:0").unwrap();
        client.connect(server.local_addr().unwrap()).unwrap();

        let mut writer = SyslogWriter::new(
            Connection::Udp(client),
            SyslogPriority::Info,
            SyslogFacility::LocalUse0,
            "myapp",
        );
        writer
            .write_level(SyslogPriority::Warning, b"disk at 91%")
            .unwrap();

        let mut buf = [0_u8; 512];
        let n = server.recv(&mut buf).unwrap();
        let line = String::from_utf8_lossy(&buf[..n]).to_string();
        // LOCAL0 (16 << 3) | warning (4)
        assert!(line.starts_with("<132>"), "unexpected line: {line}");
        assert!(
            line.contains(&format!(" myapp[{}]: ", std::process::id())),
            "unexpected line: {line}"
        );
        assert!(line.ends_with("disk at 91%"), "unexpected line: {line}");
    }
}
