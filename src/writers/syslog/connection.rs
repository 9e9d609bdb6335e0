use std::{
    io::{Result as IoResult, Write},
    net::{TcpStream, UdpSocket},
};

// Writable and flushable connection to the syslog backend.
// Each call to `write` transports exactly one syslog message.
#[derive(Debug)]
pub(crate) enum Connection {
    /// Sends messages via a unix datagram socket, e.g. `/dev/log`.
    #[cfg(unix)]
    Datagram(std::os::unix::net::UnixDatagram),

    /// Sends messages via a unix stream socket, newline-terminated.
    #[cfg(unix)]
    Stream(std::os::unix::net::UnixStream),

    /// Sends messages to the local syslog using the `syslog` C function.
    #[cfg(all(unix, feature = "syslog_call"))]
    SyslogCall,

    /// Sends messages via UDP.
    Udp(UdpSocket),

    /// Sends messages via TCP, newline-terminated.
    Tcp(TcpStream),
}

impl Write for Connection {
    fn write(&mut self, buf: &[u8]) -> IoResult<usize> {
        match *self {
            #[cfg(unix)]
            Self::Datagram(ref ud) => ud.send(buf),
            #[cfg(unix)]
            Self::Stream(ref mut w) => {
                w.write_all(buf)?;
                w.write_all(b"\n")?;
                Ok(buf.len())
            }
            // `syslog` needs a priority value, which is provided by the writer
            #[cfg(all(unix, feature = "syslog_call"))]
            Self::SyslogCall => Ok(buf.len()),
            Self::Tcp(ref mut w) => {
                w.write_all(buf)?;
                w.write_all(b"\n")?;
                Ok(buf.len())
            }
            Self::Udp(ref socket) => socket.send(buf),
        }
    }

    fn flush(&mut self) -> IoResult<()> {
        match *self {
            #[cfg(unix)]
            Self::Stream(ref mut w) => w.flush(),
            Self::Tcp(ref mut w) => w.flush(),
            _ => Ok(()),
        }
    }
}
