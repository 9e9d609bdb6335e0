use super::{
    connection::Connection, SyslogFacility, SyslogPriority, SyslogSink, SyslogWriter,
};
use crate::DlogError;
use std::{
    net::{TcpStream, UdpSocket},
    path::PathBuf,
};

/// Establishes the connection to a system logger.
///
/// The [`Logger`](crate::Logger) calls this once, lazily, when the first message
/// is to be sent to the syslog. An error terminates the process.
pub trait SyslogConnector: Send + Sync {
    /// Creates a client that tags messages with `facility` and `tag`,
    /// and that uses `default_priority` for writes without an explicit priority.
    ///
    /// # Errors
    ///
    /// `DlogError` if the system logger cannot be reached.
    fn connect(
        &self,
        default_priority: SyslogPriority,
        facility: SyslogFacility,
        tag: &str,
    ) -> Result<Box<dyn SyslogSink>, DlogError>;
}

/// Well-known locations of the local syslog socket.
pub const LOCAL_SYSLOG_PATHS: [&str; 3] = ["/dev/log", "/var/run/syslog", "/var/run/log"];

/// Connects to the syslog daemon of the local machine.
///
/// By default the well-known socket paths are probed in order,
/// each with datagram first and stream second.
#[derive(Debug, Clone)]
pub struct LocalSyslog(LocalTransport);

#[derive(Debug, Clone)]
enum LocalTransport {
    Sockets(Vec<PathBuf>),
    #[cfg(all(unix, feature = "syslog_call"))]
    SyslogCall,
}

impl LocalSyslog {
    /// Probes [`LOCAL_SYSLOG_PATHS`].
    #[must_use]
    pub fn new() -> Self {
        Self::with_socket_paths(LOCAL_SYSLOG_PATHS.iter().map(PathBuf::from).collect())
    }

    /// Probes the given socket paths instead of the well-known ones.
    #[must_use]
    pub fn with_socket_paths(paths: Vec<PathBuf>) -> Self {
        Self(LocalTransport::Sockets(paths))
    }

    /// Delegates to the POSIX [`syslog` C function] of the platform's C library,
    /// which handles delivery and formatting itself.
    ///
    /// `openlog` is called once, at connection time, with the tag and the facility.
    ///
    /// [`syslog` C function]: https://pubs.opengroup.org/onlinepubs/9799919799/functions/syslog.html
    #[cfg_attr(docsrs, doc(cfg(all(unix, feature = "syslog_call"))))]
    #[cfg(all(unix, feature = "syslog_call"))]
    #[must_use]
    pub fn syslog_call() -> Self {
        Self(LocalTransport::SyslogCall)
    }
}
impl Default for LocalSyslog {
    fn default() -> Self {
        Self::new()
    }
}

impl SyslogConnector for LocalSyslog {
    fn connect(
        &self,
        default_priority: SyslogPriority,
        facility: SyslogFacility,
        tag: &str,
    ) -> Result<Box<dyn SyslogSink>, DlogError> {
        let conn = match self.0 {
            LocalTransport::Sockets(ref paths) => connect_local_socket(paths)?,
            #[cfg(all(unix, feature = "syslog_call"))]
            LocalTransport::SyslogCall => {
                openlog(facility, tag)?;
                Connection::SyslogCall
            }
        };
        Ok(Box::new(SyslogWriter::new(
            conn,
            default_priority,
            facility,
            tag,
        )))
    }
}

#[cfg(unix)]
fn connect_local_socket(paths: &[PathBuf]) -> Result<Connection, DlogError> {
    use std::os::unix::net::{UnixDatagram, UnixStream};
    for path in paths {
        if let Ok(ud) = UnixDatagram::unbound() {
            if ud.connect(path).is_ok() {
                return Ok(Connection::Datagram(ud));
            }
        }
        if let Ok(us) = UnixStream::connect(path) {
            return Ok(Connection::Stream(us));
        }
    }
    Err(DlogError::NoSyslogDaemon)
}

#[cfg(not(unix))]
fn connect_local_socket(_paths: &[PathBuf]) -> Result<Connection, DlogError> {
    Err(DlogError::Unsupported("the local syslog"))
}

#[cfg(all(unix, feature = "syslog_call"))]
fn openlog(facility: SyslogFacility, tag: &str) -> Result<(), DlogError> {
    use nix::syslog::LogFlags;
    use std::ffi::CString;

    // openlog keeps the pointer, so the ident has to live forever;
    // this happens once per logger
    let ident: &'static std::ffi::CStr = Box::leak(
        CString::new(tag)
            .map_err(|_| crate::util::io_err("syslog tag contains internal NUL bytes"))?
            .into_boxed_c_str(),
    );

    // nix openlog bindings have a Linux-specific signature
    #[cfg(target_os = "linux")]
    nix::syslog::openlog(Some(ident), LogFlags::LOG_PID, facility.to_nix())
        .map_err(std::io::Error::from)?;
    #[cfg(not(target_os = "linux"))]
    {
        use std::{ffi::OsStr, os::unix::ffi::OsStrExt};
        nix::syslog::openlog(
            Some(OsStr::from_bytes(ident.to_bytes())),
            LogFlags::LOG_PID,
            facility.to_nix(),
        )
        .map_err(std::io::Error::from)?;
    }
    Ok(())
}

/// Connects to a syslog server on the network.
#[derive(Debug, Clone)]
pub enum RemoteSyslog {
    /// Sends each message as one UDP datagram from `local` to `server`.
    Udp {
        /// Local address to bind, e.g. `"0.0.0.0:0"`.
        local: String,
        /// Address of the syslog server, e.g. `"loghost:514"`.
        server: String,
    },
    /// Sends newline-terminated messages over a TCP connection to `server`.
    Tcp {
        /// Address of the syslog server.
        server: String,
    },
}
impl RemoteSyslog {
    /// Syslog over the fragile UDP protocol.
    #[must_use]
    pub fn udp(local: impl Into<String>, server: impl Into<String>) -> Self {
        Self::Udp {
            local: local.into(),
            server: server.into(),
        }
    }

    /// Syslog over TCP.
    #[must_use]
    pub fn tcp(server: impl Into<String>) -> Self {
        Self::Tcp {
            server: server.into(),
        }
    }
}

impl SyslogConnector for RemoteSyslog {
    fn connect(
        &self,
        default_priority: SyslogPriority,
        facility: SyslogFacility,
        tag: &str,
    ) -> Result<Box<dyn SyslogSink>, DlogError> {
        let conn = match self {
            Self::Udp { local, server } => {
                let socket = UdpSocket::bind(local.as_str())?;
                socket.connect(server.as_str())?;
                Connection::Udp(socket)
            }
            Self::Tcp { server } => Connection::Tcp(TcpStream::connect(server.as_str())?),
        };
        Ok(Box::new(SyslogWriter::new(
            conn,
            default_priority,
            facility,
            tag,
        )))
    }
}
