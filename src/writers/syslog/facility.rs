use crate::DlogError;
use std::str::FromStr;

/// Syslog Facility, according to [RFC 5424](https://datatracker.ietf.org/doc/rfc5424).
///
/// Note that the `syslog.h` integer values are already multiplied by 8.
///
/// Only the facilities with a conventional `syslog.h` name are offered,
/// since the facility is chosen by name in [`Logger::init`](crate::Logger::init).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[allow(clippy::module_name_repetitions)]
pub enum SyslogFacility {
    /// kernel messages (`KERN`).
    Kernel = 0 << 3,
    /// user-level messages (`USER`).
    UserLevel = 1 << 3,
    /// mail system (`MAIL`).
    MailSystem = 2 << 3,
    /// system daemons (`DAEMON`).
    SystemDaemons = 3 << 3,
    /// security/authorization messages (`AUTH`).
    Authorization = 4 << 3,
    /// messages generated internally by syslogd (`SYSLOG`).
    SyslogD = 5 << 3,
    /// line printer subsystem (`LPR`).
    LinePrinter = 6 << 3,
    /// network news subsystem (`NEWS`).
    News = 7 << 3,
    /// UUCP subsystem (`UUCP`).
    Uucp = 8 << 3,
    /// clock daemon (`CRON`).
    Clock = 9 << 3,
    /// security/authorization messages (`AUTHPRIV`).
    Authorization2 = 10 << 3,
    /// FTP daemon (`FTP`).
    Ftp = 11 << 3,
    /// local use 0  (`LOCAL0`).
    LocalUse0 = 16 << 3,
    /// local use 1  (`LOCAL1`).
    LocalUse1 = 17 << 3,
    /// local use 2  (`LOCAL2`).
    LocalUse2 = 18 << 3,
    /// local use 3  (`LOCAL3`).
    LocalUse3 = 19 << 3,
    /// local use 4  (`LOCAL4`).
    LocalUse4 = 20 << 3,
    /// local use 5  (`LOCAL5`).
    LocalUse5 = 21 << 3,
    /// local use 6  (`LOCAL6`).
    LocalUse6 = 22 << 3,
    /// local use 7  (`LOCAL7`).
    LocalUse7 = 23 << 3,
}

impl SyslogFacility {
    /// The facility that is used if none is given.
    pub const DEFAULT_NAME: &'static str = "DAEMON";

    #[cfg(all(unix, feature = "syslog_call"))]
    pub(crate) fn to_nix(self) -> nix::syslog::Facility {
        use nix::syslog::Facility;
        match self {
            Self::Kernel => Facility::LOG_KERN,
            Self::UserLevel => Facility::LOG_USER,
            Self::MailSystem => Facility::LOG_MAIL,
            Self::SystemDaemons => Facility::LOG_DAEMON,
            Self::Authorization => Facility::LOG_AUTH,
            Self::SyslogD => Facility::LOG_SYSLOG,
            Self::LinePrinter => Facility::LOG_LPR,
            Self::News => Facility::LOG_NEWS,
            Self::Uucp => Facility::LOG_UUCP,
            Self::Clock => Facility::LOG_CRON,
            Self::Authorization2 => Facility::LOG_AUTHPRIV,
            Self::Ftp => Facility::LOG_FTP,
            Self::LocalUse0 => Facility::LOG_LOCAL0,
            Self::LocalUse1 => Facility::LOG_LOCAL1,
            Self::LocalUse2 => Facility::LOG_LOCAL2,
            Self::LocalUse3 => Facility::LOG_LOCAL3,
            Self::LocalUse4 => Facility::LOG_LOCAL4,
            Self::LocalUse5 => Facility::LOG_LOCAL5,
            Self::LocalUse6 => Facility::LOG_LOCAL6,
            Self::LocalUse7 => Facility::LOG_LOCAL7,
        }
    }
}

/// Parses the `syslog.h` name of a facility, case-insensitively,
/// with or without the `LOG_` prefix.
impl FromStr for SyslogFacility {
    type Err = DlogError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_ascii_uppercase();
        let name = upper.strip_prefix("LOG_").unwrap_or(&upper);
        Ok(match name {
            "KERN" => Self::Kernel,
            "USER" => Self::UserLevel,
            "MAIL" => Self::MailSystem,
            "DAEMON" => Self::SystemDaemons,
            "AUTH" => Self::Authorization,
            "SYSLOG" => Self::SyslogD,
            "LPR" => Self::LinePrinter,
            "NEWS" => Self::News,
            "UUCP" => Self::Uucp,
            "CRON" => Self::Clock,
            "AUTHPRIV" => Self::Authorization2,
            "FTP" => Self::Ftp,
            "LOCAL0" => Self::LocalUse0,
            "LOCAL1" => Self::LocalUse1,
            "LOCAL2" => Self::LocalUse2,
            "LOCAL3" => Self::LocalUse3,
            "LOCAL4" => Self::LocalUse4,
            "LOCAL5" => Self::LocalUse5,
            "LOCAL6" => Self::LocalUse6,
            "LOCAL7" => Self::LocalUse7,
            _ => return Err(DlogError::UnknownFacility(s.to_string())),
        })
    }
}
