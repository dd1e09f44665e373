#[cfg(test)]
#[macro_use]
extern crate assert_matches;
extern crate byteorder;
#[macro_use]
extern crate lazy_static;
extern crate libc;
#[macro_use]
extern crate log;

use std::fmt::{
    Display,
    Formatter,
    Result as FmtResult,
};

pub mod core;
pub mod samples;

#[cfg(target_os = "linux")]
pub mod linux;

#[derive(Debug)]
pub enum Error {
    /// Indicates a MAC address that is not exactly 6 bytes long.
    InvalidAddressLength(usize),
    /// Indicates an EtherType that is not exactly 2 bytes long.
    InvalidEtherTypeLength(usize),
    /// Indicates a network interface name the OS does not know about.
    InterfaceNotFound(String),
    /// Indicates an error opening a raw link layer socket.
    SocketCreationFailed(std::io::Error),
    /// Indicates an error binding a socket to a network interface.
    InterfaceBindFailed(std::io::Error),
    /// Indicates an error writing a frame to a link.
    TransmitFailed(std::io::Error),
    /// Indicates a link accepted fewer bytes than the frame holds.
    ShortWrite { sent: usize, expected: usize },
    /// Indicates an error where a frame is too short to hold a header.
    Malformed,
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        match *self {
            Error::InvalidAddressLength(len) => {
                write!(f, "MAC address must be 6 bytes, got {}", len)
            }
            Error::InvalidEtherTypeLength(len) => {
                write!(f, "EtherType must be 2 bytes, got {}", len)
            }
            Error::InterfaceNotFound(ref name) => write!(f, "no such interface '{}'", name),
            Error::SocketCreationFailed(ref err) => {
                write!(f, "opening raw packet socket: {}", err)
            }
            Error::InterfaceBindFailed(ref err) => write!(f, "binding to interface: {}", err),
            Error::TransmitFailed(ref err) => write!(f, "sending frame: {}", err),
            Error::ShortWrite { sent, expected } => {
                write!(f, "sent {} of {} frame bytes", sent, expected)
            }
            Error::Malformed => write!(f, "frame shorter than an Ethernet header"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(std::error::Error + 'static)> {
        match *self {
            Error::SocketCreationFailed(ref err)
            | Error::InterfaceBindFailed(ref err)
            | Error::TransmitFailed(ref err) => Some(err),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use std::io::{
        Error as IoError,
        ErrorKind,
    };

    use super::*;

    fn io_err() -> IoError {
        IoError::new(ErrorKind::PermissionDenied, "denied")
    }

    #[test]
    fn test_display_names_failed_step() {
        let cases = vec![
            (
                Error::InvalidAddressLength(5),
                "MAC address must be 6 bytes, got 5",
            ),
            (
                Error::InvalidEtherTypeLength(3),
                "EtherType must be 2 bytes, got 3",
            ),
            (
                Error::InterfaceNotFound("eth9".to_string()),
                "no such interface 'eth9'",
            ),
            (
                Error::SocketCreationFailed(io_err()),
                "opening raw packet socket: denied",
            ),
            (
                Error::InterfaceBindFailed(io_err()),
                "binding to interface: denied",
            ),
            (Error::TransmitFailed(io_err()), "sending frame: denied"),
            (
                Error::ShortWrite {
                    sent: 14,
                    expected: 26,
                },
                "sent 14 of 26 frame bytes",
            ),
            (Error::Malformed, "frame shorter than an Ethernet header"),
        ];

        for (err, expected) in cases {
            assert_eq!(err.to_string(), expected);
        }
    }

    #[test]
    fn test_source_keeps_os_error() {
        use std::error::Error as StdError;

        let err = Error::SocketCreationFailed(io_err());
        assert!(err.source().is_some());
        assert!(Error::Malformed.source().is_none());
    }
}
