use std;
use std::ffi::CString;

use libc;

use core::link::Link;
use linux::libc as _libc;
use {
    Error,
    Result,
};

/// A raw [packet socket](http://man7.org/linux/man-pages/man7/packet.7.html)
/// bound to a single interface, for writing complete Ethernet frames.
///
/// Frames written to the socket go out as is. The kernel adds no header and
/// the NIC appends the FCS.
#[derive(Debug)]
pub struct PacketSocket {
    fd: libc::c_int,
    ifreq: _libc::c_ifreq,
}

impl PacketSocket {
    /// Opens a raw packet socket and binds it to the interface named
    /// ifr_name.
    ///
    /// # Errors
    ///
    /// The interface is looked up before the socket is opened, so an unknown
    /// name yields InterfaceNotFound even without CAP_NET_RAW.
    pub fn bind(ifr_name: &str) -> Result<PacketSocket> {
        let ifindex = Self::ifindex(ifr_name)?;

        let fd = unsafe { libc::socket(libc::AF_PACKET, libc::SOCK_RAW, 0) };

        if fd == -1 {
            return Err(Error::SocketCreationFailed(
                std::io::Error::last_os_error(),
            ));
        }

        let addr = _libc::sockaddr_ll(ifindex);

        let bound = unsafe {
            libc::bind(
                fd,
                &addr as *const libc::sockaddr_ll as *const libc::sockaddr,
                std::mem::size_of::<libc::sockaddr_ll>() as libc::socklen_t,
            )
        };

        if bound == -1 {
            let err = std::io::Error::last_os_error();
            unsafe {
                libc::close(fd);
            }
            return Err(Error::InterfaceBindFailed(err));
        }

        debug!("Bound packet socket to {} (index {}).", ifr_name, ifindex);

        Ok(PacketSocket {
            fd,
            ifreq: _libc::c_ifreq::with_name(ifr_name),
        })
    }

    fn ifindex(ifr_name: &str) -> Result<libc::c_int> {
        let not_found = || Error::InterfaceNotFound(ifr_name.to_string());

        if ifr_name.is_empty() || ifr_name.len() >= libc::IF_NAMESIZE {
            return Err(not_found());
        }

        let c_name = CString::new(ifr_name).map_err(|_| not_found())?;

        match unsafe { libc::if_nametoindex(c_name.as_ptr()) } {
            0 => Err(not_found()),
            ifindex => Ok(ifindex as libc::c_int),
        }
    }

    fn inet_ioctl(request: libc::c_ulong, ifreq: &mut _libc::c_ifreq) -> Result<()> {
        unsafe {
            let fd = libc::socket(libc::AF_INET, libc::SOCK_DGRAM, 0);

            if fd == -1 {
                return Err(Error::SocketCreationFailed(
                    std::io::Error::last_os_error(),
                ));
            }

            if libc::ioctl(fd, request as _, ifreq as *mut _libc::c_ifreq) == -1 {
                let err = std::io::Error::last_os_error();
                libc::close(fd);
                return Err(Error::InterfaceBindFailed(err));
            }

            libc::close(fd);
            Ok(())
        }
    }
}

impl Link for PacketSocket {
    fn send(&mut self, buf: &[u8]) -> Result<usize> {
        let sent = unsafe {
            libc::send(
                self.fd,
                buf.as_ptr() as *const libc::c_void,
                buf.len(),
                0,
            )
        };

        if sent == -1 {
            return Err(Error::TransmitFailed(std::io::Error::last_os_error()));
        }

        Ok(sent as usize)
    }

    fn max_transmission_unit(&self) -> Result<usize> {
        let mut ifreq = self.ifreq.clone();
        Self::inet_ioctl(_libc::SIOCGIFMTU, &mut ifreq)?;
        Ok(ifreq.ifr_mtu as usize)
    }
}

impl Drop for PacketSocket {
    fn drop(&mut self) {
        unsafe {
            libc::close(self.fd);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bind_unknown_interface() {
        assert_matches!(
            PacketSocket::bind("nosuchif0"),
            Err(Error::InterfaceNotFound(ref name)) if name == "nosuchif0"
        );
    }

    #[test]
    fn test_bind_result_formats() {
        let bound = PacketSocket::bind("nosuchif0");
        assert_eq!(
            format!("{:?}", bound),
            "Err(InterfaceNotFound(\"nosuchif0\"))"
        );
    }

    #[test]
    fn test_bind_bad_names() {
        assert_matches!(PacketSocket::bind(""), Err(Error::InterfaceNotFound(_)));
        assert_matches!(
            PacketSocket::bind("a_name_way_too_long_for_linux"),
            Err(Error::InterfaceNotFound(_))
        );
        assert_matches!(PacketSocket::bind("lo\0"), Err(Error::InterfaceNotFound(_)));
    }
}
