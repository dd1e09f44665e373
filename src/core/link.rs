use std;

use {
    Error,
    Result,
};

/// A low level interface for writing frames to a link.
pub trait Link {
    /// Writes a complete frame to the link in one call and returns the number
    /// of bytes the link accepted.
    fn send(&mut self, buffer: &[u8]) -> Result<usize>;

    /// Returns the [MTU](https://en.wikipedia.org/wiki/Maximum_transmission_unit)
    /// of the underlying hardware.
    fn max_transmission_unit(&self) -> Result<usize>;
}

impl<'a, L: Link + ?Sized> Link for &'a mut L {
    fn send(&mut self, buffer: &[u8]) -> Result<usize> {
        (**self).send(buffer)
    }

    fn max_transmission_unit(&self) -> Result<usize> {
        (**self).max_transmission_unit()
    }
}

/// A Link which records sent frames in memory rather than transmitting them.
#[derive(Debug)]
pub struct MockLink {
    /// Every frame passed to send, in order.
    pub sent: Vec<Vec<u8>>,
    /// Caps how many bytes of a frame send reports as accepted.
    pub accept_len: Option<usize>,
    /// When set, send fails with an error of this kind and records nothing.
    pub fail_with: Option<std::io::ErrorKind>,
    pub mtu: usize,
}

impl MockLink {
    pub fn new() -> MockLink {
        MockLink {
            sent: Vec::new(),
            accept_len: None,
            fail_with: None,
            mtu: 1500,
        }
    }
}

impl Link for MockLink {
    fn send(&mut self, buffer: &[u8]) -> Result<usize> {
        if let Some(kind) = self.fail_with {
            return Err(Error::TransmitFailed(std::io::Error::from(kind)));
        }

        self.sent.push(buffer.to_vec());

        Ok(match self.accept_len {
            Some(accept_len) => std::cmp::min(accept_len, buffer.len()),
            None => buffer.len(),
        })
    }

    fn max_transmission_unit(&self) -> Result<usize> {
        Ok(self.mtu)
    }
}
