use std::fmt::{
    Display,
    Formatter,
    Result as FmtResult,
};
use std::io::Write;
use std::result::Result as StdResult;
use std::str::FromStr;

use byteorder::{
    NetworkEndian,
    ReadBytesExt,
    WriteBytesExt,
};

use {
    Error,
    Result,
};

/// [MAC address](https://en.wikipedia.org/wiki/MAC_address) in network byte order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Address([u8; 6]);

impl Address {
    pub const LEN: usize = 6;

    pub const BROADCAST: Address = Address([0xFF; 6]);

    /// Creates a MAC address from a network byte order buffer.
    pub fn new(addr: [u8; 6]) -> Address {
        Address(addr)
    }

    /// Tries to creates a MAC address from a network byte order slice.
    ///
    /// Any 6 bytes are accepted, there is no check on the OUI or the
    /// multicast/local bits.
    pub fn try_new(addr: &[u8]) -> Result<Address> {
        if addr.len() != Self::LEN {
            return Err(Error::InvalidAddressLength(addr.len()));
        }

        let mut _addr: [u8; 6] = [0; 6];
        _addr.clone_from_slice(addr);
        Ok(Address(_addr))
    }

    /// Returns a reference to the network byte order representation of the
    /// address.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    // Checks if this is a unicast address.
    pub fn is_unicast(&self) -> bool {
        !(self.is_multicast() || self.is_broadcast())
    }

    // Checks if this is a multicast address.
    pub fn is_multicast(&self) -> bool {
        (self.0[0] & 0b00000001) > 0
    }

    /// Checks if this is a broadcast address.
    pub fn is_broadcast(&self) -> bool {
        self.0 == [0xFF; 6]
    }

    /// Checks if this is a locally assigned address or OUI assigned by IEEE.
    pub fn is_local(&self) -> bool {
        (self.0[0] & 0b00000010) > 0
    }
}

impl Display for Address {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        write!(
            f,
            "{:02X}:{:02X}:{:02X}:{:02X}:{:02X}:{:02X}",
            self.0[0], self.0[1], self.0[2], self.0[3], self.0[4], self.0[5],
        )
    }
}

impl FromStr for Address {
    type Err = ();

    /// Parses a MAC address from an A:B:C:D:E:F style string.
    fn from_str(addr: &str) -> StdResult<Address, Self::Err> {
        let bytes = addr.split(":")
            .map(|token| u8::from_str_radix(token, 16))
            .collect::<StdResult<Vec<_>, _>>()
            .map_err(|_| ())?;

        Address::try_new(&bytes).map_err(|_| ())
    }
}

/// [https://en.wikipedia.org/wiki/EtherType](https://en.wikipedia.org/wiki/EtherType)
pub mod eth_types {
    use std::result::Result as StdResult;

    pub const LEN: usize = 2;

    pub const IPV4: u16 = 0x800;

    pub const ARP: u16 = 0x806;

    /// Parses an EtherType from a hex string, with or without a leading 0x.
    pub fn parse(eth_type: &str) -> StdResult<u16, ()> {
        let digits = if eth_type.starts_with("0x") || eth_type.starts_with("0X") {
            &eth_type[2 ..]
        } else {
            eth_type
        };

        if digits.is_empty() || digits.len() > 4 {
            return Err(());
        }

        u16::from_str_radix(digits, 16).map_err(|_| ())
    }

    /// Returns the network byte order representation of an EtherType.
    pub fn to_bytes(eth_type: u16) -> [u8; 2] {
        [(eth_type >> 8) as u8, eth_type as u8]
    }
}

mod fields {
    use std::ops::{
        Range,
        RangeFrom,
    };

    pub const DST_ADDR: Range<usize> = 0 .. 6;

    pub const SRC_ADDR: Range<usize> = 6 .. 12;

    pub const PAYLOAD_TYPE: Range<usize> = 12 .. 14;

    pub const PAYLOAD: RangeFrom<usize> = 14 ..;
}

/// View of a byte buffer as an Ethernet II frame.
#[derive(Debug)]
pub struct Frame<T: AsRef<[u8]>> {
    buffer: T,
}

impl<T: AsRef<[u8]>> AsRef<[u8]> for Frame<T> {
    fn as_ref(&self) -> &[u8] {
        self.buffer.as_ref()
    }
}

impl<T: AsRef<[u8]> + AsMut<[u8]>> AsMut<[u8]> for Frame<T> {
    fn as_mut(&mut self) -> &mut [u8] {
        self.buffer.as_mut()
    }
}

impl<T: AsRef<[u8]>> Frame<T> {
    pub const HEADER_LEN: usize = 14;

    /// Smallest frame, excluding the FCS, a link puts on the wire. Shorter
    /// frames get padded by the driver or NIC.
    pub const MIN_FRAME_LEN: usize = 60;

    /// Tries to create an Ethernet frame view over a byte buffer.
    pub fn try_new(buffer: T) -> Result<Frame<T>> {
        if buffer.as_ref().len() < Self::HEADER_LEN {
            Err(Error::Malformed)
        } else {
            Ok(Frame { buffer })
        }
    }

    /// Returns the length of an Ethernet frame with the specified payload size.
    pub fn buffer_len(payload_len: usize) -> usize {
        Self::HEADER_LEN + payload_len
    }

    /// Returns the underlying buffer.
    pub fn into_inner(self) -> T {
        self.buffer
    }

    pub fn dst_addr(&self) -> Address {
        let mut addr = [0; 6];
        addr.copy_from_slice(&self.buffer.as_ref()[fields::DST_ADDR]);
        Address::new(addr)
    }

    pub fn src_addr(&self) -> Address {
        let mut addr = [0; 6];
        addr.copy_from_slice(&self.buffer.as_ref()[fields::SRC_ADDR]);
        Address::new(addr)
    }

    pub fn payload_type(&self) -> u16 {
        (&self.buffer.as_ref()[fields::PAYLOAD_TYPE])
            .read_u16::<NetworkEndian>()
            .unwrap()
    }

    pub fn payload(&self) -> &[u8] {
        &self.buffer.as_ref()[fields::PAYLOAD]
    }

    /// Checks if a receiver with the address addr would accept the frame,
    /// i.e. the frame is sent to addr or to everyone.
    pub fn is_addressed_to(&self, addr: Address) -> bool {
        let dst_addr = self.dst_addr();
        dst_addr == addr || dst_addr.is_broadcast()
    }
}

impl<T: AsRef<[u8]> + AsMut<[u8]>> Frame<T> {
    pub fn set_dst_addr(&mut self, addr: Address) {
        (&mut self.buffer.as_mut()[fields::DST_ADDR])
            .write(addr.as_bytes())
            .unwrap();
    }

    pub fn set_src_addr(&mut self, addr: Address) {
        (&mut self.buffer.as_mut()[fields::SRC_ADDR])
            .write(addr.as_bytes())
            .unwrap();
    }

    pub fn set_payload_type(&mut self, payload_type: u16) {
        (&mut self.buffer.as_mut()[fields::PAYLOAD_TYPE])
            .write_u16::<NetworkEndian>(payload_type)
            .unwrap();
    }

    pub fn payload_mut(&mut self) -> &mut [u8] {
        &mut self.buffer.as_mut()[fields::PAYLOAD]
    }
}

impl Frame<Vec<u8>> {
    /// Assembles dst_addr || src_addr || eth_type || payload into a new frame.
    ///
    /// The payload is copied as is. Nothing pads the frame up to
    /// MIN_FRAME_LEN, that is up to the caller or the link.
    ///
    /// # Errors
    ///
    /// Fails if either address is not 6 bytes or eth_type is not 2 bytes,
    /// checked in that order.
    pub fn assemble(
        dst_addr: &[u8],
        src_addr: &[u8],
        eth_type: &[u8],
        payload: &[u8],
    ) -> Result<Frame<Vec<u8>>> {
        let dst_addr = Address::try_new(dst_addr)?;
        let src_addr = Address::try_new(src_addr)?;

        if eth_type.len() != eth_types::LEN {
            return Err(Error::InvalidEtherTypeLength(eth_type.len()));
        }

        let mut frame = Frame {
            buffer: vec![0; Self::buffer_len(payload.len())],
        };
        frame.set_dst_addr(dst_addr);
        frame.set_src_addr(src_addr);
        (&mut frame.buffer[fields::PAYLOAD_TYPE]).copy_from_slice(eth_type);
        frame.payload_mut().copy_from_slice(payload);

        Ok(frame)
    }
}
