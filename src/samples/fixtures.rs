use std::fmt::{
    Display,
    Formatter,
    Result as FmtResult,
};
use std::result::Result as StdResult;
use std::str::FromStr;

use core::repr::{
    eth_types,
    EthernetAddress,
};
use core::sender::FrameConfig;
use samples::env;

lazy_static! {
    /// A unicast address nobody on the sample segment owns.
    pub static ref UNICAST_DST_ADDR: EthernetAddress = {
        EthernetAddress::new([0x00, 0x00, 0x12, 0x00, 0x00, 0x02])
    };
}

fn sample(dst_addr: EthernetAddress, eth_type: u16, payload: &[u8]) -> FrameConfig {
    FrameConfig {
        dst_addr: dst_addr.as_bytes().to_vec(),
        src_addr: env::DEFAULT_SRC_ADDR.as_bytes().to_vec(),
        eth_type: eth_types::to_bytes(eth_type).to_vec(),
        payload: payload.to_vec(),
        interface: env::DEFAULT_INTERFACE.clone(),
    }
}

/// A short broadcast frame, below the minimum frame size.
pub fn broadcast_eth() -> FrameConfig {
    sample(EthernetAddress::BROADCAST, 0x7A05, b"hello there!")
}

/// A broadcast frame with a payload long enough to need no padding. The
/// payload ends with a NUL byte for receivers reading it as a C string.
pub fn broadcast_another_message() -> FrameConfig {
    sample(
        EthernetAddress::BROADCAST,
        0x7B00,
        b"Brand new message for everyone! \
          This frame shall be larger than 64 bytes - Even more!+\x00",
    )
}

/// A frame for a single host, which receivers filtering on their own address
/// should drop.
pub fn unicast_other_eth() -> FrameConfig {
    sample(*UNICAST_DST_ADDR, 0x7A05, b"Nobody should get this!")
}

/// Selects one of the sample frames by name.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sample {
    BroadcastEth,
    BroadcastAnotherMessage,
    UnicastOtherEth,
}

impl Sample {
    pub const ALL: [Sample; 3] = [
        Sample::BroadcastEth,
        Sample::BroadcastAnotherMessage,
        Sample::UnicastOtherEth,
    ];

    pub fn name(&self) -> &'static str {
        match *self {
            Sample::BroadcastEth => "broadcast-eth",
            Sample::BroadcastAnotherMessage => "broadcast-another-message",
            Sample::UnicastOtherEth => "unicast-other-eth",
        }
    }

    pub fn config(&self) -> FrameConfig {
        match *self {
            Sample::BroadcastEth => broadcast_eth(),
            Sample::BroadcastAnotherMessage => broadcast_another_message(),
            Sample::UnicastOtherEth => unicast_other_eth(),
        }
    }
}

impl Display for Sample {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Sample {
    type Err = ();

    fn from_str(name: &str) -> StdResult<Sample, Self::Err> {
        Sample::ALL
            .iter()
            .find(|sample| sample.name() == name)
            .cloned()
            .ok_or(())
    }
}
