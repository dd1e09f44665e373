use core::repr::EthernetAddress;

lazy_static! {
    /// Interface the sample frames are sent on.
    pub static ref DEFAULT_INTERFACE: String = "enp30s0".to_string();

    pub static ref DEFAULT_SRC_ADDR: EthernetAddress = {
        EthernetAddress::new([0x30, 0x9C, 0x23, 0x85, 0xCB, 0xB3])
    };

    pub static ref DEFAULT_DST_ADDR: EthernetAddress = EthernetAddress::BROADCAST;
}

/// EtherType used when none is given. It is an unassigned value, so no
/// protocol stack on the receiving end will claim the frame.
pub const DEFAULT_ETH_TYPE: u16 = 0x7A05;
