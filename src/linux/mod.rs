//! Linux specific link implementations.

pub mod libc;
pub mod link;

pub use self::link::PacketSocket;

use core::sender::{
    self,
    FrameConfig,
};
use Result;

/// Binds a raw packet socket to the config's interface and sends the config's
/// frame over it. The socket is closed before returning.
///
/// # Errors
///
/// Malformed addresses or EtherTypes are reported before any socket is
/// opened. Opening a raw packet socket usually requires CAP_NET_RAW.
pub fn send_frame(config: &FrameConfig) -> Result<usize> {
    sender::send_config(config, PacketSocket::bind)
}
