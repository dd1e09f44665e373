//! Builds Ethernet frames and writes them to a link, once per call.

use core::link::Link;
use core::repr::EthernetFrame;
use {
    Error,
    Result,
};

/// Everything needed to put one frame on the wire.
///
/// Fields hold raw bytes so that lengths are checked when the frame is
/// assembled, not when the config is built.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameConfig {
    pub dst_addr: Vec<u8>,
    pub src_addr: Vec<u8>,
    pub eth_type: Vec<u8>,
    pub payload: Vec<u8>,
    pub interface: String,
}

impl FrameConfig {
    /// Assembles the frame described by the config.
    pub fn frame(&self) -> Result<EthernetFrame<Vec<u8>>> {
        EthernetFrame::assemble(
            &self.dst_addr,
            &self.src_addr,
            &self.eth_type,
            &self.payload,
        )
    }

    /// Returns the length of the assembled frame.
    pub fn frame_len(&self) -> usize {
        EthernetFrame::<&[u8]>::buffer_len(self.payload.len())
    }
}

/// Assembles a frame and writes it to a link in a single call.
///
/// # Errors
///
/// Nothing is written if an address or the EtherType has the wrong length.
/// A link accepting fewer bytes than the frame holds is an error.
pub fn send_frame<L: Link>(
    link: &mut L,
    dst_addr: &[u8],
    src_addr: &[u8],
    eth_type: &[u8],
    payload: &[u8],
) -> Result<usize> {
    let eth_frame = EthernetFrame::assemble(dst_addr, src_addr, eth_type, payload)?;
    transmit(link, &eth_frame)
}

/// Assembles the frame for a config, then opens a link to the config's
/// interface via open and writes the frame to it.
///
/// The link is only opened once the frame has been assembled, so malformed
/// input never touches the OS.
pub fn send_config<L, F>(config: &FrameConfig, open: F) -> Result<usize>
where
    L: Link,
    F: FnOnce(&str) -> Result<L>,
{
    let eth_frame = config.frame()?;
    let mut link = open(&config.interface)?;
    transmit(&mut link, &eth_frame)
}

fn transmit<L: Link>(link: &mut L, eth_frame: &EthernetFrame<Vec<u8>>) -> Result<usize> {
    let frame_len = eth_frame.as_ref().len();

    if frame_len < EthernetFrame::<&[u8]>::MIN_FRAME_LEN {
        debug!(
            "Frame of {} bytes is below the {} byte minimum, the link will pad it.",
            frame_len,
            EthernetFrame::<&[u8]>::MIN_FRAME_LEN
        );
    }

    match link.max_transmission_unit() {
        Ok(mtu) if frame_len > EthernetFrame::<&[u8]>::buffer_len(mtu) => {
            warn!(
                "Frame of {} bytes exceeds the link MTU of {} bytes.",
                frame_len, mtu
            );
        }
        Err(err) => debug!("Unable to query MTU: {}.", err),
        _ => {}
    }

    debug!(
        "Sending frame {} -> {} (type {:#06X}, {} bytes).",
        eth_frame.src_addr(),
        eth_frame.dst_addr(),
        eth_frame.payload_type(),
        frame_len
    );

    let sent = link.send(eth_frame.as_ref())?;
    if sent != frame_len {
        return Err(Error::ShortWrite {
            sent,
            expected: frame_len,
        });
    }

    Ok(sent)
}

#[cfg(test)]
mod tests {
    use std::io::ErrorKind;

    use super::*;
    use core::link::MockLink;

    const SRC: [u8; 6] = [0x30, 0x9C, 0x23, 0x85, 0xCB, 0xB3];

    fn config(dst_addr: &[u8], eth_type: &[u8], payload: &[u8]) -> FrameConfig {
        FrameConfig {
            dst_addr: dst_addr.to_vec(),
            src_addr: SRC.to_vec(),
            eth_type: eth_type.to_vec(),
            payload: payload.to_vec(),
            interface: "test0".to_string(),
        }
    }

    #[test]
    fn test_send_frame() {
        let mut link = MockLink::new();
        let sent = send_frame(&mut link, &[0xFF; 6], &SRC, &[0x7A, 0x05], b"hello there!").unwrap();

        assert_eq!(sent, 26);
        assert_eq!(link.sent.len(), 1);
        assert_eq!(&link.sent[0][.. 6], &[0xFF; 6]);
        assert_eq!(&link.sent[0][14 ..], b"hello there!");
    }

    #[test]
    fn test_send_frame_invalid_skips_link() {
        let mut link = MockLink::new();

        assert_matches!(
            send_frame(&mut link, &[0xFF; 3], &SRC, &[0x7A, 0x05], &[]),
            Err(Error::InvalidAddressLength(3))
        );
        assert_matches!(
            send_frame(&mut link, &[0xFF; 6], &SRC, &[0x7A, 0x05, 0x00, 0x00], &[]),
            Err(Error::InvalidEtherTypeLength(4))
        );
        assert!(link.sent.is_empty());
    }

    #[test]
    fn test_send_frame_short_write() {
        let mut link = MockLink::new();
        link.accept_len = Some(20);

        assert_matches!(
            send_frame(&mut link, &[0xFF; 6], &SRC, &[0x7A, 0x05], b"hello there!"),
            Err(Error::ShortWrite {
                sent: 20,
                expected: 26,
            })
        );
    }

    #[test]
    fn test_send_frame_link_error() {
        let mut link = MockLink::new();
        link.fail_with = Some(ErrorKind::Other);

        assert_matches!(
            send_frame(&mut link, &[0xFF; 6], &SRC, &[0x7A, 0x05], &[]),
            Err(Error::TransmitFailed(_))
        );
    }

    #[test]
    fn test_send_frame_over_mtu_still_sends() {
        let mut link = MockLink::new();
        link.mtu = 8;

        let sent = send_frame(&mut link, &[0xFF; 6], &SRC, &[0x7A, 0x05], b"hello there!").unwrap();
        assert_eq!(sent, 26);
    }

    #[test]
    fn test_send_config_opens_interface() {
        let config = config(&[0xFF; 6], &[0x7B, 0x00], b"abc");
        let mut link = MockLink::new();
        let mut opened = None;

        {
            let link = &mut link;
            let sent = send_config(&config, |interface| {
                opened = Some(interface.to_string());
                Ok(link)
            }).unwrap();
            assert_eq!(sent, config.frame_len());
        }


        assert_eq!(opened, Some("test0".to_string()));
        assert_eq!(link.sent, vec![config.frame().unwrap().into_inner()]);
    }

    #[test]
    fn test_send_config_invalid_never_opens() {
        let config = config(&[0xFF; 6], &[0x7B], b"abc");

        let result = send_config(&config, |_| -> Result<MockLink> {
            panic!("Link opened for an invalid frame!");
        });

        assert_matches!(result, Err(Error::InvalidEtherTypeLength(1)));
    }

    #[test]
    fn test_send_config_open_error() {
        let config = config(&[0xFF; 6], &[0x7B, 0x00], b"abc");

        let result = send_config(&config, |interface| -> Result<MockLink> {
            Err(Error::InterfaceNotFound(interface.to_string()))
        });

        assert_matches!(result, Err(Error::InterfaceNotFound(ref name)) if name == "test0");
    }
}
