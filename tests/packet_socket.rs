#![cfg(target_os = "linux")]

extern crate ethsend;

use ethsend::core::sender::FrameConfig;
use ethsend::linux;
use ethsend::samples::Sample;
use ethsend::Error;

fn config_on(interface: &str) -> FrameConfig {
    let mut config = Sample::BroadcastEth.config();
    config.interface = interface.to_string();
    config
}

#[test]
fn unknown_interface() {
    match linux::send_frame(&config_on("nosuchif0")) {
        Err(Error::InterfaceNotFound(name)) => assert_eq!(name, "nosuchif0"),
        other => panic!("Expected InterfaceNotFound, got {:?}.", other),
    }
}

#[test]
fn malformed_frame_checked_before_interface() {
    let mut config = config_on("nosuchif0");
    config.eth_type = vec![0x7A];

    match linux::send_frame(&config) {
        Err(Error::InvalidEtherTypeLength(1)) => {}
        other => panic!("Expected InvalidEtherTypeLength, got {:?}.", other),
    }
}

/// Sends on loopback when privileged, otherwise checks that the missing
/// privilege is what gets reported.
#[test]
fn loopback() {
    match linux::send_frame(&config_on("lo")) {
        Ok(sent) => assert_eq!(sent, 26),
        Err(Error::SocketCreationFailed(_)) => {}
        other => panic!("Unexpected result {:?}.", other),
    }
}
