#[macro_use]
extern crate clap;
extern crate env_logger;
extern crate ethsend;

mod cli;

use std::process;

use cli::App;

/// Sends a single Ethernet frame on a network interface via a raw packet
/// socket. Needs root or CAP_NET_RAW. Use tshark or tcpdump to observe.
#[cfg(target_os = "linux")]
fn main() {
    env_logger::init();

    let matches = app_from_crate!().with_frame_args().get_matches();

    let config = match cli::frame_config(&matches) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{}", err);
            process::exit(1);
        }
    };

    match ethsend::linux::send_frame(&config) {
        Ok(sent) => println!(
            "Sent {}-byte Ethernet packet on {}",
            sent, config.interface
        ),
        Err(err) => {
            eprintln!("Sending frame on {} failed: {}.", config.interface, err);
            process::exit(1);
        }
    }
}

#[cfg(not(target_os = "linux"))]
fn main() {
    eprintln!("Sorry, raw packet sockets are only supported on Linux.");
    process::exit(1);
}
