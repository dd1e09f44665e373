use clap;

use ethsend::core::repr::{
    eth_types,
    EthernetAddress,
    EthernetFrame,
};
use ethsend::core::sender::FrameConfig;
use ethsend::samples::{
    env,
    Sample,
};

pub trait App {
    fn with_frame_args(self) -> Self;
}

fn is_mac(value: String) -> Result<(), String> {
    value
        .parse::<EthernetAddress>()
        .map(|_| ())
        .map_err(|_| format!("'{}' is not a MAC address like 30:9C:23:85:CB:B3", value))
}

fn is_eth_type(value: String) -> Result<(), String> {
    eth_types::parse(&value)
        .map(|_| ())
        .map_err(|_| format!("'{}' is not a 16-bit hex EtherType like 0x7A05", value))
}

fn is_sample(value: String) -> Result<(), String> {
    value.parse::<Sample>().map(|_| ()).map_err(|_| {
        let names: Vec<_> = Sample::ALL.iter().map(|sample| sample.name()).collect();
        format!("unknown sample '{}', expected one of {}", value, names.join(", "))
    })
}

impl<'a, 'b> App for clap::App<'a, 'b> {
    fn with_frame_args(self) -> Self {
        self.arg(
            clap::Arg::with_name("interface")
                .long("interface")
                .short("i")
                .value_name("IFACE")
                .help("Network interface to send the frame on [default: enp30s0]")
                .takes_value(true),
        ).arg(
                clap::Arg::with_name("dst")
                    .long("dst")
                    .value_name("MAC")
                    .help("Destination MAC address [default: FF:FF:FF:FF:FF:FF]")
                    .validator(is_mac)
                    .takes_value(true),
            )
            .arg(
                clap::Arg::with_name("src")
                    .long("src")
                    .value_name("MAC")
                    .help("Source MAC address [default: 30:9C:23:85:CB:B3]")
                    .validator(is_mac)
                    .takes_value(true),
            )
            .arg(
                clap::Arg::with_name("type")
                    .long("type")
                    .value_name("HEX")
                    .help("EtherType of the frame [default: 0x7A05]")
                    .validator(is_eth_type)
                    .takes_value(true),
            )
            .arg(
                clap::Arg::with_name("nul")
                    .long("nul")
                    .help("Appends a NUL byte to the payload"),
            )
            .arg(
                clap::Arg::with_name("pad")
                    .long("pad")
                    .help("Zero pads the payload up to the minimum frame size"),
            )
            .arg(
                clap::Arg::with_name("sample")
                    .long("sample")
                    .value_name("NAME")
                    .help(
                        "Sends a sample frame: broadcast-eth, broadcast-another-message \
                         or unicast-other-eth",
                    )
                    .validator(is_sample)
                    .conflicts_with_all(&["PAYLOAD", "dst", "src", "type", "nul", "pad"])
                    .takes_value(true),
            )
            .arg(
                clap::Arg::with_name("PAYLOAD")
                    .help("Payload text")
                    .required_unless("sample")
                    .index(1),
            )
    }
}

/// Builds the frame to send from parsed arguments.
pub fn frame_config(matches: &clap::ArgMatches) -> Result<FrameConfig, String> {
    let mut config = match matches.value_of("sample") {
        Some(name) => name.parse::<Sample>()
            .map_err(|_| format!("Unknown sample '{}'.", name))?
            .config(),
        None => custom_config(matches)?,
    };

    if let Some(interface) = matches.value_of("interface") {
        config.interface = interface.to_string();
    }

    Ok(config)
}

fn custom_config(matches: &clap::ArgMatches) -> Result<FrameConfig, String> {
    let mac = |name: &str, default: EthernetAddress| match matches.value_of(name) {
        Some(addr) => addr.parse::<EthernetAddress>()
            .map_err(|_| format!("Bad {} MAC address!", name)),
        None => Ok(default),
    };

    let dst_addr = mac("dst", *env::DEFAULT_DST_ADDR)?;
    let src_addr = mac("src", *env::DEFAULT_SRC_ADDR)?;

    let eth_type = match matches.value_of("type") {
        Some(eth_type) => eth_types::parse(eth_type).map_err(|_| "Bad EtherType!".to_string())?,
        None => env::DEFAULT_ETH_TYPE,
    };

    let mut payload = matches
        .value_of("PAYLOAD")
        .map(|payload| payload.as_bytes().to_vec())
        .unwrap_or_default();

    if matches.is_present("nul") {
        payload.push(0);
    }

    if matches.is_present("pad") {
        let min_payload_len =
            EthernetFrame::<&[u8]>::MIN_FRAME_LEN - EthernetFrame::<&[u8]>::HEADER_LEN;
        if payload.len() < min_payload_len {
            payload.resize(min_payload_len, 0);
        }
    }

    Ok(FrameConfig {
        dst_addr: dst_addr.as_bytes().to_vec(),
        src_addr: src_addr.as_bytes().to_vec(),
        eth_type: eth_types::to_bytes(eth_type).to_vec(),
        payload,
        interface: env::DEFAULT_INTERFACE.clone(),
    })
}
