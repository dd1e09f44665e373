//! Serialization and deserialization of link layer frames.
//!
//! The `repr` module provides views over byte buffers as frames, plus
//! assembly of frames from their raw fields.

pub mod ethernet;

pub use self::ethernet::{
    eth_types,
    Address as EthernetAddress,
    Frame as EthernetFrame,
};
