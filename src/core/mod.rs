//! Core, platform independent frame handling code.

pub mod link;
pub mod repr;
pub mod sender;
