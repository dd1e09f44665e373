//! Sample frames and the defaults used to send them.

pub mod env;
pub mod fixtures;

pub use self::fixtures::Sample;
