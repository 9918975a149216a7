use thiserror::Error;

use crate::version::types::{MAX_MINOR, Version};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RangeError {
    #[error("Invalid upgrade range: {from} is not before {to}")]
    InvalidRange { from: Version, to: Version },

    #[error("Upgrade range too large: {len} versions exceeds limit of {max}")]
    TooLarge { len: u64, max: u64 },

    #[error("Version {to} is not reachable from {from}")]
    Unreachable { from: Version, to: Version },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseVersionError {
    #[error("Empty version string")]
    Empty,

    #[error("Malformed version: {0:?} (expected major.minor)")]
    Malformed(String),

    #[error("Minor version {minor} exceeds maximum of {max}", max = MAX_MINOR)]
    MinorOutOfRange { minor: u32 },
}
