//! Version model for sequential out-of-band migrations
//!
//! A version is a `(major, minor)` pair where `minor` never exceeds
//! [`MAX_MINOR`]; stepping past it rolls over to the next major.
//!
//! ```text
//!  3.41 ──next──▶ 3.42 ──next──▶ 3.43 ──next──▶ 4.0 ──next──▶ 4.1
//!       ◀─previous─     ◀─previous─     ◀─previous─    ◀─previous─
//! ```
//!
//! # Modules
//!
//! - [`types`]: The `Version` value with successor/predecessor steps
//! - [`order`]: `VersionOrder` and `compare_versions`
//! - [`range`]: Upgrade range enumeration between two versions
//! - [`error`]: Error types for range and parse failures

pub mod error;
pub mod order;
pub mod range;
pub mod types;

pub use error::{ParseVersionError, RangeError};
pub use order::{VersionOrder, compare_versions};
pub use range::{steps_between, upgrade_range, upgrade_range_with_limit};
pub use types::{MAX_MINOR, Version};
