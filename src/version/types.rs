//! The `Version` value and its successor/predecessor steps

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::version::error::ParseVersionError;

/// Highest minor version within a major release.
///
/// Stepping past it rolls over to `{major + 1}.0`.
pub const MAX_MINOR: u32 = 43;

/// A migration checkpoint identified by a (major, minor) pair.
///
/// Ordering is lexicographic: `major` first, then `minor`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
pub struct Version {
    pub major: u32,
    pub minor: u32,
}

impl Version {
    /// Build a version from its parts. No validation is performed.
    pub const fn new(major: u32, minor: u32) -> Self {
        Self { major, minor }
    }

    /// The lowest version; it has no predecessor.
    pub const fn zero() -> Self {
        Self::new(0, 0)
    }

    /// The version immediately after this one.
    ///
    /// Rolls over to the next major once `minor` reaches [`MAX_MINOR`].
    ///
    /// # Panics
    ///
    /// Panics when rolling over from `major == u32::MAX`; use
    /// [`Version::checked_next`] where that can happen.
    pub fn next(self) -> Self {
        match self.checked_next() {
            Some(next) => next,
            None => panic!("no version after {}", self),
        }
    }

    /// Like [`Version::next`], but `None` when the major would overflow.
    pub fn checked_next(self) -> Option<Self> {
        if self.minor < MAX_MINOR {
            Some(Self::new(self.major, self.minor + 1))
        } else {
            Some(Self::new(self.major.checked_add(1)?, 0))
        }
    }

    /// The version immediately before this one, or `None` at `0.0`.
    pub fn previous(self) -> Option<Self> {
        if self.minor > 0 {
            return Some(Self::new(self.major, self.minor - 1));
        }
        let major = self.major.checked_sub(1)?;
        Some(Self::new(major, MAX_MINOR))
    }

    /// Release tag for this version, e.g. `v3.12.0`
    pub fn git_tag(&self) -> String {
        format!("v{}.{}.0", self.major, self.minor)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

/// Parses the `Display` form (`3.12`), optionally prefixed with `v`.
impl FromStr for Version {
    type Err = ParseVersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ParseVersionError::Empty);
        }

        let malformed = || ParseVersionError::Malformed(s.to_string());
        let body = s.strip_prefix('v').unwrap_or(s);
        let (major, minor) = body.split_once('.').ok_or_else(malformed)?;
        let major = parse_component(major).ok_or_else(malformed)?;
        let minor = parse_component(minor).ok_or_else(malformed)?;

        if minor > MAX_MINOR {
            return Err(ParseVersionError::MinorOutOfRange { minor });
        }

        Ok(Self::new(major, minor))
    }
}

fn parse_component(part: &str) -> Option<u32> {
    if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    part.parse().ok()
}
