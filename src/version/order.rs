//! Ordering between versions

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::version::types::Version;

/// Position of the left version relative to the right one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VersionOrder {
    Before,
    Equal,
    After,
}

impl VersionOrder {
    /// Returns the string representation of the order
    pub fn as_str(&self) -> &'static str {
        match self {
            VersionOrder::Before => "before",
            VersionOrder::Equal => "equal",
            VersionOrder::After => "after",
        }
    }
}

impl From<Ordering> for VersionOrder {
    fn from(ordering: Ordering) -> Self {
        match ordering {
            Ordering::Less => VersionOrder::Before,
            Ordering::Equal => VersionOrder::Equal,
            Ordering::Greater => VersionOrder::After,
        }
    }
}

impl fmt::Display for VersionOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Compare two versions by major, then minor.
pub fn compare_versions(a: Version, b: Version) -> VersionOrder {
    a.cmp(&b).into()
}
