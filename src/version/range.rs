//! Upgrade range enumeration
//!
//! An upgrade range is every version from `from` to `to` inclusive, each one
//! the [`Version::next`] of the previous, so migrations can be applied one
//! step at a time.

use tracing::debug;

use crate::version::error::RangeError;
use crate::version::order::{VersionOrder, compare_versions};
use crate::version::types::{MAX_MINOR, Version};

/// Number of versions within a single major release
const MINORS_PER_MAJOR: u64 = MAX_MINOR as u64 + 1;

/// Position of a version on the `next` chain starting at `0.0`.
///
/// Versions with `minor > MAX_MINOR` are not on the chain.
fn ordinal(version: Version) -> Option<u64> {
    if version.minor > MAX_MINOR {
        return None;
    }
    Some(u64::from(version.major) * MINORS_PER_MAJOR + u64::from(version.minor))
}

/// Number of `next` steps needed to walk from `from` to `to`.
///
/// Returns `None` when `to` comes before `from` or can never be reached.
pub fn steps_between(from: Version, to: Version) -> Option<u64> {
    if from == to {
        return Some(0);
    }
    let target = ordinal(to)?;
    let (start, offset) = match ordinal(from) {
        Some(start) => (start, 0),
        // Off-chain versions rejoin it at the next major.
        None => ((u64::from(from.major) + 1) * MINORS_PER_MAJOR, 1),
    };
    target.checked_sub(start).map(|steps| steps + offset)
}

/// Every version from `from` to `to`, both inclusive.
///
/// Fails with [`RangeError::InvalidRange`] unless `from` is strictly before `to`.
pub fn upgrade_range(from: Version, to: Version) -> Result<Vec<Version>, RangeError> {
    collect_range(from, to, None)
}

/// Same as [`upgrade_range`], but refuses ranges holding more than `max_len` versions.
pub fn upgrade_range_with_limit(
    from: Version,
    to: Version,
    max_len: u64,
) -> Result<Vec<Version>, RangeError> {
    collect_range(from, to, Some(max_len))
}

fn collect_range(
    from: Version,
    to: Version,
    max_len: Option<u64>,
) -> Result<Vec<Version>, RangeError> {
    if compare_versions(from, to) != VersionOrder::Before {
        debug!("Rejecting upgrade range {} -> {}", from, to);
        return Err(RangeError::InvalidRange { from, to });
    }

    let Some(steps) = steps_between(from, to) else {
        debug!("Rejecting upgrade range {} -> {}: target unreachable", from, to);
        return Err(RangeError::Unreachable { from, to });
    };
    let len = steps + 1;
    if let Some(max) = max_len.filter(|&max| len > max) {
        debug!(
            "Rejecting upgrade range {} -> {}: {} versions exceeds {}",
            from, to, len, max
        );
        return Err(RangeError::TooLarge { len, max });
    }
    let Ok(capacity) = usize::try_from(len) else {
        let max = usize::MAX as u64;
        debug!(
            "Rejecting upgrade range {} -> {}: {} versions exceeds {}",
            from, to, len, max
        );
        return Err(RangeError::TooLarge { len, max });
    };

    debug!("Enumerating upgrade range {} -> {} ({} versions)", from, to, len);

    // Step only between elements so `to` itself is never advanced.
    let mut versions = Vec::with_capacity(capacity);
    let mut current = from;
    versions.push(current);
    while versions.len() < capacity {
        current = current.next();
        versions.push(current);
    }
    debug_assert_eq!(versions.last(), Some(&to));

    Ok(versions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::with_captured_logs;
    use rstest::rstest;

    fn v(major: u32, minor: u32) -> Version {
        Version::new(major, minor)
    }

    #[rstest]
    #[case(v(3, 12), v(3, 10))] // descending
    #[case(v(3, 12), v(3, 12))] // empty
    #[case(v(4, 0), v(3, 43))]
    fn upgrade_range_rejects_non_ascending_bounds(#[case] from: Version, #[case] to: Version) {
        assert_eq!(
            upgrade_range(from, to),
            Err(RangeError::InvalidRange { from, to })
        );
    }

    #[rstest]
    #[case(v(3, 12), v(3, 13), vec![v(3, 12), v(3, 13)])]
    #[case(v(3, 12), v(3, 16), vec![v(3, 12), v(3, 13), v(3, 14), v(3, 15), v(3, 16)])]
    #[case(v(3, 42), v(4, 2), vec![v(3, 42), v(3, 43), v(4, 0), v(4, 1), v(4, 2)])]
    #[case(v(0, 0), v(0, 1), vec![v(0, 0), v(0, 1)])]
    fn upgrade_range_enumerates_every_step(
        #[case] from: Version,
        #[case] to: Version,
        #[case] expected: Vec<Version>,
    ) {
        assert_eq!(upgrade_range(from, to).unwrap(), expected);
    }

    #[test]
    fn upgrade_range_spans_multiple_majors() {
        let versions = upgrade_range(v(1, 40), v(3, 2)).unwrap();

        assert_eq!(versions.len(), 4 + 44 + 3);
        assert_eq!(versions.first(), Some(&v(1, 40)));
        assert_eq!(versions.last(), Some(&v(3, 2)));
        for pair in versions.windows(2) {
            assert_eq!(pair[0].next(), pair[1]);
        }
    }

    #[rstest]
    #[case(v(u32::MAX, 42), v(u32::MAX, 43), vec![v(u32::MAX, 42), v(u32::MAX, 43)])]
    #[case(v(u32::MAX - 1, 43), v(u32::MAX, 0), vec![v(u32::MAX - 1, 43), v(u32::MAX, 0)])]
    fn upgrade_range_ends_at_top_major(
        #[case] from: Version,
        #[case] to: Version,
        #[case] expected: Vec<Version>,
    ) {
        assert_eq!(upgrade_range_with_limit(from, to, 10).unwrap(), expected);
    }

    #[test]
    fn upgrade_range_rejects_targets_off_the_chain() {
        let from = v(3, 0);
        let to = v(3, 50);

        assert_eq!(
            upgrade_range(from, to),
            Err(RangeError::Unreachable { from, to })
        );
    }

    #[test]
    fn upgrade_range_starts_from_off_chain_version() {
        assert_eq!(
            upgrade_range(v(3, 50), v(4, 1)).unwrap(),
            vec![v(3, 50), v(4, 0), v(4, 1)]
        );
    }

    #[rstest]
    #[case(v(3, 12), v(3, 16), 5, Ok(5))]
    #[case(v(3, 12), v(3, 16), 4, Err(RangeError::TooLarge { len: 5, max: 4 }))]
    #[case(v(0, 0), v(1000, 0), 100, Err(RangeError::TooLarge { len: 44_001, max: 100 }))]
    fn upgrade_range_with_limit_caps_length(
        #[case] from: Version,
        #[case] to: Version,
        #[case] max_len: u64,
        #[case] expected: Result<usize, RangeError>,
    ) {
        assert_eq!(
            upgrade_range_with_limit(from, to, max_len).map(|versions| versions.len()),
            expected
        );
    }

    #[test]
    fn upgrade_range_with_limit_still_rejects_invalid_bounds() {
        let from = v(3, 12);
        let to = v(3, 10);

        assert_eq!(
            upgrade_range_with_limit(from, to, 0),
            Err(RangeError::InvalidRange { from, to })
        );
    }

    #[rstest]
    #[case(v(3, 12), v(3, 10), None, "3.12 -> 3.10")]
    #[case(v(3, 0), v(3, 50), None, "3.0 -> 3.50: target unreachable")]
    #[case(v(3, 0), v(3, 10), Some(3), "3.0 -> 3.10: 11 versions exceeds 3")]
    fn rejected_ranges_are_logged(
        #[case] from: Version,
        #[case] to: Version,
        #[case] max_len: Option<u64>,
        #[case] expected: &str,
    ) {
        let (result, logs) =
            with_captured_logs(tracing::Level::DEBUG, || collect_range(from, to, max_len));

        assert!(result.is_err());
        assert!(logs.contains("DEBUG"), "{}", logs);
        assert!(
            logs.contains(&format!("Rejecting upgrade range {}", expected)),
            "{}",
            logs
        );
    }

    #[rstest]
    #[case(v(3, 12), v(3, 12), Some(0))]
    #[case(v(3, 12), v(3, 16), Some(4))]
    #[case(v(3, 42), v(4, 2), Some(4))]
    #[case(v(3, 16), v(3, 12), None)]
    #[case(v(3, 0), v(3, 44), None)]
    #[case(v(3, 44), v(4, 0), Some(1))]
    #[case(v(3, 44), v(3, 43), None)]
    fn steps_between_counts_next_applications(
        #[case] from: Version,
        #[case] to: Version,
        #[case] expected: Option<u64>,
    ) {
        assert_eq!(steps_between(from, to), expected);
    }
}
