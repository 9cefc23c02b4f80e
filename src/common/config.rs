//! Configuration constants for recordindex.

/// Minimum degree used by the console when none is given.
///
/// With `t = 3` every node holds at most `2t - 1 = 5` keys, so the root splits
/// on the sixth distinct insertion.
pub const DEFAULT_MIN_DEGREE: usize = 3;

/// Smallest minimum degree a B-tree can be built with.
///
/// A degree of 1 would allow nodes with zero keys and one child.
pub const MIN_DEGREE_FLOOR: usize = 2;

/// Extension of the per-record data files (`<id>.txt`).
pub const RECORD_FILE_EXTENSION: &str = "txt";

/// Maximum number of keys a node may hold for minimum degree `t`.
///
/// `t` must satisfy `2 <= t <= usize::MAX / 2`, which `BTreeIndex::new`
/// enforces.
#[inline]
pub const fn max_keys(t: usize) -> usize {
    2 * t - 1
}

/// Minimum number of keys a non-root node must hold for minimum degree `t`.
#[inline]
pub const fn min_keys(t: usize) -> usize {
    t - 1
}
