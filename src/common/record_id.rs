//! Record identifier type.

use std::fmt;
use std::str::FromStr;

/// Identifies a student record.
///
/// The identifier is the key stored in the B-tree index, and its textual form
/// names the record's data file (`42` is stored in `42.txt`).
///
/// # Example
/// ```
/// use recordindex::RecordId;
///
/// let id: RecordId = "101".parse().unwrap();
/// assert_eq!(id, RecordId::new(101));
/// assert_eq!(id.to_string(), "101");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RecordId(pub i32);

impl RecordId {
    /// Create a new RecordId.
    #[inline]
    pub fn new(id: i32) -> Self {
        RecordId(id)
    }
}

impl FromStr for RecordId {
    type Err = std::num::ParseIntError;

    /// Parses a decimal identifier, ignoring surrounding whitespace.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        s.trim().parse().map(RecordId)
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
