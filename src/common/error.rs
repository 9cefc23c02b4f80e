//! Error types for recordindex.

use thiserror::Error;

use super::RecordId;

/// Convenient Result type alias.
///
/// Instead of writing `Result<T, Error>` everywhere, we can write `Result<T>`.
pub type Result<T> = std::result::Result<T, Error>;

/// All possible errors in recordindex.
///
/// The tree itself only fails at construction. Everything else comes from the
/// record store or from [`BTreeIndex::validate`](crate::index::BTreeIndex::validate).
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error from record file operations.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The requested minimum degree is below 2.
    #[error("Invalid minimum degree {0}: must be at least 2")]
    InvalidMinDegree(usize),

    /// The record is indexed but its data file does not exist.
    #[error("Record {0} not found in store")]
    RecordNotFound(RecordId),

    /// The record file exists but cannot be parsed.
    #[error("Malformed record {id}: {reason}")]
    MalformedRecord { id: RecordId, reason: String },

    /// A structural B-tree invariant does not hold.
    ///
    /// This indicates a bug in the insertion code.
    #[error("B-tree invariant violated: {0}")]
    InvariantViolation(String),
}
