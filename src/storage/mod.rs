//! Storage layer - per-record files.
//!
//! This module handles persistent storage of record payloads:
//! - [`RecordStore`] - One text file per record identifier
//! - [`StudentRecord`] - The stored attributes
//!
//! The B-tree index itself is never written to disk.

mod record;
mod record_store;

pub use record::StudentRecord;
pub use record_store::RecordStore;
