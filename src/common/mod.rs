//! Common types and utilities shared across recordindex.
//!
//! This module contains fundamental primitives used throughout the codebase:
//! - Configuration constants
//! - Error types
//! - Identifiers (RecordId)

pub mod config;
pub mod error;
mod record_id;

pub use error::{Error, Result};
pub use record_id::RecordId;
