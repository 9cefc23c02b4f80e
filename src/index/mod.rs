//! Index structures.
//!
//! - [`btree`] - In-memory B-tree keyed on record identifiers

pub mod btree;

pub use btree::{BTreeIndex, Node};
