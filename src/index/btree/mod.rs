//! B-tree index implementation.
//!
//! # Components
//! - [`BTreeIndex`] - The tree: insert, search, structural inspection
//! - [`Node`] - A single node holding keys and owned children
//!
//! The diagnostic `Display` rendering lives in `display.rs`.

mod display;
mod node;
mod tree;

pub use node::Node;
pub use tree::BTreeIndex;
