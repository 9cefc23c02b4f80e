//! recordindex - a record-management console backed by an in-memory B-tree index.
//!
//! # Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                          recordindex                            │
//! ├─────────────────────────────────────────────────────────────────┤
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │              Console Layer (console/)                    │   │
//! │  │        Menu loop + input validation and recovery         │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                ↓ search / insert          ↓ save / load         │
//! │  ┌──────────────────────────┐  ┌──────────────────────────┐    │
//! │  │   Index Layer (index/)   │  │  Storage Layer (storage/) │    │
//! │  │  In-memory B-tree over   │  │  One text file per ID     │    │
//! │  │  record identifiers      │  │  (<id>.txt)               │    │
//! │  └──────────────────────────┘  └──────────────────────────┘    │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//! - [`common`] - Shared primitives (RecordId, Error, config)
//! - [`index`] - The B-tree index
//! - [`storage`] - Per-record file storage
//! - [`console`] - Interactive menu session
//!
//! # Quick Start
//! ```
//! use recordindex::{BTreeIndex, RecordId};
//!
//! let mut index = BTreeIndex::new(3).unwrap();
//! for id in [10, 20, 5, 6, 12, 30, 7, 17] {
//!     index.insert(RecordId::new(id));
//! }
//!
//! assert!(index.search(RecordId::new(6)));
//! assert!(!index.search(RecordId::new(99)));
//! assert_eq!(index.height(), 2);
//! println!("{}", index.display());
//! ```

pub mod common;
pub mod console;
pub mod index;
pub mod storage;

// Re-export commonly used items at crate root for convenience
pub use common::config::DEFAULT_MIN_DEGREE;
pub use common::{Error, RecordId, Result};

pub use console::Session;
pub use index::BTreeIndex;
pub use storage::{RecordStore, StudentRecord};
