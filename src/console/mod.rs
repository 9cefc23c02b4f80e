//! Console front end.
//!
//! - [`Session`] - The menu loop over an index and a record store
//! - [`MenuChoice`] - Menu entries and input parsing

mod menu;
mod session;

pub use menu::{ChoiceError, MenuChoice, MENU};
pub use session::Session;
