//! Per-session selection state and resolution.
//!
//! [`SelectionStore`] carries one user's choices through a session as an
//! explicit, passed-by-reference object; [`resolve`] turns the current
//! state into the ordered, de-duplicated list of exportable items.

#![deny(unsafe_code)]

mod error;
mod resolver;
mod store;

pub use error::{Result, SessionError};
pub use resolver::resolve;
pub use store::{SelectionStore, ToggleOutcome};
