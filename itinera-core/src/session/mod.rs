//! Session management for conversation history
//!
//! Sessions live in memory for the lifetime of the process; there is no
//! persistence guarantee and a restart loses all conversation state.

pub mod registry;
pub mod store;

pub use registry::SessionRegistry;
pub use store::{Session, StoredMessage};
