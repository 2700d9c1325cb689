//! Configuration management
//!
//! Handles loading of itinera configuration from an optional settings
//! file and environment variables.

pub mod loader;
pub mod schema;
pub mod validate;

pub use loader::ConfigLoader;
pub use schema::*;
