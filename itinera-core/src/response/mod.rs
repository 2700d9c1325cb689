//! Structured responses for the front-end view dispatch
//!
//! The model is instructed to answer every turn with a single JSON
//! object selecting one of the UI view types. This module holds the
//! typed contract and the normalizer that turns the model's raw text
//! into a well-formed response, falling back to a fixed error payload
//! when the text cannot be trusted.

pub mod normalize;
pub mod types;

pub use normalize::{fallback_response, normalize, strip_code_fence};
pub use types::{StructuredResponse, ViewType};
