//! Model-provider client for itinera
//!
//! This crate provides the agent-runner trait the chat gateway drives,
//! the event and content types on its boundary, the Gemini HTTP client,
//! and the system-instruction builder.

pub mod base;
pub mod gemini;
pub mod prompt;

pub use base::{
    AgentError, AgentEvent, AgentEventStream, AgentResult, AgentRunner, Content, Part,
};
pub use gemini::GeminiClient;
