//! Base trait and boundary types for agent runners

use async_trait::async_trait;
use futures::stream::Stream;
use itinera_core::session::Session;
use serde::{Deserialize, Serialize};
use std::pin::Pin;
use thiserror::Error;

/// Error type for agent operations
#[derive(Error, Debug)]
pub enum AgentError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("API error: {0}")]
    Api(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type AgentResult<T> = Result<T, AgentError>;

pub type AgentEventStream = Pin<Box<dyn Stream<Item = AgentResult<AgentEvent>> + Send>>;

/// One message part: text, or an inline binary-data reference that is
/// forwarded to the model untouched.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Part {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inline_data: Option<serde_json::Value>,
}

impl Part {
    /// Create a text part
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            inline_data: None,
        }
    }
}

/// A role-tagged sequence of parts
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Content {
    pub role: String,
    #[serde(default)]
    pub parts: Vec<Part>,
}

impl Content {
    /// Create user content from pre-built parts
    pub fn user(parts: Vec<Part>) -> Self {
        Self {
            role: "user".to_string(),
            parts,
        }
    }

    /// Create single-text content with the given role
    pub fn text(role: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            role: role.into(),
            parts: vec![Part::text(text)],
        }
    }

    /// The text of the first part, if any
    pub fn first_text(&self) -> Option<&str> {
        self.parts.iter().find_map(|p| p.text.as_deref())
    }
}

/// One incremental event produced while the model answers a turn
#[derive(Debug, Clone)]
pub struct AgentEvent {
    /// Content carried by this event; the last event with content holds
    /// the final textual payload of the turn
    pub content: Option<Content>,
}

/// An opaque capability that runs one chat turn against a hosted model.
///
/// Implementations yield an asynchronous sequence of events terminating
/// after the final textual payload; the trait seam exists so tests can
/// substitute a deterministic fake.
#[async_trait]
pub trait AgentRunner: Send + Sync {
    /// Run one turn: the session supplies prior history, `message` is
    /// the new user message.
    async fn run(&self, session: &Session, message: Content) -> AgentResult<AgentEventStream>;
}
