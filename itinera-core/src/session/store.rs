//! Session data structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A conversation session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    /// Session id (uuid v4)
    pub id: String,
    /// Application namespace the session belongs to
    pub app_name: String,
    /// User the session belongs to
    pub user_id: String,
    /// Messages exchanged so far
    pub messages: Vec<StoredMessage>,
    /// Session creation time
    pub created_at: DateTime<Utc>,
    /// Last update time
    pub updated_at: DateTime<Utc>,
}

impl Session {
    /// Create a new session with a fresh id
    pub fn new(app_name: impl Into<String>, user_id: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            app_name: app_name.into(),
            user_id: user_id.into(),
            messages: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Append a message to the session history
    pub fn add_message(&mut self, role: impl Into<String>, text: impl Into<String>) {
        self.messages.push(StoredMessage {
            role: role.into(),
            text: text.into(),
            timestamp: Utc::now(),
        });
        self.updated_at = Utc::now();
    }
}

/// A message stored in a session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredMessage {
    /// Message role ("user" or "model")
    pub role: String,
    /// Message text
    pub text: String,
    /// Message timestamp
    pub timestamp: DateTime<Utc>,
}
