//! In-memory session registry

use super::store::Session;
use std::collections::HashMap;
use tokio::sync::RwLock;

/// Concurrent map of live sessions keyed by session id.
///
/// Sessions are created lazily per chat turn and never deleted; many
/// requests may create and look up sessions simultaneously as long as
/// they use distinct keys.
#[derive(Debug, Default)]
pub struct SessionRegistry {
    sessions: RwLock<HashMap<String, Session>>,
}

impl SessionRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new session for the given app/user pair
    pub async fn create(&self, app_name: &str, user_id: &str) -> Session {
        let session = Session::new(app_name, user_id);
        self.sessions
            .write()
            .await
            .insert(session.id.clone(), session.clone());
        session
    }

    /// Fetch a session by id; the app name and user id must match too
    pub async fn get(&self, app_name: &str, user_id: &str, session_id: &str) -> Option<Session> {
        self.sessions
            .read()
            .await
            .get(session_id)
            .filter(|s| s.app_name == app_name && s.user_id == user_id)
            .cloned()
    }

    /// Append one completed exchange to a session's history
    pub async fn record_turn(&self, session_id: &str, user_text: &str, model_text: &str) {
        let mut sessions = self.sessions.write().await;
        if let Some(session) = sessions.get_mut(session_id) {
            session.add_message("user", user_text);
            session.add_message("model", model_text);
        }
    }

    /// Number of live sessions
    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    /// Whether the registry holds no sessions
    pub async fn is_empty(&self) -> bool {
        self.sessions.read().await.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_create_and_get() {
        let registry = SessionRegistry::new();
        let session = registry.create("itinera", "traveler-1").await;

        let fetched = registry.get("itinera", "traveler-1", &session.id).await;
        assert_eq!(fetched.unwrap().id, session.id);
    }

    #[tokio::test]
    async fn test_get_requires_matching_owner() {
        let registry = SessionRegistry::new();
        let session = registry.create("itinera", "traveler-1").await;

        assert!(registry
            .get("itinera", "traveler-2", &session.id)
            .await
            .is_none());
        assert!(registry
            .get("other-app", "traveler-1", &session.id)
            .await
            .is_none());
    }

    #[tokio::test]
    async fn test_record_turn_appends_history() {
        let registry = SessionRegistry::new();
        let session = registry.create("itinera", "traveler-1").await;

        registry
            .record_turn(&session.id, "hello", "{\"viewType\":\"simple_response\"}")
            .await;

        let fetched = registry
            .get("itinera", "traveler-1", &session.id)
            .await
            .unwrap();
        assert_eq!(fetched.messages.len(), 2);
        assert_eq!(fetched.messages[0].role, "user");
        assert_eq!(fetched.messages[0].text, "hello");
        assert_eq!(fetched.messages[1].role, "model");
    }

    #[tokio::test]
    async fn test_concurrent_creation_stays_isolated() {
        let registry = Arc::new(SessionRegistry::new());

        let mut handles = Vec::new();
        for i in 0..8 {
            let registry = Arc::clone(&registry);
            handles.push(tokio::spawn(async move {
                let user = format!("traveler-{}", i);
                registry.create("itinera", &user).await
            }));
        }

        let mut ids = Vec::new();
        for handle in handles {
            ids.push(handle.await.unwrap().id);
        }

        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 8);
        assert_eq!(registry.len().await, 8);
    }
}
