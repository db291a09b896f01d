//! In-memory session storage.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use todotable_core::auth::{is_session_expired, Result, Session, SessionId, SessionRepository};
use todotable_core::user::UserId;

/// In-memory session store.
///
/// Stores sessions in a HashMap wrapped in `Arc<RwLock<_>>`.
/// Data is not persisted and will be lost when the store is dropped.
/// Expired sessions are pruned whenever a new session is created.
#[derive(Debug, Clone, Default)]
pub struct SessionStore {
    sessions: Arc<RwLock<HashMap<String, Session>>>,
}

impl SessionStore {
    /// Creates a new empty in-memory session store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionRepository for SessionStore {
    async fn create_session(&self, session: &Session) -> Result<()> {
        let now = Utc::now();
        let mut sessions = self.sessions.write().await;
        sessions.retain(|_, s| !is_session_expired(s, now));
        sessions.insert(session.id.as_str().to_string(), session.clone());
        Ok(())
    }

    async fn get_session(&self, id: &SessionId) -> Result<Option<Session>> {
        let sessions = self.sessions.read().await;
        Ok(sessions.get(id.as_str()).cloned())
    }

    async fn delete_session(&self, id: &SessionId) -> Result<()> {
        let mut sessions = self.sessions.write().await;
        sessions.remove(id.as_str());
        Ok(())
    }

    async fn delete_user_sessions(&self, user_id: &UserId) -> Result<()> {
        let mut sessions = self.sessions.write().await;
        sessions.retain(|_, s| &s.user_id != user_id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_session(id: &str, email: &str) -> Session {
        Session {
            id: SessionId::new(id.to_string()),
            user_id: UserId::from_email(email),
            created_at: Utc::now(),
            expires_at: Utc::now() + chrono::Duration::hours(24),
        }
    }

    fn create_expired_session(id: &str, email: &str) -> Session {
        Session {
            expires_at: Utc::now() - chrono::Duration::seconds(1),
            ..create_test_session(id, email)
        }
    }

    fn sid(id: &str) -> SessionId {
        SessionId::new(id.to_string())
    }

    #[tokio::test]
    async fn test_session_create_and_get() {
        let store = SessionStore::new();
        let session = create_test_session("session-1", "a@x.com");

        store.create_session(&session).await.unwrap();

        let retrieved = store.get_session(&sid("session-1")).await.unwrap().unwrap();
        assert_eq!(retrieved.id.as_str(), "session-1");
        assert_eq!(retrieved.user_id, UserId::from_email("a@x.com"));
    }

    #[tokio::test]
    async fn test_session_get_nonexistent() {
        let store = SessionStore::new();
        assert!(store.get_session(&sid("nonexistent")).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_session_delete() {
        let store = SessionStore::new();
        store
            .create_session(&create_test_session("session-1", "a@x.com"))
            .await
            .unwrap();

        store.delete_session(&sid("session-1")).await.unwrap();

        assert!(store.get_session(&sid("session-1")).await.unwrap().is_none());
        // Deleting again is fine
        assert!(store.delete_session(&sid("session-1")).await.is_ok());
    }

    #[tokio::test]
    async fn test_delete_user_sessions() {
        let store = SessionStore::new();

        store
            .create_session(&create_test_session("session-1", "a@x.com"))
            .await
            .unwrap();
        store
            .create_session(&create_test_session("session-2", "a@x.com"))
            .await
            .unwrap();
        store
            .create_session(&create_test_session("session-3", "b@x.com"))
            .await
            .unwrap();

        store
            .delete_user_sessions(&UserId::from_email("a@x.com"))
            .await
            .unwrap();

        assert!(store.get_session(&sid("session-1")).await.unwrap().is_none());
        assert!(store.get_session(&sid("session-2")).await.unwrap().is_none());
        assert!(store.get_session(&sid("session-3")).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_create_prunes_expired_sessions() {
        let store = SessionStore::new();
        store
            .create_session(&create_expired_session("stale-1", "a@x.com"))
            .await
            .unwrap();
        store
            .create_session(&create_expired_session("stale-2", "b@x.com"))
            .await
            .unwrap();

        store
            .create_session(&create_test_session("fresh", "a@x.com"))
            .await
            .unwrap();

        assert!(store.get_session(&sid("stale-1")).await.unwrap().is_none());
        assert!(store.get_session(&sid("stale-2")).await.unwrap().is_none());
        assert!(store.get_session(&sid("fresh")).await.unwrap().is_some());
        assert_eq!(store.sessions.read().await.len(), 1);
    }

    #[tokio::test]
    async fn test_clone_shares_state() {
        let store = SessionStore::new();
        let clone = store.clone();

        store
            .create_session(&create_test_session("session-1", "a@x.com"))
            .await
            .unwrap();

        assert!(clone.get_session(&sid("session-1")).await.unwrap().is_some());
    }
}
