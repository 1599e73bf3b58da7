// SessionManager - browser-session bearer tokens
//
// Expiry is absolute (creation + TTL) and never renewed on use. Expired
// records are pruned lazily: the first validation after expiry deletes the
// record as a side effect. There is no background sweep. The read-then-delete
// runs without a transaction; the bounded staleness window against a
// concurrent revoke is accepted (bearer credentials already carry a
// possession-equals-access risk).

use std::sync::Arc;

use chrono::Utc;
use tracing::debug;
use uuid::Uuid;

use crate::error::Result;
use crate::records::SessionRecord;
use crate::token::generate_session_token;
use crate::traits::SessionStore;

/// Issues, validates, and revokes session tokens
#[derive(Clone)]
pub struct SessionManager {
    store: Arc<dyn SessionStore>,
    ttl: chrono::Duration,
}

impl SessionManager {
    pub fn new(store: Arc<dyn SessionStore>, ttl: chrono::Duration) -> Self {
        Self { store, ttl }
    }

    /// Start a new session for the user; returns the persisted record
    pub async fn create_session(&self, user_id: Uuid) -> Result<SessionRecord> {
        let record = SessionRecord {
            token: generate_session_token(),
            user_id,
            expires_at: Utc::now() + self.ttl,
        };
        self.store.create_session(record.clone()).await?;
        Ok(record)
    }

    /// Resolve a token to its owning user.
    ///
    /// Unknown and expired tokens both come back as None; an expired record
    /// is deleted here, which is the only place expired sessions are pruned.
    pub async fn validate(&self, token: &str) -> Result<Option<Uuid>> {
        match self.store.find_session(token).await? {
            None => Ok(None),
            Some(session) if session.expires_at <= Utc::now() => {
                debug!(user_id = %session.user_id, "pruning expired session");
                self.store.delete_session(token).await?;
                Ok(None)
            }
            Some(session) => Ok(Some(session.user_id)),
        }
    }

    /// Delete a session if present; revoking an unknown token is not an error
    pub async fn revoke(&self, token: &str) -> Result<()> {
        self.store.delete_session(token).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::InMemoryAuthStore;
    use chrono::Duration;

    fn manager_with_store() -> (SessionManager, Arc<InMemoryAuthStore>) {
        let store = Arc::new(InMemoryAuthStore::new());
        let manager = SessionManager::new(store.clone(), Duration::days(90));
        (manager, store)
    }

    #[tokio::test]
    async fn test_create_then_validate() {
        let (manager, _) = manager_with_store();
        let user = Uuid::now_v7();

        let session = manager.create_session(user).await.unwrap();
        assert!(session.expires_at > Utc::now());

        assert_eq!(manager.validate(&session.token).await.unwrap(), Some(user));
    }

    #[tokio::test]
    async fn test_validate_unknown_token() {
        let (manager, _) = manager_with_store();
        assert_eq!(manager.validate("no-such-token").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_expired_session_is_pruned_lazily() {
        let (manager, store) = manager_with_store();
        let user = Uuid::now_v7();

        // A record whose expiry has already passed, as if the wall clock
        // advanced past it
        let token = generate_session_token();
        store
            .seed_session(SessionRecord {
                token: token.clone(),
                user_id: user,
                expires_at: Utc::now() - Duration::hours(1),
            })
            .await;

        assert_eq!(manager.validate(&token).await.unwrap(), None);
        // The record is gone for every subsequent call, not just reported invalid
        assert_eq!(store.session_count().await, 0);
        assert_eq!(manager.validate(&token).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_validate_does_not_extend_expiry() {
        let (manager, store) = manager_with_store();
        let user = Uuid::now_v7();

        let session = manager.create_session(user).await.unwrap();
        manager.validate(&session.token).await.unwrap();

        let stored = store.find_session(&session.token).await.unwrap().unwrap();
        assert_eq!(stored.expires_at, session.expires_at);
    }

    #[tokio::test]
    async fn test_revoke_is_idempotent() {
        let (manager, _) = manager_with_store();
        let session = manager.create_session(Uuid::now_v7()).await.unwrap();

        manager.revoke(&session.token).await.unwrap();
        assert_eq!(manager.validate(&session.token).await.unwrap(), None);

        // Revoking again (or revoking something that never existed) is fine
        manager.revoke(&session.token).await.unwrap();
        manager.revoke("never-existed").await.unwrap();
    }
}
