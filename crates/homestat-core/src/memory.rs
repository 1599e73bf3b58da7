// In-memory implementations for examples and testing
//
// These implementations keep all data in memory, making them perfect for:
// - Unit and router tests that don't need a database
// - Quick prototyping

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::Result;
use crate::records::{ApiKeyRecord, Collection, ReadingRecord, SessionRecord, UserRecord};
use crate::traits::{ApiKeyStore, ReadingStore, SessionStore, UserStore};

// ============================================================================
// InMemoryAuthStore - users, sessions, and API keys in one place
// ============================================================================

/// In-memory backend for the three auth collections
///
/// Users are keyed by id with an email index; sessions and API keys are keyed
/// by their bearer value.
#[derive(Debug, Default, Clone)]
pub struct InMemoryAuthStore {
    users: Arc<RwLock<HashMap<Uuid, UserRecord>>>,
    sessions: Arc<RwLock<HashMap<String, SessionRecord>>>,
    api_keys: Arc<RwLock<HashMap<String, ApiKeyRecord>>>,
}

impl InMemoryAuthStore {
    /// Create a new in-memory auth store
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate a session record (useful for expiry tests)
    pub async fn seed_session(&self, session: SessionRecord) {
        self.sessions
            .write()
            .await
            .insert(session.token.clone(), session);
    }

    /// Pre-populate an API key record (useful for expiry tests)
    pub async fn seed_api_key(&self, key: ApiKeyRecord) {
        self.api_keys.write().await.insert(key.key.clone(), key);
    }

    /// Number of outstanding session records
    pub async fn session_count(&self) -> usize {
        self.sessions.read().await.len()
    }
}

#[async_trait]
impl UserStore for InMemoryAuthStore {
    async fn create_user(&self, user: UserRecord) -> Result<()> {
        self.users.write().await.insert(user.id, user);
        Ok(())
    }

    async fn find_user_by_email(&self, email: &str) -> Result<Option<UserRecord>> {
        Ok(self
            .users
            .read()
            .await
            .values()
            .find(|u| u.email == email)
            .cloned())
    }

    async fn find_user(&self, id: Uuid) -> Result<Option<UserRecord>> {
        Ok(self.users.read().await.get(&id).cloned())
    }

    async fn update_user(&self, user: UserRecord) -> Result<()> {
        self.users.write().await.insert(user.id, user);
        Ok(())
    }
}

#[async_trait]
impl SessionStore for InMemoryAuthStore {
    async fn create_session(&self, session: SessionRecord) -> Result<()> {
        self.sessions
            .write()
            .await
            .insert(session.token.clone(), session);
        Ok(())
    }

    async fn find_session(&self, token: &str) -> Result<Option<SessionRecord>> {
        Ok(self.sessions.read().await.get(token).cloned())
    }

    async fn delete_session(&self, token: &str) -> Result<bool> {
        Ok(self.sessions.write().await.remove(token).is_some())
    }
}

#[async_trait]
impl ApiKeyStore for InMemoryAuthStore {
    async fn create_api_key(&self, key: ApiKeyRecord) -> Result<()> {
        self.api_keys.write().await.insert(key.key.clone(), key);
        Ok(())
    }

    async fn find_api_key(&self, key: &str) -> Result<Option<ApiKeyRecord>> {
        Ok(self.api_keys.read().await.get(key).cloned())
    }

    async fn list_api_keys(&self, user_id: Uuid) -> Result<Vec<ApiKeyRecord>> {
        Ok(self
            .api_keys
            .read()
            .await
            .values()
            .filter(|k| k.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn delete_api_key(&self, key: &str) -> Result<bool> {
        Ok(self.api_keys.write().await.remove(key).is_some())
    }
}

// ============================================================================
// InMemoryReadingStore - telemetry readings in memory
// ============================================================================

/// In-memory reading store, keyed by collection
#[derive(Debug, Default, Clone)]
pub struct InMemoryReadingStore {
    readings: Arc<RwLock<HashMap<Collection, Vec<ReadingRecord>>>>,
}

impl InMemoryReadingStore {
    /// Create a new in-memory reading store
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ReadingStore for InMemoryReadingStore {
    async fn create_reading(&self, reading: ReadingRecord) -> Result<()> {
        self.readings
            .write()
            .await
            .entry(reading.collection)
            .or_default()
            .push(reading);
        Ok(())
    }

    async fn list_readings(
        &self,
        collection: Collection,
        start_ts: f64,
    ) -> Result<Vec<ReadingRecord>> {
        Ok(self
            .readings
            .read()
            .await
            .get(&collection)
            .map(|rs| {
                rs.iter()
                    .filter(|r| r.ts > start_ts)
                    .cloned()
                    .collect()
            })
            .unwrap_or_default())
    }
}
