// ApiKeyManager - long-lived programmatic bearer keys
//
// Keys are deliberately oversized (256 random bytes, hex-encoded) because
// they live for years; the multi-year expiry is a safety backstop, not an
// operational lifecycle. Expired and unknown keys are reported identically,
// and expired records are pruned lazily at validation, the same policy the
// session manager applies.

use std::sync::Arc;

use chrono::Utc;
use tracing::debug;
use uuid::Uuid;

use crate::error::Result;
use crate::records::ApiKeyRecord;
use crate::token::{generate_api_key, key_fingerprint};
use crate::traits::ApiKeyStore;

/// Issues, validates, lists, and revokes API keys
#[derive(Clone)]
pub struct ApiKeyManager {
    store: Arc<dyn ApiKeyStore>,
    ttl: chrono::Duration,
}

impl ApiKeyManager {
    pub fn new(store: Arc<dyn ApiKeyStore>, ttl: chrono::Duration) -> Self {
        Self { store, ttl }
    }

    /// Issue a new key for the user; the session-holder requirement is
    /// enforced by the endpoint, not here
    pub async fn issue(&self, user_id: Uuid) -> Result<ApiKeyRecord> {
        let record = ApiKeyRecord {
            key: generate_api_key(),
            user_id,
            expires_at: Utc::now() + self.ttl,
        };
        self.store.create_api_key(record.clone()).await?;
        debug!(user_id = %user_id, key = %key_fingerprint(&record.key), "issued api key");
        Ok(record)
    }

    /// Resolve a key to its owning user; absent and expired are
    /// indistinguishable to the caller
    pub async fn validate(&self, key: &str) -> Result<Option<Uuid>> {
        match self.store.find_api_key(key).await? {
            None => Ok(None),
            Some(record) if record.expires_at <= Utc::now() => {
                debug!(key = %key_fingerprint(key), "pruning expired api key");
                self.store.delete_api_key(key).await?;
                Ok(None)
            }
            Some(record) => Ok(Some(record.user_id)),
        }
    }

    /// All outstanding keys owned by the user
    pub async fn list(&self, user_id: Uuid) -> Result<Vec<ApiKeyRecord>> {
        self.store.list_api_keys(user_id).await
    }

    /// Delete a key if present; revoking an unknown key is not an error
    pub async fn revoke(&self, key: &str) -> Result<()> {
        self.store.delete_api_key(key).await?;
        Ok(())
    }
}
