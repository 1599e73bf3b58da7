// Store traits for pluggable persistence backends
//
// These traits allow the auth components to be used with different backends:
// - In-memory implementations for examples and testing
// - Postgres implementation in homestat-storage for production
//
// The contract is deliberately small: create, find-one-by-unique-field, and
// delete-by-unique-field per logical collection. Calls are independent and
// non-transactional; create reports whether the write was acknowledged by
// returning Ok.

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::Result;
use crate::records::{ApiKeyRecord, Collection, ReadingRecord, SessionRecord, UserRecord};

// ============================================================================
// UserStore - the users collection
// ============================================================================

#[async_trait]
pub trait UserStore: Send + Sync {
    /// Persist a new user. Fails if the email is already taken.
    async fn create_user(&self, user: UserRecord) -> Result<()>;

    /// Find a user by email (the unique login name)
    async fn find_user_by_email(&self, email: &str) -> Result<Option<UserRecord>>;

    /// Find a user by id
    async fn find_user(&self, id: Uuid) -> Result<Option<UserRecord>>;

    /// Overwrite an existing user record
    async fn update_user(&self, user: UserRecord) -> Result<()>;
}

// ============================================================================
// SessionStore - the sessions collection
// ============================================================================

#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Persist a new session record
    async fn create_session(&self, session: SessionRecord) -> Result<()>;

    /// Find a session by its token
    async fn find_session(&self, token: &str) -> Result<Option<SessionRecord>>;

    /// Delete a session by its token; returns whether a record existed
    async fn delete_session(&self, token: &str) -> Result<bool>;
}

// ============================================================================
// ApiKeyStore - the api_keys collection
// ============================================================================

#[async_trait]
pub trait ApiKeyStore: Send + Sync {
    /// Persist a new API key record
    async fn create_api_key(&self, key: ApiKeyRecord) -> Result<()>;

    /// Find an API key record by the key itself
    async fn find_api_key(&self, key: &str) -> Result<Option<ApiKeyRecord>>;

    /// All non-deleted keys owned by the user; no ordering guarantee
    async fn list_api_keys(&self, user_id: Uuid) -> Result<Vec<ApiKeyRecord>>;

    /// Delete an API key; returns whether a record existed
    async fn delete_api_key(&self, key: &str) -> Result<bool>;
}

// ============================================================================
// ReadingStore - telemetry collections
// ============================================================================

#[async_trait]
pub trait ReadingStore: Send + Sync {
    /// Append a sensor reading
    async fn create_reading(&self, reading: ReadingRecord) -> Result<()>;

    /// Readings for a collection with ts strictly greater than `start_ts`
    /// (pass 0.0 for everything)
    async fn list_readings(&self, collection: Collection, start_ts: f64)
        -> Result<Vec<ReadingRecord>>;
}
