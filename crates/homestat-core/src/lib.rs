// Auth core for the Homestat dashboard
//
// This crate owns the credential and session/API-key lifecycle:
// account creation with irreversible password hashing, unguessable bearer
// credentials, lazy (access-triggered) expiry, and one consistent
// authorization decision for every protected endpoint.
//
// Key design decisions:
// - Store access goes through traits (UserStore, SessionStore, ApiKeyStore,
//   ReadingStore) so production uses Postgres while tests run in memory
// - The store is the single source of truth: no in-process caching, every
//   call re-reads it, so the serving layer scales without session affinity
// - Unknown/wrong-password and unknown/expired collapse externally; the
//   distinction survives only in tracing diagnostics
// - AuthGate is the sole definition of credential precedence

pub mod api_keys;
pub mod config;
pub mod credentials;
pub mod error;
pub mod gate;
pub mod password;
pub mod records;
pub mod sessions;
pub mod token;
pub mod traits;
pub mod validate;

// In-memory implementations for examples and testing
pub mod memory;

// Re-exports for convenience
pub use api_keys::ApiKeyManager;
pub use config::AuthConfig;
pub use credentials::CredentialStore;
pub use error::{AuthError, Result};
pub use gate::{AuthGate, RequestCredentials};
pub use records::{ApiKeyRecord, Collection, ReadingRecord, SessionRecord, UserRecord};
pub use sessions::SessionManager;
pub use traits::{ApiKeyStore, ReadingStore, SessionStore, UserStore};
