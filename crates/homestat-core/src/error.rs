// Error types for the auth core
//
// The taxonomy is a closed set: nothing unstructured crosses this crate's
// boundary. Unknown-user and wrong-password collapse into InvalidCredentials;
// expired and unknown bearer credentials collapse into InvalidCredential.
// The distinction survives only in internal diagnostics (tracing), never in
// the returned variant, to resist account enumeration.

use thiserror::Error;

/// Result type alias for auth core operations
pub type Result<T> = std::result::Result<T, AuthError>;

/// Errors that can occur in the credential, session, and API-key lifecycle
#[derive(Debug, Error)]
pub enum AuthError {
    /// Malformed or missing registration/login input
    #[error("validation error: {0}")]
    Validation(String),

    /// A user with the given email already exists
    #[error("user already exists")]
    DuplicateUser,

    /// Login failed: unknown user or wrong password (deliberately collapsed)
    #[error("invalid credentials")]
    InvalidCredentials,

    /// Neither a session token nor an API key was presented
    #[error("missing credential")]
    MissingCredential,

    /// The presented session token or API key is unknown or expired (collapsed)
    #[error("invalid credential")]
    InvalidCredential,

    /// Store unreachable, write unacknowledged, or unexpected shape
    #[error("store error: {0}")]
    Store(String),
}

impl AuthError {
    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        AuthError::Validation(msg.into())
    }

    /// Create a store error
    pub fn store(msg: impl Into<String>) -> Self {
        AuthError::Store(msg.into())
    }
}
