// AuthGate - the single authorization decision for protected endpoints
//
// Every protected handler calls authenticate_request before doing anything
// else. Precedence and error classification are defined here and nowhere
// else, which is what guarantees endpoints behave identically.

use tracing::debug;
use uuid::Uuid;

use crate::api_keys::ApiKeyManager;
use crate::error::{AuthError, Result};
use crate::sessions::SessionManager;

/// Credentials extracted from request parameters at the boundary
#[derive(Debug, Clone, Default)]
pub struct RequestCredentials {
    pub session_token: Option<String>,
    pub api_key: Option<String>,
}

impl RequestCredentials {
    pub fn session(token: impl Into<String>) -> Self {
        Self {
            session_token: Some(token.into()),
            api_key: None,
        }
    }

    pub fn api_key(key: impl Into<String>) -> Self {
        Self {
            session_token: None,
            api_key: Some(key.into()),
        }
    }
}

/// Dispatches to the session or API-key manager depending on which
/// credential the caller supplied
#[derive(Clone)]
pub struct AuthGate {
    sessions: SessionManager,
    api_keys: ApiKeyManager,
}

impl AuthGate {
    pub fn new(sessions: SessionManager, api_keys: ApiKeyManager) -> Self {
        Self { sessions, api_keys }
    }

    /// Resolve the caller to a user identity.
    ///
    /// An API key takes precedence over a session token when both are
    /// supplied. Validation is a pure decision against current store state;
    /// nothing here retries.
    pub async fn authenticate_request(&self, credentials: &RequestCredentials) -> Result<Uuid> {
        if let Some(key) = credentials.api_key.as_deref() {
            return match self.api_keys.validate(key).await? {
                Some(user_id) => Ok(user_id),
                None => {
                    debug!("request presented an unknown or expired api key");
                    Err(AuthError::InvalidCredential)
                }
            };
        }

        if let Some(token) = credentials.session_token.as_deref() {
            return match self.sessions.validate(token).await? {
                Some(user_id) => Ok(user_id),
                None => {
                    debug!("request presented an unknown or expired session token");
                    Err(AuthError::InvalidCredential)
                }
            };
        }

        Err(AuthError::MissingCredential)
    }
}
