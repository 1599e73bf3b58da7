// Auth DTOs for the public API
//
// Wire names follow the dashboard's historical parameter names: `username`
// carries the email/login name, and registration sends the password twice
// (`password1`/`password2`) for confirmation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Request to create an account
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RegisterRequest {
    /// Email address; acts as the login name
    pub username: String,
    /// Display name
    pub realname: String,
    pub password1: String,
    /// Must match password1
    pub password2: String,
}

/// Request to log in
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Session credentials returned by login and registration
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SessionResponse {
    pub session_token: String,
    pub session_expiry: DateTime<Utc>,
}

/// Identity behind a live session, as reported by the status endpoint
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    /// Email address; acts as the login name
    pub username: String,
    /// Display name
    pub realname: String,
}

/// Request to end a session
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LogoutRequest {
    pub session_token: String,
}

/// Query parameters for session status checks and key listing
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SessionQuery {
    pub session_token: String,
}

/// Request to issue a new API key (session-gated)
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateApiKeyRequest {
    pub session_token: String,
}

/// A freshly issued API key; the full key is returned only once
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ApiKeyResponse {
    pub api_key: String,
    pub expires_at: DateTime<Utc>,
}

/// One entry in a key listing
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ApiKeyInfo {
    pub key: String,
    pub expires_at: DateTime<Utc>,
}

/// Request to revoke an API key (session-gated)
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RevokeApiKeyRequest {
    pub session_token: String,
    pub api_key: String,
}
