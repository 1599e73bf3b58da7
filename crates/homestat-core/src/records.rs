// Domain records shared by the auth components and their store backends
//
// These are DB-agnostic: the storage crate maps them to rows, the in-memory
// stores hold them directly.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A registered user
#[derive(Debug, Clone)]
pub struct UserRecord {
    pub id: Uuid,
    /// Unique; acts as the login name
    pub email: String,
    pub display_name: String,
    /// Opaque PHC-format argon2id encoding (hash + salt + parameters)
    pub password_hash: String,
}

/// A browser-session bearer token
#[derive(Debug, Clone)]
pub struct SessionRecord {
    pub token: String,
    pub user_id: Uuid,
    /// Absolute; never extended on access
    pub expires_at: DateTime<Utc>,
}

/// A long-lived programmatic bearer key
#[derive(Debug, Clone)]
pub struct ApiKeyRecord {
    pub key: String,
    pub user_id: Uuid,
    pub expires_at: DateTime<Utc>,
}

/// Telemetry collections served by the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub enum Collection {
    IndoorAir,
    Patio,
    Weather,
    WebsiteStatus,
}

impl Collection {
    pub fn as_str(&self) -> &'static str {
        match self {
            Collection::IndoorAir => "indoor_air",
            Collection::Patio => "patio",
            Collection::Weather => "weather",
            Collection::WebsiteStatus => "website_status",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "indoor_air" => Some(Collection::IndoorAir),
            "patio" => Some(Collection::Patio),
            "weather" => Some(Collection::Weather),
            "website_status" => Some(Collection::WebsiteStatus),
            _ => None,
        }
    }
}

/// One sensor reading: a flat mapping plus a timestamp
#[derive(Debug, Clone)]
pub struct ReadingRecord {
    pub collection: Collection,
    /// Unix seconds
    pub ts: f64,
    pub data: serde_json::Value,
}
