// Database models (internal, may differ from core records)

use chrono::{DateTime, Utc};
use homestat_core::{ApiKeyRecord, SessionRecord, UserRecord};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, FromRow)]
pub struct UserRow {
    pub id: Uuid,
    pub email: String,
    pub display_name: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<UserRow> for UserRecord {
    fn from(row: UserRow) -> Self {
        UserRecord {
            id: row.id,
            email: row.email,
            display_name: row.display_name,
            password_hash: row.password_hash,
        }
    }
}

#[derive(Debug, Clone, FromRow)]
pub struct SessionRow {
    pub token: String,
    pub user_id: Uuid,
    pub expires_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl From<SessionRow> for SessionRecord {
    fn from(row: SessionRow) -> Self {
        SessionRecord {
            token: row.token,
            user_id: row.user_id,
            expires_at: row.expires_at,
        }
    }
}

#[derive(Debug, Clone, FromRow)]
pub struct ApiKeyRow {
    pub key: String,
    pub user_id: Uuid,
    pub expires_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl From<ApiKeyRow> for ApiKeyRecord {
    fn from(row: ApiKeyRow) -> Self {
        ApiKeyRecord {
            key: row.key,
            user_id: row.user_id,
            expires_at: row.expires_at,
        }
    }
}

#[derive(Debug, Clone, FromRow)]
pub struct ReadingRow {
    pub id: Uuid,
    pub collection: String,
    pub ts: f64,
    pub data: serde_json::Value,
    pub created_at: DateTime<Utc>,
}
