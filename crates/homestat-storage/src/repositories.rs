// Repository layer for database operations

use anyhow::Result;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::*;
use homestat_core::{ApiKeyRecord, SessionRecord, UserRecord};

#[derive(Clone)]
pub struct Database {
    pool: PgPool,
}

impl Database {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create database connection from URL
    pub async fn from_url(database_url: &str) -> Result<Self> {
        let pool = PgPool::connect(database_url).await?;
        Ok(Self { pool })
    }

    /// Apply pending migrations
    pub async fn migrate(&self) -> Result<()> {
        sqlx::migrate!("./migrations").run(&self.pool).await?;
        Ok(())
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    // ============================================
    // Users
    // ============================================

    pub async fn create_user(&self, user: &UserRecord) -> Result<UserRow> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            INSERT INTO users (id, email, display_name, password_hash)
            VALUES ($1, $2, $3, $4)
            RETURNING id, email, display_name, password_hash, created_at, updated_at
            "#,
        )
        .bind(user.id)
        .bind(&user.email)
        .bind(&user.display_name)
        .bind(&user.password_hash)
        .fetch_one(&self.pool)
        .await?;

        Ok(row)
    }

    pub async fn get_user_by_email(&self, email: &str) -> Result<Option<UserRow>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, email, display_name, password_hash, created_at, updated_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    pub async fn get_user(&self, id: Uuid) -> Result<Option<UserRow>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, email, display_name, password_hash, created_at, updated_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    pub async fn update_user(&self, user: &UserRecord) -> Result<Option<UserRow>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            UPDATE users
            SET
                display_name = $2,
                password_hash = $3,
                updated_at = NOW()
            WHERE id = $1
            RETURNING id, email, display_name, password_hash, created_at, updated_at
            "#,
        )
        .bind(user.id)
        .bind(&user.display_name)
        .bind(&user.password_hash)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    // ============================================
    // Sessions
    // ============================================

    pub async fn create_session(&self, session: &SessionRecord) -> Result<SessionRow> {
        let row = sqlx::query_as::<_, SessionRow>(
            r#"
            INSERT INTO sessions (token, user_id, expires_at)
            VALUES ($1, $2, $3)
            RETURNING token, user_id, expires_at, created_at
            "#,
        )
        .bind(&session.token)
        .bind(session.user_id)
        .bind(session.expires_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(row)
    }

    pub async fn get_session(&self, token: &str) -> Result<Option<SessionRow>> {
        let row = sqlx::query_as::<_, SessionRow>(
            r#"
            SELECT token, user_id, expires_at, created_at
            FROM sessions
            WHERE token = $1
            "#,
        )
        .bind(token)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    pub async fn delete_session(&self, token: &str) -> Result<bool> {
        let result = sqlx::query("DELETE FROM sessions WHERE token = $1")
            .bind(token)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    // ============================================
    // API keys
    // ============================================

    pub async fn create_api_key(&self, key: &ApiKeyRecord) -> Result<ApiKeyRow> {
        let row = sqlx::query_as::<_, ApiKeyRow>(
            r#"
            INSERT INTO api_keys (key, user_id, expires_at)
            VALUES ($1, $2, $3)
            RETURNING key, user_id, expires_at, created_at
            "#,
        )
        .bind(&key.key)
        .bind(key.user_id)
        .bind(key.expires_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(row)
    }

    pub async fn get_api_key(&self, key: &str) -> Result<Option<ApiKeyRow>> {
        let row = sqlx::query_as::<_, ApiKeyRow>(
            r#"
            SELECT key, user_id, expires_at, created_at
            FROM api_keys
            WHERE key = $1
            "#,
        )
        .bind(key)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    pub async fn list_api_keys(&self, user_id: Uuid) -> Result<Vec<ApiKeyRow>> {
        let rows = sqlx::query_as::<_, ApiKeyRow>(
            r#"
            SELECT key, user_id, expires_at, created_at
            FROM api_keys
            WHERE user_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    pub async fn delete_api_key(&self, key: &str) -> Result<bool> {
        let result = sqlx::query("DELETE FROM api_keys WHERE key = $1")
            .bind(key)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    // ============================================
    // Readings
    // ============================================

    pub async fn create_reading(
        &self,
        collection: &str,
        ts: f64,
        data: &serde_json::Value,
    ) -> Result<ReadingRow> {
        let row = sqlx::query_as::<_, ReadingRow>(
            r#"
            INSERT INTO readings (collection, ts, data)
            VALUES ($1, $2, $3)
            RETURNING id, collection, ts, data, created_at
            "#,
        )
        .bind(collection)
        .bind(ts)
        .bind(data)
        .fetch_one(&self.pool)
        .await?;

        Ok(row)
    }

    pub async fn list_readings(&self, collection: &str, start_ts: f64) -> Result<Vec<ReadingRow>> {
        let rows = sqlx::query_as::<_, ReadingRow>(
            r#"
            SELECT id, collection, ts, data, created_at
            FROM readings
            WHERE collection = $1 AND ts > $2
            ORDER BY ts ASC
            "#,
        )
        .bind(collection)
        .bind(start_ts)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }
}
