// Database-backed implementations of the core store traits.
//
// Errors from sqlx are flattened into AuthError::Store with the message
// preserved for logging. The one exception is a unique violation on the
// users table, which surfaces as DuplicateUser so callers can answer 409.

use async_trait::async_trait;
use uuid::Uuid;

use homestat_core::records::Collection;
use homestat_core::traits::{ApiKeyStore, ReadingStore, SessionStore, UserStore};
use homestat_core::{ApiKeyRecord, AuthError, ReadingRecord, Result, SessionRecord, UserRecord};

use crate::repositories::Database;

const UNIQUE_VIOLATION: &str = "23505";

fn store_err(e: anyhow::Error) -> AuthError {
    AuthError::store(e.to_string())
}

fn is_unique_violation(e: &anyhow::Error) -> bool {
    e.downcast_ref::<sqlx::Error>()
        .and_then(|e| e.as_database_error())
        .and_then(|db| db.code())
        .is_some_and(|code| code == UNIQUE_VIOLATION)
}

#[async_trait]
impl UserStore for Database {
    async fn create_user(&self, user: UserRecord) -> Result<()> {
        match Database::create_user(self, &user).await {
            Ok(_) => Ok(()),
            Err(e) if is_unique_violation(&e) => Err(AuthError::DuplicateUser),
            Err(e) => Err(store_err(e)),
        }
    }

    async fn find_user_by_email(&self, email: &str) -> Result<Option<UserRecord>> {
        let row = Database::get_user_by_email(self, email)
            .await
            .map_err(store_err)?;
        Ok(row.map(Into::into))
    }

    async fn find_user(&self, id: Uuid) -> Result<Option<UserRecord>> {
        let row = Database::get_user(self, id).await.map_err(store_err)?;
        Ok(row.map(Into::into))
    }

    async fn update_user(&self, user: UserRecord) -> Result<()> {
        Database::update_user(self, &user)
            .await
            .map_err(store_err)?;
        Ok(())
    }
}

#[async_trait]
impl SessionStore for Database {
    async fn create_session(&self, session: SessionRecord) -> Result<()> {
        Database::create_session(self, &session)
            .await
            .map_err(store_err)?;
        Ok(())
    }

    async fn find_session(&self, token: &str) -> Result<Option<SessionRecord>> {
        let row = Database::get_session(self, token)
            .await
            .map_err(store_err)?;
        Ok(row.map(Into::into))
    }

    async fn delete_session(&self, token: &str) -> Result<bool> {
        Database::delete_session(self, token)
            .await
            .map_err(store_err)
    }
}

#[async_trait]
impl ApiKeyStore for Database {
    async fn create_api_key(&self, key: ApiKeyRecord) -> Result<()> {
        Database::create_api_key(self, &key)
            .await
            .map_err(store_err)?;
        Ok(())
    }

    async fn find_api_key(&self, key: &str) -> Result<Option<ApiKeyRecord>> {
        let row = Database::get_api_key(self, key).await.map_err(store_err)?;
        Ok(row.map(Into::into))
    }

    async fn list_api_keys(&self, user_id: Uuid) -> Result<Vec<ApiKeyRecord>> {
        let rows = Database::list_api_keys(self, user_id)
            .await
            .map_err(store_err)?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn delete_api_key(&self, key: &str) -> Result<bool> {
        Database::delete_api_key(self, key).await.map_err(store_err)
    }
}

#[async_trait]
impl ReadingStore for Database {
    async fn create_reading(&self, reading: ReadingRecord) -> Result<()> {
        Database::create_reading(self, reading.collection.as_str(), reading.ts, &reading.data)
            .await
            .map_err(store_err)?;
        Ok(())
    }

    async fn list_readings(
        &self,
        collection: Collection,
        start_ts: f64,
    ) -> Result<Vec<ReadingRecord>> {
        let rows = Database::list_readings(self, collection.as_str(), start_ts)
            .await
            .map_err(store_err)?;
        Ok(rows
            .into_iter()
            .map(|row| ReadingRecord {
                collection,
                ts: row.ts,
                data: row.data,
            })
            .collect())
    }
}
