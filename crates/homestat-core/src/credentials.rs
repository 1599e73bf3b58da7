// CredentialStore - user identity and password verification
//
// Registration hashes the password with argon2id and a fresh salt before any
// write; the plaintext never reaches the store or the logs. Authentication
// collapses unknown-user and wrong-password externally (the difference is
// visible only in debug-level diagnostics).

use std::sync::Arc;

use tracing::debug;
use uuid::Uuid;

use crate::config::AuthConfig;
use crate::error::{AuthError, Result};
use crate::password::{hash_password, verify_password};
use crate::records::UserRecord;
use crate::traits::UserStore;
use crate::validate::{acceptable_password, valid_display_name, valid_email};

/// Owns user identity and password verification
#[derive(Clone)]
pub struct CredentialStore {
    users: Arc<dyn UserStore>,
    config: AuthConfig,
}

impl CredentialStore {
    pub fn new(users: Arc<dyn UserStore>, config: AuthConfig) -> Self {
        Self { users, config }
    }

    /// Register a new user and return its id.
    ///
    /// Input is validated before any store mutation; the duplicate check runs
    /// against the store's unique email field.
    pub async fn register(
        &self,
        email: &str,
        display_name: &str,
        password: &str,
    ) -> Result<Uuid> {
        if !valid_email(email) {
            return Err(AuthError::validation("invalid email address"));
        }
        if !valid_display_name(display_name) {
            return Err(AuthError::validation("display name must not be empty"));
        }
        if !acceptable_password(password, self.config.min_password_len) {
            return Err(AuthError::validation(format!(
                "password must be at least {} characters",
                self.config.min_password_len
            )));
        }

        if self.users.find_user_by_email(email).await?.is_some() {
            return Err(AuthError::DuplicateUser);
        }

        let id = Uuid::now_v7();
        let user = UserRecord {
            id,
            email: email.to_string(),
            display_name: display_name.trim().to_string(),
            password_hash: hash_password(password)?,
        };
        self.users.create_user(user).await?;

        Ok(id)
    }

    /// Check a password against the stored hash.
    ///
    /// Returns false for unknown users and wrong passwords alike. Never
    /// succeeds for an empty or whitespace-only password.
    pub async fn authenticate(&self, email: &str, password: &str) -> Result<bool> {
        if password.trim().is_empty() {
            return Ok(false);
        }

        match self.users.find_user_by_email(email).await? {
            Some(user) => Ok(verify_password(password, &user.password_hash)),
            None => {
                // Internally distinguished, externally collapsed
                debug!(email, "authentication attempt for unknown user");
                Ok(false)
            }
        }
    }

    /// Resolve the user id for a login name
    pub async fn user_id(&self, email: &str) -> Result<Option<Uuid>> {
        Ok(self.users.find_user_by_email(email).await?.map(|u| u.id))
    }

    /// Look up a user by id (for profile display)
    pub async fn find_user(&self, id: Uuid) -> Result<Option<UserRecord>> {
        self.users.find_user(id).await
    }

    /// Update display name and/or password for an existing user.
    ///
    /// A password change re-validates and re-hashes with a fresh salt.
    pub async fn update_profile(
        &self,
        user_id: Uuid,
        display_name: Option<&str>,
        password: Option<&str>,
    ) -> Result<()> {
        let mut user = self
            .users
            .find_user(user_id)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        if let Some(name) = display_name {
            if !valid_display_name(name) {
                return Err(AuthError::validation("display name must not be empty"));
            }
            user.display_name = name.trim().to_string();
        }

        if let Some(password) = password {
            if !acceptable_password(password, self.config.min_password_len) {
                return Err(AuthError::validation(format!(
                    "password must be at least {} characters",
                    self.config.min_password_len
                )));
            }
            user.password_hash = hash_password(password)?;
        }

        self.users.update_user(user).await
    }
}
