//! # Credential store: registration and password checks
//!
//! [`Credentials`] sits on top of a [`UserStore`] backend and adds what a raw store
//! does not know about: required-field validation, Argon2 hashing of the plaintext
//! password, and verification at login.
//!
//! Email uniqueness is left entirely to the backend. `create` does not look the
//! email up before inserting; a concurrent registration with the same address is
//! rejected by the store's own constraint and surfaces as
//! [`AppError::DuplicateEmail`].

use std::sync::Arc;

use store::{NewUser, User, UserId, UserStore};

use crate::auth::PasswordHasher;
use crate::error::AppError;

/// User accounts with hashed passwords.
#[derive(Clone)]
pub struct Credentials {
    users: Arc<dyn UserStore>,
    hasher: PasswordHasher,
}

impl Credentials {
    pub fn new(users: Arc<dyn UserStore>, hasher: PasswordHasher) -> Self {
        Self { users, hasher }
    }

    /// Register a user. Username and email are stored as given.
    pub async fn create(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<User, AppError> {
        if username.is_empty() || email.is_empty() || password.is_empty() {
            return Err(AppError::Validation(
                "Registration failed. Username, email and password are required.".to_string(),
            ));
        }

        // Hashing is CPU-bound.
        let hasher = self.hasher.clone();
        let plaintext = password.to_string();
        let password_hash = tokio::task::spawn_blocking(move || hasher.hash(&plaintext))
            .await
            .map_err(|e| AppError::Store(e.to_string()))?
            .map_err(AppError::Store)?;

        let user = self
            .users
            .insert(NewUser {
                username: username.to_string(),
                email: email.to_string(),
                password_hash,
            })
            .await?;

        Ok(user)
    }

    /// Case-insensitive lookup by email.
    pub async fn find_by_email(&self, email: &str) -> Result<User, AppError> {
        self.users
            .find_by_email(&email.to_lowercase())
            .await?
            .ok_or_else(|| AppError::NotFound("❌ No user found".to_string()))
    }

    pub async fn find_by_id(&self, id: UserId) -> Result<User, AppError> {
        self.users
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("❌ No user found".to_string()))
    }

    /// Check `candidate` against a stored hash. A malformed hash never matches.
    pub async fn verify_password(&self, candidate: &str, stored_hash: &str) -> bool {
        let hasher = self.hasher.clone();
        let candidate = candidate.to_string();
        let stored_hash = stored_hash.to_string();

        let outcome =
            tokio::task::spawn_blocking(move || hasher.verify(&candidate, &stored_hash)).await;

        match outcome {
            Ok(Ok(valid)) => valid,
            Ok(Err(e)) => {
                tracing::warn!("Password check failed: {}", e);
                false
            }
            Err(e) => {
                tracing::error!("Password check task failed: {}", e);
                false
            }
        }
    }
}
