//! # User rows and their view-safe projection
//!
//! ## [`UserRow`]
//!
//! The complete database row from the `users` table. It derives [`sqlx::FromRow`] so it
//! can be loaded directly from queries:
//!
//! - `id`: primary key (`UUID v4`, generated by the application).
//! - `username`, `email`: as entered at registration. Uniqueness of the email is
//!   enforced case-insensitively by the `users_email_lower_key` index.
//! - `password_hash`: Argon2id PHC string.
//! - `created_at` / `updated_at`: audit timestamps.
//!
//! [`UserRow::into_user`] converts it into the backend-neutral [`store::User`].
//!
//! ## [`UserInfo`]
//!
//! What the dashboard shows about the logged-in user: username and email, never the
//! password hash.

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use store::User;
use uuid::Uuid;

/// Full user record from the database.
#[derive(Debug, Clone, FromRow)]
pub struct UserRow {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl UserRow {
    pub fn into_user(self) -> User {
        User {
            id: self.id,
            username: self.username,
            email: self.email,
            password_hash: self.password_hash,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// User information safe to render.
#[derive(Debug, Clone, PartialEq)]
pub struct UserInfo {
    pub username: String,
    pub email: String,
}

impl From<&User> for UserInfo {
    fn from(user: &User) -> Self {
        UserInfo {
            username: user.username.clone(),
            email: user.email.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_user_info_leaves_out_hash() {
        let user = User {
            id: Uuid::new_v4(),
            username: "alice".to_string(),
            email: "Alice@X.com".to_string(),
            password_hash: "$argon2id$hash".to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        assert_eq!(
            UserInfo::from(&user),
            UserInfo {
                username: "alice".to_string(),
                email: "Alice@X.com".to_string(),
            }
        );
    }
}
