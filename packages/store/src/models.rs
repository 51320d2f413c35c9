//! # Domain records for users and notes
//!
//! Defines the data structures every [`crate::UserStore`] and [`crate::NoteStore`]
//! backend reads and writes. They are plain values with no backend-specific
//! derives, so the in-memory store and the Postgres store in the `api` crate
//! can share them.
//!
//! ## Types
//!
//! | Struct | Represents |
//! |--------|-----------|
//! | [`User`] | A registered account: username, email as typed at registration, and the Argon2 PHC hash of the password. |
//! | [`NewUser`] | The insert payload for a user. The password is already hashed by the time it reaches a store. |
//! | [`Note`] | A titled text note with an owner reference to the [`User`] that created it. |
//!
//! ## Email matching
//!
//! [`email_key`] is the single place that defines how two emails compare:
//! trimmed and lower-cased. Stores use it both for the uniqueness check on
//! insert and for lookups, while the stored `email` keeps the original case.

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Identifier of a [`User`].
pub type UserId = Uuid;

/// Identifier of a [`Note`].
pub type NoteId = Uuid;

/// A registered account.
#[derive(Clone, Debug, PartialEq)]
pub struct User {
    pub id: UserId,
    pub username: String,
    /// Email as entered at registration (case preserved).
    pub email: String,
    /// Argon2id hash in PHC string format.
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Payload for inserting a user.
#[derive(Clone, Debug, PartialEq)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password_hash: String,
}

/// A text note owned by a user.
#[derive(Clone, Debug, PartialEq)]
pub struct Note {
    pub id: NoteId,
    pub title: String,
    pub content: String,
    /// The user that created the note.
    pub user_id: UserId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Note {
    /// Whether `user_id` created this note.
    pub fn is_owned_by(&self, user_id: UserId) -> bool {
        self.user_id == user_id
    }
}

/// Normalised form of an email used for uniqueness and lookups.
pub fn email_key(email: &str) -> String {
    email.trim().to_lowercase()
}
