//! # Store traits: the persistence boundary
//!
//! Every handler in the `api` crate talks to persistence through the two traits
//! defined here, so the same logic runs against the in-memory store
//! ([`crate::MemoryStore`], used by tests) and the Postgres stores in
//! `api::db`.
//!
//! ## [`UserStore`]
//!
//! | Method | Contract |
//! |--------|----------|
//! | [`insert`](UserStore::insert) | Persists a user. Fails with [`StoreError::DuplicateEmail`] when another user has the same [`email_key`](crate::models::email_key). The check must be atomic with the insert. |
//! | [`find_by_email`](UserStore::find_by_email) | Case-insensitive lookup. |
//! | [`find_by_id`](UserStore::find_by_id) | Lookup by id. |
//!
//! ## [`NoteStore`]
//!
//! | Method | Contract |
//! |--------|----------|
//! | [`create`](NoteStore::create) | Persists a note for an owner. |
//! | [`find_by_owner`](NoteStore::find_by_owner) | All notes of an owner, oldest first. |
//! | [`find_by_id`](NoteStore::find_by_id) | Lookup by id, regardless of owner. |
//! | [`update`](NoteStore::update) | Replaces title and content. [`StoreError::NotFound`] when the id is unknown. |
//! | [`delete`](NoteStore::delete) | Removes a note. Unknown ids are not an error. |

use async_trait::async_trait;

use crate::error::StoreError;
use crate::models::{NewUser, Note, NoteId, User, UserId};

/// Persistence for user accounts.
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn insert(&self, user: NewUser) -> Result<User, StoreError>;
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError>;
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, StoreError>;
}

/// Persistence for notes.
#[async_trait]
pub trait NoteStore: Send + Sync {
    async fn create(&self, title: &str, content: &str, owner: UserId) -> Result<Note, StoreError>;
    async fn find_by_owner(&self, owner: UserId) -> Result<Vec<Note>, StoreError>;
    async fn find_by_id(&self, id: NoteId) -> Result<Option<Note>, StoreError>;
    async fn update(&self, id: NoteId, title: &str, content: &str) -> Result<(), StoreError>;
    async fn delete(&self, id: NoteId) -> Result<(), StoreError>;
}
