use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::error::StoreError;
use crate::models::{email_key, NewUser, Note, NoteId, User, UserId};
use crate::repo::{NoteStore, UserStore};

/// In-memory UserStore and NoteStore for testing and local runs.
///
/// Records are kept in insertion order. Clones share the same data.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    users: Arc<Mutex<Vec<User>>>,
    notes: Arc<Mutex<Vec<Note>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn lock<T>(mutex: &Mutex<T>) -> Result<MutexGuard<'_, T>, StoreError> {
    mutex
        .lock()
        .map_err(|_| StoreError::Backend("memory store lock poisoned".to_string()))
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn insert(&self, user: NewUser) -> Result<User, StoreError> {
        let mut users = lock(&self.users)?;

        // Checked under the same lock as the push, like a unique index.
        let key = email_key(&user.email);
        if users.iter().any(|u| email_key(&u.email) == key) {
            return Err(StoreError::DuplicateEmail);
        }

        let now = Utc::now();
        let user = User {
            id: Uuid::new_v4(),
            username: user.username,
            email: user.email,
            password_hash: user.password_hash,
            created_at: now,
            updated_at: now,
        };
        users.push(user.clone());
        Ok(user)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        let key = email_key(email);
        Ok(lock(&self.users)?
            .iter()
            .find(|u| email_key(&u.email) == key)
            .cloned())
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, StoreError> {
        Ok(lock(&self.users)?.iter().find(|u| u.id == id).cloned())
    }
}

#[async_trait]
impl NoteStore for MemoryStore {
    async fn create(&self, title: &str, content: &str, owner: UserId) -> Result<Note, StoreError> {
        let now = Utc::now();
        let note = Note {
            id: Uuid::new_v4(),
            title: title.to_string(),
            content: content.to_string(),
            user_id: owner,
            created_at: now,
            updated_at: now,
        };
        lock(&self.notes)?.push(note.clone());
        Ok(note)
    }

    async fn find_by_owner(&self, owner: UserId) -> Result<Vec<Note>, StoreError> {
        Ok(lock(&self.notes)?
            .iter()
            .filter(|n| n.user_id == owner)
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, id: NoteId) -> Result<Option<Note>, StoreError> {
        Ok(lock(&self.notes)?.iter().find(|n| n.id == id).cloned())
    }

    async fn update(&self, id: NoteId, title: &str, content: &str) -> Result<(), StoreError> {
        let mut notes = lock(&self.notes)?;
        let note = notes
            .iter_mut()
            .find(|n| n.id == id)
            .ok_or(StoreError::NotFound)?;
        note.title = title.to_string();
        note.content = content.to_string();
        note.updated_at = Utc::now();
        Ok(())
    }

    async fn delete(&self, id: NoteId) -> Result<(), StoreError> {
        lock(&self.notes)?.retain(|n| n.id != id);
        Ok(())
    }
}
