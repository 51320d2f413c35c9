//! Note rows from the `notes` table.

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use store::Note;
use uuid::Uuid;

#[derive(Debug, Clone, FromRow)]
pub struct NoteRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl NoteRow {
    pub fn into_note(self) -> Note {
        Note {
            id: self.id,
            title: self.title,
            content: self.content,
            user_id: self.user_id,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}
