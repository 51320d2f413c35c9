use async_trait::async_trait;
use sqlx::PgPool;
use store::{Note, NoteId, NoteStore, StoreError, UserId};
use uuid::Uuid;

use super::backend_error;
use crate::models::NoteRow;

/// [`NoteStore`] backed by the `notes` table.
#[derive(Clone, Debug)]
pub struct PgNoteStore {
    pool: PgPool,
}

impl PgNoteStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl NoteStore for PgNoteStore {
    async fn create(&self, title: &str, content: &str, owner: UserId) -> Result<Note, StoreError> {
        let row: NoteRow = sqlx::query_as(
            "INSERT INTO notes (id, user_id, title, content) VALUES ($1, $2, $3, $4) RETURNING *",
        )
        .bind(Uuid::new_v4())
        .bind(owner)
        .bind(title)
        .bind(content)
        .fetch_one(&self.pool)
        .await
        .map_err(backend_error)?;

        Ok(row.into_note())
    }

    async fn find_by_owner(&self, owner: UserId) -> Result<Vec<Note>, StoreError> {
        let rows: Vec<NoteRow> =
            sqlx::query_as("SELECT * FROM notes WHERE user_id = $1 ORDER BY created_at, id")
                .bind(owner)
                .fetch_all(&self.pool)
                .await
                .map_err(backend_error)?;

        Ok(rows.into_iter().map(NoteRow::into_note).collect())
    }

    async fn find_by_id(&self, id: NoteId) -> Result<Option<Note>, StoreError> {
        let row: Option<NoteRow> = sqlx::query_as("SELECT * FROM notes WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(backend_error)?;

        Ok(row.map(NoteRow::into_note))
    }

    async fn update(&self, id: NoteId, title: &str, content: &str) -> Result<(), StoreError> {
        let result = sqlx::query(
            "UPDATE notes SET title = $2, content = $3, updated_at = NOW() WHERE id = $1",
        )
        .bind(id)
        .bind(title)
        .bind(content)
        .execute(&self.pool)
        .await
        .map_err(backend_error)?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound);
        }
        Ok(())
    }

    async fn delete(&self, id: NoteId) -> Result<(), StoreError> {
        sqlx::query("DELETE FROM notes WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(backend_error)?;

        Ok(())
    }
}
