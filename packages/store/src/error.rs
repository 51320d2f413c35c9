use thiserror::Error;

/// Errors returned by [`crate::UserStore`] and [`crate::NoteStore`] backends.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("a user with this email already exists")]
    DuplicateEmail,

    #[error("record not found")]
    NotFound,

    #[error("store backend failure: {0}")]
    Backend(String),
}
