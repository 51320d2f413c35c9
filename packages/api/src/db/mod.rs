//! # Database module: PostgreSQL backends
//!
//! The Postgres implementations of the store traits, plus pool setup and the
//! embedded migrations. Nothing here is global: the binary opens one pool with
//! [`connect`], runs [`migrate`], and hands clones of the pool to
//! [`PgUserStore`] and [`PgNoteStore`].
//!
//! ## Schema
//!
//! | Table | Notes |
//! |-------|-------|
//! | `users` | Unique index on `LOWER(email)`; a violation maps to [`store::StoreError::DuplicateEmail`]. |
//! | `notes` | `user_id` references `users(id)`; indexed by `(user_id, created_at)` for the dashboard listing. |
//!
//! Session rows are owned by `tower-sessions-sqlx-store` and migrated separately.

mod notes;
mod pool;
mod users;

pub use notes::PgNoteStore;
pub use pool::{connect, migrate};
pub use users::PgUserStore;

fn backend_error(e: sqlx::Error) -> store::StoreError {
    store::StoreError::Backend(e.to_string())
}
