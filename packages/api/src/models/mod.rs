//! Data models for the application.

mod note;
mod user;

pub use note::NoteRow;
pub use user::{UserInfo, UserRow};
