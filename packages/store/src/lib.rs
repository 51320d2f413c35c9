pub mod error;
pub mod models;
pub mod repo;

mod memory;
pub use memory::MemoryStore;

pub use error::StoreError;
pub use models::{email_key, NewUser, Note, NoteId, User, UserId};
pub use repo::{NoteStore, UserStore};
