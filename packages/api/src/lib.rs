//! # API crate: the server side of the notes app
//!
//! Routes, session handling and the PostgreSQL-backed stores. The `web` binary
//! wires these together; tests drive the same [`app`] over in-memory stores.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`auth`] | Password hashing, session lifecycle, expiry clock and the login gate |
//! | [`credentials`] | Registration and credential lookup on top of a [`store::UserStore`] |
//! | [`db`] | PostgreSQL pool, migrations and the `users` / `notes` stores |
//! | [`error`] | [`AppError`] and how each variant is rendered to the client |
//! | [`models`] | Database rows and client-safe projections (`UserInfo`) |
//! | [`routes`] | The HTTP surface and router assembly |
//! | [`state`] | [`AppState`] shared by all handlers |

pub mod auth;
pub mod credentials;
pub mod db;
pub mod error;
pub mod models;
pub mod routes;
pub mod state;

pub use error::AppError;
pub use models::UserInfo;
pub use routes::{app, router, SessionCookie};
pub use state::AppState;
