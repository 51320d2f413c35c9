use std::sync::Arc;

use store::{NoteStore, UserStore};
use time::Duration;

use crate::auth::{Clock, PasswordHasher, SystemClock, DEFAULT_SESSION_TTL};
use crate::credentials::Credentials;

/// Everything a handler needs, built once at start-up.
#[derive(Clone)]
pub struct AppState {
    pub credentials: Credentials,
    pub notes: Arc<dyn NoteStore>,
    pub clock: Arc<dyn Clock>,
    pub session_ttl: Duration,
    /// Treat other users' notes as missing on view, update and delete.
    pub enforce_ownership: bool,
}

impl AppState {
    pub fn new(
        users: Arc<dyn UserStore>,
        notes: Arc<dyn NoteStore>,
        hasher: PasswordHasher,
    ) -> Self {
        Self {
            credentials: Credentials::new(users, hasher),
            notes,
            clock: Arc::new(SystemClock),
            session_ttl: DEFAULT_SESSION_TTL,
            enforce_ownership: true,
        }
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn with_session_ttl(mut self, ttl: Duration) -> Self {
        self.session_ttl = ttl;
        self
    }

    pub fn with_ownership_checks(mut self, enforce: bool) -> Self {
        self.enforce_ownership = enforce;
        self
    }
}
