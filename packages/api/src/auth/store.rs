//! # Clock-aware session store
//!
//! [`ClockedStore`] wraps any [`SessionStore`] backend (the in-memory store in tests,
//! `PostgresStore` in production) and enforces the absolute session expiry against a
//! [`Clock`]. A record whose `expiry_date` is at or before `clock.now()` is deleted
//! from the backend on lookup and reported as missing, so an expired token can never
//! resolve to a user even if the backend's own sweep has not run yet.

use std::sync::Arc;

use async_trait::async_trait;
use tower_sessions::session::{Id, Record};
use tower_sessions::{session_store, SessionStore};

use super::clock::Clock;

/// Session store that evicts expired records on lookup.
#[derive(Clone, Debug)]
pub struct ClockedStore<S> {
    inner: S,
    clock: Arc<dyn Clock>,
}

impl<S> ClockedStore<S> {
    pub fn new(inner: S, clock: Arc<dyn Clock>) -> Self {
        Self { inner, clock }
    }
}

#[async_trait]
impl<S> SessionStore for ClockedStore<S>
where
    S: SessionStore + Clone,
{
    async fn create(&self, record: &mut Record) -> session_store::Result<()> {
        self.inner.create(record).await
    }

    async fn save(&self, record: &Record) -> session_store::Result<()> {
        self.inner.save(record).await
    }

    async fn load(&self, session_id: &Id) -> session_store::Result<Option<Record>> {
        let Some(record) = self.inner.load(session_id).await? else {
            return Ok(None);
        };

        if record.expiry_date <= self.clock.now() {
            tracing::debug!("Evicting expired session");
            self.inner.delete(session_id).await?;
            return Ok(None);
        }

        Ok(Some(record))
    }

    async fn delete(&self, session_id: &Id) -> session_store::Result<()> {
        self.inner.delete(session_id).await
    }
}
