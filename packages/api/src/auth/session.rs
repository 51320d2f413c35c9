//! Session lifecycle: create on login, resolve per request, destroy on logout.
//!
//! The session token is the tower-sessions id carried in the session cookie; the
//! server-side record lives in the configured [`tower_sessions::SessionStore`].

use time::Duration;
use tower_sessions::{Expiry, Session};
use uuid::Uuid;

use super::clock::Clock;

/// Key for storing user ID in session.
pub const SESSION_USER_ID_KEY: &str = "user_id";

/// Default absolute session lifetime.
pub const DEFAULT_SESSION_TTL: Duration = Duration::hours(1);

/// Bind `session` to `user_id` with an absolute expiry of `now + ttl`.
///
/// The session id is rotated first, so a token handed out before login never
/// becomes authenticated.
pub async fn create(
    session: &Session,
    user_id: Uuid,
    clock: &dyn Clock,
    ttl: Duration,
) -> Result<(), tower_sessions::session::Error> {
    session.cycle_id().await?;
    session.insert(SESSION_USER_ID_KEY, user_id).await?;
    session.set_expiry(Some(Expiry::AtDateTime(clock.now() + ttl)));
    Ok(())
}

/// The user bound to `session`, if the token is present, known and unexpired.
pub async fn resolve(session: &Session) -> Result<Option<Uuid>, tower_sessions::session::Error> {
    session.get(SESSION_USER_ID_KEY).await
}

/// Delete the server-side record and clear the cookie. Idempotent.
pub async fn destroy(session: &Session) -> Result<(), tower_sessions::session::Error> {
    session.flush().await
}
