//! Login gate for protected routes.

use axum::{
    extract::Request,
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use tower_sessions::Session;
use uuid::Uuid;

use super::session;

/// The authenticated user of the current request, inserted by [`require_login`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CurrentUser(pub Uuid);

/// Middleware: run the handler with a [`CurrentUser`] extension when the session
/// resolves, otherwise redirect to `/login`.
pub async fn require_login(session: Session, mut request: Request, next: Next) -> Response {
    match session::resolve(&session).await {
        Ok(Some(user_id)) => {
            request.extensions_mut().insert(CurrentUser(user_id));
            next.run(request).await
        }
        Ok(None) => Redirect::to("/login").into_response(),
        Err(e) => {
            tracing::warn!("Failed to resolve session: {}", e);
            Redirect::to("/login").into_response()
        }
    }
}
