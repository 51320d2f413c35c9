//! Gated routes: dashboard and note CRUD.
//!
//! Every handler here runs behind [`require_login`](crate::auth::require_login) and
//! reads the user from the [`CurrentUser`] extension. When
//! [`AppState::enforce_ownership`] is set, a note owned by someone else is handled
//! exactly like a note that does not exist.

use axum::{
    extract::{Path, State},
    response::{Html, IntoResponse, Redirect, Response},
    Extension, Form,
};
use serde::Deserialize;
use store::{Note, StoreError, UserId};
use tower_sessions::Session;
use uuid::Uuid;

use crate::auth::{session, CurrentUser};
use crate::error::AppError;
use crate::models::UserInfo;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct NoteForm {
    #[serde(default)]
    title: String,
    #[serde(default)]
    content: String,
}

impl NoteForm {
    fn validate(&self) -> Result<(), AppError> {
        if self.title.is_empty() || self.content.is_empty() {
            return Err(AppError::Validation(
                "❌ Please enter both title and content".to_string(),
            ));
        }
        Ok(())
    }
}

fn note_not_found() -> AppError {
    AppError::NotFound("❌ Note not found".to_string())
}

/// Look up a note by its path segment as seen by `user_id`.
///
/// Malformed ids are treated as unknown.
async fn visible_note(
    state: &AppState,
    id: &str,
    user_id: UserId,
) -> Result<Option<Note>, AppError> {
    let Ok(id) = Uuid::parse_str(id) else {
        return Ok(None);
    };

    let note = state.notes.find_by_id(id).await?;

    Ok(note.filter(|n| !state.enforce_ownership || n.is_owned_by(user_id)))
}

/// `GET /dashboard`
pub async fn dashboard(
    State(state): State<AppState>,
    Extension(CurrentUser(user_id)): Extension<CurrentUser>,
    session: Session,
) -> Result<Response, AppError> {
    let user = match state.credentials.find_by_id(user_id).await {
        Ok(user) => user,
        Err(AppError::NotFound(_)) => {
            tracing::warn!("Session references unknown user {}", user_id);
            session::destroy(&session).await?;
            return Ok(Redirect::to("/login").into_response());
        }
        Err(e) => return Err(e),
    };

    let notes = state.notes.find_by_owner(user_id).await?;
    let info = UserInfo::from(&user);

    Ok(Html(ui::dashboard_page(info.username, info.email, notes)).into_response())
}

/// `GET /add-note`
pub async fn add_note_form() -> Html<String> {
    Html(ui::add_note_page())
}

/// `POST /add-note`
pub async fn add_note(
    State(state): State<AppState>,
    Extension(CurrentUser(user_id)): Extension<CurrentUser>,
    Form(form): Form<NoteForm>,
) -> Result<Redirect, AppError> {
    form.validate()?;

    let note = state
        .notes
        .create(&form.title, &form.content, user_id)
        .await?;

    tracing::info!("User {} created note {}", user_id, note.id);
    Ok(Redirect::to("/dashboard"))
}

/// `GET /update/{id}`
pub async fn update_form(
    State(state): State<AppState>,
    Extension(CurrentUser(user_id)): Extension<CurrentUser>,
    Path(id): Path<String>,
) -> Result<Html<String>, AppError> {
    let note = visible_note(&state, &id, user_id)
        .await?
        .ok_or_else(note_not_found)?;

    Ok(Html(ui::update_note_page(note)))
}

/// `POST /update/{id}`
pub async fn update_note(
    State(state): State<AppState>,
    Extension(CurrentUser(user_id)): Extension<CurrentUser>,
    Path(id): Path<String>,
    Form(form): Form<NoteForm>,
) -> Result<Redirect, AppError> {
    form.validate()?;

    let note = visible_note(&state, &id, user_id)
        .await?
        .ok_or_else(note_not_found)?;

    state
        .notes
        .update(note.id, &form.title, &form.content)
        .await
        .map_err(|e| match e {
            StoreError::NotFound => note_not_found(),
            other => other.into(),
        })?;

    tracing::info!("User {} updated note {}", user_id, note.id);
    Ok(Redirect::to("/dashboard"))
}

/// `POST /delete/{id}`
pub async fn delete_note(
    State(state): State<AppState>,
    Extension(CurrentUser(user_id)): Extension<CurrentUser>,
    Path(id): Path<String>,
) -> Result<Redirect, AppError> {
    if let Some(note) = visible_note(&state, &id, user_id).await? {
        state.notes.delete(note.id).await?;
        tracing::info!("User {} deleted note {}", user_id, note.id);
    }

    Ok(Redirect::to("/dashboard"))
}
