//! Public routes: landing redirect, login, registration and logout.

use axum::{
    extract::State,
    response::{Html, Redirect},
    Form,
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::auth::session;
use crate::error::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct RegisterForm {
    #[serde(default)]
    username: String,
    #[serde(default)]
    email: String,
    #[serde(default)]
    password: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    email: String,
    #[serde(default)]
    password: String,
}

/// `GET /`
pub async fn root() -> Redirect {
    Redirect::to("/login")
}

/// `GET /login`
pub async fn login_form() -> Html<String> {
    Html(ui::login_page())
}

/// `GET /register`
pub async fn register_form() -> Html<String> {
    Html(ui::register_page())
}

/// `POST /register`
pub async fn register(
    State(state): State<AppState>,
    Form(form): Form<RegisterForm>,
) -> Result<Redirect, AppError> {
    let user = state
        .credentials
        .create(&form.username, &form.email, &form.password)
        .await?;

    tracing::info!("Registered user {}", user.id);
    Ok(Redirect::to("/login"))
}

/// `POST /login`
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<LoginForm>,
) -> Result<Redirect, AppError> {
    if form.email.is_empty() || form.password.is_empty() {
        return Err(AppError::Validation(
            "❌ Please enter both email and password".to_string(),
        ));
    }

    let user = state.credentials.find_by_email(&form.email).await?;

    if !state
        .credentials
        .verify_password(&form.password, &user.password_hash)
        .await
    {
        return Err(AppError::InvalidPassword);
    }

    session::create(&session, user.id, state.clock.as_ref(), state.session_ttl).await?;

    tracing::info!("User {} logged in", user.id);
    Ok(Redirect::to("/dashboard"))
}

/// `GET /logout`
pub async fn logout(session: Session) -> Result<Redirect, AppError> {
    session::destroy(&session).await?;
    Ok(Redirect::to("/login"))
}
