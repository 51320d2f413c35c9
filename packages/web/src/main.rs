use std::{sync::Arc, time::Duration};

use anyhow::Context;
use api::{
    auth::PasswordHasher,
    db::{PgNoteStore, PgUserStore},
    AppState, SessionCookie,
};
use tokio::{
    net::TcpListener,
    signal::{
        ctrl_c,
        unix::{signal, SignalKind},
    },
};
use tower_sessions::ExpiredDeletion;
use tower_sessions_sqlx_store::PostgresStore;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

mod settings;

use settings::Settings;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let settings = Settings::new().context("Failed to load settings")?;

    let pool = api::db::connect(&settings.database.url, settings.database.max_connections)
        .await
        .context("Failed to connect to database")?;

    api::db::migrate(&pool)
        .await
        .context("Failed to run migrations")?;

    let session_store = PostgresStore::new(pool.clone());
    session_store
        .migrate()
        .await
        .context("Failed to migrate session store")?;

    let sweeper = tokio::spawn(sweep_expired_sessions(
        session_store.clone(),
        settings.session.sweep_interval(),
    ));

    let hasher = PasswordHasher::new(&settings.hasher)
        .map_err(anyhow::Error::msg)
        .context("Invalid hasher settings")?;

    let state = AppState::new(
        Arc::new(PgUserStore::new(pool.clone())),
        Arc::new(PgNoteStore::new(pool)),
        hasher,
    )
    .with_session_ttl(settings.session.ttl())
    .with_ownership_checks(settings.notes.enforce_ownership);

    let cookie = SessionCookie {
        name: settings.session.cookie_name.clone(),
        secure: settings.session.secure_cookie,
    };

    let app = api::app(state, session_store, &cookie);

    let address = settings.server.address();
    let listener = TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {address}"))?;
    info!("Listening on {}", address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    sweeper.abort();
    info!("Server shut down");

    Ok(())
}

/// Periodically drop session rows past their expiry.
async fn sweep_expired_sessions(store: PostgresStore, period: Duration) {
    let mut interval = tokio::time::interval(period);
    loop {
        interval.tick().await;
        if let Err(e) = store.delete_expired().await {
            tracing::warn!("Failed to delete expired sessions: {}", e);
        }
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
        info!("Received Ctrl+C, shutting down");
    };

    let terminate = async {
        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                tracing::error!("Failed to install signal handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
