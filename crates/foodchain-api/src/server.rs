//! Router assembly and the HTTP server.

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use foodchain_auth::{session_key, RequireSessionLayer};
use foodchain_core::Catalog;
use foodchain_storage::SqliteCredentialStore;
use tower_http::trace::TraceLayer;
use tower_sessions::cookie::SameSite;
use tower_sessions::{MemoryStore, SessionManagerLayer};

use crate::routes::{self, LOGIN_PATH};
use crate::{AppConfig, AppState, Result};

/// Name of the session cookie.
pub const SESSION_COOKIE: &str = "session";

/// Build the application router over `state`.
///
/// `/visualization` always requires a session; `/admin` only when
/// [`AppConfig::gate_admin`] is set.
pub fn router(state: AppState) -> Router {
    let gate = RequireSessionLayer::new(LOGIN_PATH);

    let gated = Router::new()
        .route(routes::VISUALIZATION_PATH, get(routes::visualization))
        .route_layer(gate.clone());

    let admin = Router::new().route("/admin", get(routes::admin));
    let admin = if state.config.gate_admin {
        admin.route_layer(gate)
    } else {
        admin
    };

    let sessions = SessionManagerLayer::new(MemoryStore::default())
        .with_name(SESSION_COOKIE)
        .with_secure(false)
        .with_same_site(SameSite::Lax)
        .with_signed(session_key(state.config.secret_key.as_deref()));

    Router::new()
        .route("/", get(routes::welcome))
        .route("/register", post(routes::register))
        .route(LOGIN_PATH, get(routes::login_form).post(routes::login))
        .route("/logout", get(routes::logout))
        .route("/api/ecosystem/{name}", get(routes::ecosystem))
        .route("/health", get(routes::health))
        .merge(gated)
        .merge(admin)
        .layer(sessions)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Foodchain HTTP server.
pub struct Server {
    state: AppState,
}

impl Server {
    /// Open the credential store named in `config` and prepare the server.
    pub async fn new(config: AppConfig) -> Result<Self> {
        let store = SqliteCredentialStore::open(&config.database, config.max_connections).await?;
        tracing::info!(database = %config.database.display(), "Credential store ready");
        Ok(Self::with_state(AppState::new(
            config,
            Catalog::builtin(),
            Arc::new(store),
        )))
    }

    /// Create a server over prepared state.
    pub fn with_state(state: AppState) -> Self {
        Self { state }
    }

    /// The shared application state.
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Bind and serve until Ctrl-C.
    pub async fn run(self) -> Result<()> {
        let addr = self.state.config.bind_addr();
        let listener = tokio::net::TcpListener::bind(addr).await?;
        tracing::info!(%addr, "Listening");

        axum::serve(listener, router(self.state))
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Server stopped");
        Ok(())
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown requested");
}
