//! Request handlers.

use axum::extract::{FromRequestParts, Path, State};
use axum::response::{Html, IntoResponse, Response};
use axum::{Form, Json};
use foodchain_auth::{redirect_found, user_from_parts, UserSession};
use foodchain_core::SessionUser;
use http::request::Parts;
use http::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::pages;
use crate::{AppState, Result};

/// Where anonymous visitors of gated pages are sent.
pub const LOGIN_PATH: &str = "/login";

/// Where a successful login lands.
pub const VISUALIZATION_PATH: &str = "/visualization";

/// Registration form fields.
#[derive(Debug, Deserialize)]
pub struct RegisterForm {
    /// Display name.
    pub name: String,
    /// Login email.
    pub email: String,
    /// Plaintext password; hashed before storage.
    pub password: String,
}

/// Login form fields.
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    /// Login email.
    pub email: String,
    /// Plaintext password.
    pub password: String,
}

/// Health check response.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// "healthy" or "degraded".
    pub status: String,
    /// Server name.
    pub name: String,
    /// Server version.
    pub version: String,
}

/// The user placed on the request by the session gate.
///
/// Rejects with a redirect to the login page when the route is not gated
/// or nobody is logged in.
#[derive(Clone, Debug)]
pub struct CurrentUser(pub SessionUser);

impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &S,
    ) -> std::result::Result<Self, Self::Rejection> {
        user_from_parts(parts)
            .cloned()
            .map(CurrentUser)
            .ok_or_else(|| redirect_found(LOGIN_PATH))
    }
}

/// `GET /`
pub async fn welcome() -> Html<String> {
    Html(pages::welcome_page())
}

/// `POST /register`
pub async fn register(
    State(state): State<AppState>,
    Form(form): Form<RegisterForm>,
) -> Result<Response> {
    state
        .auth
        .register(&form.name, &form.email, &form.password)
        .await?;
    Ok(redirect_found(LOGIN_PATH))
}

/// `GET /login`
pub async fn login_form() -> Html<String> {
    Html(pages::login_page(None))
}

/// `POST /login`
pub async fn login(
    State(state): State<AppState>,
    session: UserSession,
    Form(form): Form<LoginForm>,
) -> Result<Response> {
    match state.auth.authenticate(&form.email, &form.password).await? {
        Some(user) => {
            session.create(&user).await?;
            Ok(redirect_found(VISUALIZATION_PATH))
        }
        None => {
            tracing::info!("Rejected login attempt");
            Ok(Html(pages::login_page(Some(pages::INVALID_CREDENTIALS))).into_response())
        }
    }
}

/// `GET /visualization` (gated)
pub async fn visualization(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
) -> Html<String> {
    Html(pages::visualization_page(&user.name, &state.catalog))
}

/// `GET /admin`
pub async fn admin(State(state): State<AppState>) -> Result<Html<String>> {
    let users = state.store().list_users().await?;
    Ok(Html(pages::admin_page(&users)))
}

/// `GET /logout`
pub async fn logout(session: UserSession) -> Result<Response> {
    session.destroy().await?;
    Ok(redirect_found("/"))
}

/// `GET /api/ecosystem/{name}`
///
/// The chain as a JSON array, or `{}` when the name is unknown.
pub async fn ecosystem(State(state): State<AppState>, Path(name): Path<String>) -> Json<Value> {
    let body = match state.catalog.get(&name) {
        Some(eco) => serde_json::to_value(&eco.chain).unwrap_or(Value::Array(Vec::new())),
        None => Value::Object(serde_json::Map::new()),
    };
    Json(body)
}

/// `GET /health`
pub async fn health(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let (code, status) = match state.store().health_check().await {
        Ok(()) => (StatusCode::OK, "healthy"),
        Err(e) => {
            tracing::warn!(error = %e, "Credential store health check failed");
            (StatusCode::SERVICE_UNAVAILABLE, "degraded")
        }
    };
    let response = HealthResponse {
        status: status.to_string(),
        name: env!("CARGO_PKG_NAME").to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };
    (code, Json(response))
}
