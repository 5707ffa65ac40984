//! Tower middleware that gates routes on a logged-in session.
//!
//! `RequireSessionLayer` and `RequireSessionService` wrap any inner service.
//! Requests without a session user are redirected to the login page; the
//! session layer (tower-sessions) must run outside this one.

use std::convert::Infallible;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};

use axum::body::Body;
use axum::response::{IntoResponse, Response};
use http::{header, HeaderValue, Request, StatusCode};
use tower::{Layer, Service};
use tower_sessions::Session;

use crate::UserSession;

/// Tower `Layer` that requires an authenticated session.
#[derive(Clone)]
pub struct RequireSessionLayer {
    login_path: Arc<str>,
}

impl RequireSessionLayer {
    /// Create a gate that redirects anonymous requests to `login_path`.
    pub fn new(login_path: impl Into<Arc<str>>) -> Self {
        Self {
            login_path: login_path.into(),
        }
    }
}

impl<S> Layer<S> for RequireSessionLayer {
    type Service = RequireSessionService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        RequireSessionService {
            inner,
            login_path: self.login_path.clone(),
        }
    }
}

/// Tower `Service` that checks the session before forwarding requests.
///
/// On success, inserts the [`SessionUser`](foodchain_core::SessionUser) into
/// request extensions where it's available to downstream handlers.
#[derive(Clone)]
pub struct RequireSessionService<S> {
    inner: S,
    login_path: Arc<str>,
}

impl<S> Service<Request<Body>> for RequireSessionService<S>
where
    S: Service<Request<Body>, Error = Infallible> + Clone + Send + 'static,
    S::Response: IntoResponse,
    S::Future: Send,
{
    type Response = axum::response::Response;
    type Error = Infallible;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut req: Request<Body>) -> Self::Future {
        let clone = self.inner.clone();
        let mut inner = std::mem::replace(&mut self.inner, clone);

        let login_path = self.login_path.clone();
        let session = req.extensions().get::<Session>().cloned();

        Box::pin(async move {
            let Some(session) = session else {
                log::error!("Session layer missing; treating request as anonymous");
                return Ok(redirect_found(&login_path));
            };

            match UserSession::new(session).current().await {
                Ok(Some(user)) => {
                    req.extensions_mut().insert(user);
                    let resp = inner
                        .call(req)
                        .await
                        .unwrap_or_else(|infallible| match infallible {});
                    Ok(resp.into_response())
                }
                Ok(None) => Ok(redirect_found(&login_path)),
                Err(e) => {
                    log::error!("Session lookup failed: {e}");
                    Ok(StatusCode::INTERNAL_SERVER_ERROR.into_response())
                }
            }
        })
    }
}

/// Build a `302 Found` redirect to `location`.
pub fn redirect_found(location: &str) -> Response {
    match HeaderValue::from_str(location) {
        Ok(value) => (StatusCode::FOUND, [(header::LOCATION, value)]).into_response(),
        Err(_) => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
    }
}
