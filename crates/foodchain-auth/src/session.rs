//! Typed access to the request's session.
//!
//! The session layer (tower-sessions) keeps session data server-side and
//! identifies it by a signed cookie. [`UserSession`] stores a single typed
//! [`SessionUser`] under [`SESSION_USER_KEY`] and treats anything else found
//! there as "not logged in".

use axum::extract::FromRequestParts;
use foodchain_core::SessionUser;
use http::request::Parts;
use http::StatusCode;
use tower_sessions::cookie::Key;
use tower_sessions::{session, Session};

use crate::{AuthError, Result};

/// Session key holding the logged-in [`SessionUser`].
pub const SESSION_USER_KEY: &str = "user";

/// Key-derivation context for the cookie signing key.
const KEY_CONTEXT: &str = "foodchain 2024 session cookie signing key";

/// Derive the 64-byte cookie signing key from `secret`.
///
/// The key only decides which cookies verify. Session records live in the
/// server's store, so a configured secret does not carry logins across a
/// restart. With no secret a random key is generated per process.
pub fn session_key(secret: Option<&str>) -> Key {
    match secret {
        Some(secret) => {
            let mut bytes = [0u8; 64];
            blake3::Hasher::new_derive_key(KEY_CONTEXT)
                .update(secret.as_bytes())
                .finalize_xof()
                .fill(&mut bytes);
            Key::from(&bytes[..])
        }
        None => {
            log::warn!("No session secret configured; using a random cookie signing key");
            Key::generate()
        }
    }
}

/// The authenticated identity bound to the current request's cookie.
///
/// States: anonymous (no user stored) and authenticated. [`create`](Self::create)
/// moves to authenticated, [`destroy`](Self::destroy) back to anonymous.
#[derive(Clone, Debug)]
pub struct UserSession {
    session: Session,
}

impl UserSession {
    /// Wrap a request session.
    pub fn new(session: Session) -> Self {
        Self { session }
    }

    /// Log `user` in, issuing a fresh session id.
    pub async fn create(&self, user: &SessionUser) -> Result<()> {
        self.session
            .cycle_id()
            .await
            .map_err(|e| AuthError::session(e.to_string()))?;
        self.session
            .insert(SESSION_USER_KEY, user)
            .await
            .map_err(|e| AuthError::session(e.to_string()))
    }

    /// The logged-in user, if any.
    ///
    /// A stored value that does not deserialize as [`SessionUser`] counts as
    /// no session.
    pub async fn current(&self) -> Result<Option<SessionUser>> {
        match self.session.get::<SessionUser>(SESSION_USER_KEY).await {
            Ok(user) => Ok(user),
            Err(session::Error::SerdeJson(e)) => {
                log::warn!("Discarding malformed session user: {e}");
                Ok(None)
            }
            Err(e) => Err(AuthError::session(e.to_string())),
        }
    }

    /// Log out: drop all session data and the session record.
    pub async fn destroy(&self) -> Result<()> {
        self.session
            .flush()
            .await
            .map_err(|e| AuthError::session(e.to_string()))
    }
}

impl<S> FromRequestParts<S> for UserSession
where
    S: Send + Sync,
{
    type Rejection = (StatusCode, &'static str);

    async fn from_request_parts(
        parts: &mut Parts,
        state: &S,
    ) -> std::result::Result<Self, Self::Rejection> {
        let session = Session::from_request_parts(parts, state).await?;
        Ok(Self::new(session))
    }
}
