//! Authentication and session primitives for Foodchain.
//!
//! Provides:
//! - [`AuthService`] — Registration and credential checks over a [`CredentialStore`](foodchain_storage::CredentialStore)
//! - [`hash_password`] / [`verify_password`] — Salted one-way password hashing (argon2id)
//! - [`UserSession`] — Typed view of the request's session (create / current / destroy)
//! - [`RequireSessionLayer`] / [`RequireSessionService`] — Tower middleware that gates routes on a session
//! - [`AuthError`] — Auth-specific error types

mod error;
mod middleware;
mod password;
mod service;
mod session;
mod user;

pub use error::{AuthError, Result};
pub use middleware::{redirect_found, RequireSessionLayer, RequireSessionService};
pub use password::{hash_password, verify_password};
pub use service::AuthService;
pub use session::{session_key, UserSession, SESSION_USER_KEY};
pub use user::user_from_parts;
