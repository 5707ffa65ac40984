//! User identity types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a registered user.
///
/// Assigned by the credential store (auto-incrementing) and never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(i64);

impl UserId {
    /// Wrap a raw store id.
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    /// Returns the raw store id.
    pub fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for UserId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl From<UserId> for i64 {
    fn from(id: UserId) -> Self {
        id.0
    }
}

/// The identity held in an authenticated session.
///
/// Created on successful login and stored as a typed session value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    /// Id of the logged-in user.
    pub id: UserId,
    /// Display name of the logged-in user.
    pub name: String,
}

impl SessionUser {
    /// Create a session identity.
    pub fn new(id: impl Into<UserId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}
