//! The credential store abstraction and its record types.

use async_trait::async_trait;
use foodchain_core::UserId;

use crate::Result;

/// A user as stored, including the password hash.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UserRecord {
    /// Store-assigned id.
    pub id: UserId,
    /// Free-text display name.
    pub name: String,
    /// Login email. Not unique.
    pub email: String,
    /// One-way hash of the user's password (PHC string).
    pub password_hash: String,
}

/// A user to be inserted. The password must already be hashed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewUser {
    /// Free-text display name.
    pub name: String,
    /// Login email.
    pub email: String,
    /// One-way hash of the user's password.
    pub password_hash: String,
}

/// Public view of a user, as shown on the admin listing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UserSummary {
    /// Store-assigned id.
    pub id: UserId,
    /// Display name.
    pub name: String,
    /// Login email.
    pub email: String,
}

impl From<UserRecord> for UserSummary {
    fn from(record: UserRecord) -> Self {
        Self {
            id: record.id,
            name: record.name,
            email: record.email,
        }
    }
}

/// Storage for user credentials.
///
/// Records are append-only: there is no update or delete. Email uniqueness
/// is not enforced, so lookups by email resolve to the lowest id.
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// Insert a user and return its newly assigned id.
    async fn insert_user(&self, user: NewUser) -> Result<UserId>;

    /// Find the first user (lowest id) registered with `email`.
    async fn find_by_email(&self, email: &str) -> Result<Option<UserRecord>>;

    /// All users in registration order.
    async fn list_users(&self) -> Result<Vec<UserSummary>>;

    /// Check that the store is reachable.
    async fn health_check(&self) -> Result<()>;
}
