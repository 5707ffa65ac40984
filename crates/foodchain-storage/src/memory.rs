//! In-memory credential store (for testing).

use async_trait::async_trait;
use foodchain_core::UserId;
use tokio::sync::RwLock;

use crate::traits::{CredentialStore, NewUser, UserRecord, UserSummary};
use crate::Result;

/// Credential store held entirely in process memory.
///
/// Behaves like the SQLite store: ids start at 1 and increase, and
/// duplicate emails resolve to the first registration.
#[derive(Debug, Default)]
pub struct MemoryCredentialStore {
    users: RwLock<Vec<UserRecord>>,
}

impl MemoryCredentialStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CredentialStore for MemoryCredentialStore {
    async fn insert_user(&self, user: NewUser) -> Result<UserId> {
        let mut users = self.users.write().await;
        let id = UserId::new(users.last().map_or(1, |u| u.id.get() + 1));
        users.push(UserRecord {
            id,
            name: user.name,
            email: user.email,
            password_hash: user.password_hash,
        });
        Ok(id)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<UserRecord>> {
        let users = self.users.read().await;
        Ok(users.iter().find(|u| u.email == email).cloned())
    }

    async fn list_users(&self) -> Result<Vec<UserSummary>> {
        let users = self.users.read().await;
        Ok(users.iter().cloned().map(UserSummary::from).collect())
    }

    async fn health_check(&self) -> Result<()> {
        Ok(())
    }
}
