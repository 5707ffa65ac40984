//! Registration and login against the credential store.

use std::sync::Arc;

use foodchain_core::{SessionUser, UserId};
use foodchain_storage::{CredentialStore, NewUser};

use crate::password::{hash_password, verify_password};
use crate::Result;

/// Registers users and checks login attempts.
///
/// Cheap to clone (Arc internals). Hashing runs on the blocking pool so it
/// does not stall the async workers.
#[derive(Clone)]
pub struct AuthService {
    store: Arc<dyn CredentialStore>,
}

impl AuthService {
    /// Create an auth service over `store`.
    pub fn new(store: Arc<dyn CredentialStore>) -> Self {
        Self { store }
    }

    /// The underlying credential store.
    pub fn store(&self) -> &Arc<dyn CredentialStore> {
        &self.store
    }

    /// Store a new user with a hashed password.
    ///
    /// Emails are not checked for uniqueness.
    pub async fn register(&self, name: &str, email: &str, password: &str) -> Result<UserId> {
        let plaintext = password.to_owned();
        let password_hash = tokio::task::spawn_blocking(move || hash_password(&plaintext)).await??;

        let id = self
            .store
            .insert_user(NewUser {
                name: name.to_owned(),
                email: email.to_owned(),
                password_hash,
            })
            .await?;

        log::info!("Registered user {id}");
        Ok(id)
    }

    /// Check an email/password pair.
    ///
    /// Returns the session identity of the first user registered with
    /// `email` when the password matches, and `None` otherwise. Unknown
    /// email and wrong password are indistinguishable to the caller.
    pub async fn authenticate(&self, email: &str, password: &str) -> Result<Option<SessionUser>> {
        let Some(record) = self.store.find_by_email(email).await? else {
            log::debug!("Login failed: no matching user");
            return Ok(None);
        };

        let plaintext = password.to_owned();
        let stored = record.password_hash.clone();
        let verified =
            tokio::task::spawn_blocking(move || verify_password(&plaintext, &stored)).await?;

        if verified {
            log::info!("User {} logged in", record.id);
            Ok(Some(SessionUser::new(record.id, record.name)))
        } else {
            log::debug!("Login failed for user {}: wrong password", record.id);
            Ok(None)
        }
    }
}
