//! Shared application state.

use std::sync::Arc;

use foodchain_auth::AuthService;
use foodchain_core::Catalog;
use foodchain_storage::CredentialStore;

use crate::AppConfig;

/// State handed to every request handler.
///
/// Constructed once at startup and never mutated afterwards; cloning is
/// cheap (Arc internals).
#[derive(Clone)]
pub struct AppState {
    /// Process configuration.
    pub config: Arc<AppConfig>,
    /// The ecosystem catalog.
    pub catalog: Arc<Catalog>,
    /// Registration and login.
    pub auth: AuthService,
}

impl AppState {
    /// Assemble state from its parts.
    pub fn new(config: AppConfig, catalog: Catalog, store: Arc<dyn CredentialStore>) -> Self {
        Self {
            config: Arc::new(config),
            catalog: Arc::new(catalog),
            auth: AuthService::new(store),
        }
    }

    /// The credential store behind the auth service.
    pub fn store(&self) -> &Arc<dyn CredentialStore> {
        self.auth.store()
    }
}
