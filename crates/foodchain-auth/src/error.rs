//! Auth-specific error types.

/// Result type alias for foodchain-auth operations.
pub type Result<T> = std::result::Result<T, AuthError>;

/// Errors that can occur during registration, login, or session handling.
///
/// Invalid credentials are not an error: [`AuthService::authenticate`](crate::AuthService::authenticate)
/// reports them as `Ok(None)`.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum AuthError {
    /// The credential store failed.
    #[error("credential store error: {0}")]
    Storage(#[from] foodchain_storage::Error),

    /// Password hashing failed.
    #[error("password hashing failed: {0}")]
    Hash(String),

    /// The session store failed.
    #[error("session error: {0}")]
    Session(String),

    /// A blocking hashing task did not complete.
    #[error("background task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

impl AuthError {
    /// Creates a hashing error.
    pub fn hash<S: Into<String>>(message: S) -> Self {
        AuthError::Hash(message.into())
    }

    /// Creates a session error.
    pub fn session<S: Into<String>>(message: S) -> Self {
        AuthError::Session(message.into())
    }
}
