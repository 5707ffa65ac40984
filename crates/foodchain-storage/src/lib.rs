//! # foodchain-storage
//!
//! The credential store: a single `users` table holding each registered
//! user's name, email, and password hash.
//!
//! This crate provides:
//! - [`CredentialStore`] — the storage abstraction used by the auth service
//! - [`SqliteCredentialStore`] — the persistent SQLite backend
//! - [`MemoryCredentialStore`] — an in-process backend (for testing)

#![warn(clippy::all)]

pub mod database;
pub mod error;
pub mod memory;
pub mod traits;

pub use database::SqliteCredentialStore;
pub use error::{Error, Result};
pub use memory::MemoryCredentialStore;
pub use traits::{CredentialStore, NewUser, UserRecord, UserSummary};
