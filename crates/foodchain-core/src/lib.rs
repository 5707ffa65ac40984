//! Foodchain Core — shared types for the Foodchain web application.
//!
//! This crate has no internal Foodchain dependencies (dependency level 0).
//!
//! # Modules
//!
//! - [`catalog`]: The immutable ecosystem catalog ([`Catalog`], [`Ecosystem`], [`Species`])
//! - [`user`]: User identity types shared by storage, auth, and the HTTP layer

pub mod catalog;
pub mod user;

pub use catalog::{Catalog, Ecosystem, Species};
pub use user::{SessionUser, UserId};
