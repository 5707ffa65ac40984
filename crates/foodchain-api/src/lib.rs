//! # foodchain-api
//!
//! HTTP server for the Foodchain web application.
//!
//! This crate provides:
//! - The axum [`router`](server::router) for every page and the JSON lookup endpoint
//! - [`AppConfig`] — immutable process configuration (CLI flags / environment)
//! - [`AppState`] — the shared, read-only state handed to every handler
//! - [`Server`] — opens the credential store and serves until Ctrl-C

#![warn(clippy::all)]

pub mod config;
pub mod error;
pub mod pages;
pub mod routes;
pub mod server;
pub mod state;

pub use config::{AppConfig, Args};
pub use error::{Error, Result};
pub use server::{router, Server};
pub use state::AppState;
