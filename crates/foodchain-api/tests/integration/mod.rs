mod admin;
mod auth_flow;
mod catalog_api;
mod config_env;
