//! Foodchain server entry point.

#![forbid(unsafe_code)]

use clap::Parser;
use foodchain_api::{AppConfig, Args, Server};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "info,foodchain_api=debug,foodchain_auth=debug,foodchain_storage=debug".into()
            }),
        )
        .init();

    let config = AppConfig::from(args);
    tracing::info!(?config, "Loaded configuration");
    if !config.gate_admin {
        tracing::warn!("Admin listing is public; pass --gate-admin to require a login");
    }

    let server = Server::new(config).await?;
    server.run().await?;
    Ok(())
}
