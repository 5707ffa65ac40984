//! Process configuration.
//!
//! [`Args`] is the command line (every flag also reads an environment
//! variable); it converts into the immutable [`AppConfig`] built once at
//! startup.

use std::fmt;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

use clap::Parser;

/// Default listening port.
pub const DEFAULT_PORT: u16 = 5000;

/// Default SQLite database file.
pub const DEFAULT_DATABASE: &str = "users.db";

/// Foodchain — register, log in, and explore ecosystem food chains
#[derive(Parser, Debug)]
#[command(name = "foodchain")]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Address to bind
    #[arg(long, env = "FOODCHAIN_HOST", default_value_t = IpAddr::V4(Ipv4Addr::UNSPECIFIED))]
    pub host: IpAddr,

    /// Port to listen on
    #[arg(short, long, env = "PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// SQLite database file holding registered users
    #[arg(short, long, env = "FOODCHAIN_DATABASE", default_value = DEFAULT_DATABASE)]
    pub database: PathBuf,

    /// Secret used to sign session cookies (random per process if unset)
    #[arg(long, env = "FOODCHAIN_SECRET_KEY", hide_env_values = true)]
    pub secret_key: Option<String>,

    /// Maximum open database connections
    #[arg(long, env = "FOODCHAIN_MAX_CONNECTIONS", default_value_t = 1)]
    pub max_connections: u32,

    /// Require a logged-in session for the admin listing
    #[arg(long, env = "FOODCHAIN_GATE_ADMIN")]
    pub gate_admin: bool,
}

/// Immutable application configuration.
#[derive(Clone)]
pub struct AppConfig {
    /// Address to bind.
    pub host: IpAddr,
    /// Port to listen on.
    pub port: u16,
    /// SQLite database file.
    pub database: PathBuf,
    /// Session cookie signing secret.
    pub secret_key: Option<String>,
    /// Maximum open database connections.
    pub max_connections: u32,
    /// Whether `/admin` requires a session.
    pub gate_admin: bool,
}

impl AppConfig {
    /// The socket address to listen on.
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            database: PathBuf::from(DEFAULT_DATABASE),
            secret_key: None,
            max_connections: 1,
            gate_admin: false,
        }
    }
}

impl From<Args> for AppConfig {
    fn from(args: Args) -> Self {
        Self {
            host: args.host,
            port: args.port,
            database: args.database,
            secret_key: args.secret_key,
            max_connections: args.max_connections,
            gate_admin: args.gate_admin,
        }
    }
}

impl fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("database", &self.database)
            .field("secret_key", &self.secret_key.as_ref().map(|_| "<redacted>"))
            .field("max_connections", &self.max_connections)
            .field("gate_admin", &self.gate_admin)
            .finish()
    }
}
