//! SQLite credential store.

use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

use async_trait::async_trait;
use foodchain_core::UserId;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Pool, Sqlite};

use crate::traits::{CredentialStore, NewUser, UserRecord, UserSummary};
use crate::Result;

const SCHEMA_SQL: &str = "CREATE TABLE IF NOT EXISTS users \
     (id INTEGER PRIMARY KEY AUTOINCREMENT, name TEXT, email TEXT, password TEXT)";

/// Row shape of the `users` table. Text columns are nullable in the schema.
#[derive(sqlx::FromRow)]
struct UserRow {
    id: i64,
    name: Option<String>,
    email: Option<String>,
    password: Option<String>,
}

impl From<UserRow> for UserRecord {
    fn from(row: UserRow) -> Self {
        Self {
            id: UserId::new(row.id),
            name: row.name.unwrap_or_default(),
            email: row.email.unwrap_or_default(),
            password_hash: row.password.unwrap_or_default(),
        }
    }
}

#[derive(sqlx::FromRow)]
struct SummaryRow {
    id: i64,
    name: Option<String>,
    email: Option<String>,
}

impl From<SummaryRow> for UserSummary {
    fn from(row: SummaryRow) -> Self {
        Self {
            id: UserId::new(row.id),
            name: row.name.unwrap_or_default(),
            email: row.email.unwrap_or_default(),
        }
    }
}

/// Credential store backed by a local SQLite database file.
///
/// The `users` table is created on open if it does not exist.
#[derive(Clone, Debug)]
pub struct SqliteCredentialStore {
    pool: Pool<Sqlite>,
}

impl SqliteCredentialStore {
    /// Open (creating if missing) the database file at `path`.
    pub async fn open(path: impl AsRef<Path>, max_connections: u32) -> Result<Self> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let opts = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true)
            .busy_timeout(Duration::from_secs(5));

        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections.max(1))
            .connect_with(opts)
            .await?;

        log::debug!("Opened credential store at {}", path.display());
        Self::from_pool(pool).await
    }

    /// A private in-memory database, dropped with the store.
    ///
    /// Uses a single long-lived connection: every SQLite `:memory:`
    /// connection is its own database.
    pub async fn in_memory() -> Result<Self> {
        let opts = SqliteConnectOptions::from_str("sqlite::memory:")?;
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(opts)
            .await?;
        Self::from_pool(pool).await
    }

    /// Wrap an existing pool, creating the schema if needed.
    pub async fn from_pool(pool: Pool<Sqlite>) -> Result<Self> {
        let store = Self { pool };
        store.migrate().await?;
        Ok(store)
    }

    /// Create the `users` table if absent. Idempotent.
    pub async fn migrate(&self) -> Result<()> {
        sqlx::query(SCHEMA_SQL).execute(&self.pool).await?;
        Ok(())
    }

    /// Get a reference to the connection pool.
    pub fn pool(&self) -> &Pool<Sqlite> {
        &self.pool
    }
}

#[async_trait]
impl CredentialStore for SqliteCredentialStore {
    async fn insert_user(&self, user: NewUser) -> Result<UserId> {
        let result = sqlx::query("INSERT INTO users (name, email, password) VALUES (?, ?, ?)")
            .bind(&user.name)
            .bind(&user.email)
            .bind(&user.password_hash)
            .execute(&self.pool)
            .await?;
        Ok(UserId::new(result.last_insert_rowid()))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<UserRecord>> {
        let row = sqlx::query_as::<_, UserRow>(
            "SELECT id, name, email, password FROM users WHERE email = ? ORDER BY id LIMIT 1",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.map(UserRecord::from))
    }

    async fn list_users(&self) -> Result<Vec<UserSummary>> {
        let rows = sqlx::query_as::<_, SummaryRow>("SELECT id, name, email FROM users ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows.into_iter().map(UserSummary::from).collect())
    }

    async fn health_check(&self) -> Result<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
