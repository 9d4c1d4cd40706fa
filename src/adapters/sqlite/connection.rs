//! SQLite connection pool management for the seed store.

use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};
use sqlx::SqlitePool;
use thiserror::Error;

/// Errors raised while opening the seed database.
#[derive(Debug, Error)]
pub enum ConnectionError {
    #[error("Invalid database URL: {0}")]
    InvalidDatabaseUrl(String),
    #[error("Failed to create database directory: {0}")]
    DirectoryCreationFailed(#[source] std::io::Error),
    #[error("Failed to create pool: {0}")]
    PoolCreationFailed(#[source] sqlx::Error),
    #[error("Connection check failed: {0}")]
    ConnectionFailed(#[source] sqlx::Error),
}

/// Pool sizing and acquire behavior.
#[derive(Debug, Clone)]
pub struct PoolConfig {
    /// Upper bound on open connections.
    pub max_connections: u32,
    /// Time to wait for a free connection.
    pub acquire_timeout: Duration,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            max_connections: 5,
            acquire_timeout: Duration::from_secs(3),
        }
    }
}

/// Open a pooled connection to the seed database, creating the file and
/// its parent directory when missing.
pub async fn create_pool(
    database_url: &str,
    config: PoolConfig,
) -> Result<SqlitePool, ConnectionError> {
    let options = SqliteConnectOptions::from_str(database_url)
        .map_err(|_| ConnectionError::InvalidDatabaseUrl(database_url.to_string()))?;
    ensure_parent_directory(database_url)?;

    let options = options
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .synchronous(SqliteSynchronous::Normal)
        .busy_timeout(Duration::from_secs(30));

    SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout)
        .connect_with(options)
        .await
        .map_err(ConnectionError::PoolCreationFailed)
}

/// Open a single-connection in-memory database for tests.
pub async fn create_test_pool() -> Result<SqlitePool, ConnectionError> {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")
        .map_err(|_| ConnectionError::InvalidDatabaseUrl("sqlite::memory:".to_string()))?
        .shared_cache(true);

    SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
        .map_err(ConnectionError::PoolCreationFailed)
}

/// Verify the pool can execute a query.
pub async fn verify_connection(pool: &SqlitePool) -> Result<(), ConnectionError> {
    sqlx::query("SELECT 1")
        .fetch_one(pool)
        .await
        .map_err(ConnectionError::ConnectionFailed)?;
    Ok(())
}

fn ensure_parent_directory(database_url: &str) -> Result<(), ConnectionError> {
    let path = database_url
        .strip_prefix("sqlite://")
        .or_else(|| database_url.strip_prefix("sqlite:"))
        .unwrap_or(database_url);

    if path == ":memory:" || path.is_empty() {
        return Ok(());
    }

    if let Some(parent) = Path::new(path).parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent).map_err(ConnectionError::DirectoryCreationFailed)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_test_pool_answers_queries() {
        let pool = create_test_pool().await.expect("Pool should open");
        verify_connection(&pool)
            .await
            .expect("Connection should verify");
    }

    #[tokio::test]
    async fn test_create_pool_makes_parent_directory() {
        let dir = tempfile::tempdir().expect("Temp dir should be created");
        let db_path = dir.path().join("nested").join("seeds.db");
        let url = format!("sqlite://{}", db_path.display());

        let pool = create_pool(&url, PoolConfig::default())
            .await
            .expect("Pool should open");
        verify_connection(&pool)
            .await
            .expect("Connection should verify");
        assert!(db_path.exists());
    }

    #[tokio::test]
    async fn test_invalid_url_is_rejected() {
        let result = create_pool("postgres://not-sqlite", PoolConfig::default()).await;
        assert!(matches!(
            result,
            Err(ConnectionError::InvalidDatabaseUrl(_))
        ));
    }
}
