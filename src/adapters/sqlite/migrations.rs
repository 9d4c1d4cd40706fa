//! Embedded migrations for the seed store schema.

use sqlx::SqlitePool;
use thiserror::Error;

/// Errors raised while applying migrations.
#[derive(Debug, Error)]
pub enum MigrationError {
    #[error("Failed to execute migration {version}: {source}")]
    ExecutionFailed {
        version: i64,
        #[source]
        source: sqlx::Error,
    },
    #[error("Failed to read schema version: {0}")]
    VersionCheckFailed(#[source] sqlx::Error),
}

/// A single versioned schema change.
#[derive(Debug, Clone)]
pub struct Migration {
    /// Monotonic version, unique across the schema's history.
    pub version: i64,
    /// Human-readable summary recorded in `schema_migrations`.
    pub description: String,
    /// DDL to execute.
    pub sql: String,
}

/// Applies embedded migrations in version order.
pub struct Migrator {
    pool: SqlitePool,
}

impl Migrator {
    /// Create a migrator over a pool.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Apply every migration newer than the current schema version.
    ///
    /// Returns the number of migrations applied.
    pub async fn run(&self, migrations: Vec<Migration>) -> Result<usize, MigrationError> {
        self.ensure_migrations_table().await?;
        let current = self.current_version().await?;

        let mut applied = 0;
        for migration in migrations.into_iter().filter(|m| m.version > current) {
            self.apply(&migration).await?;
            applied += 1;
        }

        Ok(applied)
    }

    /// Latest applied schema version, 0 when none.
    pub async fn current_version(&self) -> Result<i64, MigrationError> {
        let result: Option<(i64,)> =
            sqlx::query_as("SELECT COALESCE(MAX(version), 0) FROM schema_migrations")
                .fetch_optional(&self.pool)
                .await
                .map_err(MigrationError::VersionCheckFailed)?;

        Ok(result.map_or(0, |(v,)| v))
    }

    async fn ensure_migrations_table(&self) -> Result<(), MigrationError> {
        sqlx::query(
            "CREATE TABLE IF NOT EXISTS schema_migrations (
                version INTEGER PRIMARY KEY,
                applied_at TEXT NOT NULL DEFAULT (datetime('now')),
                description TEXT
            )",
        )
        .execute(&self.pool)
        .await
        .map_err(|e| MigrationError::ExecutionFailed {
            version: 0,
            source: e,
        })?;
        Ok(())
    }

    async fn apply(&self, migration: &Migration) -> Result<(), MigrationError> {
        sqlx::raw_sql(&migration.sql)
            .execute(&self.pool)
            .await
            .map_err(|e| MigrationError::ExecutionFailed {
                version: migration.version,
                source: e,
            })?;

        sqlx::query("INSERT INTO schema_migrations (version, description) VALUES (?, ?)")
            .bind(migration.version)
            .bind(&migration.description)
            .execute(&self.pool)
            .await
            .map_err(|e| MigrationError::ExecutionFailed {
                version: migration.version,
                source: e,
            })?;

        Ok(())
    }
}

/// All migrations embedded in this crate, in version order.
pub fn all_embedded_migrations() -> Vec<Migration> {
    vec![seed_records_migration()]
}

fn seed_records_migration() -> Migration {
    Migration {
        version: 1,
        description: "Seed records table".to_string(),
        sql: include_str!("../../../migrations/001_seed_records.sql").to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::sqlite::connection::create_test_pool;

    #[tokio::test]
    async fn test_migrations_apply_once() {
        let pool = create_test_pool().await.expect("Pool should open");
        let migrator = Migrator::new(pool);

        let applied = migrator
            .run(all_embedded_migrations())
            .await
            .expect("Migrations should apply");
        assert_eq!(applied, 1);
        assert_eq!(
            migrator
                .current_version()
                .await
                .expect("Version should read"),
            1
        );

        let applied = migrator
            .run(all_embedded_migrations())
            .await
            .expect("Re-run should be a no-op");
        assert_eq!(applied, 0);
    }
}
