//! SQLite implementation of the `RecordSource` capability.

use async_trait::async_trait;
use chrono::Utc;
use sqlx::SqlitePool;

use crate::domain::errors::DomainResult;
use crate::domain::models::{ModelName, Record};
use crate::domain::ports::RecordSource;

/// Record source reading one model's seed rows from SQLite.
#[derive(Clone)]
pub struct SqliteRecordSource {
    pool: SqlitePool,
    model: ModelName,
}

#[derive(sqlx::FromRow)]
struct SeedRow {
    id: String,
    attributes: String,
}

impl SqliteRecordSource {
    /// Create a source for one model over a pool.
    pub fn new(pool: SqlitePool, model: impl Into<ModelName>) -> Self {
        Self {
            pool,
            model: model.into(),
        }
    }

    /// The model this source serves.
    pub fn model(&self) -> &ModelName {
        &self.model
    }

    /// Insert a seed record under this source's model.
    pub async fn insert(&self, record: &Record) -> DomainResult<()> {
        let attributes = serde_json::to_string(&record.attributes)?;

        sqlx::query(
            "INSERT INTO seed_records (model, id, attributes, created_at) VALUES (?, ?, ?, ?)",
        )
        .bind(self.model.as_str())
        .bind(&record.id)
        .bind(attributes)
        .bind(Utc::now().to_rfc3339())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    fn to_record(&self, row: SeedRow) -> DomainResult<Record> {
        let attributes = serde_json::from_str(&row.attributes)?;
        Ok(Record::new(self.model.clone(), row.id, attributes))
    }
}

#[async_trait]
impl RecordSource for SqliteRecordSource {
    async fn fetch_sample(&self, limit: usize) -> DomainResult<Vec<Record>> {
        let limit = i64::try_from(limit).unwrap_or(i64::MAX);

        let rows: Vec<SeedRow> = sqlx::query_as(
            "SELECT id, attributes FROM seed_records WHERE model = ? ORDER BY rowid LIMIT ?",
        )
        .bind(self.model.as_str())
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(|row| self.to_record(row)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    use crate::adapters::sqlite::connection::create_test_pool;
    use crate::adapters::sqlite::migrations::{all_embedded_migrations, Migrator};

    async fn migrated_pool() -> SqlitePool {
        let pool = create_test_pool().await.expect("Pool should open");
        Migrator::new(pool.clone())
            .run(all_embedded_migrations())
            .await
            .expect("Migrations should apply");
        pool
    }

    #[tokio::test]
    async fn test_fetch_is_bounded_and_ordered() {
        let pool = migrated_pool().await;
        let source = SqliteRecordSource::new(pool, "posts");

        for i in 0..5 {
            let record = Record::new("posts", format!("post-{i}"), json!({"n": i}));
            source.insert(&record).await.expect("Insert should succeed");
        }

        let sample = source.fetch_sample(3).await.expect("Fetch should succeed");

        assert_eq!(sample.len(), 3);
        assert_eq!(sample[0].id, "post-0");
        assert_eq!(sample[2].id, "post-2");
        assert_eq!(sample[1].attributes["n"], 1);
    }

    #[tokio::test]
    async fn test_models_are_isolated() {
        let pool = migrated_pool().await;
        let posts = SqliteRecordSource::new(pool.clone(), "posts");
        let comments = SqliteRecordSource::new(pool, "comments");

        posts
            .insert(&Record::new("posts", "1", json!({})))
            .await
            .expect("Insert should succeed");

        let sample = comments
            .fetch_sample(3)
            .await
            .expect("Fetch should succeed");
        assert!(sample.is_empty());
    }
}
