//! Common test utilities for integration tests
//!
//! Shared fixtures and helpers used across the integration suite.

use serde_json::json;
use sqlx::SqlitePool;

use exemplar::adapters::sqlite::{
    all_embedded_migrations, create_test_pool, Migrator, SqliteRecordSource,
};
use exemplar::domain::models::Record;

/// Create a migrated in-memory seed database.
pub async fn seed_pool() -> SqlitePool {
    let pool = create_test_pool()
        .await
        .expect("Failed to open in-memory pool");
    Migrator::new(pool.clone())
        .run(all_embedded_migrations())
        .await
        .expect("Failed to run migrations");
    pool
}

/// Seed `count` post records and return their record source.
pub async fn seeded_posts(pool: &SqlitePool, count: usize) -> SqliteRecordSource {
    let source = SqliteRecordSource::new(pool.clone(), "posts");
    for i in 0..count {
        let record = Record::new(
            "posts",
            format!("post-{i}"),
            json!({"title": format!("Post {i}")}),
        );
        source.insert(&record).await.expect("Failed to seed record");
    }
    source
}

/// Setup test logging
///
/// Initializes a tracing subscriber for test output.
#[allow(dead_code)]
pub fn setup_test_logging() {
    use tracing_subscriber::fmt;

    let _ = fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();
}
