//! In-memory record sources.
//!
//! Used for fixtures, tests, and models whose seed data is assembled
//! in process rather than read from storage.

use async_trait::async_trait;
use serde_json::Value;

use crate::domain::errors::DomainResult;
use crate::domain::models::Record;
use crate::domain::ports::{BackingStore, RecordSource};

/// A record source serving a fixed list of records.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRecordSource {
    records: Vec<Record>,
}

impl InMemoryRecordSource {
    /// Create a source over a fixed list of records.
    pub fn new(records: Vec<Record>) -> Self {
        Self { records }
    }
}

#[async_trait]
impl RecordSource for InMemoryRecordSource {
    async fn fetch_sample(&self, limit: usize) -> DomainResult<Vec<Record>> {
        Ok(self.records.iter().take(limit).cloned().collect())
    }
}

/// A backing store serving a fixed list of raw values.
#[derive(Debug, Clone, Default)]
pub struct InMemoryBackingStore {
    values: Vec<Value>,
}

impl InMemoryBackingStore {
    /// Create a store over a fixed list of raw values.
    pub fn new(values: Vec<Value>) -> Self {
        Self { values }
    }
}

#[async_trait]
impl BackingStore for InMemoryBackingStore {
    async fn fetch_all(&self, limit: usize) -> DomainResult<Vec<Value>> {
        Ok(self.values.iter().take(limit).cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_fetch_sample_honors_limit() {
        let records = (0..5)
            .map(|i| Record::new("posts", format!("{i}"), json!({})))
            .collect();
        let source = InMemoryRecordSource::new(records);

        let sample = source.fetch_sample(2).await.expect("Fetch should succeed");
        assert_eq!(sample.len(), 2);
        assert_eq!(sample[0].id, "0");
    }

    #[tokio::test]
    async fn test_backing_store_honors_limit() {
        let store = InMemoryBackingStore::new(vec![json!(1), json!(2), json!(3)]);

        let values = store.fetch_all(2).await.expect("Fetch should succeed");
        assert_eq!(values, vec![json!(1), json!(2)]);
    }
}
