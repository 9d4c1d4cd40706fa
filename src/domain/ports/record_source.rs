//! Bulk-read capability ports.

use async_trait::async_trait;
use serde_json::Value;

use crate::domain::errors::DomainResult;
use crate::domain::models::Record;

/// Bulk-read capability for a model's seed records.
///
/// Implementations must honor `limit`: the bound belongs to the read
/// operation itself, not to the caller discarding surplus rows.
#[async_trait]
pub trait RecordSource: Send + Sync {
    /// Fetch up to `limit` records, in storage order.
    async fn fetch_sample(&self, limit: usize) -> DomainResult<Vec<Record>>;
}

/// Raw-read capability of the foreign store behind a proxy model.
#[async_trait]
pub trait BackingStore: Send + Sync {
    /// Fetch up to `limit` raw records, in storage order.
    async fn fetch_all(&self, limit: usize) -> DomainResult<Vec<Value>>;
}
