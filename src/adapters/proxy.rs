//! Proxy record source for models backed by a foreign store.
//!
//! Some models own no native seed records; their data lives in an
//! external system reached through a `BackingStore`. `ProxySource`
//! adapts such a store to the `RecordSource` capability by wrapping
//! each raw record into the model's own representation, preserving
//! the store's order.

use async_trait::async_trait;
use serde_json::Value;

use crate::domain::errors::DomainResult;
use crate::domain::models::{ModelName, Record};
use crate::domain::ports::{BackingStore, RecordSource};

/// Wrap function converting a foreign record into a [`Record`].
pub type WrapFn = fn(&ModelName, Value) -> Record;

/// Record source adapting a foreign backing store to a model.
pub struct ProxySource<B> {
    model: ModelName,
    backing: B,
    wrap: WrapFn,
}

impl<B> ProxySource<B> {
    /// Create a proxy source with the default wrap function.
    pub fn new(model: impl Into<ModelName>, backing: B) -> Self {
        Self {
            model: model.into(),
            backing,
            wrap: default_wrap,
        }
    }

    /// Replace the wrap function.
    #[must_use]
    pub fn wrap_with(mut self, wrap: WrapFn) -> Self {
        self.wrap = wrap;
        self
    }
}

/// Default wrap: the raw value becomes the attribute payload, with its
/// `id` member (stringified) as the record id when present.
fn default_wrap(model: &ModelName, raw: Value) -> Record {
    let id = match raw.get("id") {
        Some(Value::String(id)) => Some(id.clone()),
        Some(Value::Number(id)) => Some(id.to_string()),
        _ => None,
    };

    match id {
        Some(id) => Record::new(model.clone(), id, raw),
        None => Record::with_generated_id(model.clone(), raw),
    }
}

#[async_trait]
impl<B: BackingStore> RecordSource for ProxySource<B> {
    async fn fetch_sample(&self, limit: usize) -> DomainResult<Vec<Record>> {
        let raw = self.backing.fetch_all(limit).await?;

        Ok(raw
            .into_iter()
            .map(|value| (self.wrap)(&self.model, value))
            .collect())
    }
}
