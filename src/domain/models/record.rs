//! Seed records and the opaque resource wrapper built from them.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use super::ModelName;

/// A single seed record for a model.
///
/// Attributes are carried as raw JSON; the record does not interpret them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Record identifier within its model.
    pub id: String,
    /// Model this record belongs to.
    pub model: ModelName,
    /// Raw attribute payload.
    pub attributes: Value,
}

impl Record {
    /// Create a record with an explicit id.
    pub fn new(model: impl Into<ModelName>, id: impl Into<String>, attributes: Value) -> Self {
        Self {
            id: id.into(),
            model: model.into(),
            attributes,
        }
    }

    /// Create a record with a generated UUID v4 id.
    ///
    /// Intended for seeding fixture data where ids are not significant.
    pub fn with_generated_id(model: impl Into<ModelName>, attributes: Value) -> Self {
        Self::new(model, Uuid::new_v4().to_string(), attributes)
    }
}

/// An opaque serialized resource wrapper.
///
/// Produced by a resource factory; the container stores, counts, and
/// returns these without ever looking inside.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResourceObject(Value);

impl ResourceObject {
    /// Wrap an already-serialized resource value.
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    /// Borrow the underlying JSON value.
    pub fn as_value(&self) -> &Value {
        &self.0
    }

    /// Unwrap into the underlying JSON value.
    pub fn into_inner(self) -> Value {
        self.0
    }
}
