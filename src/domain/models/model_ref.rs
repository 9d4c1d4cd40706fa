//! Model identity and the reference shapes callers may pass.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Canonical identifier for a data-model type.
///
/// Two references resolving to equal names address the same cache
/// entry inside the resource container.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ModelName(String);

impl ModelName {
    /// Create a model name from any string-like value.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// View the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ModelName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ModelName {
    fn from(name: &str) -> Self {
        Self(name.to_string())
    }
}

impl From<String> for ModelName {
    fn from(name: String) -> Self {
        Self(name)
    }
}

/// Identity contract for native model types.
pub trait Model {
    /// Canonical name of the model type, unique within a server.
    fn model_name() -> ModelName;
}

/// Schema descriptor contract.
///
/// A schema knows which model backs it and the member name its
/// resources are published under.
pub trait ResourceSchema: Send + Sync {
    /// Name of the model backing this schema.
    fn model(&self) -> ModelName;

    /// JSON:API resource type for this schema.
    fn resource_type(&self) -> &str;
}

/// A caller-supplied reference to a model, in one of three shapes.
///
/// Each variant carries exactly what is needed to derive the canonical
/// name, so resolution never inspects types at runtime.
pub enum ModelRef<'a> {
    /// A schema descriptor reporting its backing model.
    Schema(&'a dyn ResourceSchema),
    /// A live model instance, reduced to its type's name.
    Instance(ModelName),
    /// A bare model name.
    Name(ModelName),
}

impl<'a> ModelRef<'a> {
    /// Reference a model through one of its live instances.
    pub fn instance<M: Model>(_instance: &M) -> Self {
        Self::Instance(M::model_name())
    }

    /// Reference a model by name.
    pub fn name(name: impl Into<ModelName>) -> Self {
        Self::Name(name.into())
    }

    /// Reference a model through its schema descriptor.
    pub fn schema(schema: &'a dyn ResourceSchema) -> Self {
        Self::Schema(schema)
    }

    /// Resolve the reference to its canonical model name.
    pub fn canonical_name(&self) -> ModelName {
        match self {
            Self::Schema(schema) => schema.model(),
            Self::Instance(name) | Self::Name(name) => name.clone(),
        }
    }
}

impl From<ModelName> for ModelRef<'_> {
    fn from(name: ModelName) -> Self {
        Self::Name(name)
    }
}

impl From<&str> for ModelRef<'_> {
    fn from(name: &str) -> Self {
        Self::Name(ModelName::from(name))
    }
}
