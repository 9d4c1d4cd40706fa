//! Default JSON:API resource factory.

use serde_json::json;

use crate::domain::errors::DomainResult;
use crate::domain::models::{ModelName, Record, ResourceObject};
use crate::domain::ports::ResourceFactory;

/// Resource factory producing plain JSON:API resource objects.
///
/// Builds `{"type", "id", "attributes"}` values, deriving the resource
/// type from the record's model name. Servers with a richer
/// serialization layer supply their own factory instead.
#[derive(Debug, Clone, Default)]
pub struct JsonApiResourceFactory;

impl JsonApiResourceFactory {
    /// Create the default factory.
    pub fn new() -> Self {
        Self
    }
}

impl ResourceFactory for JsonApiResourceFactory {
    fn create(&self, record: &Record) -> DomainResult<ResourceObject> {
        let value = json!({
            "type": resource_type(&record.model),
            "id": record.id,
            "attributes": record.attributes,
        });

        Ok(ResourceObject::new(value))
    }
}

/// Derive the JSON:API resource type from a model name.
///
/// The final path segment of the name, lower-cased: `app::models::Post`
/// and `Post` both become `post`.
fn resource_type(model: &ModelName) -> String {
    model
        .as_str()
        .rsplit("::")
        .next()
        .unwrap_or_default()
        .to_lowercase()
}
