//! Resource factory port.

use crate::domain::errors::DomainResult;
use crate::domain::models::{Record, ResourceObject};

/// Factory wrapping seed records into serializable resource objects.
///
/// The container treats the output as opaque. Factory failures are
/// surfaced to the caller unchanged.
pub trait ResourceFactory: Send + Sync {
    /// Wrap a record into its serialized resource representation.
    fn create(&self, record: &Record) -> DomainResult<ResourceObject>;
}
