//! Server port.

use std::sync::Arc;

use super::{RecordSource, ResourceFactory};
use crate::domain::models::ModelName;

/// The surrounding server definition.
///
/// Exposes the resource factory and the record source registered for
/// each model. A model without a registered source has no bulk-read
/// capability and is reported as having no resources.
pub trait Server: Send + Sync {
    /// The factory used to wrap fetched records.
    fn resources(&self) -> &dyn ResourceFactory;

    /// Look up the record source registered for a model.
    fn record_source(&self, model: &ModelName) -> Option<Arc<dyn RecordSource>>;
}
