//! Registry-backed server definition.

use std::collections::HashMap;
use std::sync::Arc;

use crate::domain::models::ModelName;
use crate::domain::ports::{RecordSource, ResourceFactory, Server};

/// Server definition wiring model names to their record sources.
///
/// The standard [`Server`] implementation: a resource factory plus a
/// registry of record sources keyed by model name.
pub struct RegistryServer {
    factory: Arc<dyn ResourceFactory>,
    sources: HashMap<ModelName, Arc<dyn RecordSource>>,
}

impl RegistryServer {
    /// Create a server around a resource factory.
    pub fn new(factory: Arc<dyn ResourceFactory>) -> Self {
        Self {
            factory,
            sources: HashMap::new(),
        }
    }

    /// Register the record source for a model.
    ///
    /// A later registration for the same model replaces the earlier one.
    pub fn register(&mut self, model: impl Into<ModelName>, source: Arc<dyn RecordSource>) {
        self.sources.insert(model.into(), source);
    }

    /// Number of registered record sources.
    pub fn len(&self) -> usize {
        self.sources.len()
    }

    /// Whether no record source is registered.
    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }
}

impl Server for RegistryServer {
    fn resources(&self) -> &dyn ResourceFactory {
        self.factory.as_ref()
    }

    fn record_source(&self, model: &ModelName) -> Option<Arc<dyn RecordSource>> {
        self.sources.get(model).map(Arc::clone)
    }
}
