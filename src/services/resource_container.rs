//! Memoizing container mapping models to cached example resources.
//!
//! Resolves a model reference to a bounded sample of wrapped resources,
//! fetching through the server's record source on first access and
//! serving every later query for the same model from the cache.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::debug;

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::models::{ModelName, ModelRef, ResourceObject};
use crate::domain::ports::Server;

/// Default number of example resources kept per model.
pub const DEFAULT_SAMPLE_SIZE: usize = 3;

/// Lazily populated cache of example resources, keyed by model name.
///
/// One container serves one build context. Entries are populated on
/// first access and never recomputed or invalidated; repeated queries
/// for the same model return the same wrapped resources.
pub struct ResourceContainer {
    server: Arc<dyn Server>,
    sample_size: usize,
    cache: HashMap<ModelName, Vec<Arc<ResourceObject>>>,
}

impl ResourceContainer {
    /// Create a container with the default sample size.
    pub fn new(server: Arc<dyn Server>) -> Self {
        Self::with_sample_size(server, DEFAULT_SAMPLE_SIZE)
    }

    /// Create a container keeping up to `sample_size` resources per model.
    pub fn with_sample_size(server: Arc<dyn Server>, sample_size: usize) -> Self {
        Self {
            server,
            sample_size,
            cache: HashMap::new(),
        }
    }

    /// Resolve a model reference to its first cached example resource.
    ///
    /// # Errors
    /// Returns [`DomainError::ResourceNotFound`] when no seed records
    /// exist for the resolved model.
    pub async fn resource(&mut self, model: ModelRef<'_>) -> DomainResult<Arc<ResourceObject>> {
        let name = model.canonical_name();
        let entry = self.entry(&name).await?;

        entry
            .first()
            .cloned()
            .ok_or(DomainError::ResourceNotFound(name))
    }

    /// Resolve a model reference to all of its cached example resources.
    ///
    /// # Errors
    /// Returns [`DomainError::ResourceNotFound`] when no seed records
    /// exist for the resolved model.
    pub async fn resources(
        &mut self,
        model: ModelRef<'_>,
    ) -> DomainResult<Vec<Arc<ResourceObject>>> {
        let name = model.canonical_name();
        let entry = self.entry(&name).await?;

        if entry.is_empty() {
            return Err(DomainError::ResourceNotFound(name));
        }

        Ok(entry.to_vec())
    }

    async fn entry(&mut self, name: &ModelName) -> DomainResult<&[Arc<ResourceObject>]> {
        if !self.cache.contains_key(name) {
            self.populate(name).await?;
        }

        // populate inserts an entry for every model, even an empty one
        Ok(self.cache.get(name).map(Vec::as_slice).unwrap_or_default())
    }

    async fn populate(&mut self, name: &ModelName) -> DomainResult<()> {
        let resources = match self.server.record_source(name) {
            Some(source) => {
                let records = source.fetch_sample(self.sample_size).await?;
                debug!(model = %name, fetched = records.len(), "Populating resource cache");

                records
                    .iter()
                    .take(self.sample_size)
                    .map(|record| self.server.resources().create(record))
                    .collect::<DomainResult<Vec<_>>>()?
                    .into_iter()
                    .map(Arc::new)
                    .collect()
            }
            None => {
                debug!(model = %name, "No record source registered for model");
                Vec::new()
            }
        };

        self.cache.insert(name.clone(), resources);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;
    use serde_json::json;

    use crate::adapters::jsonapi::JsonApiResourceFactory;
    use crate::adapters::memory::InMemoryRecordSource;
    use crate::domain::models::{Model, Record, ResourceSchema};
    use crate::domain::ports::RecordSource;
    use crate::services::server::RegistryServer;

    struct Post;

    impl Model for Post {
        fn model_name() -> ModelName {
            ModelName::from("posts")
        }
    }

    struct PostSchema;

    impl ResourceSchema for PostSchema {
        fn model(&self) -> ModelName {
            ModelName::from("posts")
        }

        fn resource_type(&self) -> &str {
            "posts"
        }
    }

    /// Counts fetches so tests can assert population happens once.
    struct CountingSource {
        inner: InMemoryRecordSource,
        calls: Arc<AtomicUsize>,
    }

    #[async_trait]
    impl RecordSource for CountingSource {
        async fn fetch_sample(&self, limit: usize) -> DomainResult<Vec<Record>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.inner.fetch_sample(limit).await
        }
    }

    /// A source that ignores the limit, as a fetch-all storage layer would.
    struct OverfetchingSource {
        records: Vec<Record>,
    }

    #[async_trait]
    impl RecordSource for OverfetchingSource {
        async fn fetch_sample(&self, _limit: usize) -> DomainResult<Vec<Record>> {
            Ok(self.records.clone())
        }
    }

    fn post_records(count: usize) -> Vec<Record> {
        (0..count)
            .map(|i| Record::new("posts", format!("post-{i}"), json!({"title": format!("Post {i}")})))
            .collect()
    }

    fn counting_server(records: Vec<Record>) -> (Arc<RegistryServer>, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        let source = CountingSource {
            inner: InMemoryRecordSource::new(records),
            calls: Arc::clone(&calls),
        };

        let mut server = RegistryServer::new(Arc::new(JsonApiResourceFactory::new()));
        server.register("posts", Arc::new(source));
        (Arc::new(server), calls)
    }

    #[tokio::test]
    async fn test_population_runs_once_per_model() {
        let (server, calls) = counting_server(post_records(2));
        let mut container = ResourceContainer::new(server);

        container
            .resources(ModelRef::name("posts"))
            .await
            .expect("Seeded model should have resources");
        container
            .resource(ModelRef::name("posts"))
            .await
            .expect("Seeded model should have a resource");
        container
            .resources(ModelRef::name("posts"))
            .await
            .expect("Seeded model should have resources");

        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_resource_is_first_of_resources() {
        let (server, _calls) = counting_server(post_records(3));
        let mut container = ResourceContainer::new(server);

        let all = container
            .resources(ModelRef::name("posts"))
            .await
            .expect("Seeded model should have resources");
        let single = container
            .resource(ModelRef::name("posts"))
            .await
            .expect("Seeded model should have a resource");

        assert!(Arc::ptr_eq(&single, &all[0]));
    }

    #[tokio::test]
    async fn test_overfetching_source_is_truncated() {
        let source = OverfetchingSource {
            records: post_records(7),
        };
        let mut server = RegistryServer::new(Arc::new(JsonApiResourceFactory::new()));
        server.register("posts", Arc::new(source));
        let mut container = ResourceContainer::new(Arc::new(server));

        let resources = container
            .resources(ModelRef::name("posts"))
            .await
            .expect("Seeded model should have resources");

        assert_eq!(resources.len(), DEFAULT_SAMPLE_SIZE);
        assert_eq!(resources[0].as_value()["id"], "post-0");
        assert_eq!(resources[2].as_value()["id"], "post-2");
    }

    #[tokio::test]
    async fn test_missing_seed_data_reports_model_name() {
        let (server, calls) = counting_server(Vec::new());
        let mut container = ResourceContainer::new(server);

        let err = container
            .resource(ModelRef::name("posts"))
            .await
            .expect_err("Unseeded model should have no resource");
        assert!(matches!(err, DomainError::ResourceNotFound(_)));
        assert!(err.to_string().contains("[posts]"));

        let err = container
            .resources(ModelRef::name("posts"))
            .await
            .expect_err("Unseeded model should have no resources");
        assert!(matches!(err, DomainError::ResourceNotFound(_)));

        // The empty entry is cached, not re-fetched
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_unregistered_model_has_no_resources() {
        let server = RegistryServer::new(Arc::new(JsonApiResourceFactory::new()));
        let mut container = ResourceContainer::new(Arc::new(server));

        let err = container
            .resources(ModelRef::name("ghosts"))
            .await
            .expect_err("Unregistered model should have no resources");
        assert!(matches!(err, DomainError::ResourceNotFound(_)));
        assert!(err.to_string().contains("[ghosts]"));
    }

    #[tokio::test]
    async fn test_schema_and_instance_share_cache_entry() {
        let (server, calls) = counting_server(post_records(1));
        let mut container = ResourceContainer::new(server);

        let schema = PostSchema;
        let by_schema = container
            .resource(ModelRef::schema(&schema))
            .await
            .expect("Seeded model should have a resource");
        let by_instance = container
            .resource(ModelRef::instance(&Post))
            .await
            .expect("Seeded model should have a resource");

        assert!(Arc::ptr_eq(&by_schema, &by_instance));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_custom_sample_size_is_honored() {
        let (server, _calls) = counting_server(post_records(4));
        let mut container = ResourceContainer::with_sample_size(server, 2);

        let resources = container
            .resources(ModelRef::name("posts"))
            .await
            .expect("Seeded model should have resources");

        assert_eq!(resources.len(), 2);
    }
}
