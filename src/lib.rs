//! Exemplar - Seeded Resource Example Sampling
//!
//! Exemplar resolves data-model references to small, cached samples of
//! serialized resource objects, for embedding example documents in
//! generated OpenAPI specifications. Seed records are read through
//! capability traits, wrapped by a resource factory, and memoized per
//! model for the lifetime of the container.
//!
//! # Architecture
//!
//! This crate follows Clean Architecture / Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain`): Model identity, seed records, errors,
//!   and the capability ports concrete adapters implement
//! - **Service Layer** (`services`): The memoizing resource container
//!   and the registry server definition
//! - **Adapter Layer** (`adapters`): SQLite seed store, proxy and
//!   in-memory sources, and the default JSON:API resource factory
//! - **Infrastructure Layer** (`infrastructure`): Configuration loading
//!   and logging setup
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//!
//! use exemplar::adapters::jsonapi::JsonApiResourceFactory;
//! use exemplar::adapters::sqlite::SqliteRecordSource;
//! use exemplar::domain::models::ModelRef;
//! use exemplar::services::{RegistryServer, ResourceContainer};
//!
//! async fn example(pool: sqlx::SqlitePool) -> exemplar::DomainResult<()> {
//!     let mut server = RegistryServer::new(Arc::new(JsonApiResourceFactory::new()));
//!     server.register("posts", Arc::new(SqliteRecordSource::new(pool, "posts")));
//!
//!     let mut container = ResourceContainer::new(Arc::new(server));
//!     let example = container.resource(ModelRef::name("posts")).await?;
//!     Ok(())
//! }
//! ```

pub mod adapters;
pub mod domain;
pub mod infrastructure;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::errors::{DomainError, DomainResult};
pub use domain::models::{
    Config, DatabaseConfig, LoggingConfig, Model, ModelName, ModelRef, Record, ResourceObject,
    ResourceSchema,
};
pub use domain::ports::{BackingStore, RecordSource, ResourceFactory, Server};
pub use infrastructure::config::{ConfigError, ConfigLoader};
pub use infrastructure::logging::init_logging;
pub use services::{RegistryServer, ResourceContainer};
