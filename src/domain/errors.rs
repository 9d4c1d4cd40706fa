//! Domain errors for the exemplar resource sampler.

use thiserror::Error;

use crate::domain::models::ModelName;

/// Domain-level errors surfaced by the resource container and its adapters.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("No resources found for model [{0}], make sure the database is seeded")]
    ResourceNotFound(ModelName),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

/// Convenience alias for fallible domain operations.
pub type DomainResult<T> = Result<T, DomainError>;

impl From<sqlx::Error> for DomainError {
    fn from(err: sqlx::Error) -> Self {
        DomainError::DatabaseError(err.to_string())
    }
}

impl From<serde_json::Error> for DomainError {
    fn from(err: serde_json::Error) -> Self {
        DomainError::SerializationError(err.to_string())
    }
}
