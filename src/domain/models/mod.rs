pub mod config;
pub mod model_ref;
pub mod record;

pub use config::{Config, DatabaseConfig, LoggingConfig};
pub use model_ref::{Model, ModelName, ModelRef, ResourceSchema};
pub use record::{Record, ResourceObject};
