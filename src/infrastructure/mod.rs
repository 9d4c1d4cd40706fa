//! Infrastructure layer module
//!
//! Ambient concerns that sit outside the domain:
//! - Configuration management (figment)
//! - Logging setup (tracing)
//!
//! Storage adapters satisfying the domain ports live under `adapters`.

pub mod config;
pub mod logging;
