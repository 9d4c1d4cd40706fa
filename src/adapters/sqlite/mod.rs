//! SQLite adapters for the seed record store.

pub mod connection;
pub mod migrations;
pub mod record_source;

pub use connection::{create_pool, create_test_pool, verify_connection, ConnectionError, PoolConfig};
pub use migrations::{all_embedded_migrations, Migration, MigrationError, Migrator};
pub use record_source::SqliteRecordSource;
