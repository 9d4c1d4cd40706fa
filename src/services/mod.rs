pub mod resource_container;
pub mod server;

pub use resource_container::ResourceContainer;
pub use server::RegistryServer;
