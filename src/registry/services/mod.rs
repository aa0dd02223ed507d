//! Application services for the agent registry.

mod cache;

pub use cache::{RegistryCache, RegistryCacheError, RegistryCacheResult};
