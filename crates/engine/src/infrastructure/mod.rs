//! Infrastructure implementations.
//!
//! Contains port trait implementations for the registry and settings store.

pub mod config;
pub mod memory_registry;
pub mod ports;
pub mod settings;

pub use config::AppConfig;
pub use memory_registry::{InMemoryTownRegistry, RegistrySnapshot};
pub use settings::JsonSettingsRepo;
