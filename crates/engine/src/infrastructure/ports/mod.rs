//! Port traits for infrastructure boundaries.
//!
//! These are the ONLY abstractions in the engine. Everything else is concrete types.
//! Ports exist for:
//! - The town registry (could swap the in-memory snapshot for a live server)
//! - The settings store (could swap the JSON document for another backend)

mod error;
mod repos;

pub use error::{RegistryError, SettingsError};
pub use repos::{SettingsRepo, TownRegistry};

// =============================================================================
// Test-Only Mocks (only available during test builds)
// =============================================================================
#[cfg(test)]
pub use repos::{MockSettingsRepo, MockTownRegistry};
