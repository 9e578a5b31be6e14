//! Test fixtures loader for JSON fixture files and common test helpers.
//!
//! This module provides utilities for loading registry snapshots from the
//! `test_data/` directory and wiring them into a ready-to-query API.
//!
//! # Usage
//!
//! ```rust,ignore
//! use crate::test_fixtures::{alpha_beta_registry, settings_hiding, statistics_api};
//!
//! #[test]
//! fn test_alpha_is_visible() {
//!     let api = statistics_api(alpha_beta_registry(), settings_hiding(&["Beta"]));
//!     // ... test logic
//! }
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use serde_json::json;

use crate::api::StatisticsApi;
use crate::app::App;
use crate::infrastructure::ports::{SettingsRepo, TownRegistry};
use crate::infrastructure::{InMemoryTownRegistry, JsonSettingsRepo, RegistrySnapshot};

// =============================================================================
// Fixture Loading
// =============================================================================

/// Load a JSON fixture from test_data/ directory.
///
/// # Panics
///
/// Panics if the fixture file cannot be read or parsed.
pub fn load_fixture<T: serde::de::DeserializeOwned>(path: &str) -> T {
    let fixture_path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("test_data")
        .join(path);
    let content = std::fs::read_to_string(&fixture_path).unwrap_or_else(|e| {
        panic!(
            "Failed to read fixture '{}': {}",
            fixture_path.display(),
            e
        )
    });
    serde_json::from_str(&content).unwrap_or_else(|e| {
        panic!(
            "Failed to parse fixture '{}': {}",
            fixture_path.display(),
            e
        )
    })
}

// =============================================================================
// Registry Fixtures
// =============================================================================

/// Towns Alpha (nation Empire, mayor alice) and Beta (mayor bob).
///
/// Residents: alice and carol in Alpha, bob in Beta, nomad without a town,
/// drifter pointing at a town that does not exist.
pub fn alpha_beta_snapshot() -> RegistrySnapshot {
    load_fixture("registry/alpha_beta.json")
}

/// Hamlet (no mayor, no home block, dissolved nation) and ExampleTown.
pub fn outskirts_snapshot() -> RegistrySnapshot {
    load_fixture("registry/outskirts.json")
}

pub fn alpha_beta_registry() -> Arc<InMemoryTownRegistry> {
    Arc::new(InMemoryTownRegistry::with_snapshot(alpha_beta_snapshot()))
}

pub fn outskirts_registry() -> Arc<InMemoryTownRegistry> {
    Arc::new(InMemoryTownRegistry::with_snapshot(outskirts_snapshot()))
}

// =============================================================================
// Settings Fixtures
// =============================================================================

/// Settings hiding exactly the given towns.
pub fn settings_hiding(towns: &[&str]) -> Arc<JsonSettingsRepo> {
    Arc::new(JsonSettingsRepo::from_value(
        json!({ "Towny": { "HideTowns": towns } }),
    ))
}

/// Settings with no hide list; the built-in placeholder applies.
pub fn default_settings() -> Arc<JsonSettingsRepo> {
    Arc::new(JsonSettingsRepo::empty())
}

// =============================================================================
// Wiring
// =============================================================================

pub fn test_app(registry: Arc<dyn TownRegistry>, settings: Arc<dyn SettingsRepo>) -> App {
    App::new(registry, settings)
}

pub fn statistics_api(
    registry: Arc<dyn TownRegistry>,
    settings: Arc<dyn SettingsRepo>,
) -> StatisticsApi {
    StatisticsApi::new(test_app(registry, settings).use_cases)
}
