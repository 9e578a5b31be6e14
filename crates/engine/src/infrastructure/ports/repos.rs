//! Port traits for the registry and settings store.

use towny_stats_domain::{Nation, Resident, Town};

use super::error::RegistryError;

// =============================================================================
// Town Registry
// =============================================================================

/// Read-only access to the external town registry.
///
/// Implementations must be safe for concurrent reads. Nothing here writes.
#[cfg_attr(test, mockall::automock)]
pub trait TownRegistry: Send + Sync {
    /// Resident record for a player name. `Ok(None)` if the registry has none.
    fn resident_by_name(&self, name: &str) -> Result<Option<Resident>, RegistryError>;

    /// Town by exact name. A missing town is `RegistryError::NotRegistered`.
    fn town_by_name(&self, name: &str) -> Result<Town, RegistryError>;

    /// Nation by exact name. A missing nation is `RegistryError::NotRegistered`.
    fn nation_by_name(&self, name: &str) -> Result<Nation, RegistryError>;

    /// Every registered town.
    fn all_towns(&self) -> Result<Vec<Town>, RegistryError>;
}

// =============================================================================
// Settings Storage
// =============================================================================

#[cfg_attr(test, mockall::automock)]
pub trait SettingsRepo: Send + Sync {
    /// String list stored under `key`, or `None` if the key is unset.
    fn get_string_list(&self, key: &str) -> Option<Vec<String>>;
}
