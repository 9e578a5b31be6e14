//! In-memory town registry.
//!
//! Holds residents, towns and nations keyed by exact name in DashMaps so any
//! number of statistics queries can read concurrently. Until a snapshot is
//! loaded the registry reports itself unavailable.

use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};

use dashmap::DashMap;
use serde::{Deserialize, Serialize};
use towny_stats_domain::{Nation, Resident, Town};

use crate::infrastructure::ports::{RegistryError, TownRegistry};

/// Full registry contents as loaded from disk.
///
/// Membership pointers are not checked against each other; a resident may
/// name a town that is not in `towns`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrySnapshot {
    #[serde(default)]
    pub residents: Vec<Resident>,
    #[serde(default)]
    pub towns: Vec<Town>,
    #[serde(default)]
    pub nations: Vec<Nation>,
}

pub struct InMemoryTownRegistry {
    residents: DashMap<String, Resident>,
    towns: DashMap<String, Town>,
    nations: DashMap<String, Nation>,
    ready: AtomicBool,
}

impl InMemoryTownRegistry {
    /// Empty registry that is not yet ready.
    pub fn new() -> Self {
        Self {
            residents: DashMap::new(),
            towns: DashMap::new(),
            nations: DashMap::new(),
            ready: AtomicBool::new(false),
        }
    }

    pub fn with_snapshot(snapshot: RegistrySnapshot) -> Self {
        let registry = Self::new();
        registry.load_snapshot(snapshot);
        registry
    }

    /// Reads a [`RegistrySnapshot`] JSON document.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, RegistryError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            RegistryError::unavailable("from_json_file", format!("{}: {}", path.display(), e))
        })?;
        let snapshot: RegistrySnapshot = serde_json::from_str(&content).map_err(|e| {
            RegistryError::unavailable("from_json_file", format!("{}: {}", path.display(), e))
        })?;

        tracing::info!(
            path = %path.display(),
            residents = snapshot.residents.len(),
            towns = snapshot.towns.len(),
            nations = snapshot.nations.len(),
            "Loaded registry snapshot"
        );
        Ok(Self::with_snapshot(snapshot))
    }

    /// Replaces the registry contents. Readers see the registry as
    /// unavailable while the swap is in progress.
    pub fn load_snapshot(&self, snapshot: RegistrySnapshot) {
        self.set_ready(false);

        self.residents.clear();
        self.towns.clear();
        self.nations.clear();

        for resident in snapshot.residents {
            self.residents.insert(resident.name.to_string(), resident);
        }
        for town in snapshot.towns {
            self.towns.insert(town.name.to_string(), town);
        }
        for nation in snapshot.nations {
            self.nations.insert(nation.name.to_string(), nation);
        }

        self.set_ready(true);
    }

    pub fn set_ready(&self, ready: bool) {
        self.ready.store(ready, Ordering::SeqCst);
    }

    pub fn is_ready(&self) -> bool {
        self.ready.load(Ordering::SeqCst)
    }

    fn ensure_ready(&self, operation: &'static str) -> Result<(), RegistryError> {
        if self.is_ready() {
            Ok(())
        } else {
            Err(RegistryError::unavailable(operation, "registry is still loading"))
        }
    }
}

impl Default for InMemoryTownRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl TownRegistry for InMemoryTownRegistry {
    fn resident_by_name(&self, name: &str) -> Result<Option<Resident>, RegistryError> {
        self.ensure_ready("resident_by_name")?;
        Ok(self.residents.get(name).map(|entry| entry.value().clone()))
    }

    fn town_by_name(&self, name: &str) -> Result<Town, RegistryError> {
        self.ensure_ready("town_by_name")?;
        self.towns
            .get(name)
            .map(|entry| entry.value().clone())
            .ok_or_else(|| RegistryError::not_registered("Town", name))
    }

    fn nation_by_name(&self, name: &str) -> Result<Nation, RegistryError> {
        self.ensure_ready("nation_by_name")?;
        self.nations
            .get(name)
            .map(|entry| entry.value().clone())
            .ok_or_else(|| RegistryError::not_registered("Nation", name))
    }

    fn all_towns(&self) -> Result<Vec<Town>, RegistryError> {
        self.ensure_ready("all_towns")?;
        let mut towns: Vec<Town> = self.towns.iter().map(|entry| entry.value().clone()).collect();
        towns.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(towns)
    }
}
