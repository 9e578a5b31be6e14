//! Registry lookup chain: player -> resident -> town -> nation.
//!
//! Two outcome channels leave this module. `Err(NotReady)` means the registry
//! could not answer and the caller should retry the whole query later.
//! `Ok(None)` means the relationship legitimately does not exist.

use std::sync::Arc;

use towny_stats_domain::{Coord, HomeBlockNotSet, Nation, Resident, Town};

use crate::infrastructure::ports::{RegistryError, TownRegistry};

/// The registry could not answer a lookup that should have been resolvable.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Registry not ready while resolving {lookup} '{subject}'")]
pub struct NotReady {
    pub lookup: &'static str,
    pub subject: String,
}

impl NotReady {
    pub fn new(lookup: &'static str, subject: impl Into<String>) -> Self {
        Self {
            lookup,
            subject: subject.into(),
        }
    }
}

/// Resolves names into registry records.
pub struct Resolver {
    registry: Arc<dyn TownRegistry>,
}

impl Resolver {
    pub fn new(registry: Arc<dyn TownRegistry>) -> Self {
        Self { registry }
    }

    /// Resident record for a player.
    ///
    /// A missing record and any registry fault both mean the registry is
    /// still initialising, so both become `NotReady`.
    pub fn resolve_resident_by_player(&self, player_name: &str) -> Result<Resident, NotReady> {
        match self.registry.resident_by_name(player_name) {
            Ok(Some(resident)) => Ok(resident),
            Ok(None) => {
                tracing::debug!(player = %player_name, "No resident record for player");
                Err(NotReady::new("resident", player_name))
            }
            Err(e) => {
                tracing::warn!(player = %player_name, error = %e, "Resident lookup failed");
                Err(NotReady::new("resident", player_name))
            }
        }
    }

    /// Town the resident belongs to, if any.
    ///
    /// A membership pointing at an unregistered town is treated as no town.
    pub fn resolve_town_for_resident(&self, resident: &Resident) -> Result<Option<Town>, NotReady> {
        let Some(town_name) = resident.town_name() else {
            return Ok(None);
        };

        match self.registry.town_by_name(town_name.as_str()) {
            Ok(town) => Ok(Some(town)),
            Err(RegistryError::NotRegistered { .. }) => {
                tracing::debug!(
                    resident = %resident.name,
                    town = %town_name,
                    "Resident membership points at an unregistered town"
                );
                Ok(None)
            }
            Err(e) => {
                tracing::warn!(resident = %resident.name, error = %e, "Town membership lookup failed");
                Err(NotReady::new("town", town_name.as_str()))
            }
        }
    }

    /// Town by name. Any registry error becomes `NotReady`.
    pub fn resolve_town_by_name(&self, town_name: &str) -> Result<Town, NotReady> {
        self.registry.town_by_name(town_name).map_err(|e| {
            tracing::warn!(town = %town_name, error = %e, "Town lookup failed");
            NotReady::new("town", town_name)
        })
    }

    /// Nation the town belongs to, if any.
    ///
    /// A nation pointer that no longer resolves is reported as no nation.
    /// This can hide a corrupt pointer; callers see it as ordinary absence.
    pub fn resolve_nation_for_town(&self, town: &Town) -> Result<Option<Nation>, NotReady> {
        let Some(nation_name) = town.nation_name() else {
            return Ok(None);
        };

        match self.registry.nation_by_name(nation_name.as_str()) {
            Ok(nation) => Ok(Some(nation)),
            Err(RegistryError::NotRegistered { .. }) => {
                tracing::debug!(
                    town = %town.name,
                    nation = %nation_name,
                    "Town nation pointer is not registered"
                );
                Ok(None)
            }
            Err(e) => {
                tracing::warn!(town = %town.name, error = %e, "Nation lookup failed");
                Err(NotReady::new("nation", nation_name.as_str()))
            }
        }
    }

    /// Home block coordinate of a town.
    pub fn resolve_home_block_coordinate(&self, town: &Town) -> Result<Coord, HomeBlockNotSet> {
        town.home_block_coord()
    }

    /// Names of every registered town.
    pub fn all_town_names(&self) -> Result<Vec<String>, NotReady> {
        let towns = self.registry.all_towns().map_err(|e| {
            tracing::warn!(error = %e, "Town enumeration failed");
            NotReady::new("towns", "*")
        })?;
        Ok(towns.into_iter().map(|t| t.name.into()).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::ports::MockTownRegistry;
    use towny_stats_domain::{HomeBlock, NationName, ResidentName, TownName};

    fn resident(name: &str, town: Option<&str>) -> Resident {
        let r = Resident::new(ResidentName::new(name).expect("valid resident name"));
        match town {
            Some(t) => r.with_town(TownName::new(t).expect("valid town name")),
            None => r,
        }
    }

    fn town(name: &str) -> Town {
        Town::new(TownName::new(name).expect("valid town name"))
    }

    #[test]
    fn when_resident_missing_returns_not_ready() {
        let mut registry = MockTownRegistry::new();
        registry.expect_resident_by_name().returning(|_| Ok(None));

        let resolver = Resolver::new(Arc::new(registry));
        let result = resolver.resolve_resident_by_player("Ghost");

        assert_eq!(result, Err(NotReady::new("resident", "Ghost")));
    }

    #[test]
    fn when_resident_lookup_faults_returns_not_ready() {
        let mut registry = MockTownRegistry::new();
        registry
            .expect_resident_by_name()
            .returning(|_| Err(RegistryError::unavailable("resident_by_name", "boom")));

        let resolver = Resolver::new(Arc::new(registry));

        assert!(resolver.resolve_resident_by_player("Ghost").is_err());
    }

    #[test]
    fn when_resident_not_registered_fault_still_not_ready() {
        let mut registry = MockTownRegistry::new();
        registry
            .expect_resident_by_name()
            .returning(|name| Err(RegistryError::not_registered("Resident", name)));

        let resolver = Resolver::new(Arc::new(registry));

        assert!(resolver.resolve_resident_by_player("Ghost").is_err());
    }

    #[test]
    fn when_resident_has_no_town_registry_is_not_asked() {
        let mut registry = MockTownRegistry::new();
        registry.expect_town_by_name().never();

        let resolver = Resolver::new(Arc::new(registry));
        let result = resolver.resolve_town_for_resident(&resident("Steve", None));

        assert_eq!(result, Ok(None));
    }

    #[test]
    fn when_town_membership_dangles_returns_none() {
        let mut registry = MockTownRegistry::new();
        registry
            .expect_town_by_name()
            .times(1)
            .returning(|name| Err(RegistryError::not_registered("Town", name)));

        let resolver = Resolver::new(Arc::new(registry));
        let result = resolver.resolve_town_for_resident(&resident("Steve", Some("Razed")));

        assert_eq!(result, Ok(None));
    }

    #[test]
    fn when_town_membership_lookup_unavailable_returns_not_ready() {
        let mut registry = MockTownRegistry::new();
        registry
            .expect_town_by_name()
            .returning(|_| Err(RegistryError::unavailable("town_by_name", "loading")));

        let resolver = Resolver::new(Arc::new(registry));
        let result = resolver.resolve_town_for_resident(&resident("Steve", Some("Alpha")));

        assert_eq!(result, Err(NotReady::new("town", "Alpha")));
    }

    #[test]
    fn when_town_membership_valid_returns_town() {
        let mut registry = MockTownRegistry::new();
        registry
            .expect_town_by_name()
            .returning(|name| Ok(Town::new(TownName::new(name).expect("valid town name"))));

        let resolver = Resolver::new(Arc::new(registry));
        let result = resolver
            .resolve_town_for_resident(&resident("Steve", Some("Alpha")))
            .expect("registry is ready");

        assert_eq!(result, Some(town("Alpha")));
    }

    #[test]
    fn when_town_by_name_missing_returns_not_ready() {
        let mut registry = MockTownRegistry::new();
        registry
            .expect_town_by_name()
            .returning(|name| Err(RegistryError::not_registered("Town", name)));

        let resolver = Resolver::new(Arc::new(registry));

        assert_eq!(
            resolver.resolve_town_by_name("Nowhere"),
            Err(NotReady::new("town", "Nowhere"))
        );
    }

    #[test]
    fn when_town_has_no_nation_returns_none() {
        let mut registry = MockTownRegistry::new();
        registry.expect_nation_by_name().never();

        let resolver = Resolver::new(Arc::new(registry));

        assert_eq!(resolver.resolve_nation_for_town(&town("Alpha")), Ok(None));
    }

    // A nation pointer that no longer resolves reads as "no nation".
    // This is the documented behaviour, not a defect.
    #[test]
    fn when_nation_pointer_dangles_returns_none() {
        let mut registry = MockTownRegistry::new();
        registry
            .expect_nation_by_name()
            .returning(|name| Err(RegistryError::not_registered("Nation", name)));

        let resolver = Resolver::new(Arc::new(registry));
        let alpha = town("Alpha").with_nation(NationName::new("Dissolved").expect("valid name"));

        assert_eq!(resolver.resolve_nation_for_town(&alpha), Ok(None));
    }

    #[test]
    fn when_nation_lookup_unavailable_returns_not_ready() {
        let mut registry = MockTownRegistry::new();
        registry
            .expect_nation_by_name()
            .returning(|_| Err(RegistryError::unavailable("nation_by_name", "loading")));

        let resolver = Resolver::new(Arc::new(registry));
        let alpha = town("Alpha").with_nation(NationName::new("Empire").expect("valid name"));

        assert_eq!(
            resolver.resolve_nation_for_town(&alpha),
            Err(NotReady::new("nation", "Empire"))
        );
    }

    #[test]
    fn home_block_coordinate_reports_not_set() {
        let resolver = Resolver::new(Arc::new(MockTownRegistry::new()));

        assert!(resolver.resolve_home_block_coordinate(&town("Alpha")).is_err());

        let anchored =
            town("Alpha").with_home_block(HomeBlock::new("world", Coord::new(10, 20)));
        assert_eq!(
            resolver.resolve_home_block_coordinate(&anchored),
            Ok(Coord::new(10, 20))
        );
    }

    #[test]
    fn when_town_enumeration_fails_returns_not_ready() {
        let mut registry = MockTownRegistry::new();
        registry
            .expect_all_towns()
            .returning(|| Err(RegistryError::unavailable("all_towns", "loading")));

        let resolver = Resolver::new(Arc::new(registry));

        assert_eq!(
            resolver.all_town_names(),
            Err(NotReady::new("towns", "*"))
        );
    }
}
