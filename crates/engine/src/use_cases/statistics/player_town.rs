//! Town group of a player.

use std::sync::Arc;

use crate::entities::{NotReady, Resolver, TownFilter};

/// Places a player into its town group.
///
/// Orchestrates: resident lookup, town membership, exclusion filter.
pub struct PlayerTown {
    resolver: Arc<Resolver>,
    filter: Arc<TownFilter>,
}

impl PlayerTown {
    pub fn new(resolver: Arc<Resolver>, filter: Arc<TownFilter>) -> Self {
        Self { resolver, filter }
    }

    /// Returns zero or one town name.
    ///
    /// Empty if the player has no town or the town is hidden.
    pub fn execute(&self, player_name: &str) -> Result<Vec<String>, NotReady> {
        let resident = self.resolver.resolve_resident_by_player(player_name)?;
        let town = self.resolver.resolve_town_for_resident(&resident)?;
        let town = self.filter.load_exclusion_set().filter_town(town);

        Ok(town.map(|t| vec![String::from(t.name)]).unwrap_or_default())
    }
}
