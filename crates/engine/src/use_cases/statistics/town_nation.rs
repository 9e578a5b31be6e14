//! Nation of a town group.

use std::sync::Arc;

use crate::entities::{NotReady, Resolver, TownFilter};

use super::NONE_TEXT;

pub struct TownNation {
    resolver: Arc<Resolver>,
    filter: Arc<TownFilter>,
}

impl TownNation {
    pub fn new(resolver: Arc<Resolver>, filter: Arc<TownFilter>) -> Self {
        Self { resolver, filter }
    }

    /// Nation name, or `"None"` if the town has no nation or is hidden.
    pub fn execute(&self, town_name: &str) -> Result<String, NotReady> {
        let town = self.resolver.resolve_town_by_name(town_name)?;
        let Some(town) = self.filter.load_exclusion_set().filter_town(Some(town)) else {
            return Ok(NONE_TEXT.to_string());
        };

        let nation = self.resolver.resolve_nation_for_town(&town)?;
        Ok(nation.map_or_else(|| NONE_TEXT.to_string(), |n| n.name.into()))
    }
}
