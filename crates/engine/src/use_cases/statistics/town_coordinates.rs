//! Home block location of a town group.

use std::sync::Arc;

use crate::entities::{NotReady, Resolver, TownFilter};

use super::NOT_SET_TEXT;

pub struct TownCoordinates {
    resolver: Arc<Resolver>,
    filter: Arc<TownFilter>,
}

impl TownCoordinates {
    pub fn new(resolver: Arc<Resolver>, filter: Arc<TownFilter>) -> Self {
        Self { resolver, filter }
    }

    /// `"x: <x> z: <z>"` of the home block, or `"Not Set"`.
    pub fn execute(&self, town_name: &str) -> Result<String, NotReady> {
        let town = self.resolver.resolve_town_by_name(town_name)?;
        let Some(town) = self.filter.load_exclusion_set().filter_town(Some(town)) else {
            return Ok(NOT_SET_TEXT.to_string());
        };

        match self.resolver.resolve_home_block_coordinate(&town) {
            Ok(coord) => Ok(coord.to_string()),
            Err(not_set) => {
                tracing::debug!(error = %not_set, "Reporting home block as not set");
                Ok(NOT_SET_TEXT.to_string())
            }
        }
    }
}
