//! Mayor of a town group.

use std::sync::Arc;

use crate::entities::{NotReady, Resolver, TownFilter};

use super::NONE_TEXT;

pub struct TownMayor {
    resolver: Arc<Resolver>,
    filter: Arc<TownFilter>,
}

impl TownMayor {
    pub fn new(resolver: Arc<Resolver>, filter: Arc<TownFilter>) -> Self {
        Self { resolver, filter }
    }

    /// Mayor's name, or `"None"` if the town has no mayor or is hidden.
    pub fn execute(&self, town_name: &str) -> Result<String, NotReady> {
        let town = self.resolver.resolve_town_by_name(town_name)?;
        let mayor = self
            .filter
            .load_exclusion_set()
            .filter_town(Some(town))
            .and_then(|t| t.mayor);

        Ok(mayor.map_or_else(|| NONE_TEXT.to_string(), String::from))
    }
}
