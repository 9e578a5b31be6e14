//! Server-wide number of towns.

use std::sync::Arc;

use crate::entities::{NotReady, Resolver, TownFilter};

pub struct TownCount {
    resolver: Arc<Resolver>,
    filter: Arc<TownFilter>,
}

impl TownCount {
    pub fn new(resolver: Arc<Resolver>, filter: Arc<TownFilter>) -> Self {
        Self { resolver, filter }
    }

    /// Number of registered towns that are not hidden.
    pub fn execute(&self) -> Result<u64, NotReady> {
        let hidden = self.filter.load_exclusion_set();
        let names = self.resolver.all_town_names()?;
        Ok(hidden.count_visible(names.iter().map(String::as_str)))
    }
}
