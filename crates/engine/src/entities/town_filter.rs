//! Town exclusion filter.
//!
//! Every town-shaped result leaves the engine through this filter. The
//! exclusion list is read from settings on every call.

use std::sync::Arc;

use towny_stats_domain::ExclusionSet;

use crate::infrastructure::ports::SettingsRepo;

/// Settings key holding the list of hidden town names.
pub const HIDE_TOWNS_KEY: &str = "Towny.HideTowns";

pub struct TownFilter {
    settings: Arc<dyn SettingsRepo>,
}

impl TownFilter {
    pub fn new(settings: Arc<dyn SettingsRepo>) -> Self {
        Self { settings }
    }

    /// Load the configured exclusion set.
    ///
    /// Falls back to the single placeholder town when the key is unset. An
    /// explicitly configured empty list hides nothing.
    pub fn load_exclusion_set(&self) -> ExclusionSet {
        match self.settings.get_string_list(HIDE_TOWNS_KEY) {
            Some(names) => ExclusionSet::new(names),
            None => {
                tracing::debug!(key = HIDE_TOWNS_KEY, "Exclusion list unset, using default");
                ExclusionSet::default()
            }
        }
    }
}
