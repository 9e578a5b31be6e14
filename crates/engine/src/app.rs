//! Application state and composition.

use std::sync::Arc;

use towny_stats_shared::StatisticsReport;

use crate::api::{ProviderError, StatisticsApi};
use crate::entities::{Resolver, TownFilter};
use crate::infrastructure::ports::{SettingsRepo, TownRegistry};
use crate::use_cases::StatisticsUseCases;

/// Main application state.
///
/// Holds the injected ports, the statistics use cases and the provider API
/// built on top of them. Nothing here caches registry data.
pub struct App {
    pub registry: Arc<dyn TownRegistry>,
    pub settings: Arc<dyn SettingsRepo>,
    pub use_cases: Arc<StatisticsUseCases>,
    pub api: StatisticsApi,
}

impl App {
    pub fn new(registry: Arc<dyn TownRegistry>, settings: Arc<dyn SettingsRepo>) -> Self {
        let resolver = Arc::new(Resolver::new(registry.clone()));
        let filter = Arc::new(TownFilter::new(settings.clone()));
        let use_cases = Arc::new(StatisticsUseCases::from_entities(resolver, filter));
        let api = StatisticsApi::new(use_cases.clone());

        Self {
            registry,
            settings,
            use_cases,
            api,
        }
    }

    /// Server statistics plus one entry per named player.
    pub fn statistics_report(&self, players: &[String]) -> Result<StatisticsReport, ProviderError> {
        let server = self.api.server_report()?;
        let players = players
            .iter()
            .map(|player| self.api.player_report(player))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(StatisticsReport {
            plugin: self.api.plugin_info(),
            server,
            players,
        })
    }
}
