//! Statistics provider dispatch.
//!
//! The statistics framework addresses providers by method name and passes
//! one identity: a player, a town group, or nothing for server-wide values.
//! [`StatisticsApi`] routes those calls to the statistics use cases and
//! assembles them into serializable reports.

use std::sync::Arc;

use towny_stats_shared::{
    Color, Icon, PlayerReport, PluginInfo, ProviderDescriptor, ProviderInput, ProviderKind,
    ProviderOutcome, ProviderReport, StatValue,
};

use crate::entities::NotReady;
use crate::use_cases::StatisticsUseCases;

pub const PLUGIN_NAME: &str = "Towny";

pub const TOWN: &str = "town";
pub const TOWN_MAYOR: &str = "townMayor";
pub const NUMBER_OF_TOWNS: &str = "numberOfTowns";
pub const TOWN_COORDINATES: &str = "townCoordinates";
pub const NATION: &str = "nation";

/// Identity a provider is evaluated for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Identity<'a> {
    Player(&'a str),
    Group(&'a str),
    Server,
}

impl Identity<'_> {
    pub fn input(&self) -> ProviderInput {
        match self {
            Identity::Player(_) => ProviderInput::Player,
            Identity::Group(_) => ProviderInput::Group,
            Identity::Server => ProviderInput::Server,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProviderError {
    #[error(transparent)]
    NotReady(#[from] NotReady),
    #[error("Unknown provider: {0}")]
    UnknownProvider(String),
    #[error("Provider {provider} expects a {expected:?} identity")]
    MissingIdentity {
        provider: String,
        expected: ProviderInput,
    },
}

pub fn plugin_info() -> PluginInfo {
    PluginInfo {
        name: PLUGIN_NAME.to_string(),
        icon: Icon::solid("university", Color::Brown),
    }
}

/// Every provider this plugin publishes, in registration order.
pub fn provider_descriptors() -> Vec<ProviderDescriptor> {
    vec![
        ProviderDescriptor {
            method: TOWN.to_string(),
            kind: ProviderKind::Group,
            text: "Town".to_string(),
            description: None,
            icon: Icon::solid("university", Color::Brown),
            priority: 0,
            input: ProviderInput::Player,
            player_name: false,
        },
        ProviderDescriptor {
            method: TOWN_MAYOR.to_string(),
            kind: ProviderKind::String,
            text: "Mayor".to_string(),
            description: Some("Who runs the town".to_string()),
            icon: Icon::solid("user", Color::Brown),
            priority: 100,
            input: ProviderInput::Group,
            player_name: true,
        },
        ProviderDescriptor {
            method: NUMBER_OF_TOWNS.to_string(),
            kind: ProviderKind::Number,
            text: "Number of Towns".to_string(),
            description: Some("How many towns there are".to_string()),
            icon: Icon::solid("university", Color::Brown),
            priority: 105,
            input: ProviderInput::Server,
            player_name: false,
        },
        ProviderDescriptor {
            method: TOWN_COORDINATES.to_string(),
            kind: ProviderKind::String,
            text: "Town Coordinates".to_string(),
            description: Some("Where is the town located".to_string()),
            icon: Icon::solid("map-pin", Color::Red),
            priority: 95,
            input: ProviderInput::Group,
            player_name: false,
        },
        ProviderDescriptor {
            method: NATION.to_string(),
            kind: ProviderKind::String,
            text: "Nation".to_string(),
            description: Some("What nation is the town part of".to_string()),
            icon: Icon::solid("flag", Color::Brown),
            priority: 90,
            input: ProviderInput::Group,
            player_name: false,
        },
    ]
}

pub struct StatisticsApi {
    use_cases: Arc<StatisticsUseCases>,
    descriptors: Vec<ProviderDescriptor>,
}

impl StatisticsApi {
    pub fn new(use_cases: Arc<StatisticsUseCases>) -> Self {
        Self {
            use_cases,
            descriptors: provider_descriptors(),
        }
    }

    pub fn plugin_info(&self) -> PluginInfo {
        plugin_info()
    }

    pub fn descriptors(&self) -> &[ProviderDescriptor] {
        &self.descriptors
    }

    /// Evaluates one provider for one identity.
    pub fn evaluate(&self, provider: &str, identity: Identity<'_>) -> Result<StatValue, ProviderError> {
        let value = match (provider, identity) {
            (TOWN, Identity::Player(player)) => {
                StatValue::Groups(self.use_cases.player_town.execute(player)?)
            }
            (TOWN_MAYOR, Identity::Group(town)) => {
                StatValue::Text(self.use_cases.mayor.execute(town)?)
            }
            (TOWN_COORDINATES, Identity::Group(town)) => {
                StatValue::Text(self.use_cases.coordinates.execute(town)?)
            }
            (NATION, Identity::Group(town)) => StatValue::Text(self.use_cases.nation.execute(town)?),
            (NUMBER_OF_TOWNS, Identity::Server) => {
                StatValue::Number(self.use_cases.town_count.execute()?)
            }
            (other, _) => {
                return Err(match self.descriptor(other) {
                    Some(descriptor) => ProviderError::MissingIdentity {
                        provider: other.to_string(),
                        expected: descriptor.input,
                    },
                    None => ProviderError::UnknownProvider(other.to_string()),
                })
            }
        };
        Ok(value)
    }

    /// Town group of a player followed by that group's statistics.
    ///
    /// If the player's town cannot be resolved only the group entry is
    /// reported.
    pub fn player_report(&self, player: &str) -> Result<PlayerReport, ProviderError> {
        let mut providers = Vec::new();
        let mut group = None;

        for descriptor in self.ordered(ProviderInput::Player) {
            let report = self.report(descriptor, Identity::Player(player))?;
            if descriptor.method == TOWN {
                group = report
                    .outcome
                    .value()
                    .and_then(StatValue::as_groups)
                    .and_then(|groups| groups.first().cloned());
            }
            providers.push(report);
        }

        if let Some(town) = group.as_deref() {
            for descriptor in self.ordered(ProviderInput::Group) {
                providers.push(self.report(descriptor, Identity::Group(town))?);
            }
        }

        tracing::debug!(player = %player, group = ?group, "Built player report");
        Ok(PlayerReport {
            player: player.to_string(),
            group,
            providers,
        })
    }

    pub fn server_report(&self) -> Result<Vec<ProviderReport>, ProviderError> {
        self.ordered(ProviderInput::Server)
            .into_iter()
            .map(|descriptor| self.report(descriptor, Identity::Server))
            .collect()
    }

    fn descriptor(&self, method: &str) -> Option<&ProviderDescriptor> {
        self.descriptors.iter().find(|d| d.method == method)
    }

    /// Descriptors for one input, highest priority first.
    fn ordered(&self, input: ProviderInput) -> Vec<&ProviderDescriptor> {
        let mut matching: Vec<_> = self.descriptors.iter().filter(|d| d.input == input).collect();
        matching.sort_by(|a, b| b.priority.cmp(&a.priority));
        matching
    }

    fn report(
        &self,
        descriptor: &ProviderDescriptor,
        identity: Identity<'_>,
    ) -> Result<ProviderReport, ProviderError> {
        let outcome = match self.evaluate(&descriptor.method, identity) {
            Ok(value) => ProviderOutcome::Value { value },
            Err(ProviderError::NotReady(not_ready)) => {
                tracing::warn!(
                    provider = %descriptor.method,
                    error = %not_ready,
                    "Provider not ready"
                );
                ProviderOutcome::NotReady {
                    reason: not_ready.to_string(),
                }
            }
            Err(e) => return Err(e),
        };

        Ok(ProviderReport {
            method: descriptor.method.clone(),
            text: descriptor.text.clone(),
            priority: descriptor.priority,
            outcome,
        })
    }
}
