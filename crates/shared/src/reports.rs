//! Values and reports handed back to the reporting framework.

use serde::{Deserialize, Serialize};

use crate::providers::{PluginInfo, ProviderKind};

/// A single provider's value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum StatValue {
    /// Group names (zero or one town for the Towny group provider)
    Groups(Vec<String>),
    Text(String),
    Number(u64),
}

impl StatValue {
    pub fn kind(&self) -> ProviderKind {
        match self {
            StatValue::Groups(_) => ProviderKind::Group,
            StatValue::Text(_) => ProviderKind::String,
            StatValue::Number(_) => ProviderKind::Number,
        }
    }

    pub fn as_groups(&self) -> Option<&[String]> {
        match self {
            StatValue::Groups(groups) => Some(groups),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            StatValue::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<u64> {
        match self {
            StatValue::Number(n) => Some(*n),
            _ => None,
        }
    }
}

/// Outcome of invoking one provider.
///
/// `NotReady` tells the framework to retry the whole query later.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ProviderOutcome {
    Value { value: StatValue },
    NotReady { reason: String },
}

impl ProviderOutcome {
    pub fn value(&self) -> Option<&StatValue> {
        match self {
            ProviderOutcome::Value { value } => Some(value),
            ProviderOutcome::NotReady { .. } => None,
        }
    }

    pub fn is_not_ready(&self) -> bool {
        matches!(self, ProviderOutcome::NotReady { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderReport {
    pub method: String,
    pub text: String,
    pub priority: i32,
    #[serde(flatten)]
    pub outcome: ProviderOutcome,
}

/// Everything the framework would render for one player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerReport {
    pub player: String,
    /// Town group the player was placed in, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
    pub providers: Vec<ProviderReport>,
}

/// Full output of one reporting pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatisticsReport {
    pub plugin: PluginInfo,
    pub server: Vec<ProviderReport>,
    pub players: Vec<PlayerReport>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_ready_report_shape() {
        let report = ProviderReport {
            method: "town".to_string(),
            text: "Town".to_string(),
            priority: 0,
            outcome: ProviderOutcome::NotReady {
                reason: "registry still loading".to_string(),
            },
        };

        let json = serde_json::to_value(&report).expect("serialize report");
        assert_eq!(json["status"], "not_ready");
        assert_eq!(json["reason"], "registry still loading");
        assert_eq!(json["method"], "town");
    }

    #[test]
    fn test_value_report_shape() {
        let report = ProviderReport {
            method: "numberOfTowns".to_string(),
            text: "Number of Towns".to_string(),
            priority: 105,
            outcome: ProviderOutcome::Value {
                value: StatValue::Number(3),
            },
        };

        let json = serde_json::to_value(&report).expect("serialize report");
        assert_eq!(json["status"], "value");
        assert_eq!(json["value"]["type"], "number");
        assert_eq!(json["value"]["value"], 3);
    }

    #[test]
    fn test_stat_value_accessors() {
        let groups = StatValue::Groups(vec!["Alpha".to_string()]);
        assert_eq!(groups.kind(), ProviderKind::Group);
        assert_eq!(groups.as_groups(), Some(&["Alpha".to_string()][..]));
        assert_eq!(groups.as_text(), None);
        assert_eq!(StatValue::Number(2).as_number(), Some(2));
    }
}
