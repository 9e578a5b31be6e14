//! Provider metadata declared to the reporting framework
//!
//! Each statistic is published as a named provider. The framework reads the
//! descriptor to decide which identity to pass in (a player, a town group,
//! or nothing for server-wide values) and how to render the result.

use serde::{Deserialize, Serialize};

// =============================================================================
// Presentation
// =============================================================================

/// Display color hint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Color {
    Brown,
    Red,
    None,
}

/// Icon set the icon name belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IconFamily {
    Solid,
    Regular,
    Brand,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Icon {
    pub name: String,
    pub family: IconFamily,
    pub color: Color,
}

impl Icon {
    /// Solid-family icon, the family every Towny provider uses.
    pub fn solid(name: impl Into<String>, color: Color) -> Self {
        Self {
            name: name.into(),
            family: IconFamily::Solid,
            color,
        }
    }
}

/// Plugin-level registration data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PluginInfo {
    pub name: String,
    pub icon: Icon,
}

// =============================================================================
// Providers
// =============================================================================

/// Identity the framework must supply when invoking a provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProviderInput {
    /// A player name
    Player,
    /// A group name produced by a group provider (here: a town name)
    Group,
    /// No identity; server-wide value
    Server,
}

/// Shape of the value a provider returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProviderKind {
    /// Zero or more group names the player belongs to
    Group,
    String,
    Number,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderDescriptor {
    /// Stable provider identifier, used for dispatch
    pub method: String,
    pub kind: ProviderKind,
    /// Label shown next to the value; for group providers, the grouping label
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub icon: Icon,
    /// Higher priority renders first
    pub priority: i32,
    pub input: ProviderInput,
    /// The returned string is a player name the framework may link
    #[serde(default)]
    pub player_name: bool,
}
