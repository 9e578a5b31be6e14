//! Resident entity - a player's identity inside the town registry
//!
//! A resident belongs to at most one town at a time. The membership is a
//! name pointer into the registry; it may dangle if the town was removed
//! after the resident record was last written.

use serde::{Deserialize, Serialize};

use crate::value_objects::{ResidentName, TownName};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resident {
    pub name: ResidentName,
    /// Town membership, if any
    #[serde(default)]
    pub town: Option<TownName>,
}

impl Resident {
    pub fn new(name: ResidentName) -> Self {
        Self { name, town: None }
    }

    pub fn with_town(mut self, town: TownName) -> Self {
        self.town = Some(town);
        self
    }

    pub fn has_town(&self) -> bool {
        self.town.is_some()
    }

    pub fn town_name(&self) -> Option<&TownName> {
        self.town.as_ref()
    }
}
