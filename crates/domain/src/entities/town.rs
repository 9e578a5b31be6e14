//! Town entity - a named settlement
//!
//! A town has at most one mayor, at most one home block and belongs to at
//! most one nation. The nation is held as a name pointer and is resolved
//! through the registry.

use serde::{Deserialize, Serialize};

use crate::value_objects::{Coord, HomeBlock, NationName, ResidentName, TownName};

/// Raised when a town has no home block configured.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Town {town} has no home block set")]
pub struct HomeBlockNotSet {
    pub town: TownName,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Town {
    pub name: TownName,
    #[serde(default)]
    pub mayor: Option<ResidentName>,
    #[serde(default)]
    pub home_block: Option<HomeBlock>,
    /// Nation membership, if any
    #[serde(default)]
    pub nation: Option<NationName>,
}

impl Town {
    pub fn new(name: TownName) -> Self {
        Self {
            name,
            mayor: None,
            home_block: None,
            nation: None,
        }
    }

    pub fn with_mayor(mut self, mayor: ResidentName) -> Self {
        self.mayor = Some(mayor);
        self
    }

    pub fn with_home_block(mut self, home_block: HomeBlock) -> Self {
        self.home_block = Some(home_block);
        self
    }

    pub fn with_nation(mut self, nation: NationName) -> Self {
        self.nation = Some(nation);
        self
    }

    pub fn has_nation(&self) -> bool {
        self.nation.is_some()
    }

    pub fn nation_name(&self) -> Option<&NationName> {
        self.nation.as_ref()
    }

    /// Coordinate of the home block.
    ///
    /// # Errors
    ///
    /// Returns [`HomeBlockNotSet`] if the town has no home block.
    pub fn home_block_coord(&self) -> Result<Coord, HomeBlockNotSet> {
        self.home_block
            .as_ref()
            .map(|block| block.coord)
            .ok_or_else(|| HomeBlockNotSet {
                town: self.name.clone(),
            })
    }
}
