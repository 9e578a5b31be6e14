//! Nation entity - a named alliance of towns

use serde::{Deserialize, Serialize};

use crate::value_objects::NationName;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Nation {
    pub name: NationName,
}

impl Nation {
    pub fn new(name: NationName) -> Self {
        Self { name }
    }
}
