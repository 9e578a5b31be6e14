//! Block coordinates and a town's home block.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A town-block coordinate on the world grid.
///
/// Only the horizontal plane is tracked; towns are claimed in columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coord {
    pub x: i32,
    pub z: i32,
}

impl Coord {
    pub fn new(x: i32, z: i32) -> Self {
        Self { x, z }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "x: {} z: {}", self.x, self.z)
    }
}

/// The block a town is anchored to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HomeBlock {
    /// Name of the world the block lives in
    pub world: String,
    pub coord: Coord,
}

impl HomeBlock {
    pub fn new(world: impl Into<String>, coord: Coord) -> Self {
        Self {
            world: world.into(),
            coord,
        }
    }
}
