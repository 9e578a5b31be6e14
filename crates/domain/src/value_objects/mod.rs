//! Value objects - immutable values without identity of their own.

mod coord;
mod exclusion;
mod names;

pub use coord::{Coord, HomeBlock};
pub use exclusion::{ExclusionSet, DEFAULT_HIDDEN_TOWN};
pub use names::{NationName, ResidentName, TownName};
