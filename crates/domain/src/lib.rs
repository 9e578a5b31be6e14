//! Towny Stats domain.
//!
//! Shapes read from the external town registry (residents, towns, nations),
//! the validated names they are keyed by, and the exclusion policy applied to
//! town-shaped results.

pub mod entities;
pub mod error;
pub mod value_objects;

pub use entities::{HomeBlockNotSet, Nation, Resident, Town};
pub use error::DomainError;
pub use value_objects::{
    Coord, ExclusionSet, HomeBlock, NationName, ResidentName, TownName, DEFAULT_HIDDEN_TOWN,
};
