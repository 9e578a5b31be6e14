//! Entities - read-only views of registry records.
//!
//! Nothing in this crate creates, mutates or destroys these; they are
//! point-in-time snapshots owned by the registry that produced them.

mod nation;
mod resident;
mod town;

pub use nation::Nation;
pub use resident::Resident;
pub use town::{HomeBlockNotSet, Town};
