//! Entity modules - Domain capability encapsulation.
//!
//! Each module wraps operations over one port and provides the building
//! blocks the statistics use cases compose.

pub mod resolver;
pub mod town_filter;

pub use resolver::{NotReady, Resolver};
pub use town_filter::{TownFilter, HIDE_TOWNS_KEY};
