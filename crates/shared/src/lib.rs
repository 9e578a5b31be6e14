//! Towny Stats Shared - Types exposed to the reporting framework
//!
//! This crate contains everything the reporting side needs to know about the
//! statistics without depending on the engine:
//! - Plugin and provider descriptors (labels, icons, priorities, input kind)
//! - Provider values and report envelopes
//!
//! # Design Principles
//!
//! 1. **Minimal dependencies** - Only serde and serde_json
//! 2. **No business logic** - Pure data types and serialization

pub mod providers;
pub mod reports;

pub use providers::{
    Color, Icon, IconFamily, PluginInfo, ProviderDescriptor, ProviderInput, ProviderKind,
};
pub use reports::{PlayerReport, ProviderOutcome, ProviderReport, StatValue, StatisticsReport};
