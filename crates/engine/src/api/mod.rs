//! API layer - statistics provider entry points.

pub mod providers;

pub use providers::{
    plugin_info, provider_descriptors, Identity, ProviderError, StatisticsApi,
};
