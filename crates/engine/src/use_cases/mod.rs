//! Use cases - User story orchestration.
//!
//! Use cases orchestrate across entity modules to answer statistics queries.

pub mod statistics;

pub use statistics::StatisticsUseCases;
