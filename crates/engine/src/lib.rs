//! Towny Stats Engine library.
//!
//! Read-only statistics over an external town registry.
//!
//! ## Structure
//!
//! - `entities/` - Registry traversal and the town exclusion filter
//! - `use_cases/` - Statistics queries composed from entities
//! - `infrastructure/` - External dependency implementations (ports + adapters)
//! - `api/` - Statistics provider entry points
//! - `app` - Application composition

pub mod api;
pub mod app;
pub mod entities;
pub mod infrastructure;
pub mod use_cases;

/// Test fixtures module for integration testing.
#[cfg(test)]
pub mod test_fixtures;


pub use app::App;
