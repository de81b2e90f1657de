//! Questlog Engine library.
//!
//! Server-side code for the player registry.
//!
//! ## Structure
//!
//! - `use_cases/` - Player operations over the storage port
//! - `infrastructure/` - Storage adapters, ports and configuration
//! - `api/` - HTTP entry points
//! - `app` - Application composition

pub mod api;
pub mod app;
pub mod infrastructure;
pub mod use_cases;

/// Shared builders for unit tests.
#[cfg(test)]
pub mod test_fixtures;

pub use app::App;
