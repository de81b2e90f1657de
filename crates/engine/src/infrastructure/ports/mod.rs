//! Port traits for infrastructure boundaries.
//!
//! Storage is the only abstraction in the engine. Everything else is a
//! concrete type. Ports exist so the SQLite store can be swapped for the
//! in-memory one (or a mock in tests).

mod error;
mod repos;

// =============================================================================
// Repository Ports
// =============================================================================
pub use repos::PlayerRepo;

// =============================================================================
// Test-Only Mock Repositories (only available during test builds)
// =============================================================================
#[cfg(test)]
pub use repos::MockPlayerRepo;

// =============================================================================
// Error Types
// =============================================================================
pub use error::RepoError;
