//! Repository port traits for database access.

use async_trait::async_trait;
use questlog_domain::{NewPlayer, Page, PageSpec, Player, PlayerFilter, PlayerId};

use super::error::RepoError;

// =============================================================================
// Player Storage
// =============================================================================

/// Persistence for players.
///
/// Single-row writes are atomic. `list` returns a page and the filtered
/// total taken from the same snapshot.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PlayerRepo: Send + Sync {
    // CRUD
    /// Insert a new player; storage assigns the id.
    async fn create(&self, player: &NewPlayer) -> Result<Player, RepoError>;
    /// Overwrite every attribute of an existing player.
    ///
    /// Returns `RepoError::NotFound` when no row has this id.
    async fn save(&self, player: &Player) -> Result<Player, RepoError>;
    async fn get(&self, id: PlayerId) -> Result<Option<Player>, RepoError>;
    /// Returns `RepoError::NotFound` when no row has this id.
    async fn delete(&self, id: PlayerId) -> Result<(), RepoError>;

    // Queries
    async fn list(&self, filter: &PlayerFilter, page: &PageSpec)
        -> Result<Page<Player>, RepoError>;
    async fn count(&self, filter: &PlayerFilter) -> Result<u64, RepoError>;
}
