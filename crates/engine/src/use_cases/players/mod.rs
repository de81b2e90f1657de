//! Player registry use cases.
//!
//! Thin orchestration over [`PlayerRepo`]: ids and payloads are validated
//! here, storage errors pass through untouched.

mod manage;
mod search;

use std::sync::Arc;

use questlog_domain::{DomainError, PlayerId};

use crate::infrastructure::ports::{PlayerRepo, RepoError};

pub use manage::ManagePlayers;
pub use search::SearchPlayers;

/// Shared error type for player use cases.
#[derive(Debug, thiserror::Error)]
pub enum PlayerError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Player not found: {0}")]
    NotFound(PlayerId),
    #[error("Storage error: {0}")]
    Storage(#[from] RepoError),
}

impl From<DomainError> for PlayerError {
    fn from(err: DomainError) -> Self {
        Self::InvalidInput(err.to_string())
    }
}

/// Container for player use cases.
pub struct PlayerUseCases {
    pub manage: ManagePlayers,
    pub search: SearchPlayers,
}

impl PlayerUseCases {
    pub fn new(repo: Arc<dyn PlayerRepo>) -> Self {
        Self {
            manage: ManagePlayers::new(repo.clone()),
            search: SearchPlayers::new(repo),
        }
    }
}

/// Ids arrive as raw integers from the outside; zero and negatives are
/// rejected before storage is consulted.
fn player_id(raw: i64) -> Result<PlayerId, PlayerError> {
    PlayerId::new(raw).map_err(|e| {
        tracing::warn!(raw_id = raw, error = %e, "Rejected player id");
        PlayerError::from(e)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_positive_ids_are_invalid_input() {
        for raw in [0, -1, i64::MIN] {
            assert!(matches!(player_id(raw), Err(PlayerError::InvalidInput(_))));
        }
        assert_eq!(player_id(7).unwrap().get(), 7);
    }

    #[test]
    fn domain_errors_become_invalid_input() {
        let err = PlayerError::from(DomainError::validation("name is required"));
        assert_eq!(
            err.to_string(),
            "Invalid input: Validation failed: name is required"
        );
    }
}
