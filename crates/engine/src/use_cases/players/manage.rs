//! Create, read, update and delete for single players.

use std::sync::Arc;

use questlog_domain::{Player, PlayerPayload};

use crate::infrastructure::ports::{PlayerRepo, RepoError};

use super::{player_id, PlayerError};

pub struct ManagePlayers {
    repo: Arc<dyn PlayerRepo>,
}

impl ManagePlayers {
    pub fn new(repo: Arc<dyn PlayerRepo>) -> Self {
        Self { repo }
    }

    /// Validate a full payload and store it as a new player.
    pub async fn create(&self, payload: PlayerPayload) -> Result<Player, PlayerError> {
        let new_player = payload.into_new_player().map_err(|e| {
            tracing::warn!(error = %e, "Rejected player create payload");
            PlayerError::from(e)
        })?;

        let player = self.repo.create(&new_player).await.map_err(storage_failure)?;
        tracing::info!(
            player_id = %player.id,
            name = %player.name,
            level = player.level(),
            "Player created"
        );
        Ok(player)
    }

    pub async fn get(&self, raw_id: i64) -> Result<Player, PlayerError> {
        let id = player_id(raw_id)?;
        let player = self
            .repo
            .get(id)
            .await
            .map_err(storage_failure)?
            .ok_or(PlayerError::NotFound(id))?;

        tracing::debug!(player_id = %id, "Player fetched");
        Ok(player)
    }

    /// Apply the supplied attributes to an existing player.
    ///
    /// The payload is validated before the lookup, so a bad payload for a
    /// missing id is `InvalidInput` rather than `NotFound`.
    pub async fn update(&self, raw_id: i64, payload: PlayerPayload) -> Result<Player, PlayerError> {
        let id = player_id(raw_id)?;
        let changes = payload.validate().map_err(|e| {
            tracing::warn!(player_id = %id, error = %e, "Rejected player update payload");
            PlayerError::from(e)
        })?;

        let existing = self
            .repo
            .get(id)
            .await
            .map_err(storage_failure)?
            .ok_or(PlayerError::NotFound(id))?;

        if changes.is_empty() {
            tracing::debug!(player_id = %id, "Empty update, player unchanged");
            return Ok(existing);
        }

        let updated = changes.apply_to(existing);
        let saved = self.repo.save(&updated).await.map_err(|e| {
            if e.is_not_found() {
                PlayerError::NotFound(id)
            } else {
                storage_failure(e)
            }
        })?;

        tracing::info!(player_id = %id, level = saved.level(), "Player updated");
        Ok(saved)
    }

    pub async fn delete(&self, raw_id: i64) -> Result<(), PlayerError> {
        let id = player_id(raw_id)?;
        match self.repo.delete(id).await {
            Ok(()) => {
                tracing::info!(player_id = %id, "Player deleted");
                Ok(())
            }
            Err(e) if e.is_not_found() => Err(PlayerError::NotFound(id)),
            Err(e) => Err(storage_failure(e)),
        }
    }
}

fn storage_failure(err: RepoError) -> PlayerError {
    tracing::warn!(error = %err, "Player storage operation failed");
    PlayerError::Storage(err)
}
