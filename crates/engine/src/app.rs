//! Application state and composition.

use std::sync::Arc;

use crate::infrastructure::{
    config::{EngineConfig, StorageKind},
    memory::InMemoryPlayerRepo,
    ports::{PlayerRepo, RepoError},
    sqlite::SqlitePlayerRepo,
};
use crate::use_cases;

/// Main application state.
///
/// Holds the storage port and the use cases built on it.
/// Passed to HTTP handlers via Axum state.
pub struct App {
    pub repositories: Repositories,
    pub use_cases: UseCases,
}

/// Container for storage ports.
pub struct Repositories {
    pub player: Arc<dyn PlayerRepo>,
}

/// Container for all use cases.
pub struct UseCases {
    pub players: use_cases::PlayerUseCases,
}

impl App {
    /// Wire use cases over the given player storage.
    pub fn new(player_repo: Arc<dyn PlayerRepo>) -> Self {
        let use_cases = UseCases {
            players: use_cases::PlayerUseCases::new(player_repo.clone()),
        };

        Self {
            repositories: Repositories {
                player: player_repo,
            },
            use_cases,
        }
    }

    /// Build the app on whichever storage `config` selects.
    pub async fn from_config(config: &EngineConfig) -> Result<Self, RepoError> {
        let player_repo: Arc<dyn PlayerRepo> = match config.storage {
            StorageKind::Sqlite => {
                tracing::info!(path = %config.players_db, "Opening SQLite player storage");
                Arc::new(SqlitePlayerRepo::new(&config.players_db).await?)
            }
            StorageKind::Memory => {
                tracing::info!("Using in-memory player storage");
                Arc::new(InMemoryPlayerRepo::new())
            }
        };
        Ok(Self::new(player_repo))
    }
}

#[cfg(test)]
mod tests {
    use questlog_domain::{PlayerFilter, Race};

    use super::*;
    use crate::test_fixtures::players::payload;

    #[tokio::test]
    async fn use_cases_and_repository_share_storage() {
        let config = EngineConfig {
            storage: StorageKind::Memory,
            ..EngineConfig::default()
        };
        let app = App::from_config(&config).await.unwrap();

        app.use_cases
            .players
            .manage
            .create(payload("Frodo", Race::Hobbit, 100))
            .await
            .unwrap();

        let stored = app
            .repositories
            .player
            .count(&PlayerFilter::all())
            .await
            .unwrap();
        assert_eq!(stored, 1);
    }

    #[tokio::test]
    async fn sqlite_storage_opens_configured_file() {
        let temp_dir = tempfile::tempdir().expect("tempdir");
        let db_path = temp_dir.path().join("players.db");
        let config = EngineConfig {
            storage: StorageKind::Sqlite,
            players_db: db_path.to_string_lossy().to_string(),
            ..EngineConfig::default()
        };

        App::from_config(&config).await.unwrap();
        assert!(db_path.exists());
    }
}
