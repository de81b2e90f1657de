//! In-memory player storage for development and testing
//!
//! Players live in an id-ordered map behind a tokio `RwLock`. Nothing is
//! persisted across restarts.

use std::collections::BTreeMap;

use async_trait::async_trait;
use questlog_domain::{NewPlayer, Page, PageSpec, Player, PlayerFilter, PlayerId};
use tokio::sync::RwLock;

use crate::infrastructure::ports::{PlayerRepo, RepoError};

#[derive(Default)]
struct Store {
    players: BTreeMap<PlayerId, Player>,
    last_id: i64,
}

/// In-memory implementation of [`PlayerRepo`].
#[derive(Default)]
pub struct InMemoryPlayerRepo {
    store: RwLock<Store>,
}

impl InMemoryPlayerRepo {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PlayerRepo for InMemoryPlayerRepo {
    async fn create(&self, player: &NewPlayer) -> Result<Player, RepoError> {
        let mut store = self.store.write().await;
        let id = PlayerId::new(store.last_id + 1).map_err(RepoError::serialization)?;
        store.last_id = id.get();

        let player = player.clone().with_id(id);
        store.players.insert(id, player.clone());
        Ok(player)
    }

    async fn save(&self, player: &Player) -> Result<Player, RepoError> {
        let mut store = self.store.write().await;
        match store.players.get_mut(&player.id) {
            Some(slot) => {
                *slot = player.clone();
                Ok(player.clone())
            }
            None => Err(RepoError::not_found("Player", player.id)),
        }
    }

    async fn get(&self, id: PlayerId) -> Result<Option<Player>, RepoError> {
        Ok(self.store.read().await.players.get(&id).cloned())
    }

    async fn delete(&self, id: PlayerId) -> Result<(), RepoError> {
        self.store
            .write()
            .await
            .players
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| RepoError::not_found("Player", id))
    }

    async fn list(
        &self,
        filter: &PlayerFilter,
        page: &PageSpec,
    ) -> Result<Page<Player>, RepoError> {
        let store = self.store.read().await;
        let matching = store
            .players
            .values()
            .filter(|player| filter.matches(player))
            .cloned()
            .collect();
        Ok(page.paginate(matching))
    }

    async fn count(&self, filter: &PlayerFilter) -> Result<u64, RepoError> {
        let store = self.store.read().await;
        let count = store
            .players
            .values()
            .filter(|player| filter.matches(player))
            .count();
        Ok(count as u64)
    }
}
