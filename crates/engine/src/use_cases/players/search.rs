//! Filtered, paged listing and counting.

use std::sync::Arc;

use questlog_domain::{Page, PageSpec, Player, SearchCriteria};

use crate::infrastructure::ports::PlayerRepo;

use super::PlayerError;

pub struct SearchPlayers {
    repo: Arc<dyn PlayerRepo>,
}

impl SearchPlayers {
    pub fn new(repo: Arc<dyn PlayerRepo>) -> Self {
        Self { repo }
    }

    /// One page of matching players, in the requested order.
    pub async fn list(
        &self,
        page: &PageSpec,
        criteria: &SearchCriteria,
    ) -> Result<Vec<Player>, PlayerError> {
        Ok(self.list_page(page, criteria).await?.items)
    }

    /// Like [`Self::list`] but also reports how many players matched in total.
    pub async fn list_page(
        &self,
        page: &PageSpec,
        criteria: &SearchCriteria,
    ) -> Result<Page<Player>, PlayerError> {
        let filter = criteria.to_filter();
        let result = self.repo.list(&filter, page).await.map_err(|e| {
            tracing::warn!(error = %e, "Failed to list players");
            PlayerError::Storage(e)
        })?;

        tracing::debug!(
            conditions = filter.conditions().len(),
            page_number = page.page_number(),
            page_size = page.page_size(),
            order = %page.order(),
            returned = result.items.len(),
            total = result.total,
            "Listed players"
        );
        Ok(result)
    }

    pub async fn count(&self, criteria: &SearchCriteria) -> Result<u64, PlayerError> {
        let filter = criteria.to_filter();
        let total = self.repo.count(&filter).await.map_err(|e| {
            tracing::warn!(error = %e, "Failed to count players");
            PlayerError::Storage(e)
        })?;

        tracing::debug!(conditions = filter.conditions().len(), total, "Counted players");
        Ok(total)
    }
}
