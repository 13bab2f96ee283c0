use ferrous_records_domain::{DomainError, HistoryAction, HistoryEntry};
use std::sync::Arc;
use tracing::instrument;

use crate::ports::HistoryRepository;

pub struct GetHistoryUseCase {
    repo: Arc<dyn HistoryRepository>,
}

impl GetHistoryUseCase {
    pub fn new(repo: Arc<dyn HistoryRepository>) -> Self {
        Self { repo }
    }

    #[instrument(skip(self))]
    pub async fn list(
        &self,
        action: Option<HistoryAction>,
        limit: u32,
    ) -> Result<Vec<HistoryEntry>, DomainError> {
        self.repo.list(action, limit).await
    }

    #[instrument(skip(self))]
    pub async fn for_record(&self, record_id: i64) -> Result<Vec<HistoryEntry>, DomainError> {
        self.repo.list_for_record(record_id).await
    }

    /// Total entries for the filter, ignoring any page limit.
    #[instrument(skip(self))]
    pub async fn count(&self, action: Option<HistoryAction>) -> Result<u64, DomainError> {
        self.repo.count(action).await
    }
}
