use ferrous_records_domain::{DnsRecord, DomainError, NewHistoryEntry};
use std::sync::Arc;
use tracing::{info, instrument};

use crate::ports::{HistoryRepository, RecordRepository};

pub struct DeleteRecordUseCase {
    repo: Arc<dyn RecordRepository>,
    history: Arc<dyn HistoryRepository>,
}

impl DeleteRecordUseCase {
    pub fn new(repo: Arc<dyn RecordRepository>, history: Arc<dyn HistoryRepository>) -> Self {
        Self { repo, history }
    }

    /// Copies the record into history, then removes it. Returns the removed record.
    #[instrument(skip(self))]
    pub async fn execute(&self, id: i64) -> Result<DnsRecord, DomainError> {
        let record = self
            .repo
            .get_by_id(id)
            .await?
            .ok_or(DomainError::RecordNotFound(id))?;

        let entry = self.history.append(NewHistoryEntry::deleted(&record)).await?;

        self.repo.delete(id).await?;

        info!(
            record_id = id,
            history_id = entry.id,
            domain = %record.domain,
            record_type = %record.record_type,
            "DNS record deleted successfully"
        );

        Ok(record)
    }
}
