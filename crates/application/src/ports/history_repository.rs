use async_trait::async_trait;
use ferrous_records_domain::{DomainError, HistoryAction, HistoryEntry, NewHistoryEntry};

/// Append-only audit log of edited and deleted records.
#[async_trait]
pub trait HistoryRepository: Send + Sync {
    async fn append(&self, entry: NewHistoryEntry) -> Result<HistoryEntry, DomainError>;

    /// Newest first, optionally restricted to one action.
    async fn list(
        &self,
        action: Option<HistoryAction>,
        limit: u32,
    ) -> Result<Vec<HistoryEntry>, DomainError>;

    /// Newest first. Works for records that no longer exist.
    async fn list_for_record(&self, record_id: i64) -> Result<Vec<HistoryEntry>, DomainError>;

    async fn count(&self, action: Option<HistoryAction>) -> Result<u64, DomainError>;
}
