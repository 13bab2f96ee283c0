use ferrous_records_domain::{DnsRecord, DomainError, NewHistoryEntry, RecordChanges};
use std::sync::Arc;
use tracing::{info, instrument};

use crate::ports::{HistoryRepository, RecordRepository};

pub struct UpdateRecordUseCase {
    repo: Arc<dyn RecordRepository>,
    history: Arc<dyn HistoryRepository>,
    reject_duplicates: bool,
}

impl UpdateRecordUseCase {
    pub fn new(
        repo: Arc<dyn RecordRepository>,
        history: Arc<dyn HistoryRepository>,
        reject_duplicates: bool,
    ) -> Self {
        Self {
            repo,
            history,
            reject_duplicates,
        }
    }

    /// Snapshots the current record into history, then overwrites it.
    ///
    /// The two writes are separate statements: a concurrent delete between
    /// them leaves an `edited` entry for a record that is then reported as
    /// not found.
    #[instrument(skip(self))]
    pub async fn execute(&self, id: i64, changes: RecordChanges) -> Result<DnsRecord, DomainError> {
        let current = self
            .repo
            .get_by_id(id)
            .await?
            .ok_or(DomainError::RecordNotFound(id))?;

        let fields = current.apply(&changes)?;

        if self.reject_duplicates && fields.identity() != current.fields().identity() {
            if let Some(existing) = self.repo.find_identical(&fields).await? {
                if existing.id != id {
                    return Err(DomainError::DuplicateRecord(format!(
                        "{} {} {} (record {})",
                        fields.domain, fields.record_type, fields.value, existing.id
                    )));
                }
            }
        }

        let entry = self
            .history
            .append(NewHistoryEntry::edited(&current, fields.clone()))
            .await?;

        let updated = self.repo.update(id, &fields).await?;

        info!(
            record_id = id,
            history_id = entry.id,
            domain = %updated.domain,
            record_type = %updated.record_type,
            value = %updated.value,
            "DNS record updated successfully"
        );

        Ok(updated)
    }
}
