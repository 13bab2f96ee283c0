use ferrous_records_domain::{DnsRecord, DomainError, RecordFields};
use std::sync::Arc;
use tracing::{info, instrument};

use crate::ports::RecordRepository;

pub struct CreateRecordUseCase {
    repo: Arc<dyn RecordRepository>,
    reject_duplicates: bool,
}

impl CreateRecordUseCase {
    pub fn new(repo: Arc<dyn RecordRepository>, reject_duplicates: bool) -> Self {
        Self {
            repo,
            reject_duplicates,
        }
    }

    #[instrument(skip(self))]
    pub async fn execute(
        &self,
        domain: String,
        record_type: String,
        value: String,
        ttl: Option<u32>,
    ) -> Result<DnsRecord, DomainError> {
        let fields = RecordFields::parse(&domain, &record_type, &value, ttl)?;

        if self.reject_duplicates {
            if let Some(existing) = self.repo.find_identical(&fields).await? {
                return Err(DomainError::DuplicateRecord(format!(
                    "{} {} {} (record {})",
                    fields.domain, fields.record_type, fields.value, existing.id
                )));
            }
        }

        let record = self.repo.create(&fields).await?;

        info!(
            record_id = record.id,
            domain = %record.domain,
            record_type = %record.record_type,
            value = %record.value,
            "DNS record created successfully"
        );

        Ok(record)
    }
}
