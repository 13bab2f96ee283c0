use ferrous_records_domain::{DnsRecord, DomainError};
use std::sync::Arc;
use tracing::instrument;

use crate::ports::RecordRepository;

pub struct GetRecordsUseCase {
    repo: Arc<dyn RecordRepository>,
}

impl GetRecordsUseCase {
    pub fn new(repo: Arc<dyn RecordRepository>) -> Self {
        Self { repo }
    }

    #[instrument(skip(self))]
    pub async fn get_by_id(&self, id: i64) -> Result<DnsRecord, DomainError> {
        self.repo
            .get_by_id(id)
            .await?
            .ok_or(DomainError::RecordNotFound(id))
    }

    #[instrument(skip(self))]
    pub async fn get_all_paged(
        &self,
        limit: u32,
        offset: u32,
    ) -> Result<(Vec<DnsRecord>, u64), DomainError> {
        self.repo.get_all_paged(limit, offset).await
    }

    #[instrument(skip(self))]
    pub async fn get_latest(&self, limit: u32) -> Result<Vec<DnsRecord>, DomainError> {
        self.repo.get_latest(limit).await
    }

    #[instrument(skip(self))]
    pub async fn count(&self) -> Result<u64, DomainError> {
        self.repo.count().await
    }

    pub async fn ping(&self) -> Result<(), DomainError> {
        self.repo.ping().await
    }
}
