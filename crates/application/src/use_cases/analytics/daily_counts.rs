use ferrous_records_domain::{DailyCount, DomainError};
use std::sync::Arc;
use tracing::instrument;

use crate::ports::RecordRepository;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailyReport {
    pub total: u64,
    /// Ascending by date; days without submissions are absent.
    pub days: Vec<DailyCount>,
}

pub struct GetDailyCountsUseCase {
    repo: Arc<dyn RecordRepository>,
}

impl GetDailyCountsUseCase {
    pub fn new(repo: Arc<dyn RecordRepository>) -> Self {
        Self { repo }
    }

    #[instrument(skip(self))]
    pub async fn execute(&self) -> Result<DailyReport, DomainError> {
        let days = self.repo.daily_counts().await?;
        let total = self.repo.count().await?;
        Ok(DailyReport { total, days })
    }
}
