use ferrous_records_domain::{DnsRecord, DomainError};
use std::sync::Arc;
use tracing::{debug, instrument};

use crate::ports::{RecordRepository, SearchOrder};

/// Keyword and prefix lookups over record domains.
///
/// Terms are trimmed and matched literally and case-insensitively. An empty
/// term matches every record.
pub struct SearchRecordsUseCase {
    repo: Arc<dyn RecordRepository>,
}

impl SearchRecordsUseCase {
    pub fn new(repo: Arc<dyn RecordRepository>) -> Self {
        Self { repo }
    }

    #[instrument(skip(self))]
    pub async fn by_keyword(&self, term: &str) -> Result<Vec<DnsRecord>, DomainError> {
        let results = self.repo.search_contains(term.trim()).await?;
        debug!(term = %term.trim(), matches = results.len(), "Keyword search completed");
        Ok(results)
    }

    #[instrument(skip(self))]
    pub async fn by_prefix(
        &self,
        prefix: &str,
        order: SearchOrder,
    ) -> Result<Vec<DnsRecord>, DomainError> {
        let results = self.repo.search_prefix(prefix.trim(), order).await?;
        debug!(prefix = %prefix.trim(), matches = results.len(), "Prefix search completed");
        Ok(results)
    }
}
