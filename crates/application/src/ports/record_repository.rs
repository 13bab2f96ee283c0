use async_trait::async_trait;
use ferrous_records_domain::{DailyCount, DnsRecord, DomainError, RecordFields};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Result ordering for prefix searches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchOrder {
    /// Order in which records were created.
    #[default]
    Insertion,
    /// Alphabetical by domain, case-insensitive.
    Domain,
}

#[async_trait]
pub trait RecordRepository: Send + Sync {
    async fn create(&self, fields: &RecordFields) -> Result<DnsRecord, DomainError>;

    async fn get_by_id(&self, id: i64) -> Result<Option<DnsRecord>, DomainError>;

    /// All records in insertion order.
    async fn get_all(&self) -> Result<Vec<DnsRecord>, DomainError>;

    async fn get_all_paged(
        &self,
        limit: u32,
        offset: u32,
    ) -> Result<(Vec<DnsRecord>, u64), DomainError>;

    /// Most recently created records first.
    async fn get_latest(&self, limit: u32) -> Result<Vec<DnsRecord>, DomainError>;

    async fn count(&self) -> Result<u64, DomainError>;

    /// A record with the same (domain, type, value), domain compared case-insensitively.
    async fn find_identical(&self, fields: &RecordFields)
        -> Result<Option<DnsRecord>, DomainError>;

    async fn update(&self, id: i64, fields: &RecordFields) -> Result<DnsRecord, DomainError>;

    async fn delete(&self, id: i64) -> Result<(), DomainError>;

    /// Records whose domain contains `term`, case-insensitive, insertion order.
    async fn search_contains(&self, term: &str) -> Result<Vec<DnsRecord>, DomainError>;

    /// Records whose domain starts with `prefix`, case-insensitive.
    async fn search_prefix(
        &self,
        prefix: &str,
        order: SearchOrder,
    ) -> Result<Vec<DnsRecord>, DomainError>;

    /// Record counts per creation day, ascending. Days without records are absent.
    async fn daily_counts(&self) -> Result<Vec<DailyCount>, DomainError>;

    async fn get_domains(&self) -> Result<Vec<Arc<str>>, DomainError>;

    /// Cheap round-trip used by health checks.
    async fn ping(&self) -> Result<(), DomainError>;
}
