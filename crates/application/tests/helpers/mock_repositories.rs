use async_trait::async_trait;
use ferrous_records_application::ports::{HistoryRepository, RecordRepository, SearchOrder};
use ferrous_records_domain::analytics::day_of;
use ferrous_records_domain::{
    DailyCount, DnsRecord, DomainError, HistoryAction, HistoryEntry, NewHistoryEntry,
    RecordFields,
};
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

// ── MockRecordRepository ──────────────────────────────────────────────────────

#[derive(Clone)]
pub struct MockRecordRepository {
    records: Arc<RwLock<Vec<DnsRecord>>>,
    next_id: Arc<RwLock<i64>>,
    now: Arc<RwLock<String>>,
    should_fail: Arc<RwLock<bool>>,
}

impl MockRecordRepository {
    pub fn new() -> Self {
        Self {
            records: Arc::new(RwLock::new(Vec::new())),
            next_id: Arc::new(RwLock::new(1)),
            now: Arc::new(RwLock::new("2026-01-01 00:00:00".to_string())),
            should_fail: Arc::new(RwLock::new(false)),
        }
    }

    /// Timestamp stamped on records created from now on.
    pub async fn set_now(&self, timestamp: &str) {
        *self.now.write().await = timestamp.to_string();
    }

    pub async fn set_should_fail(&self, should_fail: bool) {
        *self.should_fail.write().await = should_fail;
    }

    pub async fn count_records(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn insert(&self, domain: &str, record_type: &str, value: &str) -> DnsRecord {
        let fields = RecordFields::parse(domain, record_type, value, None).unwrap();
        self.create(&fields).await.unwrap()
    }

    async fn check_available(&self) -> Result<(), DomainError> {
        if *self.should_fail.read().await {
            return Err(DomainError::StoreUnavailable("mock store offline".to_string()));
        }
        Ok(())
    }
}

impl Default for MockRecordRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RecordRepository for MockRecordRepository {
    async fn create(&self, fields: &RecordFields) -> Result<DnsRecord, DomainError> {
        self.check_available().await?;
        let now = self.now.read().await.clone();

        let mut next_id = self.next_id.write().await;
        let id = *next_id;
        *next_id += 1;

        let record = DnsRecord {
            id,
            domain: fields.domain.clone(),
            record_type: fields.record_type,
            value: fields.value.clone(),
            ttl: fields.ttl,
            created_at: now.clone(),
            updated_at: now,
        };

        self.records.write().await.push(record.clone());
        Ok(record)
    }

    async fn get_by_id(&self, id: i64) -> Result<Option<DnsRecord>, DomainError> {
        self.check_available().await?;
        Ok(self.records.read().await.iter().find(|r| r.id == id).cloned())
    }

    async fn get_all(&self) -> Result<Vec<DnsRecord>, DomainError> {
        self.check_available().await?;
        Ok(self.records.read().await.clone())
    }

    async fn get_all_paged(
        &self,
        limit: u32,
        offset: u32,
    ) -> Result<(Vec<DnsRecord>, u64), DomainError> {
        self.check_available().await?;
        let records = self.records.read().await;
        let page = records
            .iter()
            .skip(offset as usize)
            .take(limit as usize)
            .cloned()
            .collect();
        Ok((page, records.len() as u64))
    }

    async fn get_latest(&self, limit: u32) -> Result<Vec<DnsRecord>, DomainError> {
        self.check_available().await?;
        let mut records = self.records.read().await.clone();
        records.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        records.truncate(limit as usize);
        Ok(records)
    }

    async fn count(&self) -> Result<u64, DomainError> {
        self.check_available().await?;
        Ok(self.records.read().await.len() as u64)
    }

    async fn find_identical(
        &self,
        fields: &RecordFields,
    ) -> Result<Option<DnsRecord>, DomainError> {
        self.check_available().await?;
        let wanted = fields.identity();
        Ok(self
            .records
            .read()
            .await
            .iter()
            .find(|r| r.fields().identity() == wanted)
            .cloned())
    }

    async fn update(&self, id: i64, fields: &RecordFields) -> Result<DnsRecord, DomainError> {
        self.check_available().await?;
        let now = self.now.read().await.clone();
        let mut records = self.records.write().await;

        let record = records
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or(DomainError::RecordNotFound(id))?;

        record.domain = fields.domain.clone();
        record.record_type = fields.record_type;
        record.value = fields.value.clone();
        record.ttl = fields.ttl;
        record.updated_at = now;

        Ok(record.clone())
    }

    async fn delete(&self, id: i64) -> Result<(), DomainError> {
        self.check_available().await?;
        let mut records = self.records.write().await;
        let len_before = records.len();
        records.retain(|r| r.id != id);
        if records.len() == len_before {
            return Err(DomainError::RecordNotFound(id));
        }
        Ok(())
    }

    async fn search_contains(&self, term: &str) -> Result<Vec<DnsRecord>, DomainError> {
        self.check_available().await?;
        let term = term.to_lowercase();
        Ok(self
            .records
            .read()
            .await
            .iter()
            .filter(|r| r.domain.to_lowercase().contains(&term))
            .cloned()
            .collect())
    }

    async fn search_prefix(
        &self,
        prefix: &str,
        order: SearchOrder,
    ) -> Result<Vec<DnsRecord>, DomainError> {
        self.check_available().await?;
        let prefix = prefix.to_lowercase();
        let mut results: Vec<DnsRecord> = self
            .records
            .read()
            .await
            .iter()
            .filter(|r| r.domain.to_lowercase().starts_with(&prefix))
            .cloned()
            .collect();
        if order == SearchOrder::Domain {
            results.sort_by_key(|r| r.domain.to_lowercase());
        }
        Ok(results)
    }

    async fn daily_counts(&self) -> Result<Vec<DailyCount>, DomainError> {
        self.check_available().await?;
        let mut days: BTreeMap<String, u64> = BTreeMap::new();
        for record in self.records.read().await.iter() {
            *days.entry(day_of(&record.created_at).to_string()).or_insert(0) += 1;
        }
        Ok(days
            .into_iter()
            .map(|(date, count)| DailyCount { date, count })
            .collect())
    }

    async fn get_domains(&self) -> Result<Vec<Arc<str>>, DomainError> {
        self.check_available().await?;
        Ok(self
            .records
            .read()
            .await
            .iter()
            .map(|r| r.domain.clone())
            .collect())
    }

    async fn ping(&self) -> Result<(), DomainError> {
        self.check_available().await
    }
}

// ── MockHistoryRepository ─────────────────────────────────────────────────────

#[derive(Clone)]
pub struct MockHistoryRepository {
    entries: Arc<RwLock<Vec<HistoryEntry>>>,
    should_fail: Arc<RwLock<bool>>,
}

impl MockHistoryRepository {
    pub fn new() -> Self {
        Self {
            entries: Arc::new(RwLock::new(Vec::new())),
            should_fail: Arc::new(RwLock::new(false)),
        }
    }

    pub async fn set_should_fail(&self, should_fail: bool) {
        *self.should_fail.write().await = should_fail;
    }

    pub async fn count_entries(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn all_entries(&self) -> Vec<HistoryEntry> {
        self.entries.read().await.clone()
    }
}

impl Default for MockHistoryRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HistoryRepository for MockHistoryRepository {
    async fn append(&self, entry: NewHistoryEntry) -> Result<HistoryEntry, DomainError> {
        if *self.should_fail.read().await {
            return Err(DomainError::StoreUnavailable("mock history offline".to_string()));
        }

        let mut entries = self.entries.write().await;
        let stored = HistoryEntry {
            id: entries.len() as i64 + 1,
            record_id: entry.record_id,
            action: entry.action,
            original: entry.original,
            original_created_at: entry.original_created_at,
            replacement: entry.replacement,
            occurred_at: "2026-01-02 00:00:00".to_string(),
        };
        entries.push(stored.clone());
        Ok(stored)
    }

    async fn list(
        &self,
        action: Option<HistoryAction>,
        limit: u32,
    ) -> Result<Vec<HistoryEntry>, DomainError> {
        Ok(self
            .entries
            .read()
            .await
            .iter()
            .rev()
            .filter(|e| action.map_or(true, |a| e.action == a))
            .take(limit as usize)
            .cloned()
            .collect())
    }

    async fn list_for_record(&self, record_id: i64) -> Result<Vec<HistoryEntry>, DomainError> {
        Ok(self
            .entries
            .read()
            .await
            .iter()
            .rev()
            .filter(|e| e.record_id == record_id)
            .cloned()
            .collect())
    }

    async fn count(&self, action: Option<HistoryAction>) -> Result<u64, DomainError> {
        Ok(self
            .entries
            .read()
            .await
            .iter()
            .filter(|e| action.map_or(true, |a| e.action == a))
            .count() as u64)
    }
}
