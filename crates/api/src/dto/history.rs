use ferrous_records_domain::{HistoryEntry, RecordFields};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordSnapshot {
    pub domain: String,
    pub record_type: String,
    pub value: String,
    pub ttl: Option<u32>,
}

impl RecordSnapshot {
    fn from_fields(f: RecordFields) -> Self {
        Self {
            domain: f.domain.to_string(),
            record_type: f.record_type.as_str().to_string(),
            value: f.value.to_string(),
            ttl: f.ttl,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryEntryResponse {
    pub id: i64,
    pub record_id: i64,
    pub action: String,
    pub original: RecordSnapshot,
    pub original_created_at: String,
    pub replacement: Option<RecordSnapshot>,
    pub occurred_at: String,
}

impl HistoryEntryResponse {
    pub fn from_domain(e: HistoryEntry) -> Self {
        Self {
            id: e.id,
            record_id: e.record_id,
            action: e.action.to_str().to_string(),
            original: RecordSnapshot::from_fields(e.original),
            original_created_at: e.original_created_at,
            replacement: e.replacement.map(RecordSnapshot::from_fields),
            occurred_at: e.occurred_at,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct HistoryQuery {
    pub action: Option<String>,
    pub limit: Option<u32>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HistoryPage {
    pub data: Vec<HistoryEntryResponse>,
    pub total: u64,
}
