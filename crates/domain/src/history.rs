use crate::{DnsRecord, RecordFields};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HistoryAction {
    Edited,
    Deleted,
}

impl HistoryAction {
    pub fn to_str(&self) -> &'static str {
        match self {
            HistoryAction::Edited => "edited",
            HistoryAction::Deleted => "deleted",
        }
    }
}

impl fmt::Display for HistoryAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_str())
    }
}

impl FromStr for HistoryAction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "edited" => Ok(HistoryAction::Edited),
            "deleted" => Ok(HistoryAction::Deleted),
            _ => Err(format!("Unknown history action: {}", s)),
        }
    }
}

/// Audit row written before a record is edited or deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub id: i64,
    pub record_id: i64,
    pub action: HistoryAction,
    /// Record values as they were before the change.
    pub original: RecordFields,
    pub original_created_at: String,
    /// Values the record was edited to. Always `None` for deletions.
    pub replacement: Option<RecordFields>,
    pub occurred_at: String,
}

/// A history entry that has not been persisted yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewHistoryEntry {
    pub record_id: i64,
    pub action: HistoryAction,
    pub original: RecordFields,
    pub original_created_at: String,
    pub replacement: Option<RecordFields>,
}

impl NewHistoryEntry {
    pub fn edited(before: &DnsRecord, after: RecordFields) -> Self {
        Self {
            record_id: before.id,
            action: HistoryAction::Edited,
            original: before.fields(),
            original_created_at: before.created_at.clone(),
            replacement: Some(after),
        }
    }

    pub fn deleted(record: &DnsRecord) -> Self {
        Self {
            record_id: record.id,
            action: HistoryAction::Deleted,
            original: record.fields(),
            original_created_at: record.created_at.clone(),
            replacement: None,
        }
    }
}
