use async_trait::async_trait;
use ferrous_records_application::ports::HistoryRepository;
use ferrous_records_domain::{
    DomainError, HistoryAction, HistoryEntry, NewHistoryEntry, RecordFields, RecordType,
};
use sqlx::SqlitePool;
use std::sync::Arc;
use tracing::{error, instrument};

use super::now_timestamp;
use crate::database::map_sqlx_error;

type HistoryRow = (
    i64,
    i64,
    String,
    String,
    String,
    String,
    Option<i64>,
    String,
    Option<String>,
    Option<String>,
    Option<String>,
    Option<i64>,
    String,
);

const HISTORY_COLUMNS: &str = "id, record_id, action, domain, record_type, value, ttl, \
     original_created_at, new_domain, new_record_type, new_value, new_ttl, occurred_at";

pub struct SqliteHistoryRepository {
    pool: SqlitePool,
}

impl SqliteHistoryRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    fn parse_type(id: i64, raw: &str) -> Result<RecordType, DomainError> {
        raw.parse::<RecordType>().map_err(|e| {
            error!(id, error = %e, "Stored history entry has corrupt type");
            DomainError::DatabaseError(format!("history entry {} has corrupt type: {}", id, e))
        })
    }

    fn row_to_entry(row: HistoryRow) -> Result<HistoryEntry, DomainError> {
        let (
            id,
            record_id,
            action,
            domain,
            record_type,
            value,
            ttl,
            original_created_at,
            new_domain,
            new_record_type,
            new_value,
            new_ttl,
            occurred_at,
        ) = row;

        let action = action.parse::<HistoryAction>().map_err(DomainError::DatabaseError)?;

        let original = RecordFields {
            domain: Arc::from(domain.as_str()),
            record_type: Self::parse_type(id, &record_type)?,
            value: Arc::from(value.as_str()),
            ttl: ttl.and_then(|t| u32::try_from(t).ok()),
        };

        let replacement = match (new_domain, new_record_type, new_value) {
            (Some(domain), Some(record_type), Some(value)) => Some(RecordFields {
                domain: Arc::from(domain.as_str()),
                record_type: Self::parse_type(id, &record_type)?,
                value: Arc::from(value.as_str()),
                ttl: new_ttl.and_then(|t| u32::try_from(t).ok()),
            }),
            _ => None,
        };

        Ok(HistoryEntry {
            id,
            record_id,
            action,
            original,
            original_created_at,
            replacement,
            occurred_at,
        })
    }

    fn rows_to_entries(rows: Vec<HistoryRow>) -> Result<Vec<HistoryEntry>, DomainError> {
        rows.into_iter().map(Self::row_to_entry).collect()
    }
}

#[async_trait]
impl HistoryRepository for SqliteHistoryRepository {
    #[instrument(skip(self, entry), fields(record_id = entry.record_id, action = %entry.action))]
    async fn append(&self, entry: NewHistoryEntry) -> Result<HistoryEntry, DomainError> {
        let now = now_timestamp();
        let replacement = entry.replacement.as_ref();

        let row = sqlx::query_as::<_, HistoryRow>(&format!(
            "INSERT INTO record_history
                 (record_id, action, domain, record_type, value, ttl, original_created_at,
                  new_domain, new_record_type, new_value, new_ttl, occurred_at)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
             RETURNING {HISTORY_COLUMNS}"
        ))
        .bind(entry.record_id)
        .bind(entry.action.to_str())
        .bind(entry.original.domain.as_ref())
        .bind(entry.original.record_type.as_str())
        .bind(entry.original.value.as_ref())
        .bind(entry.original.ttl.map(i64::from))
        .bind(&entry.original_created_at)
        .bind(replacement.map(|r| r.domain.to_string()))
        .bind(replacement.map(|r| r.record_type.as_str()))
        .bind(replacement.map(|r| r.value.to_string()))
        .bind(replacement.and_then(|r| r.ttl).map(i64::from))
        .bind(&now)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_sqlx_error(e, "Failed to append history entry"))?;

        Self::row_to_entry(row)
    }

    #[instrument(skip(self))]
    async fn list(
        &self,
        action: Option<HistoryAction>,
        limit: u32,
    ) -> Result<Vec<HistoryEntry>, DomainError> {
        let rows = sqlx::query_as::<_, HistoryRow>(&format!(
            "SELECT {HISTORY_COLUMNS} FROM record_history
             WHERE ?1 IS NULL OR action = ?1
             ORDER BY id DESC LIMIT ?2"
        ))
        .bind(action.map(|a| a.to_str()))
        .bind(limit as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| map_sqlx_error(e, "Failed to list history entries"))?;

        Self::rows_to_entries(rows)
    }

    #[instrument(skip(self))]
    async fn list_for_record(&self, record_id: i64) -> Result<Vec<HistoryEntry>, DomainError> {
        let rows = sqlx::query_as::<_, HistoryRow>(&format!(
            "SELECT {HISTORY_COLUMNS} FROM record_history
             WHERE record_id = ?
             ORDER BY id DESC"
        ))
        .bind(record_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| map_sqlx_error(e, "Failed to list history for record"))?;

        Self::rows_to_entries(rows)
    }

    #[instrument(skip(self))]
    async fn count(&self, action: Option<HistoryAction>) -> Result<u64, DomainError> {
        let row = sqlx::query_as::<_, (i64,)>(
            "SELECT COUNT(*) FROM record_history WHERE ?1 IS NULL OR action = ?1",
        )
        .bind(action.map(|a| a.to_str()))
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_sqlx_error(e, "Failed to count history entries"))?;

        Ok(row.0 as u64)
    }
}
