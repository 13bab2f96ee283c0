use async_trait::async_trait;
use ferrous_records_application::ports::{RecordRepository, SearchOrder};
use ferrous_records_domain::{DailyCount, DnsRecord, DomainError, RecordFields, RecordType};
use sqlx::SqlitePool;
use std::sync::Arc;
use tracing::{error, instrument};

use super::now_timestamp;
use crate::database::map_sqlx_error;

type RecordRow = (i64, String, String, String, Option<i64>, String, String);

const RECORD_COLUMNS: &str = "id, domain, record_type, value, ttl, created_at, updated_at";

pub struct SqliteRecordRepository {
    pool: SqlitePool,
}

impl SqliteRecordRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    fn row_to_record(row: RecordRow) -> Result<DnsRecord, DomainError> {
        let (id, domain, record_type, value, ttl, created_at, updated_at) = row;
        let record_type = record_type.parse::<RecordType>().map_err(|e| {
            error!(id, error = %e, "Stored record has corrupt type");
            DomainError::DatabaseError(format!("record {} has corrupt type: {}", id, e))
        })?;

        Ok(DnsRecord {
            id,
            domain: Arc::from(domain.as_str()),
            record_type,
            value: Arc::from(value.as_str()),
            ttl: ttl.and_then(|t| u32::try_from(t).ok()),
            created_at,
            updated_at,
        })
    }

    fn rows_to_records(rows: Vec<RecordRow>) -> Result<Vec<DnsRecord>, DomainError> {
        rows.into_iter().map(Self::row_to_record).collect()
    }
}

#[async_trait]
impl RecordRepository for SqliteRecordRepository {
    #[instrument(skip(self))]
    async fn create(&self, fields: &RecordFields) -> Result<DnsRecord, DomainError> {
        let now = now_timestamp();

        let row = sqlx::query_as::<_, RecordRow>(&format!(
            "INSERT INTO dns_records (domain, record_type, value, ttl, created_at, updated_at)
             VALUES (?, ?, ?, ?, ?, ?)
             RETURNING {RECORD_COLUMNS}"
        ))
        .bind(fields.domain.as_ref())
        .bind(fields.record_type.as_str())
        .bind(fields.value.as_ref())
        .bind(fields.ttl.map(i64::from))
        .bind(&now)
        .bind(&now)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_sqlx_error(e, "Failed to create DNS record"))?;

        Self::row_to_record(row)
    }

    #[instrument(skip(self))]
    async fn get_by_id(&self, id: i64) -> Result<Option<DnsRecord>, DomainError> {
        let row = sqlx::query_as::<_, RecordRow>(&format!(
            "SELECT {RECORD_COLUMNS} FROM dns_records WHERE id = ?"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_sqlx_error(e, "Failed to query DNS record by id"))?;

        row.map(Self::row_to_record).transpose()
    }

    #[instrument(skip(self))]
    async fn get_all(&self) -> Result<Vec<DnsRecord>, DomainError> {
        let rows = sqlx::query_as::<_, RecordRow>(&format!(
            "SELECT {RECORD_COLUMNS} FROM dns_records ORDER BY id ASC"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| map_sqlx_error(e, "Failed to query all DNS records"))?;

        Self::rows_to_records(rows)
    }

    #[instrument(skip(self))]
    async fn get_all_paged(
        &self,
        limit: u32,
        offset: u32,
    ) -> Result<(Vec<DnsRecord>, u64), DomainError> {
        let total = self.count().await?;

        let rows = sqlx::query_as::<_, RecordRow>(&format!(
            "SELECT {RECORD_COLUMNS} FROM dns_records ORDER BY id ASC LIMIT ? OFFSET ?"
        ))
        .bind(limit as i64)
        .bind(offset as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| map_sqlx_error(e, "Failed to query DNS records paged"))?;

        Ok((Self::rows_to_records(rows)?, total))
    }

    #[instrument(skip(self))]
    async fn get_latest(&self, limit: u32) -> Result<Vec<DnsRecord>, DomainError> {
        let rows = sqlx::query_as::<_, RecordRow>(&format!(
            "SELECT {RECORD_COLUMNS} FROM dns_records
             ORDER BY created_at DESC, id DESC LIMIT ?"
        ))
        .bind(limit as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| map_sqlx_error(e, "Failed to query latest DNS records"))?;

        Self::rows_to_records(rows)
    }

    #[instrument(skip(self))]
    async fn count(&self) -> Result<u64, DomainError> {
        let row = sqlx::query_as::<_, (i64,)>("SELECT COUNT(*) FROM dns_records")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| map_sqlx_error(e, "Failed to count DNS records"))?;

        Ok(row.0 as u64)
    }

    #[instrument(skip(self))]
    async fn find_identical(
        &self,
        fields: &RecordFields,
    ) -> Result<Option<DnsRecord>, DomainError> {
        let row = sqlx::query_as::<_, RecordRow>(&format!(
            "SELECT {RECORD_COLUMNS} FROM dns_records
             WHERE lower(domain) = lower(?) AND record_type = ? AND value = ?
             ORDER BY id ASC LIMIT 1"
        ))
        .bind(fields.domain.as_ref())
        .bind(fields.record_type.as_str())
        .bind(fields.value.as_ref())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_sqlx_error(e, "Failed to look up identical DNS record"))?;

        row.map(Self::row_to_record).transpose()
    }

    #[instrument(skip(self))]
    async fn update(&self, id: i64, fields: &RecordFields) -> Result<DnsRecord, DomainError> {
        let now = now_timestamp();

        let row = sqlx::query_as::<_, RecordRow>(&format!(
            "UPDATE dns_records
             SET domain = ?, record_type = ?, value = ?, ttl = ?, updated_at = ?
             WHERE id = ?
             RETURNING {RECORD_COLUMNS}"
        ))
        .bind(fields.domain.as_ref())
        .bind(fields.record_type.as_str())
        .bind(fields.value.as_ref())
        .bind(fields.ttl.map(i64::from))
        .bind(&now)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_sqlx_error(e, "Failed to update DNS record"))?;

        row.map(Self::row_to_record)
            .transpose()?
            .ok_or(DomainError::RecordNotFound(id))
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i64) -> Result<(), DomainError> {
        let result = sqlx::query("DELETE FROM dns_records WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| map_sqlx_error(e, "Failed to delete DNS record"))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::RecordNotFound(id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn search_contains(&self, term: &str) -> Result<Vec<DnsRecord>, DomainError> {
        // instr() matches literally; LIKE would treat % and _ in user input as wildcards.
        let rows = sqlx::query_as::<_, RecordRow>(&format!(
            "SELECT {RECORD_COLUMNS} FROM dns_records
             WHERE instr(lower(domain), lower(?)) > 0
             ORDER BY id ASC"
        ))
        .bind(term)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| map_sqlx_error(e, "Failed to search DNS records by keyword"))?;

        Self::rows_to_records(rows)
    }

    #[instrument(skip(self))]
    async fn search_prefix(
        &self,
        prefix: &str,
        order: SearchOrder,
    ) -> Result<Vec<DnsRecord>, DomainError> {
        let order_by = match order {
            SearchOrder::Insertion => "id ASC",
            SearchOrder::Domain => "lower(domain) ASC, id ASC",
        };

        let rows = sqlx::query_as::<_, RecordRow>(&format!(
            "SELECT {RECORD_COLUMNS} FROM dns_records
             WHERE substr(lower(domain), 1, length(?1)) = lower(?1)
             ORDER BY {order_by}"
        ))
        .bind(prefix)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| map_sqlx_error(e, "Failed to search DNS records by prefix"))?;

        Self::rows_to_records(rows)
    }

    #[instrument(skip(self))]
    async fn daily_counts(&self) -> Result<Vec<DailyCount>, DomainError> {
        let rows = sqlx::query_as::<_, (String, i64)>(
            "SELECT substr(created_at, 1, 10) AS day, COUNT(*)
             FROM dns_records
             GROUP BY day
             ORDER BY day ASC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| map_sqlx_error(e, "Failed to count DNS records per day"))?;

        Ok(rows
            .into_iter()
            .map(|(date, count)| DailyCount {
                date,
                count: count as u64,
            })
            .collect())
    }

    #[instrument(skip(self))]
    async fn get_domains(&self) -> Result<Vec<Arc<str>>, DomainError> {
        let rows = sqlx::query_as::<_, (String,)>("SELECT domain FROM dns_records ORDER BY id ASC")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| map_sqlx_error(e, "Failed to query DNS record domains"))?;

        Ok(rows
            .into_iter()
            .map(|(domain,)| Arc::from(domain.as_str()))
            .collect())
    }

    async fn ping(&self) -> Result<(), DomainError> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(|e| map_sqlx_error(e, "Record store ping failed"))?;
        Ok(())
    }
}
