use ferrous_records_infrastructure::repositories::{
    SqliteHistoryRepository, SqliteRecordRepository,
};
use sqlx::SqlitePool;
use std::sync::Arc;

pub struct Repositories {
    pool: SqlitePool,
    pub records: Arc<SqliteRecordRepository>,
    pub history: Arc<SqliteHistoryRepository>,
}

impl Repositories {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            records: Arc::new(SqliteRecordRepository::new(pool.clone())),
            history: Arc::new(SqliteHistoryRepository::new(pool.clone())),
            pool,
        }
    }

    /// Waits for in-flight queries and closes every pooled connection.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}
