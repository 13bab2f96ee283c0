pub mod history_repository;
pub mod record_repository;

pub use history_repository::SqliteHistoryRepository;
pub use record_repository::SqliteRecordRepository;

pub(crate) fn now_timestamp() -> String {
    chrono::Utc::now().format("%Y-%m-%d %H:%M:%S").to_string()
}
