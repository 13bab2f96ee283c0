mod history_repository;
mod record_repository;

pub use history_repository::HistoryRepository;
pub use record_repository::{RecordRepository, SearchOrder};
