pub mod analytics;
pub mod history;
pub mod records;
pub mod search;

pub use analytics::{DailyReport, GetDailyCountsUseCase, GetTldReportUseCase};
pub use history::GetHistoryUseCase;
pub use records::{
    CreateRecordUseCase, DeleteRecordUseCase, GetRecordsUseCase, UpdateRecordUseCase,
};
pub use search::SearchRecordsUseCase;
