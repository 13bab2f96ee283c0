pub mod history;
pub mod record;
pub mod report;
pub mod search;

pub use history::{HistoryEntryResponse, HistoryPage, HistoryQuery, RecordSnapshot};
pub use record::{
    CreateRecordRequest, LatestQuery, PageQuery, PaginatedRecords, RecordResponse,
    UpdateRecordRequest,
};
pub use report::{DailyReportResponse, TldGroupResponse, TldReportResponse};
pub use search::{KeywordQuery, PrefixQuery, SearchResponse};
