mod daily_counts;
mod tld_report;

pub use daily_counts::{DailyReport, GetDailyCountsUseCase};
pub use tld_report::GetTldReportUseCase;
