use ferrous_records_application::use_cases::{
    CreateRecordUseCase, DeleteRecordUseCase, GetDailyCountsUseCase, GetHistoryUseCase,
    GetRecordsUseCase, GetTldReportUseCase, SearchRecordsUseCase, UpdateRecordUseCase,
};
use ferrous_records_domain::config::RecordsConfig;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub records: RecordUseCases,
    pub queries: QueryUseCases,
    pub paging: Arc<RecordsConfig>,
}

#[derive(Clone)]
pub struct RecordUseCases {
    pub create: Arc<CreateRecordUseCase>,
    pub update: Arc<UpdateRecordUseCase>,
    pub delete: Arc<DeleteRecordUseCase>,
    pub get: Arc<GetRecordsUseCase>,
}

#[derive(Clone)]
pub struct QueryUseCases {
    pub search: Arc<SearchRecordsUseCase>,
    pub daily_counts: Arc<GetDailyCountsUseCase>,
    pub tld_report: Arc<GetTldReportUseCase>,
    pub history: Arc<GetHistoryUseCase>,
}
