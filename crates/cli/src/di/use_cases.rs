use super::Repositories;
use ferrous_records_api::{QueryUseCases, RecordUseCases};
use ferrous_records_application::use_cases::{
    CreateRecordUseCase, DeleteRecordUseCase, GetDailyCountsUseCase, GetHistoryUseCase,
    GetRecordsUseCase, GetTldReportUseCase, SearchRecordsUseCase, UpdateRecordUseCase,
};
use ferrous_records_domain::config::RecordsConfig;
use std::sync::Arc;

pub struct UseCases {
    pub records: RecordUseCases,
    pub queries: QueryUseCases,
}

impl UseCases {
    pub fn new(repos: &Repositories, cfg: &RecordsConfig) -> Self {
        Self {
            records: RecordUseCases {
                create: Arc::new(CreateRecordUseCase::new(
                    repos.records.clone(),
                    cfg.reject_duplicates,
                )),
                update: Arc::new(UpdateRecordUseCase::new(
                    repos.records.clone(),
                    repos.history.clone(),
                    cfg.reject_duplicates,
                )),
                delete: Arc::new(DeleteRecordUseCase::new(
                    repos.records.clone(),
                    repos.history.clone(),
                )),
                get: Arc::new(GetRecordsUseCase::new(repos.records.clone())),
            },
            queries: QueryUseCases {
                search: Arc::new(SearchRecordsUseCase::new(repos.records.clone())),
                daily_counts: Arc::new(GetDailyCountsUseCase::new(repos.records.clone())),
                tld_report: Arc::new(GetTldReportUseCase::new(repos.records.clone())),
                history: Arc::new(GetHistoryUseCase::new(repos.history.clone())),
            },
        }
    }
}
