use ferrous_records_domain::{DailyCount, TldCount, TldGroup};
use serde::{Deserialize, Serialize};

use super::RecordResponse;

#[derive(Debug, Serialize, Deserialize)]
pub struct DailyReportResponse {
    pub total: u64,
    pub days: Vec<DailyCount>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TldReportResponse {
    pub data: Vec<TldCount>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TldGroupResponse {
    pub tld: String,
    pub count: usize,
    pub records: Vec<RecordResponse>,
}

impl TldGroupResponse {
    pub fn from_domain(g: TldGroup) -> Self {
        Self {
            tld: g.tld,
            count: g.records.len(),
            records: g.records.into_iter().map(RecordResponse::from_domain).collect(),
        }
    }
}
