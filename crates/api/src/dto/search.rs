use ferrous_records_application::ports::SearchOrder;
use serde::{Deserialize, Serialize};

use super::RecordResponse;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct KeywordQuery {
    #[serde(default)]
    pub q: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PrefixQuery {
    #[serde(default)]
    pub q: String,
    #[serde(default)]
    pub sort: SearchOrder,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SearchResponse {
    pub query: String,
    pub count: usize,
    pub data: Vec<RecordResponse>,
}
