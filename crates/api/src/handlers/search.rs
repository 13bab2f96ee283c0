use axum::{
    extract::State,
    response::Json,
    routing::get,
    Router,
};
use tracing::debug;

use crate::{
    dto::{KeywordQuery, PrefixQuery, RecordResponse, SearchResponse},
    errors::ApiError,
    extract::ApiQuery,
    state::AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/search/keyword", get(search_by_keyword))
        .route("/search/prefix", get(search_by_prefix))
}

async fn search_by_keyword(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<KeywordQuery>,
) -> Result<Json<SearchResponse>, ApiError> {
    let records = state.queries.search.by_keyword(&params.q).await?;
    debug!(query = %params.q, count = records.len(), "Keyword search completed");
    Ok(Json(SearchResponse {
        query: params.q.trim().to_string(),
        count: records.len(),
        data: records.into_iter().map(RecordResponse::from_domain).collect(),
    }))
}

async fn search_by_prefix(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<PrefixQuery>,
) -> Result<Json<SearchResponse>, ApiError> {
    let records = state
        .queries
        .search
        .by_prefix(&params.q, params.sort)
        .await?;
    debug!(query = %params.q, count = records.len(), "Prefix search completed");
    Ok(Json(SearchResponse {
        query: params.q.trim().to_string(),
        count: records.len(),
        data: records.into_iter().map(RecordResponse::from_domain).collect(),
    }))
}
