use axum::{
    extract::State,
    response::Json,
    routing::get,
    Router,
};
use ferrous_records_domain::{DomainError, HistoryAction};

use crate::{
    dto::{HistoryEntryResponse, HistoryPage, HistoryQuery},
    errors::ApiError,
    extract::ApiQuery,
    state::AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new().route("/history", get(get_history))
}

async fn get_history(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<HistoryQuery>,
) -> Result<Json<HistoryPage>, ApiError> {
    let action = match params.action.as_deref().map(str::trim) {
        None | Some("") => None,
        Some(raw) => Some(
            raw.parse::<HistoryAction>()
                .map_err(|e| ApiError(DomainError::invalid("action", e)))?,
        ),
    };
    let limit = state.paging.page_size(params.limit);

    let entries = state.queries.history.list(action, limit).await?;
    let total = state.queries.history.count(action).await?;

    Ok(Json(HistoryPage {
        data: entries
            .into_iter()
            .map(HistoryEntryResponse::from_domain)
            .collect(),
        total,
    }))
}
