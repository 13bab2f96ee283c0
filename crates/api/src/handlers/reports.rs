use axum::{extract::State, response::Json, routing::get, Router};
use tracing::debug;

use crate::{
    dto::{DailyReportResponse, TldGroupResponse, TldReportResponse},
    errors::ApiError,
    state::AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/reports/daily", get(get_daily_report))
        .route("/reports/tld", get(get_tld_report))
        .route("/reports/tld/records", get(get_tld_groups))
}

async fn get_daily_report(
    State(state): State<AppState>,
) -> Result<Json<DailyReportResponse>, ApiError> {
    let report = state.queries.daily_counts.execute().await?;
    debug!(total = report.total, days = report.days.len(), "Daily report built");
    Ok(Json(DailyReportResponse {
        total: report.total,
        days: report.days,
    }))
}

async fn get_tld_report(
    State(state): State<AppState>,
) -> Result<Json<TldReportResponse>, ApiError> {
    let data = state.queries.tld_report.counts().await?;
    Ok(Json(TldReportResponse { data }))
}

async fn get_tld_groups(
    State(state): State<AppState>,
) -> Result<Json<Vec<TldGroupResponse>>, ApiError> {
    let groups = state.queries.tld_report.groups().await?;
    Ok(Json(
        groups.into_iter().map(TldGroupResponse::from_domain).collect(),
    ))
}
