use axum::{extract::State, Json};
use serde::Serialize;
use tracing::{debug, instrument};

use crate::{errors::ApiError, state::AppState};

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub records: u64,
}

/// Liveness plus a round-trip to the record store.
#[instrument(skip_all)]
pub async fn health_check(State(state): State<AppState>) -> Result<Json<HealthResponse>, ApiError> {
    state.records.get.ping().await?;
    let records = state.records.get.count().await?;
    debug!(records, "Health check passed");
    Ok(Json(HealthResponse {
        status: "ok",
        records,
    }))
}
