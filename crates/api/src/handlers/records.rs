use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};
use tracing::debug;

use crate::{
    dto::{
        CreateRecordRequest, HistoryEntryResponse, LatestQuery, PageQuery, PaginatedRecords,
        RecordResponse, UpdateRecordRequest,
    },
    errors::ApiError,
    extract::{ApiPath, ApiQuery, JsonOrForm},
    state::AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/records", get(get_all_records).post(create_record))
        .route("/records/latest", get(get_latest_records))
        .route(
            "/records/{id}",
            get(get_record).put(update_record).delete(delete_record),
        )
        .route("/records/{id}/history", get(get_record_history))
}

async fn get_all_records(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<PageQuery>,
) -> Result<Json<PaginatedRecords>, ApiError> {
    let limit = state.paging.page_size(params.limit);
    let (records, total) = state
        .records
        .get
        .get_all_paged(limit, params.offset)
        .await?;
    debug!(count = records.len(), total, "DNS records retrieved");
    Ok(Json(PaginatedRecords {
        data: records.into_iter().map(RecordResponse::from_domain).collect(),
        total,
        limit,
        offset: params.offset,
    }))
}

async fn get_latest_records(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<LatestQuery>,
) -> Result<Json<Vec<RecordResponse>>, ApiError> {
    let limit = state.paging.page_size(params.limit);
    let records = state.records.get.get_latest(limit).await?;
    Ok(Json(
        records.into_iter().map(RecordResponse::from_domain).collect(),
    ))
}

async fn get_record(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> Result<Json<RecordResponse>, ApiError> {
    let record = state.records.get.get_by_id(id).await?;
    Ok(Json(RecordResponse::from_domain(record)))
}

async fn create_record(
    State(state): State<AppState>,
    JsonOrForm(req): JsonOrForm<CreateRecordRequest>,
) -> Result<(StatusCode, Json<RecordResponse>), ApiError> {
    let record = state
        .records
        .create
        .execute(req.domain, req.record_type, req.value, req.ttl)
        .await?;

    Ok((StatusCode::CREATED, Json(RecordResponse::from_domain(record))))
}

async fn update_record(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
    JsonOrForm(req): JsonOrForm<UpdateRecordRequest>,
) -> Result<Json<RecordResponse>, ApiError> {
    let record = state
        .records
        .update
        .execute(id, req.into_changes())
        .await?;

    Ok(Json(RecordResponse::from_domain(record)))
}

async fn delete_record(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> Result<StatusCode, ApiError> {
    state.records.delete.execute(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn get_record_history(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> Result<Json<Vec<HistoryEntryResponse>>, ApiError> {
    let entries = state.queries.history.for_record(id).await?;
    Ok(Json(
        entries
            .into_iter()
            .map(HistoryEntryResponse::from_domain)
            .collect(),
    ))
}
