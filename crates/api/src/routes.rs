use crate::handlers;
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn create_api_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .merge(handlers::records::routes())
        .merge(handlers::search::routes())
        .merge(handlers::reports::routes())
        .merge(handlers::history::routes())
        .with_state(state)
}
