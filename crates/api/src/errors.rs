use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use ferrous_records_domain::DomainError;
use serde_json::json;

pub struct ApiError(pub DomainError);

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            DomainError::InvalidField { field, .. } => {
                return (
                    StatusCode::BAD_REQUEST,
                    Json(json!({ "error": self.0.to_string(), "field": field })),
                )
                    .into_response();
            }

            DomainError::EmptyUpdate => (StatusCode::BAD_REQUEST, self.0.to_string()),

            DomainError::RecordNotFound(_) => (StatusCode::NOT_FOUND, self.0.to_string()),

            DomainError::DuplicateRecord(_) => (StatusCode::CONFLICT, self.0.to_string()),

            // Store failures are logged where they are classified.
            DomainError::StoreUnavailable(_) => (
                StatusCode::SERVICE_UNAVAILABLE,
                "record store unavailable".to_string(),
            ),

            DomainError::DatabaseError(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal error".to_string(),
            ),
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}
