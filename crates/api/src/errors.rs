use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use mailgate_domain::DomainError;
use serde_json::json;
use tracing::error;

pub struct ApiError(pub DomainError);

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            DomainError::EmailRequired
            | DomainError::InvalidEmail(_)
            | DomainError::InvalidDomainName(_) => (StatusCode::BAD_REQUEST, self.0.to_string()),

            DomainError::DuplicateDomain(_) => (StatusCode::CONFLICT, self.0.to_string()),

            DomainError::DomainNotWhitelisted(_) => (StatusCode::FORBIDDEN, self.0.to_string()),

            // Storage faults are internal: log the detail, return a bare 500.
            DomainError::DatabaseError(detail) => {
                error!(detail = %detail, "Storage failure surfaced to API");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal error".to_string(),
                )
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}
