use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use domain::DomainError;
use tracing::error;

/// Uniform error-to-status mapping for every handler: 400 for malformed
/// requests, 404 for missing identities, 409 for duplicate associations,
/// 500 for storage failures. Field validation errors never pass through
/// here; they re-render the originating form instead.
#[derive(Debug)]
pub enum AppError {
    BadRequest(String),
    Domain(DomainError),
}

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        AppError::Domain(err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::BadRequest(message) => (StatusCode::BAD_REQUEST, message).into_response(),
            AppError::Domain(err @ DomainError::EntityNotFound { .. }) => {
                (StatusCode::NOT_FOUND, err.to_string()).into_response()
            }
            AppError::Domain(err @ DomainError::DuplicateAssociation { .. }) => {
                (StatusCode::CONFLICT, err.to_string()).into_response()
            }
            AppError::Domain(err) => {
                error!("request failed: {err}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
                    .into_response()
            }
        }
    }
}
