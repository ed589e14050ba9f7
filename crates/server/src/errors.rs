use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use service::errors::ServiceError;
use thiserror::Error;
use tracing::error;

/// Request-level failure. Every variant renders as `{"detail": "..."}`.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Service(#[from] ServiceError),
    #[error(transparent)]
    Body(#[from] JsonRejection),
}

impl ApiError {
    fn status_and_detail(&self) -> (StatusCode, String) {
        match self {
            ApiError::Service(e @ ServiceError::DuplicateEmail) => (StatusCode::BAD_REQUEST, e.to_string()),
            ApiError::Service(e @ ServiceError::NotFound(_)) => (StatusCode::NOT_FOUND, e.to_string()),
            ApiError::Service(e @ ServiceError::Hash(_)) => {
                error!(code = e.code(), error = %e, "request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, "internal server error".into())
            }
            ApiError::Body(rejection) => (rejection.status(), rejection.body_text()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, detail) = self.status_and_detail();
        (status, Json(serde_json::json!({"detail": detail}))).into_response()
    }
}

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service_errors_map_to_client_statuses() {
        let (status, detail) = ApiError::from(ServiceError::DuplicateEmail).status_and_detail();
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(detail, "email already used");

        let (status, detail) = ApiError::from(ServiceError::not_found("user")).status_and_detail();
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(detail, "user not found");
    }

    #[test]
    fn hash_failures_hide_internals() {
        let (status, detail) = ApiError::from(ServiceError::Hash("salt".into())).status_and_detail();
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(!detail.contains("salt"));
    }
}
