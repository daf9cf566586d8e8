//! Error types for the sonar API.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use qsonar_engine::EngineError;
use qsonar_game::GameError;
use serde::Serialize;
use tracing::error;

/// API error type that converts to HTTP responses.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ApiError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Backend error: {0}")]
    BackendError(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type) = match &self {
            ApiError::BadRequest(_) => (StatusCode::BAD_REQUEST, "bad_request"),
            ApiError::BackendError(_) => (StatusCode::BAD_GATEWAY, "backend_error"),
            ApiError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "internal_error"),
        };

        let body = Json(ErrorResponse {
            error: error_type.to_string(),
            message: self.to_string(),
        });

        (status, body).into_response()
    }
}

impl From<EngineError> for ApiError {
    fn from(e: EngineError) -> Self {
        match e {
            EngineError::Execution(_) => ApiError::BackendError(e.to_string()),
            _ if e.is_rejected_request() => ApiError::BadRequest(e.to_string()),
            _ => {
                error!(error = %e, "engine defect");
                ApiError::Internal(e.to_string())
            }
        }
    }
}

impl From<GameError> for ApiError {
    fn from(e: GameError) -> Self {
        match e {
            GameError::Engine(inner) => inner.into(),
            other => ApiError::BadRequest(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use qsonar_hal::HalError;

    fn status_of(err: ApiError) -> StatusCode {
        err.into_response().status()
    }

    #[test]
    fn test_engine_error_status() {
        let rejected = EngineError::InvalidTargetCount {
            expected: 4,
            got: 3,
        };
        assert_eq!(status_of(rejected.into()), StatusCode::BAD_REQUEST);

        let offline = EngineError::Execution(HalError::BackendUnavailable("down".into()));
        assert_eq!(status_of(offline.into()), StatusCode::BAD_GATEWAY);

        let defect = EngineError::CountOutOfRange { count: 9, max: 4 };
        assert_eq!(status_of(defect.into()), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_game_error_status() {
        let bad = GameError::InvalidScan("scan-diag-A".into());
        assert_eq!(status_of(bad.into()), StatusCode::BAD_REQUEST);

        let wrapped = GameError::Engine(EngineError::Execution(HalError::ExecutionFailed("lost".into())));
        assert!(matches!(ApiError::from(wrapped), ApiError::BackendError(_)));
    }
}
