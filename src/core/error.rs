use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::shared::constants::MSG_LOOKUP_FAILED;
use crate::shared::types::ErrorResponse;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Upstream service error: {0}")]
    Upstream(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Upstream(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message safe to show to the caller. Upstream and internal detail stays in the logs.
    pub fn client_message(&self) -> String {
        match self {
            AppError::Validation(msg) | AppError::NotFound(msg) => msg.clone(),
            AppError::Upstream(_) | AppError::Internal(_) => MSG_LOOKUP_FAILED.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Upstream failures are logged where they happen, with the request context
        if let AppError::Internal(ref detail) = self {
            tracing::error!("Internal error: {}", detail);
        }

        let body = Json(ErrorResponse::new(self.client_message()));

        (self.status(), body).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            AppError::Validation("x".into()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(AppError::NotFound("x".into()).status(), StatusCode::NOT_FOUND);
        assert_eq!(
            AppError::Upstream("x".into()).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_upstream_detail_is_not_exposed() {
        let err = AppError::Upstream("connection refused (os error 111)".into());
        assert_eq!(err.client_message(), MSG_LOOKUP_FAILED);

        let err = AppError::Internal("panic in mapper".into());
        assert_eq!(err.client_message(), MSG_LOOKUP_FAILED);
    }

    #[test]
    fn test_client_errors_keep_their_message() {
        let err = AppError::NotFound("No se encontró información para este RUC.".into());
        assert_eq!(
            err.client_message(),
            "No se encontró información para este RUC."
        );
    }
}
