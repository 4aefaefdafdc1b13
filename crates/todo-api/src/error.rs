use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use domain::TodoError;
use thiserror::Error;

/// HTTP 境界で扱うエラー
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Todo(#[from] TodoError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            // 本文はメッセージのプレーンテキスト
            ApiError::Todo(e @ TodoError::NotFound(_)) => {
                tracing::warn!(error = %e, "Request failed");
                (StatusCode::NOT_FOUND, e.to_string()).into_response()
            }
            ApiError::Todo(e @ TodoError::Storage(_)) => {
                tracing::error!(error = %e, "Request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
                    .into_response()
            }
        }
    }
}
