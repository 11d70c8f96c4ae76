use crate::error::CheckInError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    CheckIn(#[from] CheckInError),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("Not Found: {0}")]
    NotFound(String),

    #[error("Internal Server Error: {0}")]
    Any(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, msg) = match self {
            AppError::CheckIn(e @ (CheckInError::InvalidAnswer(_) | CheckInError::Validation(_))) => {
                (StatusCode::BAD_REQUEST, e.to_string())
            }
            AppError::CheckIn(e) => {
                tracing::error!("Check-in Error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
            AppError::Serde(e) => (StatusCode::BAD_REQUEST, e.to_string()),
            AppError::NotFound(s) => (StatusCode::NOT_FOUND, s),
            AppError::Any(e) => {
                tracing::error!("Internal Error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        (status, Json(json!({ "error": msg }))).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
