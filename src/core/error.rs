use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::shared::types::ErrorResponse;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, detail) = match self {
            AppError::NotFound(msg) => {
                tracing::debug!("Lookup miss: {}", msg);
                (StatusCode::NOT_FOUND, msg)
            }
        };

        (status, Json(ErrorResponse { detail })).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
