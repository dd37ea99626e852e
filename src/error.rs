use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::Serialize;
use sqlx::Error as SqlxError;
use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum ForgeError {
    #[error("secret not found")]
    SecretNotFound,

    #[error("{0}")]
    Validation(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("database error: {0}")]
    Database(#[from] SqlxError),
}

impl IntoResponse for ForgeError {
    fn into_response(self) -> axum::response::Response {
        let (status, detail) = match self {
            ForgeError::SecretNotFound => (StatusCode::NOT_FOUND, "secret not found".to_string()),
            ForgeError::Validation(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg),
            ForgeError::Json(_) | ForgeError::Database(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "An internal server error occurred.".to_string(),
            ),
        };
        (status, Json(ErrorDetail { detail })).into_response()
    }
}

/// Standardized API error response body
#[derive(Serialize)]
pub struct ErrorDetail {
    pub detail: String,
}
