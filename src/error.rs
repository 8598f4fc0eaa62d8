//! Error handling

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::json;
use thiserror::Error;

use crate::inference::InferenceError;

pub type AppResult<T> = Result<T, AppError>;

/// One offending input field, as reported to the client.
#[derive(Debug, Clone, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Re-scope the error to a batch position, e.g. `customers[2].tenure`.
    pub fn indexed(self, index: usize) -> Self {
        Self {
            field: format!("customers[{}].{}", index, self.field),
            message: self.message,
        }
    }
}

#[derive(Debug, Error)]
pub enum AppError {
    /// Malformed input; the request never reaches the model.
    #[error("request validation failed")]
    Validation(Vec<FieldError>),

    /// Failure inside the model call. Not retried: the same vector would
    /// fail the same way.
    #[error("Prediction failed: {0}")]
    Inference(String),

    #[error("{0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Validation(errors) => {
                let body = Json(json!({ "detail": errors }));
                (StatusCode::UNPROCESSABLE_ENTITY, body).into_response()
            }
            AppError::Inference(msg) => {
                // Full detail stays server-side; the caller only gets the message
                tracing::error!("Prediction error: {}", msg);
                let body = Json(json!({ "detail": format!("Prediction failed: {}", msg) }));
                (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                let body = Json(json!({ "detail": "Internal server error" }));
                (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
            }
        }
    }
}

impl From<InferenceError> for AppError {
    fn from(err: InferenceError) -> Self {
        AppError::Inference(err.to_string())
    }
}

impl From<Vec<FieldError>> for AppError {
    fn from(errors: Vec<FieldError>) -> Self {
        AppError::Validation(errors)
    }
}
