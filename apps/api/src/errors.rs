use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::llm_client::LlmError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Blank input is not an error: it is a `NoteOutcome::Warning`.
/// Failures are logged where they occur, in the generator.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("LLM error: {0}")]
    Llm(#[from] LlmError),
}

impl AppError {
    /// Message safe to show to the person filling in the form.
    pub fn user_message(&self) -> String {
        match self {
            AppError::Llm(e) => format!("An error occurred: {e}"),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Llm(_) => StatusCode::BAD_GATEWAY,
        }
    }

    fn code(&self) -> &'static str {
        match self {
            AppError::Llm(_) => "LLM_ERROR",
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = Json(json!({
            "error": {
                "code": self.code(),
                "message": self.user_message()
            }
        }));

        (self.status(), body).into_response()
    }
}
