// src/error.rs

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;
use uuid::Uuid;

/// Errors raised by the quiz engine.
#[derive(Debug, Error)]
pub enum QuizError {
    /// No quiz at this position in the bank.
    #[error("quiz {0} not found")]
    UnknownQuiz(usize),

    /// No live session with this id.
    #[error("session {0} not found")]
    UnknownSession(Uuid),

    /// An answer was submitted to a session that has already finished.
    #[error("session {0} is already completed")]
    SessionCompleted(Uuid),

    /// A result was requested before the last question was answered.
    #[error("session {0} is still in progress")]
    SessionInProgress(Uuid),

    /// The session belongs to another user.
    #[error("session {0} belongs to another user")]
    NotSessionOwner(Uuid),

    /// A recorded score exceeds the quiz's question count.
    #[error("score {score} exceeds question count {total}")]
    ScoreOutOfRange { score: usize, total: usize },

    /// Malformed question or quiz definition.
    #[error("invalid question: {0}")]
    InvalidQuestion(String),

    #[error("failed to read quiz bank: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse quiz bank: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Global Application Error Enum.
/// Centralizes error handling and mapping to HTTP responses.
#[derive(Debug, Error)]
pub enum AppError {
    // 500 Internal Server Error
    #[error("internal server error: {0}")]
    InternalServerError(String),

    // 400 Bad Request
    #[error("bad request: {0}")]
    BadRequest(String),

    // 401 Unauthorized
    #[error("unauthorized: {0}")]
    AuthError(String),

    // 403 Forbidden
    #[error("forbidden: {0}")]
    Forbidden(String),

    // 404 Not Found
    #[error("not found: {0}")]
    NotFound(String),

    // 409 Conflict (duplicate username, answering a finished session)
    #[error("conflict: {0}")]
    Conflict(String),
}

/// Converts the error into a JSON response with appropriate HTTP status code.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::InternalServerError(msg) => {
                tracing::error!("Internal Server Error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal Server Error".to_string(),
                )
            }
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::AuthError(msg) => (StatusCode::UNAUTHORIZED, msg),
            AppError::Forbidden(msg) => (StatusCode::FORBIDDEN, msg),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::Conflict(msg) => (StatusCode::CONFLICT, msg),
        };
        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

/// Maps engine errors onto HTTP error kinds so handlers can use `?`.
impl From<QuizError> for AppError {
    fn from(err: QuizError) -> Self {
        match err {
            QuizError::UnknownQuiz(_) | QuizError::UnknownSession(_) => {
                AppError::NotFound(err.to_string())
            }
            QuizError::SessionCompleted(_) | QuizError::SessionInProgress(_) => {
                AppError::Conflict(err.to_string())
            }
            QuizError::NotSessionOwner(_) => AppError::Forbidden(err.to_string()),
            QuizError::ScoreOutOfRange { .. } | QuizError::InvalidQuestion(_) => {
                AppError::BadRequest(err.to_string())
            }
            QuizError::Io(_) | QuizError::Parse(_) => {
                AppError::InternalServerError(err.to_string())
            }
        }
    }
}
