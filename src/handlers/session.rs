// src/handlers/session.rs

use std::sync::Arc;

use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use uuid::Uuid;

use crate::{
    engine::QuizEngine,
    error::AppError,
    models::{
        attempt::AttemptReview,
        session::{AnswerResponse, SubmitAnswerRequest},
    },
    utils::jwt::Claims,
};

/// Starts a session on quiz `id` for the caller.
pub async fn start_session(
    State(engine): State<Arc<QuizEngine>>,
    Extension(claims): Extension<Claims>,
    Path(id): Path<usize>,
) -> Result<impl IntoResponse, AppError> {
    let session_id = engine.create_session(&claims.sub, id)?;
    let view = engine.session_view(session_id, &claims.sub)?;
    Ok((StatusCode::CREATED, Json(view)))
}

pub async fn get_session(
    State(engine): State<Arc<QuizEngine>>,
    Extension(claims): Extension<Claims>,
    Path(session_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    Ok(Json(engine.session_view(session_id, &claims.sub)?))
}

/// Scores the answer to the current question.
///
/// When the last question is answered the session is finished, its attempt
/// recorded in the ledger, and the final result returned with the outcome.
/// The session id is no longer valid afterwards.
pub async fn submit_answer(
    State(engine): State<Arc<QuizEngine>>,
    Extension(claims): Extension<Claims>,
    Path(session_id): Path<Uuid>,
    Json(req): Json<SubmitAnswerRequest>,
) -> Result<impl IntoResponse, AppError> {
    let username = claims.sub.as_str();
    let outcome = engine.submit_answer(session_id, username, req.selection())?;

    if !outcome.done {
        let next_question = engine.current_question(session_id, username)?;
        return Ok(Json(AnswerResponse {
            correct: outcome.correct,
            done: false,
            next_question,
            result: None,
        }));
    }

    let (quiz, result) = engine.finish_session(session_id, username)?;
    engine.record_attempt(username, quiz, result.score, result.incorrect.clone())?;

    Ok(Json(AnswerResponse {
        correct: outcome.correct,
        done: true,
        next_question: None,
        result: Some(result),
    }))
}

/// Final score and missed questions of a completed session not yet finished.
/// 409 while the session is in progress, 404 once its attempt is recorded.
pub async fn get_result(
    State(engine): State<Arc<QuizEngine>>,
    Extension(claims): Extension<Claims>,
    Path(session_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    Ok(Json(engine.session_result(session_id, &claims.sub)?))
}

pub async fn close_session(
    State(engine): State<Arc<QuizEngine>>,
    Extension(claims): Extension<Claims>,
    Path(session_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    engine.close_session(session_id, &claims.sub)?;
    Ok(StatusCode::NO_CONTENT)
}

/// The caller's recorded attempts, oldest first, with missed questions.
pub async fn my_attempts(
    State(engine): State<Arc<QuizEngine>>,
    Extension(claims): Extension<Claims>,
) -> impl IntoResponse {
    let attempts: Vec<AttemptReview> = engine.attempts_for(&claims.sub);
    Json(attempts)
}
