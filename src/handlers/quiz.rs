// src/handlers/quiz.rs

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, Query, State},
    response::IntoResponse,
};

use crate::{
    engine::QuizEngine,
    error::AppError,
    models::{
        attempt::LeaderboardParams,
        question::{PublicQuiz, QuizSummary},
    },
};

/// Lists the available quizzes.
pub async fn list_quizzes(State(engine): State<Arc<QuizEngine>>) -> impl IntoResponse {
    let quizzes: Vec<QuizSummary> = engine
        .list_quizzes()
        .iter()
        .enumerate()
        .map(|(id, quiz)| QuizSummary {
            id,
            title: quiz.title().to_string(),
            question_count: quiz.question_count(),
        })
        .collect();

    Json(quizzes)
}

/// Returns one quiz with its questions, correct options hidden.
pub async fn get_quiz(
    State(engine): State<Arc<QuizEngine>>,
    Path(id): Path<usize>,
) -> Result<impl IntoResponse, AppError> {
    let quiz = engine.get_quiz(id)?;
    Ok(Json(PublicQuiz::new(id, &quiz)))
}

/// All recorded attempts, highest score first.
pub async fn get_leaderboard(
    State(engine): State<Arc<QuizEngine>>,
    Query(params): Query<LeaderboardParams>,
) -> impl IntoResponse {
    Json(engine.leaderboard(params.limit))
}
