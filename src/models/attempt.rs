// src/models/attempt.rs

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::models::question::Quiz;

/// One completed pass through a quiz.
/// Created once when a finished session is recorded, never mutated afterwards.
#[derive(Debug, Clone)]
pub struct QuizAttempt {
    pub username: String,
    pub quiz: Arc<Quiz>,
    pub score: usize,
    pub incorrect_answers: Vec<String>,
    pub completed_at: chrono::DateTime<chrono::Utc>,
}

/// One row of the leaderboard.
#[derive(Debug, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub username: String,
    pub quiz_title: String,
    pub score: usize,
    pub completed_at: chrono::DateTime<chrono::Utc>,
}

impl From<&QuizAttempt> for LeaderboardEntry {
    fn from(attempt: &QuizAttempt) -> Self {
        Self {
            username: attempt.username.clone(),
            quiz_title: attempt.quiz.title().to_string(),
            score: attempt.score,
            completed_at: attempt.completed_at,
        }
    }
}

/// An attempt as shown on the caller's review page.
#[derive(Debug, Serialize, Deserialize)]
pub struct AttemptReview {
    pub quiz_title: String,
    pub score: usize,
    pub total: usize,
    pub incorrect: Vec<String>,
    pub completed_at: chrono::DateTime<chrono::Utc>,
}

impl From<&QuizAttempt> for AttemptReview {
    fn from(attempt: &QuizAttempt) -> Self {
        Self {
            quiz_title: attempt.quiz.title().to_string(),
            score: attempt.score,
            total: attempt.quiz.question_count(),
            incorrect: attempt.incorrect_answers.clone(),
            completed_at: attempt.completed_at,
        }
    }
}

/// Query parameters for the leaderboard.
#[derive(Debug, Deserialize)]
pub struct LeaderboardParams {
    pub limit: Option<usize>,
}
