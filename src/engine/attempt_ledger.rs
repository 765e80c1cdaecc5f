// src/engine/attempt_ledger.rs

use std::{collections::HashMap, sync::Arc};

use crate::{
    error::QuizError,
    models::{attempt::QuizAttempt, question::Quiz},
};

/// Every completed attempt, grouped by username.
///
/// History is append-only: retakes add new attempts, nothing is merged or capped.
#[derive(Debug, Default)]
pub struct AttemptLedger {
    attempts: HashMap<String, Vec<QuizAttempt>>,
}

impl AttemptLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an attempt under `username`, creating the entry on first use.
    pub fn record_attempt(
        &mut self,
        username: &str,
        quiz: Arc<Quiz>,
        score: usize,
        incorrect_answers: Vec<String>,
    ) -> Result<(), QuizError> {
        let total = quiz.question_count();
        if score > total {
            return Err(QuizError::ScoreOutOfRange { score, total });
        }

        self.attempts
            .entry(username.to_string())
            .or_default()
            .push(QuizAttempt {
                username: username.to_string(),
                quiz,
                score,
                incorrect_answers,
                completed_at: chrono::Utc::now(),
            });
        Ok(())
    }

    /// All attempts of all users, highest score first.
    ///
    /// Order among equal scores is unspecified.
    pub fn leaderboard(&self) -> Vec<&QuizAttempt> {
        let mut board: Vec<&QuizAttempt> = self.attempts.values().flatten().collect();
        board.sort_by(|a, b| b.score.cmp(&a.score));
        board
    }

    /// A user's attempts in the order they were recorded.
    pub fn attempts_for(&self, username: &str) -> &[QuizAttempt] {
        self.attempts
            .get(username)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn total_attempts(&self) -> usize {
        self.attempts.values().map(Vec::len).sum()
    }
}
