// src/engine/session.rs

use std::sync::Arc;

use uuid::Uuid;

use crate::{
    error::QuizError,
    models::{
        question::{Question, Quiz},
        session::{AnswerOutcome, SessionResult, SessionState},
    },
};

/// One user's walk through a quiz, question by question.
///
/// Finishing a session does not record anything; the caller hands the
/// result to the ledger.
#[derive(Debug)]
pub struct QuizSession {
    id: Uuid,
    username: String,
    quiz: Arc<Quiz>,
    state: SessionState,
    score: usize,
    incorrect: Vec<String>,
}

impl QuizSession {
    pub fn new(username: impl Into<String>, quiz: Arc<Quiz>) -> Self {
        Self {
            id: Uuid::new_v4(),
            username: username.into(),
            quiz,
            state: SessionState::AwaitingAnswer(0),
            score: 0,
            incorrect: Vec::new(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn quiz(&self) -> &Arc<Quiz> {
        &self.quiz
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_completed(&self) -> bool {
        self.state == SessionState::Completed
    }

    /// The question awaiting an answer, `None` once completed.
    pub fn current_question(&self) -> Option<&Question> {
        match self.state {
            SessionState::AwaitingAnswer(i) => self.quiz.questions().get(i),
            SessionState::Completed => None,
        }
    }

    /// Scores the current question and advances.
    ///
    /// `None` means nothing was selected. It, like any index outside the
    /// options, never matches the correct option.
    pub fn submit_answer(&mut self, selected: Option<usize>) -> Result<AnswerOutcome, QuizError> {
        let index = match self.state {
            SessionState::AwaitingAnswer(i) => i,
            SessionState::Completed => {
                tracing::error!(session_id = %self.id, "Answer submitted to a completed session");
                return Err(QuizError::SessionCompleted(self.id));
            }
        };

        let question = &self.quiz.questions()[index];
        let correct = selected == Some(question.correct_option());
        if correct {
            self.score += 1;
        } else {
            self.incorrect.push(question.missed_summary());
        }

        let next = index + 1;
        self.state = if next < self.quiz.question_count() {
            SessionState::AwaitingAnswer(next)
        } else {
            SessionState::Completed
        };

        tracing::debug!(
            session_id = %self.id,
            question = index,
            correct,
            "Answer scored"
        );

        Ok(AnswerOutcome {
            correct,
            done: self.is_completed(),
        })
    }

    /// Final tally; only available once every question has been answered.
    pub fn result(&self) -> Result<SessionResult, QuizError> {
        if !self.is_completed() {
            return Err(QuizError::SessionInProgress(self.id));
        }
        Ok(SessionResult {
            score: self.score,
            total: self.quiz.question_count(),
            incorrect: self.incorrect.clone(),
        })
    }
}
