// src/models/session.rs

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::question::PublicQuestion;

/// Where a session stands in its walk through the quiz.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", content = "index", rename_all = "snake_case")]
pub enum SessionState {
    /// Waiting for the answer to the question at this index.
    AwaitingAnswer(usize),
    Completed,
}

/// Outcome of a single submitted answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerOutcome {
    pub correct: bool,
    pub done: bool,
}

/// Final tally of a completed session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionResult {
    pub score: usize,
    pub total: usize,
    pub incorrect: Vec<String>,
}

/// DTO for submitting an answer.
///
/// `null` or a negative index means nothing was selected.
#[derive(Debug, Deserialize)]
pub struct SubmitAnswerRequest {
    pub option_index: Option<i64>,
}

impl SubmitAnswerRequest {
    pub fn selection(&self) -> Option<usize> {
        self.option_index.and_then(|i| usize::try_from(i).ok())
    }
}

/// Snapshot of a session for the client.
#[derive(Debug, Serialize)]
pub struct SessionView {
    pub session_id: Uuid,
    pub quiz_title: String,
    #[serde(flatten)]
    pub state: SessionState,
    pub total: usize,
    pub question: Option<PublicQuestion>,
}

/// Response to a submitted answer.
#[derive(Debug, Serialize)]
pub struct AnswerResponse {
    pub correct: bool,
    pub done: bool,
    pub next_question: Option<PublicQuestion>,
    pub result: Option<SessionResult>,
}
