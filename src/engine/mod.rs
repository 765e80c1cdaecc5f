// src/engine/mod.rs

//! In-memory quiz engine.
//!
//! [`QuizEngine`] owns the user directory, the question bank, the attempt
//! ledger and the table of live sessions. Each piece of mutable state sits
//! behind its own lock, so the engine can be shared across request handlers.

pub mod attempt_ledger;
pub mod question_bank;
pub mod session;
pub mod user_directory;

use std::{
    collections::HashMap,
    sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard},
};

use uuid::Uuid;

use crate::{
    error::QuizError,
    models::{
        attempt::{AttemptReview, LeaderboardEntry},
        question::{PublicQuestion, Quiz},
        session::{AnswerOutcome, SessionResult, SessionView},
    },
};

pub use attempt_ledger::AttemptLedger;
pub use question_bank::QuestionBank;
pub use session::QuizSession;
pub use user_directory::UserDirectory;

fn read<T>(lock: &RwLock<T>) -> RwLockReadGuard<'_, T> {
    lock.read().unwrap_or_else(PoisonError::into_inner)
}

fn write<T>(lock: &RwLock<T>) -> RwLockWriteGuard<'_, T> {
    lock.write().unwrap_or_else(PoisonError::into_inner)
}

#[derive(Debug)]
pub struct QuizEngine {
    bank: QuestionBank,
    users: RwLock<UserDirectory>,
    ledger: RwLock<AttemptLedger>,
    sessions: RwLock<HashMap<Uuid, QuizSession>>,
}

impl QuizEngine {
    pub fn new(bank: QuestionBank) -> Self {
        Self {
            bank,
            users: RwLock::new(UserDirectory::new()),
            ledger: RwLock::new(AttemptLedger::new()),
            sessions: RwLock::new(HashMap::new()),
        }
    }

    /// Registers a user. `false` means the username is taken.
    pub fn register_user(&self, username: &str, password: &str) -> bool {
        let registered = write(&self.users).register(username, password);
        if registered {
            tracing::info!(username, "User registered");
        } else {
            tracing::debug!(username, "Registration rejected: username taken");
        }
        registered
    }

    pub fn validate_user(&self, username: &str, password: &str) -> bool {
        read(&self.users).validate(username, password)
    }

    pub fn list_quizzes(&self) -> &[Arc<Quiz>] {
        self.bank.list_quizzes()
    }

    pub fn get_quiz(&self, quiz_id: usize) -> Result<Arc<Quiz>, QuizError> {
        self.bank.get(quiz_id)
    }

    /// Starts a new session for `username` on the quiz at `quiz_id`.
    pub fn create_session(&self, username: &str, quiz_id: usize) -> Result<Uuid, QuizError> {
        let quiz = self.bank.get(quiz_id)?;
        let session = QuizSession::new(username, quiz);
        let id = session.id();
        write(&self.sessions).insert(id, session);
        tracing::info!(username, quiz_id, session_id = %id, "Session started");
        Ok(id)
    }

    /// Runs `f` on a session owned by `username`.
    fn with_session<R>(
        &self,
        session_id: Uuid,
        username: &str,
        f: impl FnOnce(&mut QuizSession) -> Result<R, QuizError>,
    ) -> Result<R, QuizError> {
        let mut sessions = write(&self.sessions);
        let session = sessions
            .get_mut(&session_id)
            .ok_or(QuizError::UnknownSession(session_id))?;
        if session.username() != username {
            return Err(QuizError::NotSessionOwner(session_id));
        }
        f(session)
    }

    pub fn session_view(&self, session_id: Uuid, username: &str) -> Result<SessionView, QuizError> {
        self.with_session(session_id, username, |session| {
            Ok(SessionView {
                session_id,
                quiz_title: session.quiz().title().to_string(),
                state: session.state(),
                total: session.quiz().question_count(),
                question: session.current_question().map(PublicQuestion::from),
            })
        })
    }

    pub fn current_question(
        &self,
        session_id: Uuid,
        username: &str,
    ) -> Result<Option<PublicQuestion>, QuizError> {
        self.with_session(session_id, username, |session| {
            Ok(session.current_question().map(PublicQuestion::from))
        })
    }

    pub fn submit_answer(
        &self,
        session_id: Uuid,
        username: &str,
        selected: Option<usize>,
    ) -> Result<AnswerOutcome, QuizError> {
        self.with_session(session_id, username, |session| session.submit_answer(selected))
    }

    pub fn session_result(
        &self,
        session_id: Uuid,
        username: &str,
    ) -> Result<SessionResult, QuizError> {
        self.with_session(session_id, username, |session| session.result())
    }

    /// Takes a completed session out of the live table, returning what the
    /// caller needs to record the attempt.
    ///
    /// Runs under a single lock, so exactly one caller gets the result.
    pub fn finish_session(
        &self,
        session_id: Uuid,
        username: &str,
    ) -> Result<(Arc<Quiz>, SessionResult), QuizError> {
        let mut sessions = write(&self.sessions);
        let finished = {
            let session = sessions
                .get(&session_id)
                .ok_or(QuizError::UnknownSession(session_id))?;
            if session.username() != username {
                return Err(QuizError::NotSessionOwner(session_id));
            }
            (session.quiz().clone(), session.result()?)
        };
        sessions.remove(&session_id);
        tracing::debug!(session_id = %session_id, live = sessions.len(), "Session finished");
        Ok(finished)
    }

    /// Drops an unfinished session; it leaves no trace in the ledger.
    ///
    /// A completed session is waiting to be recorded through
    /// [`finish_session`](Self::finish_session) and cannot be closed.
    pub fn close_session(&self, session_id: Uuid, username: &str) -> Result<(), QuizError> {
        let mut sessions = write(&self.sessions);
        let (owned, completed) = sessions
            .get(&session_id)
            .map(|session| (session.username() == username, session.is_completed()))
            .ok_or(QuizError::UnknownSession(session_id))?;
        if !owned {
            return Err(QuizError::NotSessionOwner(session_id));
        }
        if completed {
            return Err(QuizError::SessionCompleted(session_id));
        }
        sessions.remove(&session_id);
        tracing::info!(username, session_id = %session_id, "Session closed");
        Ok(())
    }

    pub fn record_attempt(
        &self,
        username: &str,
        quiz: Arc<Quiz>,
        score: usize,
        incorrect: Vec<String>,
    ) -> Result<(), QuizError> {
        let title = quiz.title().to_string();
        let mut ledger = write(&self.ledger);
        ledger.record_attempt(username, quiz, score, incorrect)?;
        tracing::info!(
            username,
            quiz = %title,
            score,
            total_attempts = ledger.total_attempts(),
            "Attempt recorded"
        );
        Ok(())
    }

    pub fn user_count(&self) -> usize {
        read(&self.users).user_count()
    }

    /// Number of sessions still held in memory.
    pub fn live_sessions(&self) -> usize {
        read(&self.sessions).len()
    }

    /// Attempts across all users, highest score first, optionally truncated.
    pub fn leaderboard(&self, limit: Option<usize>) -> Vec<LeaderboardEntry> {
        let ledger = read(&self.ledger);
        let board = ledger.leaderboard();
        let limit = limit.unwrap_or(board.len());
        board
            .into_iter()
            .take(limit)
            .map(LeaderboardEntry::from)
            .collect()
    }

    pub fn attempts_for(&self, username: &str) -> Vec<AttemptReview> {
        read(&self.ledger)
            .attempts_for(username)
            .iter()
            .map(AttemptReview::from)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GK: &str = r#"[{"title": "GK", "questions": [
        {"text": "Capital of France?", "options": ["Berlin", "Madrid", "Paris", "Rome"], "correct_option": 2},
        {"text": "Red Planet?", "options": ["Earth", "Mars", "Jupiter", "Saturn"], "correct_option": 1}
    ]}]"#;

    fn engine() -> QuizEngine {
        QuizEngine::new(QuestionBank::from_json(GK).unwrap())
    }

    #[test]
    fn full_flow_lands_on_leaderboard() {
        let engine = engine();
        assert!(engine.register_user("bob", "pw"));
        assert!(engine.validate_user("bob", "pw"));

        let id = engine.create_session("bob", 0).unwrap();
        engine.submit_answer(id, "bob", Some(2)).unwrap();
        let outcome = engine.submit_answer(id, "bob", Some(0)).unwrap();
        assert!(outcome.done);

        let result = engine.session_result(id, "bob").unwrap();
        assert_eq!(result.score, 1);
        assert_eq!(result.incorrect, vec!["Q: Red Planet? Correct: Mars".to_string()]);

        // Completion alone does not touch the ledger.
        assert!(engine.leaderboard(None).is_empty());

        let (quiz, finished) = engine.finish_session(id, "bob").unwrap();
        assert_eq!(finished, result);
        engine
            .record_attempt("bob", quiz, finished.score, finished.incorrect)
            .unwrap();

        let board = engine.leaderboard(None);
        assert_eq!(board.len(), 1);
        assert_eq!(board[0].quiz_title, "GK");
        assert_eq!(board[0].score, 1);
        assert_eq!(board[0].username, "bob");
    }

    #[test]
    fn sessions_are_private_to_their_owner() {
        let engine = engine();
        let id = engine.create_session("bob", 0).unwrap();
        assert!(matches!(
            engine.submit_answer(id, "eve", Some(2)),
            Err(QuizError::NotSessionOwner(_))
        ));
        assert!(matches!(
            engine.close_session(id, "eve"),
            Err(QuizError::NotSessionOwner(_))
        ));
    }

    #[test]
    fn closed_session_is_gone() {
        let engine = engine();
        let id = engine.create_session("bob", 0).unwrap();
        engine.submit_answer(id, "bob", None).unwrap();
        engine.close_session(id, "bob").unwrap();
        assert!(matches!(
            engine.submit_answer(id, "bob", Some(1)),
            Err(QuizError::UnknownSession(_))
        ));
        assert!(engine.leaderboard(None).is_empty());
    }

    #[test]
    fn completed_session_cannot_be_closed_before_recording() {
        let engine = engine();
        let id = engine.create_session("bob", 0).unwrap();
        engine.submit_answer(id, "bob", Some(2)).unwrap();
        assert!(engine.submit_answer(id, "bob", Some(1)).unwrap().done);

        assert!(matches!(
            engine.close_session(id, "bob"),
            Err(QuizError::SessionCompleted(_))
        ));

        let (quiz, result) = engine.finish_session(id, "bob").unwrap();
        engine
            .record_attempt("bob", quiz, result.score, result.incorrect)
            .unwrap();
        assert_eq!(engine.leaderboard(None).len(), 1);
        assert_eq!(engine.leaderboard(None)[0].score, 2);
    }

    #[test]
    fn finishing_frees_the_session() {
        let engine = engine();
        for _ in 0..50 {
            let id = engine.create_session("bob", 0).unwrap();
            engine.submit_answer(id, "bob", Some(2)).unwrap();
            engine.submit_answer(id, "bob", None).unwrap();
            let (quiz, result) = engine.finish_session(id, "bob").unwrap();
            engine
                .record_attempt("bob", quiz, result.score, result.incorrect)
                .unwrap();
        }
        assert_eq!(engine.live_sessions(), 0);
        assert_eq!(engine.attempts_for("bob").len(), 50);
    }

    #[test]
    fn finishing_twice_or_early_fails() {
        let engine = engine();
        let id = engine.create_session("bob", 0).unwrap();
        engine.submit_answer(id, "bob", Some(2)).unwrap();
        assert!(matches!(
            engine.finish_session(id, "bob"),
            Err(QuizError::SessionInProgress(_))
        ));
        assert_eq!(engine.live_sessions(), 1);

        engine.submit_answer(id, "bob", Some(1)).unwrap();
        assert!(matches!(
            engine.finish_session(id, "eve"),
            Err(QuizError::NotSessionOwner(_))
        ));
        engine.finish_session(id, "bob").unwrap();
        assert!(matches!(
            engine.finish_session(id, "bob"),
            Err(QuizError::UnknownSession(_))
        ));
    }

    #[test]
    fn unknown_quiz_is_rejected() {
        assert!(matches!(
            engine().create_session("bob", 5),
            Err(QuizError::UnknownQuiz(5))
        ));
    }

    #[test]
    fn leaderboard_limit_truncates() {
        let engine = engine();
        let quiz = engine.get_quiz(0).unwrap();
        for score in [0, 2, 1] {
            engine
                .record_attempt("bob", quiz.clone(), score, Vec::new())
                .unwrap();
        }
        let top = engine.leaderboard(Some(2));
        assert_eq!(top.iter().map(|e| e.score).collect::<Vec<_>>(), vec![2, 1]);
        assert_eq!(engine.attempts_for("bob").len(), 3);
    }
}
