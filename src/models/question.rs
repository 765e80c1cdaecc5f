// src/models/question.rs

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::QuizError;

/// Number of answer options every question carries.
pub const OPTIONS_PER_QUESTION: usize = 4;

/// A single multiple-choice question.
///
/// Immutable once built: the bank hands out shared references only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    text: String,
    options: Vec<String>,
    correct_option: usize,
}

impl Question {
    /// Builds a question, rejecting a correct index that does not point into `options`.
    pub fn new(
        text: impl Into<String>,
        options: Vec<String>,
        correct_option: usize,
    ) -> Result<Self, QuizError> {
        let text = text.into();
        if options.len() != OPTIONS_PER_QUESTION {
            return Err(QuizError::InvalidQuestion(format!(
                "'{}' has {} options, expected {}",
                text,
                options.len(),
                OPTIONS_PER_QUESTION
            )));
        }
        if correct_option >= options.len() {
            return Err(QuizError::InvalidQuestion(format!(
                "correct option {} out of range for '{}' ({} options)",
                correct_option,
                text,
                options.len()
            )));
        }
        Ok(Self {
            text,
            options,
            correct_option,
        })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    pub fn correct_option(&self) -> usize {
        self.correct_option
    }

    /// Text of the correct option.
    pub fn correct_answer(&self) -> &str {
        &self.options[self.correct_option]
    }

    /// Summary recorded for a missed question.
    pub fn missed_summary(&self) -> String {
        format!("Q: {} Correct: {}", self.text, self.correct_answer())
    }
}

/// A titled, ordered, non-empty sequence of questions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quiz {
    title: String,
    questions: Vec<Question>,
}

impl Quiz {
    pub fn new(title: impl Into<String>, questions: Vec<Question>) -> Result<Self, QuizError> {
        let title = title.into();
        if questions.is_empty() {
            return Err(QuizError::InvalidQuestion(format!(
                "quiz '{}' has no questions",
                title
            )));
        }
        Ok(Self { title, questions })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn question_count(&self) -> usize {
        self.questions.len()
    }
}

/// DTO for sending a question to the client (excludes the correct option).
#[derive(Debug, Serialize, Deserialize)]
pub struct PublicQuestion {
    pub text: String,
    pub options: Vec<String>,
}

impl From<&Question> for PublicQuestion {
    fn from(q: &Question) -> Self {
        Self {
            text: q.text().to_string(),
            options: q.options().to_vec(),
        }
    }
}

/// Entry in the quiz selection list.
#[derive(Debug, Serialize, Deserialize)]
pub struct QuizSummary {
    pub id: usize,
    pub title: String,
    pub question_count: usize,
}

/// Full quiz as shown to the client, answers hidden.
#[derive(Debug, Serialize, Deserialize)]
pub struct PublicQuiz {
    pub id: usize,
    pub title: String,
    pub questions: Vec<PublicQuestion>,
}

impl PublicQuiz {
    pub fn new(id: usize, quiz: &Quiz) -> Self {
        Self {
            id,
            title: quiz.title().to_string(),
            questions: quiz.questions().iter().map(PublicQuestion::from).collect(),
        }
    }
}

/// Question as read from a quiz bank file.
#[derive(Debug, Deserialize, Validate)]
pub struct QuestionSeed {
    #[validate(length(min = 1, max = 1000))]
    pub text: String,
    #[validate(
        length(equal = 4, message = "Each question must have exactly 4 options."),
        custom(function = validate_options)
    )]
    pub options: Vec<String>,
    pub correct_option: usize,
}

/// Quiz as read from a quiz bank file.
#[derive(Debug, Deserialize, Validate)]
pub struct QuizSeed {
    #[validate(length(min = 1, max = 200))]
    pub title: String,
    /// Emptiness is rejected by `Quiz::new`.
    #[validate(nested)]
    pub questions: Vec<QuestionSeed>,
}

impl TryFrom<QuizSeed> for Quiz {
    type Error = QuizError;

    fn try_from(seed: QuizSeed) -> Result<Self, Self::Error> {
        seed.validate()
            .map_err(|e| QuizError::InvalidQuestion(format!("quiz '{}': {}", seed.title, e)))?;

        let questions = seed
            .questions
            .into_iter()
            .map(|q| Question::new(q.text, q.options, q.correct_option))
            .collect::<Result<Vec<_>, _>>()?;

        Quiz::new(seed.title, questions)
    }
}

fn validate_options(options: &[String]) -> Result<(), validator::ValidationError> {
    for opt in options {
        if opt.is_empty() {
            return Err(validator::ValidationError::new("option_cannot_be_empty"));
        }
        if opt.len() > 500 {
            return Err(validator::ValidationError::new("option_too_long"));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opts() -> Vec<String> {
        ["Berlin", "Madrid", "Paris", "Rome"]
            .iter()
            .map(|s| s.to_string())
            .collect()
    }

    #[test]
    fn rejects_out_of_range_correct_option() {
        assert!(Question::new("Capital of France?", opts(), 4).is_err());
        assert!(Question::new("Capital of France?", opts(), 3).is_ok());
    }

    #[test]
    fn requires_four_options() {
        let three = vec!["a".to_string(), "b".to_string(), "c".to_string()];
        assert!(matches!(
            Question::new("Pick one", three, 0),
            Err(QuizError::InvalidQuestion(_))
        ));
    }

    #[test]
    fn missed_summary_names_correct_option() {
        let q = Question::new("What is the capital of France?", opts(), 2).unwrap();
        assert_eq!(
            q.missed_summary(),
            "Q: What is the capital of France? Correct: Paris"
        );
    }

    #[test]
    fn empty_quiz_is_rejected() {
        assert!(Quiz::new("Empty", Vec::new()).is_err());
    }

    #[test]
    fn seed_with_three_options_fails_validation() {
        let seed = QuizSeed {
            title: "Short".to_string(),
            questions: vec![QuestionSeed {
                text: "Pick one".to_string(),
                options: vec!["a".into(), "b".into(), "c".into()],
                correct_option: 0,
            }],
        };
        assert!(Quiz::try_from(seed).is_err());
    }

    #[test]
    fn public_question_hides_answer() {
        let q = Question::new("Capital?", opts(), 2).unwrap();
        let json = serde_json::to_value(PublicQuestion::from(&q)).unwrap();
        assert!(json.get("correct_option").is_none());
        assert_eq!(json["options"][2], "Paris");
    }
}
