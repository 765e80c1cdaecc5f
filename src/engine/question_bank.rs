// src/engine/question_bank.rs

use std::{path::Path, sync::Arc};

use crate::{
    error::QuizError,
    models::question::{Question, Quiz, QuizSeed},
};

/// The fixed set of quizzes available for the process lifetime.
#[derive(Debug, Clone)]
pub struct QuestionBank {
    quizzes: Vec<Arc<Quiz>>,
}

impl QuestionBank {
    pub fn new(quizzes: Vec<Quiz>) -> Self {
        Self {
            quizzes: quizzes.into_iter().map(Arc::new).collect(),
        }
    }

    /// Loads quizzes from a JSON array of `{title, questions}` objects.
    /// Every question is validated before the bank is built.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, QuizError> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        Self::from_json(&raw)
    }

    pub fn from_json(raw: &str) -> Result<Self, QuizError> {
        let seeds: Vec<QuizSeed> = serde_json::from_str(raw)?;
        let quizzes = seeds
            .into_iter()
            .map(Quiz::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(quizzes))
    }

    pub fn list_quizzes(&self) -> &[Arc<Quiz>] {
        &self.quizzes
    }

    /// Looks a quiz up by its position in the bank.
    pub fn get(&self, quiz_id: usize) -> Result<Arc<Quiz>, QuizError> {
        self.quizzes
            .get(quiz_id)
            .cloned()
            .ok_or(QuizError::UnknownQuiz(quiz_id))
    }

    /// The built-in "General Knowledge" quiz.
    pub fn general_knowledge() -> Result<Self, QuizError> {
        const GENERAL_KNOWLEDGE: [(&str, [&str; 4], usize); 10] = [
            ("What is the capital of France?", ["Berlin", "Madrid", "Paris", "Rome"], 2),
            ("Which planet is known as the Red Planet?", ["Earth", "Mars", "Jupiter", "Saturn"], 1),
            ("Who wrote 'Hamlet'?", ["Shakespeare", "Dickens", "Hemingway", "Frost"], 0),
            ("What is the boiling point of water?", ["90°C", "100°C", "80°C", "120°C"], 1),
            ("What is the largest mammal?", ["Elephant", "Blue Whale", "Shark", "Giraffe"], 1),
            (
                "Which is the smallest country in the world?",
                ["Monaco", "Vatican City", "Malta", "San Marino"],
                1,
            ),
            (
                "Who painted the Mona Lisa?",
                ["Michelangelo", "Van Gogh", "Leonardo da Vinci", "Picasso"],
                2,
            ),
            (
                "What is the speed of light?",
                ["300,000 km/s", "150,000 km/s", "1,000 km/s", "500,000 km/s"],
                0,
            ),
            (
                "Who discovered penicillin?",
                ["Alexander Fleming", "Marie Curie", "Albert Einstein", "Isaac Newton"],
                0,
            ),
            ("What is the square root of 144?", ["10", "11", "12", "14"], 2),
        ];

        let questions = GENERAL_KNOWLEDGE
            .iter()
            .map(|(text, options, correct)| {
                Question::new(*text, options.iter().map(|o| o.to_string()).collect(), *correct)
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self::new(vec![Quiz::new("General Knowledge", questions)?]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn general_knowledge_bank_has_ten_questions() {
        let bank = QuestionBank::general_knowledge().unwrap();
        let quizzes = bank.list_quizzes();
        assert_eq!(quizzes.len(), 1);
        assert_eq!(quizzes[0].title(), "General Knowledge");
        assert_eq!(quizzes[0].question_count(), 10);
        assert_eq!(quizzes[0].questions()[0].correct_answer(), "Paris");
    }

    #[test]
    fn listing_is_idempotent() {
        let bank = QuestionBank::general_knowledge().unwrap();
        let first: Vec<Quiz> = bank.list_quizzes().iter().map(|q| (**q).clone()).collect();
        let second: Vec<Quiz> = bank.list_quizzes().iter().map(|q| (**q).clone()).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn loads_multiple_quizzes_from_json() {
        let raw = r#"[
            {"title": "GK", "questions": [
                {"text": "One?", "options": ["a", "b", "c", "d"], "correct_option": 2},
                {"text": "Two?", "options": ["e", "f", "g", "h"], "correct_option": 1}
            ]},
            {"title": "Math", "questions": [
                {"text": "2+2?", "options": ["3", "4", "5", "6"], "correct_option": 1}
            ]}
        ]"#;
        let bank = QuestionBank::from_json(raw).unwrap();
        assert_eq!(bank.list_quizzes().len(), 2);
        assert_eq!(bank.get(1).unwrap().title(), "Math");
        assert!(matches!(bank.get(2), Err(QuizError::UnknownQuiz(2))));
    }

    #[test]
    fn rejects_bad_correct_option_in_json() {
        let raw = r#"[{"title": "GK", "questions": [
            {"text": "One?", "options": ["a", "b", "c", "d"], "correct_option": 7}
        ]}]"#;
        assert!(matches!(
            QuestionBank::from_json(raw),
            Err(QuizError::InvalidQuestion(_))
        ));
    }

    #[test]
    fn rejects_quiz_without_questions() {
        let raw = r#"[{"title": "Empty", "questions": []}]"#;
        assert!(QuestionBank::from_json(raw).is_err());
    }
}
