// src/services/scoring.rs

use crate::{
    error::AppError,
    models::{
        attempt::ScoreResult,
        question::{AnswerSet, QuizDefinition},
    },
};

/// Scores `answers` against the quiz's answer key.
///
/// A question counts as correct only if it was answered with exactly its
/// correct option. Unanswered questions count as wrong; answers keyed to
/// question indices the quiz does not have are ignored.
pub fn score(quiz: &QuizDefinition, answers: &AnswerSet) -> Result<ScoreResult, AppError> {
    if quiz.questions.is_empty() {
        return Err(AppError::InvalidQuiz(
            "Cannot score a quiz with no questions".to_string(),
        ));
    }

    let per_question_correct: Vec<bool> = quiz
        .questions
        .iter()
        .enumerate()
        .map(|(i, q)| answers.get(&i) == Some(&q.correct_index))
        .collect();

    let correct_count = per_question_correct.iter().filter(|c| **c).count();

    Ok(ScoreResult {
        correct_count,
        total: quiz.questions.len(),
        per_question_correct,
    })
}
