// src/models/attempt.rs

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::question::{AnswerSet, RawQuiz, lenient_answers};

/// Outcome of scoring one answer set against one quiz.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreResult {
    pub correct_count: usize,
    pub total: usize,
    pub per_question_correct: Vec<bool>,
}

impl ScoreResult {
    /// Rounded percentage of correct answers.
    pub fn percent(&self) -> u32 {
        percent_of(self.correct_count, self.total)
    }

    /// Feedback line shown after submission.
    pub fn verdict(&self) -> &'static str {
        if self.correct_count == self.total {
            "Excellent!"
        } else if self.correct_count * 2 >= self.total {
            "Good Job!"
        } else {
            "Keep Practicing"
        }
    }
}

pub(crate) fn percent_of(score: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    (100.0 * score as f64 / total as f64).round() as u32
}

/// One submitted quiz, as stored in the progress ledger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttemptRecord {
    /// Millisecond timestamp; strictly increasing within one ledger.
    pub id: i64,
    pub topic: String,
    pub score: usize,
    pub total: usize,
    /// Calendar date, `YYYY-MM-DD`.
    pub date: String,
}

impl AttemptRecord {
    pub fn percent(&self) -> u32 {
        percent_of(self.score, self.total)
    }
}

/// Aggregate statistics over the whole ledger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LedgerStats {
    pub count: usize,
    pub average_percent: u32,
    pub total_questions: usize,
}

/// One point of the performance trend chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrendPoint {
    pub name: String,
    pub score: u32,
}

/// Response for `GET /api/quiz/stats`.
#[derive(Debug, Serialize)]
pub struct StatsResponse {
    #[serde(flatten)]
    pub stats: LedgerStats,
    pub trend: Vec<TrendPoint>,
}

/// DTO for scoring (and optionally recording) a quiz attempt.
#[derive(Debug, Deserialize, Validate)]
pub struct SubmitQuizRequest {
    /// Overrides the topic carried inside `quiz`.
    #[validate(length(max = 200))]
    pub topic: Option<String>,

    pub quiz: RawQuiz,

    #[serde(default, deserialize_with = "lenient_answers")]
    pub answers: AnswerSet,
}

/// Response for a scored submission.
#[derive(Debug, Serialize)]
pub struct SubmitQuizResponse {
    #[serde(flatten)]
    pub result: ScoreResult,
    pub percent: u32,
    pub message: &'static str,
    /// Whether the attempt reached the ledger.
    pub saved: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub record: Option<AttemptRecord>,
    /// Non-blocking notice for the user when `saved` is false.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<String>,
}
