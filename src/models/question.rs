// src/models/question.rs

use std::collections::HashMap;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::error::AppError;

/// Submitted answers: question index -> chosen option index.
/// Partial sets are allowed; unanswered questions are simply absent.
pub type AnswerSet = HashMap<usize, usize>;

/// Reads an answer map from untrusted JSON.
///
/// Entries whose key or value can never be an index (negative, fractional,
/// non-numeric) are dropped, the same as any other answer the quiz has no
/// question for. A `null` map is an empty answer set.
pub fn lenient_answers<'de, D>(deserializer: D) -> Result<AnswerSet, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<HashMap<String, Value>> = Option::deserialize(deserializer)?;

    Ok(raw
        .unwrap_or_default()
        .into_iter()
        .filter_map(|(key, value)| {
            let question = key.trim().parse::<usize>().ok()?;
            let option = match &value {
                Value::String(s) => s.trim().parse::<usize>().ok()?,
                other => usize::try_from(integral(other)?).ok()?,
            };
            Some((question, option))
        })
        .collect())
}

/// Whole-number JSON values (`1`, `1.0`) as `i64`; anything else is `None`.
fn integral(value: &Value) -> Option<i64> {
    let number = value.as_number()?;
    if let Some(i) = number.as_i64() {
        return Some(i);
    }
    number
        .as_f64()
        .filter(|f| f.is_finite() && f.fract() == 0.0 && f.abs() < i64::MAX as f64)
        .map(|f| f as i64)
}

/// A validated multiple-choice question.
/// `correct_index` is always a valid index into `options`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Question {
    #[serde(rename = "question")]
    pub prompt: String,

    pub options: Vec<String>,

    #[serde(rename = "correct")]
    pub correct_index: usize,
}

/// A validated quiz. Only constructed through `TryFrom<RawQuiz>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuizDefinition {
    pub topic: String,
    pub questions: Vec<Question>,
}

/// The `correct` field as the content service actually sends it:
/// sometimes a number, sometimes a numeric string. Anything else lands in
/// `Other` so validation can reject it as a malformed question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CorrectField {
    Index(i64),
    Text(String),
    Other(Value),
}

/// Question shape received over the wire, before validation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawQuestion {
    #[serde(default)]
    pub question: String,

    #[serde(default)]
    pub options: Vec<String>,

    #[serde(default)]
    pub correct: Option<CorrectField>,

    /// Text of the correct option. Only consulted when `correct` is absent.
    #[serde(default)]
    pub answer: Option<String>,
}

/// Quiz shape received over the wire, before validation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawQuiz {
    #[serde(default)]
    pub topic: String,

    #[serde(default)]
    pub questions: Vec<RawQuestion>,
}

/// Questions need at least this many options to be a choice at all.
pub const MIN_OPTIONS: usize = 2;

impl RawQuestion {
    /// Validates one question. `position` is only used in error messages.
    pub fn validate_at(self, position: usize) -> Result<Question, AppError> {
        if self.options.len() < MIN_OPTIONS {
            return Err(AppError::MalformedQuiz(format!(
                "Question {} needs at least {} options, got {}",
                position + 1,
                MIN_OPTIONS,
                self.options.len()
            )));
        }

        let raw_index = match (&self.correct, &self.answer) {
            (Some(CorrectField::Index(i)), _) => *i,
            (Some(CorrectField::Text(s)), _) => s.trim().parse::<i64>().map_err(|_| {
                AppError::MalformedQuiz(format!(
                    "Question {} has a non-numeric correct index '{}'",
                    position + 1,
                    s
                ))
            })?,
            (Some(CorrectField::Other(value)), _) => integral(value).ok_or_else(|| {
                AppError::MalformedQuiz(format!(
                    "Question {} has an unusable correct index {}",
                    position + 1,
                    value
                ))
            })?,
            (None, Some(answer)) => self
                .options
                .iter()
                .position(|opt| opt == answer)
                .map(|i| i as i64)
                .ok_or_else(|| {
                    AppError::MalformedQuiz(format!(
                        "Question {} answer '{}' is not one of its options",
                        position + 1,
                        answer
                    ))
                })?,
            (None, None) => {
                return Err(AppError::MalformedQuiz(format!(
                    "Question {} has no correct answer",
                    position + 1
                )));
            }
        };

        let correct_index = usize::try_from(raw_index)
            .ok()
            .filter(|i| *i < self.options.len())
            .ok_or_else(|| {
                AppError::MalformedQuiz(format!(
                    "Question {} correct index {} is out of bounds for {} options",
                    position + 1,
                    raw_index,
                    self.options.len()
                ))
            })?;

        Ok(Question {
            prompt: self.question,
            options: self.options,
            correct_index,
        })
    }
}

/// Validates every question. An empty question list passes here and is
/// rejected by the scorer instead.
impl TryFrom<RawQuiz> for QuizDefinition {
    type Error = AppError;

    fn try_from(raw: RawQuiz) -> Result<Self, Self::Error> {
        let questions = raw
            .questions
            .into_iter()
            .enumerate()
            .map(|(i, q)| q.validate_at(i))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(QuizDefinition {
            topic: raw.topic,
            questions,
        })
    }
}
