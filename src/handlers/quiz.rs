// src/handlers/quiz.rs

use std::sync::Arc;

use axum::{Json, extract::State, response::IntoResponse};
use validator::Validate;

use crate::{
    error::AppError,
    models::{
        attempt::{ScoreResult, StatsResponse, SubmitQuizRequest, SubmitQuizResponse},
        question::QuizDefinition,
    },
    services::{ledger::ProgressLedger, scoring},
};

/// Validates the submitted quiz and scores the answers.
fn evaluate(
    req: SubmitQuizRequest,
) -> Result<(QuizDefinition, Option<String>, ScoreResult), AppError> {
    if let Err(validation_errors) = req.validate() {
        return Err(AppError::BadRequest(validation_errors.to_string()));
    }

    let quiz = QuizDefinition::try_from(req.quiz)?;
    let result = scoring::score(&quiz, &req.answers)?;

    Ok((quiz, req.topic, result))
}

/// Scores a quiz without recording it.
pub async fn score_quiz(
    Json(req): Json<SubmitQuizRequest>,
) -> Result<impl IntoResponse, AppError> {
    let (_, _, result) = evaluate(req)?;

    Ok(Json(SubmitQuizResponse {
        percent: result.percent(),
        message: result.verdict(),
        result,
        saved: false,
        record: None,
        notice: None,
    }))
}

/// Scores a quiz and appends the attempt to the progress ledger.
///
/// * Invalid or malformed quizzes are rejected before anything is recorded.
/// * A failed ledger write is not fatal: the score is still returned with
///   `saved: false` and a notice, so the client keeps its answers and can retry.
pub async fn submit_quiz(
    State(ledger): State<Arc<ProgressLedger>>,
    Json(req): Json<SubmitQuizRequest>,
) -> Result<impl IntoResponse, AppError> {
    let (quiz, topic, result) = evaluate(req)?;
    let topic = topic.unwrap_or(quiz.topic);

    let (saved, record, notice) = match ledger.record_attempt(&topic, &result).await {
        Ok(record) => (true, Some(record), None),
        Err(e) => {
            tracing::warn!("Quiz scored but not saved: {}", e);
            (
                false,
                None,
                Some("Your score could not be saved. Please try submitting again.".to_string()),
            )
        }
    };

    Ok(Json(SubmitQuizResponse {
        percent: result.percent(),
        message: result.verdict(),
        result,
        saved,
        record,
        notice,
    }))
}

/// Lists every recorded attempt, oldest first.
pub async fn get_history(
    State(ledger): State<Arc<ProgressLedger>>,
) -> Result<impl IntoResponse, AppError> {
    Ok(Json(ledger.all().await?))
}

/// Aggregate statistics plus the per-attempt trend.
pub async fn get_stats(
    State(ledger): State<Arc<ProgressLedger>>,
) -> Result<impl IntoResponse, AppError> {
    let stats = ledger.aggregate().await?;
    let trend = ledger.trend().await?;

    Ok(Json(StatsResponse { stats, trend }))
}
