// src/handlers/lecture.rs

use std::sync::Arc;

use axum::{Json, extract::State, response::IntoResponse};
use validator::Validate;

use crate::{
    error::AppError, models::content::GenerateLectureRequest,
    services::content::ContentProvider,
};

/// Generates a lecture through the content service.
/// Times out with a retryable 504 instead of hanging.
pub async fn generate_lecture(
    State(content): State<Arc<dyn ContentProvider>>,
    Json(payload): Json<GenerateLectureRequest>,
) -> Result<impl IntoResponse, AppError> {
    if let Err(validation_errors) = payload.validate() {
        return Err(AppError::BadRequest(validation_errors.to_string()));
    }

    let assets = content.generate(&payload).await?;

    Ok(Json(assets))
}
