// src/handlers/notes.rs

use std::sync::Arc;

use axum::{
    Json,
    extract::{Multipart, State},
    response::IntoResponse,
};

use crate::{error::AppError, services::content::ContentProvider};

/// Forwards the uploaded `file` field to the content service for a summary.
/// The document itself is never parsed here.
pub async fn summarize_notes(
    State(content): State<Arc<dyn ContentProvider>>,
    mut multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        if field.name() != Some("file") {
            continue;
        }

        let file_name = field.file_name().unwrap_or("notes.pdf").to_string();
        let content_type = field.content_type().map(str::to_string);
        let bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::BadRequest(e.to_string()))?;

        if bytes.is_empty() {
            return Err(AppError::BadRequest("Uploaded file is empty".to_string()));
        }

        let summary = content
            .summarize(&file_name, content_type.as_deref(), bytes.to_vec())
            .await?;
        return Ok(Json(summary));
    }

    Err(AppError::BadRequest("Missing 'file' field".to_string()))
}
