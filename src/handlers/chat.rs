// src/handlers/chat.rs

use std::sync::Arc;

use axum::{Json, extract::State, response::IntoResponse};
use chrono::Local;
use validator::Validate;

use crate::{
    error::AppError,
    models::content::{ChatRequest, ChatResponse},
    services::chat::ResponseProvider,
};

pub async fn send_message(
    State(chat): State<Arc<dyn ResponseProvider>>,
    Json(payload): Json<ChatRequest>,
) -> Result<impl IntoResponse, AppError> {
    if let Err(validation_errors) = payload.validate() {
        return Err(AppError::BadRequest(validation_errors.to_string()));
    }
    if payload.message.trim().is_empty() {
        return Err(AppError::BadRequest("Message cannot be empty.".to_string()));
    }

    Ok(Json(ChatResponse {
        reply: chat.respond(&payload.message),
        timestamp: Local::now().format("%H:%M").to_string(),
    }))
}
