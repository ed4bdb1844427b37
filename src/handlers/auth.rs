// src/handlers/auth.rs

use std::sync::Arc;

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use validator::Validate;

use crate::{
    error::AppError,
    models::user::{LoginRequest, SignupRequest},
    services::session::SessionStore,
};

/// Mock login: any well-formed email signs in.
pub async fn login(
    State(sessions): State<Arc<SessionStore>>,
    Json(payload): Json<LoginRequest>,
) -> Result<impl IntoResponse, AppError> {
    if let Err(validation_errors) = payload.validate() {
        return Err(AppError::BadRequest(validation_errors.to_string()));
    }

    let user = sessions.login(&payload.email).await?;

    Ok(Json(user))
}

/// Mock signup. Returns 201 Created and the new session user.
pub async fn signup(
    State(sessions): State<Arc<SessionStore>>,
    Json(payload): Json<SignupRequest>,
) -> Result<impl IntoResponse, AppError> {
    if let Err(validation_errors) = payload.validate() {
        return Err(AppError::BadRequest(validation_errors.to_string()));
    }

    let user = sessions.signup(&payload.name, &payload.email).await?;

    Ok((StatusCode::CREATED, Json(user)))
}

pub async fn logout(
    State(sessions): State<Arc<SessionStore>>,
) -> Result<impl IntoResponse, AppError> {
    sessions.logout().await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Returns the signed-in user, or 404 when nobody is signed in.
pub async fn me(State(sessions): State<Arc<SessionStore>>) -> Result<impl IntoResponse, AppError> {
    let user = sessions
        .current()
        .await?
        .ok_or(AppError::NotFound("Not signed in".to_string()))?;

    Ok(Json(user))
}
