// src/models/user.rs

use serde::{Deserialize, Serialize};
use validator::Validate;

/// The signed-in user, persisted under the session key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub email: String,
    pub name: String,
}

/// DTO for the mock login.
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "A valid email address is required."))]
    pub email: String,
    /// Accepted but never checked.
    #[validate(length(min = 1, max = 128))]
    pub password: String,
}

/// DTO for the mock signup.
#[derive(Debug, Deserialize, Validate)]
pub struct SignupRequest {
    #[validate(length(
        min = 1,
        max = 100,
        message = "Name length must be between 1 and 100 characters."
    ))]
    pub name: String,
    #[validate(email(message = "A valid email address is required."))]
    pub email: String,
    #[validate(length(
        min = 4,
        max = 128,
        message = "Password length must be between 4 and 128 characters."
    ))]
    pub password: String,
}
