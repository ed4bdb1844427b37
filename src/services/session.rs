// src/services/session.rs

use std::sync::Arc;

use crate::{config::USER_KEY, error::AppError, models::user::User, store::KeyValueStore};

/// Mock sign-in: whoever logs in becomes the current user. Passwords are
/// never checked or stored.
pub struct SessionStore {
    store: Arc<dyn KeyValueStore>,
}

impl SessionStore {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Signs in with the local part of the email as display name.
    pub async fn login(&self, email: &str) -> Result<User, AppError> {
        let name = email.split('@').next().unwrap_or_default().to_string();
        self.save(User {
            email: email.to_string(),
            name,
        })
        .await
    }

    pub async fn signup(&self, name: &str, email: &str) -> Result<User, AppError> {
        self.save(User {
            email: email.to_string(),
            name: name.trim().to_string(),
        })
        .await
    }

    pub async fn current(&self) -> Result<Option<User>, AppError> {
        match self.store.get(USER_KEY).await? {
            Some(raw) => match serde_json::from_str(&raw) {
                Ok(user) => Ok(Some(user)),
                Err(e) => {
                    // Treat a garbled session as signed out.
                    tracing::warn!("Discarding unreadable session: {}", e);
                    Ok(None)
                }
            },
            None => Ok(None),
        }
    }

    pub async fn logout(&self) -> Result<(), AppError> {
        self.store.remove(USER_KEY).await
    }

    async fn save(&self, user: User) -> Result<User, AppError> {
        let raw = serde_json::to_string(&user).map_err(|e| AppError::Persistence(e.to_string()))?;
        self.store.set(USER_KEY, &raw).await?;
        tracing::info!("Session started for {}", user.email);
        Ok(user)
    }
}
