// src/store/mod.rs

//! Persistence port.
//!
//! Everything durable (the quiz ledger, the session user) goes through a
//! `KeyValueStore`: a flat map from string keys to serialized JSON strings.
//! Backends are swapped through configuration without touching scoring.

pub mod file;
pub mod memory;
pub mod sqlite;

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use crate::{
    config::{Config, StorageBackend},
    error::AppError,
};

pub use file::FileStore;
pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

#[async_trait]
pub trait KeyValueStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, AppError>;

    /// Replaces the whole value in one write.
    async fn set(&self, key: &str, value: &str) -> Result<(), AppError>;

    async fn remove(&self, key: &str) -> Result<(), AppError>;

    /// Pushes `item` onto the JSON list stored under `key`.
    ///
    /// Read-modify-write: callers that may race must serialize calls.
    /// A missing key is treated as an empty list; a value that is not a
    /// JSON list is left untouched and reported as a persistence error.
    async fn append(&self, key: &str, item: Value) -> Result<(), AppError> {
        let current = self.get(key).await?;
        let updated = push_item(current.as_deref(), item, key)?;
        self.set(key, &updated).await
    }
}

/// Decodes the list under `key`, appends `item` and re-encodes it.
pub(crate) fn push_item(current: Option<&str>, item: Value, key: &str) -> Result<String, AppError> {
    let mut list: Vec<Value> = match current {
        Some(raw) => serde_json::from_str(raw).map_err(|e| {
            AppError::Persistence(format!("Stored value for '{}' is not a list: {}", key, e))
        })?,
        None => Vec::new(),
    };
    list.push(item);
    serde_json::to_string(&list).map_err(|e| AppError::Persistence(e.to_string()))
}

/// Opens the backend selected in `config`.
pub async fn open(config: &Config) -> Result<Arc<dyn KeyValueStore>, AppError> {
    let store: Arc<dyn KeyValueStore> = match config.storage_backend {
        StorageBackend::Memory => Arc::new(MemoryStore::new()),
        StorageBackend::File => Arc::new(FileStore::open(&config.storage_path).await?),
        StorageBackend::Sqlite => Arc::new(SqliteStore::connect(&config.database_url).await?),
    };
    tracing::info!("Storage backend ready: {:?}", config.storage_backend);
    Ok(store)
}
