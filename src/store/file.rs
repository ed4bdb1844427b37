// src/store/file.rs

use std::{
    collections::HashMap,
    path::{Path, PathBuf},
};

use async_trait::async_trait;
use tokio::{fs, sync::Mutex};

use crate::{error::AppError, store::KeyValueStore};

/// All keys live in one JSON object on disk.
///
/// Every write rewrites the file through a sibling temp file and a rename,
/// so a reader sees either the old or the new contents.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: Mutex<HashMap<String, String>>,
}

impl FileStore {
    /// Loads `path`, creating parent directories. A missing file is an empty store.
    pub async fn open(path: impl AsRef<Path>) -> Result<Self, AppError> {
        let path = path.as_ref().to_path_buf();

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).await?;
        }

        let entries = match fs::read_to_string(&path).await {
            Ok(raw) if raw.trim().is_empty() => HashMap::new(),
            Ok(raw) => serde_json::from_str(&raw).map_err(|e| {
                AppError::Persistence(format!("Cannot read store {}: {}", path.display(), e))
            })?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => HashMap::new(),
            Err(e) => return Err(e.into()),
        };

        tracing::info!("Opened file store at {}", path.display());

        Ok(Self {
            path,
            entries: Mutex::new(entries),
        })
    }

    async fn flush(&self, entries: &HashMap<String, String>) -> Result<(), AppError> {
        let serialized =
            serde_json::to_vec_pretty(entries).map_err(|e| AppError::Persistence(e.to_string()))?;

        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, serialized).await?;
        fs::rename(&tmp, &self.path).await?;
        Ok(())
    }
}

#[async_trait]
impl KeyValueStore for FileStore {
    async fn get(&self, key: &str) -> Result<Option<String>, AppError> {
        Ok(self.entries.lock().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), AppError> {
        let mut entries = self.entries.lock().await;
        let mut next = entries.clone();
        next.insert(key.to_string(), value.to_string());

        // Only adopt the new map once it is on disk.
        self.flush(&next).await?;
        *entries = next;
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), AppError> {
        let mut entries = self.entries.lock().await;
        if !entries.contains_key(key) {
            return Ok(());
        }
        let mut next = entries.clone();
        next.remove(key);

        self.flush(&next).await?;
        *entries = next;
        Ok(())
    }
}
