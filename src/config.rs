// src/config.rs

use std::{env, path::PathBuf, str::FromStr};

use dotenvy::dotenv;
use url::Url;

/// Storage key holding the serialized quiz attempt list.
pub const LEDGER_KEY: &str = "edubuilder_quizzes";

/// Storage key holding the mock session user.
pub const USER_KEY: &str = "edubuilder_user";

/// Front-end origins allowed by CORS.
pub const ALLOWED_ORIGINS: [&str; 2] = ["http://localhost:5173", "http://127.0.0.1:5173"];

/// Upload cap for notes forwarded to the content service (20 MiB).
pub const MAX_UPLOAD_BYTES: usize = 20 * 1024 * 1024;

/// Which `KeyValueStore` implementation backs the ledger and session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    Memory,
    File,
    Sqlite,
}

impl FromStr for StorageBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "memory" => Ok(StorageBackend::Memory),
            "file" => Ok(StorageBackend::File),
            "sqlite" => Ok(StorageBackend::Sqlite),
            other => Err(format!("unknown storage backend '{}'", other)),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub storage_backend: StorageBackend,
    pub storage_path: PathBuf,
    pub database_url: String,
    pub content_service_url: String,
    pub content_timeout_secs: u64,
    pub bind_addr: String,
    pub rust_log: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            storage_backend: StorageBackend::File,
            storage_path: PathBuf::from("data/edubuilder.json"),
            database_url: "sqlite://edubuilder.db?mode=rwc".to_string(),
            content_service_url: "http://localhost:5000".to_string(),
            content_timeout_secs: 120,
            bind_addr: "0.0.0.0:3000".to_string(),
            rust_log: "info".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        dotenv().ok();

        let defaults = Config::default();

        let storage_backend = env::var("STORAGE_BACKEND")
            .map(|v| {
                v.parse::<StorageBackend>()
                    .expect("STORAGE_BACKEND must be one of: memory, file, sqlite")
            })
            .unwrap_or(defaults.storage_backend);

        let storage_path = env::var("STORAGE_PATH")
            .map(PathBuf::from)
            .unwrap_or(defaults.storage_path);

        let database_url = env::var("DATABASE_URL").unwrap_or(defaults.database_url);

        let content_service_url =
            env::var("CONTENT_SERVICE_URL").unwrap_or(defaults.content_service_url);
        Url::parse(&content_service_url).expect("CONTENT_SERVICE_URL must be a valid URL");

        let content_timeout_secs = env::var("CONTENT_TIMEOUT_SECS")
            .map(|v| {
                v.parse::<u64>()
                    .expect("CONTENT_TIMEOUT_SECS must be a whole number of seconds")
            })
            .unwrap_or(defaults.content_timeout_secs);

        let bind_addr = env::var("BIND_ADDR").unwrap_or(defaults.bind_addr);

        let rust_log = env::var("RUST_LOG").unwrap_or(defaults.rust_log);

        Self {
            storage_backend,
            storage_path,
            database_url,
            content_service_url,
            content_timeout_secs,
            bind_addr,
            rust_log,
        }
    }
}
