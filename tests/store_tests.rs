// tests/store_tests.rs

use std::{path::PathBuf, sync::Arc};

use edubuilder::{
    config::{Config, LEDGER_KEY, StorageBackend, USER_KEY},
    error::AppError,
    models::attempt::AttemptRecord,
    services::{ledger::ProgressLedger, session::SessionStore},
    store::{self, FileStore, KeyValueStore, MemoryStore, SqliteStore},
};
use serde_json::json;

fn temp_path() -> PathBuf {
    std::env::temp_dir()
        .join(format!("edubuilder_{}", uuid::Uuid::new_v4()))
        .join("store.json")
}

fn record(id: i64) -> AttemptRecord {
    AttemptRecord {
        id,
        topic: format!("Topic {}", id),
        score: 1,
        total: 2,
        date: "2025-11-06".to_string(),
    }
}

async fn exercise_basic_contract(store: &dyn KeyValueStore) {
    assert_eq!(store.get("missing").await.unwrap(), None);

    store.set("k", "v1").await.unwrap();
    store.set("k", "v2").await.unwrap();
    assert_eq!(store.get("k").await.unwrap().as_deref(), Some("v2"));

    store.append("list", json!(1)).await.unwrap();
    store.append("list", json!({"a": 2})).await.unwrap();
    assert_eq!(
        store.get("list").await.unwrap().as_deref(),
        Some(r#"[1,{"a":2}]"#)
    );

    store.remove("k").await.unwrap();
    store.remove("k").await.unwrap();
    assert_eq!(store.get("k").await.unwrap(), None);

    store.set("scalar", "42").await.unwrap();
    assert!(matches!(
        store.append("scalar", json!(1)).await,
        Err(AppError::Persistence(_))
    ));
}

#[tokio::test]
async fn memory_store_contract() {
    exercise_basic_contract(&MemoryStore::new()).await;
}

#[tokio::test]
async fn file_store_contract() {
    let store = FileStore::open(temp_path()).await.unwrap();
    exercise_basic_contract(&store).await;
}

#[tokio::test]
async fn sqlite_store_contract() {
    let store = SqliteStore::connect("sqlite::memory:").await.unwrap();
    exercise_basic_contract(&store).await;
}

#[tokio::test]
async fn file_store_survives_reopen() {
    let path = temp_path();

    {
        let store: Arc<dyn KeyValueStore> = Arc::new(FileStore::open(&path).await.unwrap());
        let ledger = ProgressLedger::new(store);
        ledger.append(record(1)).await.unwrap();
        ledger.append(record(2)).await.unwrap();
    }

    let reopened: Arc<dyn KeyValueStore> = Arc::new(FileStore::open(&path).await.unwrap());
    let ledger = ProgressLedger::new(reopened);
    assert_eq!(ledger.all().await.unwrap(), vec![record(1), record(2)]);
    assert!(!path.with_extension("tmp").exists());
}

#[tokio::test]
async fn file_store_rejects_garbage_on_open() {
    let path = temp_path();
    tokio::fs::create_dir_all(path.parent().unwrap()).await.unwrap();
    tokio::fs::write(&path, "{ not json").await.unwrap();

    assert!(matches!(
        FileStore::open(&path).await,
        Err(AppError::Persistence(_))
    ));
}

#[tokio::test]
async fn sqlite_ledger_round_trip() {
    let store: Arc<dyn KeyValueStore> =
        Arc::new(SqliteStore::connect("sqlite::memory:").await.unwrap());
    let ledger = ProgressLedger::new(store.clone());

    ledger.append(record(1)).await.unwrap();
    ledger.append(record(2)).await.unwrap();

    assert_eq!(ledger.all().await.unwrap(), vec![record(1), record(2)]);
    assert!(store.get(LEDGER_KEY).await.unwrap().is_some());
}

#[tokio::test]
async fn open_selects_configured_backend() {
    let config = Config {
        storage_backend: StorageBackend::File,
        storage_path: temp_path(),
        ..Config::default()
    };
    let store = store::open(&config).await.unwrap();
    store.set("k", "v").await.unwrap();
    assert!(config.storage_path.exists());

    let config = Config {
        storage_backend: StorageBackend::Sqlite,
        database_url: "sqlite::memory:".to_string(),
        ..Config::default()
    };
    let store = store::open(&config).await.unwrap();
    store.set("k", "v").await.unwrap();
    assert_eq!(store.get("k").await.unwrap().as_deref(), Some("v"));
}

#[test]
fn storage_backend_parses_case_insensitively() {
    assert_eq!("Memory".parse::<StorageBackend>(), Ok(StorageBackend::Memory));
    assert_eq!(" sqlite ".parse::<StorageBackend>(), Ok(StorageBackend::Sqlite));
    assert!("redis".parse::<StorageBackend>().is_err());
}

#[tokio::test]
async fn session_login_signup_logout() {
    let store: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
    let sessions = SessionStore::new(store.clone());

    assert_eq!(sessions.current().await.unwrap(), None);

    let user = sessions.login("asha@example.com").await.unwrap();
    assert_eq!(user.name, "asha");
    assert_eq!(sessions.current().await.unwrap(), Some(user));

    let user = sessions.signup("  Ravi Kumar ", "ravi@example.com").await.unwrap();
    assert_eq!(user.name, "Ravi Kumar");
    assert_eq!(sessions.current().await.unwrap(), Some(user));

    sessions.logout().await.unwrap();
    assert_eq!(sessions.current().await.unwrap(), None);
    assert_eq!(store.get(USER_KEY).await.unwrap(), None);
}

#[tokio::test]
async fn garbled_session_reads_as_signed_out() {
    let store: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
    store.set(USER_KEY, "{oops").await.unwrap();

    let sessions = SessionStore::new(store);
    assert_eq!(sessions.current().await.unwrap(), None);
}
