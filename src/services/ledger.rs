// src/services/ledger.rs

use std::sync::Arc;

use chrono::Utc;
use tokio::sync::Mutex;

use crate::{
    config::LEDGER_KEY,
    error::AppError,
    models::attempt::{AttemptRecord, LedgerStats, ScoreResult, TrendPoint},
    store::KeyValueStore,
    utils::html::clean_topic,
};

/// Append-only history of submitted quizzes, oldest first.
///
/// The whole list lives under one key and every append rewrites it in a
/// single store write. Appends are serialized by `write_lock`, which also
/// remembers the last id handed out so ids stay strictly increasing. It is
/// seeded from the stored records on first use, so ids keep increasing
/// across restarts even if the clock has gone backwards.
pub struct ProgressLedger {
    store: Arc<dyn KeyValueStore>,
    write_lock: Mutex<Option<i64>>,
}

impl ProgressLedger {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            store,
            write_lock: Mutex::new(None),
        }
    }

    /// Appends one record. Fails with `Persistence` if the store rejects the write.
    pub async fn append(&self, record: AttemptRecord) -> Result<(), AppError> {
        let mut last_id = self.write_lock.lock().await;
        let floor = self.last_issued_id(&mut last_id).await?;
        self.append_locked(&record).await?;
        *last_id = Some(floor.max(record.id));
        Ok(())
    }

    /// Builds the record for a scored quiz (fresh id, today's date, cleaned
    /// topic) and appends it.
    pub async fn record_attempt(
        &self,
        topic: &str,
        result: &ScoreResult,
    ) -> Result<AttemptRecord, AppError> {
        let mut last_id = self.write_lock.lock().await;
        let floor = self.last_issued_id(&mut last_id).await?;

        let now = Utc::now();
        let id = now.timestamp_millis().max(floor + 1);

        let record = AttemptRecord {
            id,
            topic: clean_topic(topic),
            score: result.correct_count,
            total: result.total,
            date: now.format("%Y-%m-%d").to_string(),
        };

        self.append_locked(&record).await?;
        *last_id = Some(id);

        tracing::info!(
            "Recorded quiz attempt {} on '{}': {}/{}",
            record.id,
            record.topic,
            record.score,
            record.total
        );
        Ok(record)
    }

    /// Highest id handed out so far, read from the store the first time.
    async fn last_issued_id(&self, cached: &mut Option<i64>) -> Result<i64, AppError> {
        if let Some(id) = *cached {
            return Ok(id);
        }
        let id = self.all().await?.iter().map(|r| r.id).max().unwrap_or(0);
        *cached = Some(id);
        Ok(id)
    }

    async fn append_locked(&self, record: &AttemptRecord) -> Result<(), AppError> {
        let item =
            serde_json::to_value(record).map_err(|e| AppError::Persistence(e.to_string()))?;
        self.store.append(LEDGER_KEY, item).await
    }

    /// Every record in insertion order. A ledger that was never written is empty.
    pub async fn all(&self) -> Result<Vec<AttemptRecord>, AppError> {
        match self.store.get(LEDGER_KEY).await? {
            Some(raw) => serde_json::from_str(&raw)
                .map_err(|e| AppError::Persistence(format!("Quiz history is unreadable: {}", e))),
            None => Ok(Vec::new()),
        }
    }

    pub async fn aggregate(&self) -> Result<LedgerStats, AppError> {
        Ok(summarize(&self.all().await?))
    }

    /// Per-attempt percentages labelled "Quiz 1", "Quiz 2", ...
    pub async fn trend(&self) -> Result<Vec<TrendPoint>, AppError> {
        Ok(trend_of(&self.all().await?))
    }
}

fn summarize(records: &[AttemptRecord]) -> LedgerStats {
    let count = records.len();
    let total_questions = records.iter().map(|r| r.total).sum();

    let average_percent = if count == 0 {
        0
    } else {
        let sum: f64 = records
            .iter()
            .filter(|r| r.total > 0)
            .map(|r| 100.0 * r.score as f64 / r.total as f64)
            .sum();
        (sum / count as f64).round() as u32
    };

    LedgerStats {
        count,
        average_percent,
        total_questions,
    }
}

fn trend_of(records: &[AttemptRecord]) -> Vec<TrendPoint> {
    records
        .iter()
        .enumerate()
        .map(|(i, r)| TrendPoint {
            name: format!("Quiz {}", i + 1),
            score: r.percent(),
        })
        .collect()
}
