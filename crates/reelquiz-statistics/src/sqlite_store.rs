//! `SQLite` implementation of the `StatisticsStore` trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reelquiz_core::error::StoreError;
use reelquiz_core::game_result::GameResult;
use sqlx::Row;
use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};

use crate::schema;
use crate::store::{StatisticsStore, StatisticsSummary, summarize};

/// SQLite-backed statistics store.
///
/// Rows are append-only; the summary is recomputed from the full table
/// on every read. The pool serializes access, which also satisfies the
/// concurrent record/summary contract.
#[derive(Debug, Clone)]
pub struct SqliteStatisticsStore {
    pool: SqlitePool,
}

impl SqliteStatisticsStore {
    /// Connects to `database_url` and ensures the schema exists.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the database cannot be opened or the
    /// schema cannot be created.
    pub async fn connect(database_url: &str) -> Result<Self, StoreError> {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect(database_url)
            .await
            .map_err(|e| StoreError(e.to_string()))?;

        sqlx::query(schema::CREATE_GAME_RESULTS_TABLE)
            .execute(&pool)
            .await
            .map_err(|e| StoreError(e.to_string()))?;

        Ok(Self { pool })
    }
}

fn row_to_result(row: &sqlx::sqlite::SqliteRow) -> Result<GameResult, StoreError> {
    let correct: i64 = row.try_get("correct").map_err(|e| StoreError(e.to_string()))?;
    let total: i64 = row.try_get("total").map_err(|e| StoreError(e.to_string()))?;
    let finished_at: DateTime<Utc> = row
        .try_get("finished_at")
        .map_err(|e| StoreError(e.to_string()))?;

    Ok(GameResult {
        correct: u32::try_from(correct).map_err(|e| StoreError(e.to_string()))?,
        total: u32::try_from(total).map_err(|e| StoreError(e.to_string()))?,
        finished_at,
    })
}

#[async_trait]
impl StatisticsStore for SqliteStatisticsStore {
    async fn record(&self, result: GameResult) -> Result<(), StoreError> {
        sqlx::query("INSERT INTO game_results (correct, total, finished_at) VALUES (?1, ?2, ?3)")
            .bind(i64::from(result.correct))
            .bind(i64::from(result.total))
            .bind(result.finished_at)
            .execute(&self.pool)
            .await
            .map_err(|e| StoreError(e.to_string()))?;

        tracing::debug!(correct = result.correct, total = result.total, "game result recorded");
        Ok(())
    }

    async fn summary(&self) -> Result<StatisticsSummary, StoreError> {
        let rows = sqlx::query("SELECT correct, total, finished_at FROM game_results ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| StoreError(e.to_string()))?;

        let results = rows
            .iter()
            .map(row_to_result)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(summarize(&results))
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;

    async fn in_memory_store() -> SqliteStatisticsStore {
        SqliteStatisticsStore::connect("sqlite::memory:")
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_summary_of_a_fresh_store_is_empty() {
        let store = in_memory_store().await;

        let summary = store.summary().await.unwrap();

        assert_eq!(summary.games_count, 0);
        assert_eq!(summary.best_game, GameResult::empty());
        assert!((summary.total_accuracy - 0.0).abs() < f64::EPSILON);
    }

    #[tokio::test]
    async fn test_recorded_results_round_trip_into_the_summary() {
        let store = in_memory_store().await;
        let first = GameResult {
            correct: 8,
            total: 10,
            finished_at: Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap(),
        };
        let second = GameResult {
            correct: 6,
            total: 10,
            finished_at: Utc.with_ymd_and_hms(2026, 3, 1, 13, 0, 0).unwrap(),
        };

        store.record(first).await.unwrap();
        store.record(second).await.unwrap();
        let summary = store.summary().await.unwrap();

        assert_eq!(summary.games_count, 2);
        assert_eq!(summary.best_game, first);
        assert!((summary.total_accuracy - 70.0).abs() < f64::EPSILON);
    }
}
