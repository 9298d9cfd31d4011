//! Test statistics stores — in-memory and failing `StatisticsStore`
//! implementations for tests.

use std::sync::Mutex;

use async_trait::async_trait;
use reelquiz_core::error::StoreError;
use reelquiz_core::game_result::GameResult;
use reelquiz_statistics::{StatisticsStore, StatisticsSummary, summarize};

/// A statistics store that keeps results in memory, serialized by a
/// mutex so the concurrent record/summary contract holds even when a
/// test shares it across tasks.
#[derive(Debug, Default)]
pub struct InMemoryStatisticsStore {
    results: Mutex<Vec<GameResult>>,
}

impl InMemoryStatisticsStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all recorded results, in recording order.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn recorded(&self) -> Vec<GameResult> {
        self.results.lock().unwrap().clone()
    }
}

#[async_trait]
impl StatisticsStore for InMemoryStatisticsStore {
    async fn record(&self, result: GameResult) -> Result<(), StoreError> {
        self.results.lock().unwrap().push(result);
        Ok(())
    }

    async fn summary(&self) -> Result<StatisticsSummary, StoreError> {
        Ok(summarize(&self.results.lock().unwrap()))
    }
}

/// A statistics store that always fails. Useful for testing the
/// round-completion fallback paths.
#[derive(Debug, Default)]
pub struct FailingStatisticsStore;

#[async_trait]
impl StatisticsStore for FailingStatisticsStore {
    async fn record(&self, _result: GameResult) -> Result<(), StoreError> {
        Err(StoreError("disk full".to_owned()))
    }

    async fn summary(&self) -> Result<StatisticsSummary, StoreError> {
        Err(StoreError("disk full".to_owned()))
    }
}
