//! Statistics store contract and summary computation.

use async_trait::async_trait;
use reelquiz_core::error::StoreError;
use reelquiz_core::game_result::GameResult;

/// Lifetime aggregate derived from all recorded games.
///
/// Never stored or independently mutated; always recomputed from the
/// recorded [`GameResult`] history.
#[derive(Debug, Clone, PartialEq)]
pub struct StatisticsSummary {
    /// Number of completed rounds on record.
    pub games_count: u64,
    /// The game with the most correct answers; ties keep the earliest
    /// recorded game. [`GameResult::empty`] when no games exist.
    pub best_game: GameResult,
    /// Lifetime correct answers over lifetime questions asked, as a
    /// percentage. `0.0` when no games exist.
    pub total_accuracy: f64,
}

/// Durable, append-only storage of completed rounds.
///
/// Implementations must serialize concurrent `record`/`summary` calls;
/// normal operation is single-writer but the contract holds for tests
/// that exercise the store directly.
#[async_trait]
pub trait StatisticsStore: Send + Sync {
    /// Appends one completed round.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the record could not be written.
    async fn record(&self, result: GameResult) -> Result<(), StoreError>;

    /// Recomputes the lifetime summary from all recorded rounds.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the history could not be read.
    async fn summary(&self) -> Result<StatisticsSummary, StoreError>;
}

#[allow(clippy::cast_precision_loss)]
fn percentage(part: u64, whole: u64) -> f64 {
    part as f64 / whole as f64 * 100.0
}

/// Folds a recorded history, in recording order, into its summary.
#[must_use]
pub fn summarize(results: &[GameResult]) -> StatisticsSummary {
    let mut best = GameResult::empty();
    let mut total_correct: u64 = 0;
    let mut total_asked: u64 = 0;

    for (position, result) in results.iter().enumerate() {
        // First element seeds best so an all-zero history still reports
        // a real game rather than the epoch placeholder.
        if position == 0 || result.is_better_than(&best) {
            best = *result;
        }
        total_correct += u64::from(result.correct);
        total_asked += u64::from(result.total);
    }

    let total_accuracy = if total_asked == 0 {
        0.0
    } else {
        percentage(total_correct, total_asked)
    };

    StatisticsSummary {
        games_count: results.len() as u64,
        best_game: best,
        total_accuracy,
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;

    fn game(correct: u32, total: u32, minute: u32) -> GameResult {
        GameResult {
            correct,
            total,
            finished_at: Utc.with_ymd_and_hms(2026, 3, 1, 12, minute, 0).unwrap(),
        }
    }

    #[test]
    fn test_empty_history_summarizes_to_zero() {
        let summary = summarize(&[]);

        assert_eq!(summary.games_count, 0);
        assert_eq!(summary.best_game, GameResult::empty());
        assert!((summary.total_accuracy - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_single_game_accuracy_is_seventy_percent() {
        let summary = summarize(&[game(7, 10, 0)]);

        assert_eq!(summary.games_count, 1);
        assert!((summary.total_accuracy - 70.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_best_game_ties_keep_the_earliest() {
        let first_eight = game(8, 10, 1);
        let summary = summarize(&[first_eight, game(6, 10, 2), game(8, 10, 3)]);

        assert_eq!(summary.best_game, first_eight);
    }

    #[test]
    fn test_accuracy_averages_across_games() {
        let summary = summarize(&[game(8, 10, 1), game(6, 10, 2)]);

        assert!((summary.total_accuracy - 70.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_all_zero_history_reports_a_real_game_as_best() {
        let only = game(0, 10, 5);
        let summary = summarize(&[only]);

        assert_eq!(summary.best_game, only);
    }
}
