//! Completed-round result record.

use chrono::{DateTime, Utc};

/// The immutable outcome of one completed round.
///
/// Created exactly once per round and appended to the statistics store;
/// never mutated afterwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameResult {
    /// Correct answers in the round.
    pub correct: u32,
    /// Questions asked in the round.
    pub total: u32,
    /// When the round finished.
    pub finished_at: DateTime<Utc>,
}

impl GameResult {
    /// The zero result reported as "best game" before any round has been
    /// played: no answers, no questions, epoch timestamp.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            correct: 0,
            total: 0,
            finished_at: DateTime::UNIX_EPOCH,
        }
    }

    /// Strictly more correct answers than `other`. Equal counts are not
    /// better, which is what keeps the earliest of tied best games.
    #[must_use]
    pub fn is_better_than(&self, other: &Self) -> bool {
        self.correct > other.correct
    }
}
