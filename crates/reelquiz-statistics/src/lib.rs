//! ReelQuiz Statistics — best-ever performance across sessions.
//!
//! The [`store::StatisticsStore`] contract is append-only: past results
//! are never deleted or rewritten, and the summary is recomputed from
//! the full history on every read.

pub mod schema;
pub mod sqlite_store;
pub mod store;

pub use sqlite_store::SqliteStatisticsStore;
pub use store::{StatisticsStore, StatisticsSummary, summarize};
