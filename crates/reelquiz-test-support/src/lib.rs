//! Shared test doubles for the ReelQuiz crates.

mod clock;
mod feed;
mod rng;
mod statistics;
mod timer;

pub use clock::FixedClock;
pub use feed::StubFeedClient;
pub use rng::{MockRng, SequenceRng};
pub use statistics::{FailingStatisticsStore, InMemoryStatisticsStore};
pub use timer::ImmediateTimer;
