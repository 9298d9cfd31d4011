//! Test RNG — deterministic `QuizRng` implementations for tests.

use reelquiz_core::rng::QuizRng;

/// A no-op RNG that always returns `min`. Suitable for tests that do
/// not depend on specific random draws.
#[derive(Debug)]
pub struct MockRng;

impl QuizRng for MockRng {
    fn next_u32_range(&mut self, min: u32, _max: u32) -> u32 {
        min
    }
}

/// An RNG that returns values from a predetermined sequence, then
/// repeats the last value once the sequence is exhausted. Used in tests
/// that need specific, repeatable draws (movie index, comparison
/// direction, threshold) without scripting every question of a round.
#[derive(Debug)]
pub struct SequenceRng {
    values: Vec<u32>,
    index: usize,
}

impl SequenceRng {
    /// Create a new `SequenceRng` with the given values. An empty
    /// sequence is fine for tests that never draw; the first draw from
    /// one panics.
    #[must_use]
    pub fn new(values: Vec<u32>) -> Self {
        Self { values, index: 0 }
    }
}

impl QuizRng for SequenceRng {
    fn next_u32_range(&mut self, _min: u32, _max: u32) -> u32 {
        assert!(!self.values.is_empty(), "SequenceRng drawn from with no values");
        let value = self.values[self.index.min(self.values.len() - 1)];
        self.index += 1;
        value
    }
}
