//! Random number generator abstraction.
//!
//! Question generation draws three values per question: the movie index,
//! the comparison direction, and the rating threshold. Tests inject a
//! scripted implementation to pin all three down.

use rand::Rng;

/// Abstraction over random number generation.
pub trait QuizRng: Send {
    /// Generate a random `u32` in the range `[min, max]` inclusive.
    fn next_u32_range(&mut self, min: u32, max: u32) -> u32;
}

/// Production RNG backed by the thread-local generator.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRng;

impl QuizRng for SystemRng {
    fn next_u32_range(&mut self, min: u32, max: u32) -> u32 {
        rand::rng().random_range(min..=max)
    }
}
