//! ReelQuiz Questions — randomized question generation.

pub mod factory;

pub use factory::{LoadOutcome, NextOutcome, QuestionFactory};
