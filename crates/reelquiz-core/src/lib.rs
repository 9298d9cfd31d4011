//! ReelQuiz Core — shared domain types and abstractions.
//!
//! This crate defines the value types and the seams (clock, RNG, timer,
//! error taxonomy) that the other crates depend on. It contains no
//! network or persistence code.

pub mod clock;
pub mod dialog;
pub mod error;
pub mod game_result;
pub mod movie;
pub mod progress;
pub mod question;
pub mod rng;
pub mod timer;
