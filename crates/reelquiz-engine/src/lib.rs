//! ReelQuiz Engine — the round state machine.
//!
//! The engine sequences ten questions, evaluates answers, enforces the
//! input-lock window after each answer, persists the finished round to
//! the statistics store, and resolves every failure at its three async
//! boundaries (feed load, poster fetch, lock timer) into a dialog with
//! a concrete recovery action.

pub mod messages;
pub mod round_engine;
pub mod view;

pub use round_engine::{RoundEngine, RoundState, SubmitOutcome};
pub use view::QuizView;
