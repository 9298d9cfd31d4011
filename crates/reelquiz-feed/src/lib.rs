//! ReelQuiz Feed — movie list retrieval and parsing.
//!
//! Two pieces: the [`client::FeedClient`] boundary (one network fetch per
//! call, typed failure classification) and the [`loader`] that turns a raw
//! feed payload into a movie catalog.

pub mod client;
pub mod loader;
