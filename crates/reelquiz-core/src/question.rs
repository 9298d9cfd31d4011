//! Quiz question and answer types.

/// One generated yes/no question.
///
/// Immutable; there is one live instance at a time and the next question
/// fully replaces it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    /// Raw poster image bytes, fetched per question.
    pub poster: Vec<u8>,
    /// Question text shown to the player.
    pub text: String,
    /// Truth value of the rating comparison the text describes.
    pub correct_answer: bool,
}

/// A player's answer to the current question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Answer {
    /// "Yes" — the player asserts the comparison holds.
    Yes,
    /// "No" — the player asserts it does not.
    No,
}

impl Answer {
    /// The boolean the answer asserts.
    #[must_use]
    pub fn as_bool(self) -> bool {
        matches!(self, Self::Yes)
    }
}

/// Correctness of a single answer. Ephemeral, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnswerOutcome {
    /// Whether the answer matched the question's correct answer.
    pub correct: bool,
}
