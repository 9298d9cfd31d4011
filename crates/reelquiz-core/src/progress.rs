//! Round progress counters.

/// Number of questions in one round.
pub const QUESTION_AMOUNT: u32 = 10;

/// Position and score within the current round.
///
/// Invariants: `question_index < QUESTION_AMOUNT` and
/// `correct_count <= question_index + 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RoundProgress {
    /// Zero-based index of the current question.
    pub question_index: u32,
    /// Correct answers given so far this round.
    pub correct_count: u32,
}

impl RoundProgress {
    /// Whether the current question is the last of the round.
    #[must_use]
    pub fn is_last_question(&self) -> bool {
        self.question_index == QUESTION_AMOUNT - 1
    }

    /// Moves to the next question.
    pub fn advance(&mut self) {
        debug_assert!(!self.is_last_question());
        self.question_index += 1;
    }

    /// Counts one correct answer for the current question.
    pub fn record_correct(&mut self) {
        self.correct_count += 1;
        debug_assert!(self.correct_count <= self.question_index + 1);
    }

    /// Resets the counters for a fresh round.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// One-based "3/10" label for the current question.
    #[must_use]
    pub fn step_label(&self) -> String {
        format!("{}/{}", self.question_index + 1, QUESTION_AMOUNT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_label_is_one_based() {
        let progress = RoundProgress::default();
        assert_eq!(progress.step_label(), "1/10");
    }

    #[test]
    fn test_is_last_question_only_on_final_index() {
        let mut progress = RoundProgress::default();
        for _ in 0..QUESTION_AMOUNT - 1 {
            assert!(!progress.is_last_question());
            progress.advance();
        }
        assert!(progress.is_last_question());
    }

    #[test]
    fn test_reset_zeroes_both_counters() {
        let mut progress = RoundProgress {
            question_index: 6,
            correct_count: 4,
        };
        progress.reset();
        assert_eq!(progress, RoundProgress::default());
    }
}
