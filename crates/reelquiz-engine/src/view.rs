//! Presentation boundary.
//!
//! The engine holds no reference into the presentation layer beyond
//! this trait, and the view never calls back into the engine except
//! through its named entry points.

use reelquiz_core::dialog::DialogRequest;
use reelquiz_core::progress::RoundProgress;
use reelquiz_core::question::Question;

/// What the engine asks of the presentation layer.
pub trait QuizView: Send {
    /// Called once per question ready. `progress` carries the position
    /// for the "3/10" step counter.
    fn present_question(&mut self, question: &Question, progress: &RoundProgress);

    /// Called for round completion and every error condition. The view
    /// must eventually report the acknowledgement back through
    /// `RoundEngine::acknowledge_dialog`, exactly once.
    fn present_dialog(&mut self, dialog: &DialogRequest);

    /// Reflects the `AwaitingAnswer`/`Locked` split.
    fn set_input_enabled(&mut self, enabled: bool);

    /// Bracket around the async feed and poster fetch windows.
    fn set_loading_visible(&mut self, visible: bool);
}
