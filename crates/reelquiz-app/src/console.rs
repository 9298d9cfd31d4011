//! Minimal line-oriented view.
//!
//! Stands in for a real UI: questions and dialogs go to stdout, poster
//! bytes are reported by size rather than rendered.

use reelquiz_core::dialog::DialogRequest;
use reelquiz_core::progress::RoundProgress;
use reelquiz_core::question::Question;
use reelquiz_engine::QuizView;

/// Prints engine output to the terminal.
#[derive(Debug, Default)]
pub struct ConsoleView;

impl QuizView for ConsoleView {
    fn present_question(&mut self, question: &Question, progress: &RoundProgress) {
        println!();
        println!("[{}] {}", progress.step_label(), question.text);
        println!("    (poster: {} bytes)", question.poster.len());
    }

    fn present_dialog(&mut self, dialog: &DialogRequest) {
        println!();
        println!("== {} ==", dialog.title);
        println!("{}", dialog.message);
        println!("[press Enter: {}]", dialog.action_label);
    }

    fn set_input_enabled(&mut self, enabled: bool) {
        if enabled {
            println!("Your answer (y/n):");
        }
    }

    fn set_loading_visible(&mut self, visible: bool) {
        if visible {
            println!("Loading...");
        }
    }
}
