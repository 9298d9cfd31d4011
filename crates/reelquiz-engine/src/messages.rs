//! Dialog text construction.

use reelquiz_core::dialog::{DialogKind, DialogRequest};
use reelquiz_core::game_result::GameResult;
use reelquiz_statistics::StatisticsSummary;

/// Builds the end-of-round dialog. The first line distinguishes a
/// perfect score from a partial one; the rest is the lifetime summary.
#[must_use]
pub fn round_result_dialog(result: GameResult, summary: &StatisticsSummary) -> DialogRequest {
    let first_line = if result.correct == result.total {
        format!(
            "Congratulations, {} out of {}!",
            result.correct, result.total
        )
    } else {
        format!("Your result: {} out of {}", result.correct, result.total)
    };

    let best = summary.best_game;
    let message = format!(
        "{first_line}\nQuizzes played: {}\nRecord: {}/{} ({})\nAverage accuracy: {:.2}%",
        summary.games_count,
        best.correct,
        best.total,
        best.finished_at.format("%d.%m.%y %H:%M"),
        summary.total_accuracy,
    );

    DialogRequest {
        kind: DialogKind::RoundResult,
        title: "This round is over!".to_owned(),
        message,
        action_label: "Play again".to_owned(),
    }
}

/// Builds an error dialog of the given kind. All error dialogs share
/// the same title and retry action; only the message differs.
#[must_use]
pub fn error_dialog(kind: DialogKind, message: String) -> DialogRequest {
    debug_assert!(kind != DialogKind::RoundResult);
    DialogRequest {
        kind,
        title: "Something went wrong!".to_owned(),
        message,
        action_label: "Try again".to_owned(),
    }
}
