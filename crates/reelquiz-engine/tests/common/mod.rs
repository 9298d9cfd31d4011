//! Shared fixtures for the round engine tests.

use std::sync::Arc;

use chrono::{DateTime, TimeZone, Utc};
use reelquiz_core::dialog::DialogRequest;
use reelquiz_core::progress::RoundProgress;
use reelquiz_core::question::Question;
use reelquiz_core::rng::QuizRng;
use reelquiz_engine::{QuizView, RoundEngine};
use reelquiz_questions::QuestionFactory;
use reelquiz_statistics::StatisticsStore;
use reelquiz_test_support::{FixedClock, ImmediateTimer, StubFeedClient};

pub const FEED_URL: &str = "https://feed.example/popular";

pub const TWO_MOVIES: &str = r#"
{
    "errorMessage": "",
    "items": [
        {
            "id": "tt0111161",
            "title": "The Shawshank Redemption",
            "rating": "9.3",
            "posterURL": "https://img.example/shawshank.jpg"
        },
        {
            "id": "tt0068646",
            "title": "The Godfather",
            "rating": "9.2",
            "posterURL": "https://img.example/godfather.jpg"
        }
    ]
}"#;

/// A view that records every call the engine makes.
#[derive(Debug, Default)]
pub struct RecordingView {
    /// Question text and step label, per presented question.
    pub questions: Vec<(String, String)>,
    pub dialogs: Vec<DialogRequest>,
    pub input_events: Vec<bool>,
    pub loading_events: Vec<bool>,
}

impl QuizView for RecordingView {
    fn present_question(&mut self, question: &Question, progress: &RoundProgress) {
        self.questions
            .push((question.text.clone(), progress.step_label()));
    }

    fn present_dialog(&mut self, dialog: &DialogRequest) {
        self.dialogs.push(dialog.clone());
    }

    fn set_input_enabled(&mut self, enabled: bool) {
        self.input_events.push(enabled);
    }

    fn set_loading_visible(&mut self, visible: bool) {
        self.loading_events.push(visible);
    }
}

pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 1, 18, 30, 0).unwrap()
}

/// Wires an engine out of the given doubles, with the lock window
/// collapsed by `ImmediateTimer`.
pub fn engine_with(
    client: Arc<StubFeedClient>,
    rng: Box<dyn QuizRng>,
    statistics: Arc<dyn StatisticsStore>,
) -> RoundEngine<RecordingView> {
    let factory = QuestionFactory::new(client, rng, FEED_URL.to_owned());
    RoundEngine::new(
        factory,
        statistics,
        Arc::new(FixedClock(fixed_now())),
        Arc::new(ImmediateTimer),
        RecordingView::default(),
    )
}
