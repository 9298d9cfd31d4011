//! The round state machine.
//!
//! One driver owns the engine mutably and is the single logical "UI
//! thread": no two transitions ever run concurrently. Fetch results and
//! the lock timer are consumed through the engine's async entry points,
//! which is the single-writer handoff back onto that owner.

use std::sync::Arc;
use std::time::Duration;

use reelquiz_core::clock::Clock;
use reelquiz_core::dialog::DialogKind;
use reelquiz_core::game_result::GameResult;
use reelquiz_core::progress::{QUESTION_AMOUNT, RoundProgress};
use reelquiz_core::question::{Answer, AnswerOutcome, Question};
use reelquiz_core::timer::{Timer, TimerHandle};
use reelquiz_questions::{LoadOutcome, NextOutcome, QuestionFactory};
use reelquiz_statistics::{StatisticsStore, summarize};
use tracing::{error, info, warn};

use crate::messages;
use crate::view::QuizView;

/// How long input stays locked after an answer.
const LOCK_DURATION: Duration = Duration::from_secs(1);

/// Where the engine is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundState {
    /// Loading the catalog; no questions exist yet.
    Initializing,
    /// A question is on screen and input is live.
    AwaitingAnswer,
    /// An answer was taken; input is locked until the timer fires.
    Locked,
    /// The result dialog is up; acknowledging it restarts the round.
    RoundComplete,
    /// An error dialog is up; acknowledging it retries the failed step.
    DataError,
}

/// Result of offering an answer to the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The answer was evaluated and the lock window started.
    Accepted(AnswerOutcome),
    /// The engine was not awaiting an answer; nothing changed. This is
    /// the double-tap guard during the lock window.
    Rejected,
}

/// What acknowledging the current dialog should do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Recovery {
    /// Re-enter `Initializing` and reload the catalog.
    RetryLoad,
    /// Re-request a question for the unchanged index.
    RetrySameQuestion,
    /// Zero the progress and start a fresh round on the loaded catalog.
    RestartRound,
}

/// The central coordinator of one quiz round.
pub struct RoundEngine<V: QuizView> {
    factory: QuestionFactory,
    statistics: Arc<dyn StatisticsStore>,
    clock: Arc<dyn Clock>,
    timer: Arc<dyn Timer>,
    view: V,
    lock_duration: Duration,
    state: RoundState,
    progress: RoundProgress,
    current_question: Option<Question>,
    lock_timer: Option<TimerHandle>,
    pending_recovery: Option<Recovery>,
}

impl<V: QuizView> RoundEngine<V> {
    /// Wires the engine to its collaborators. The statistics store is
    /// injected so tests get isolated instances.
    pub fn new(
        factory: QuestionFactory,
        statistics: Arc<dyn StatisticsStore>,
        clock: Arc<dyn Clock>,
        timer: Arc<dyn Timer>,
        view: V,
    ) -> Self {
        Self {
            factory,
            statistics,
            clock,
            timer,
            view,
            lock_duration: LOCK_DURATION,
            state: RoundState::Initializing,
            progress: RoundProgress::default(),
            current_question: None,
            lock_timer: None,
            pending_recovery: None,
        }
    }

    /// Overrides the input-lock duration.
    #[must_use]
    pub fn with_lock_duration(mut self, duration: Duration) -> Self {
        self.lock_duration = duration;
        self
    }

    /// Current state, for drivers and tests.
    #[must_use]
    pub fn state(&self) -> RoundState {
        self.state
    }

    /// Current round position and score.
    #[must_use]
    pub fn progress(&self) -> RoundProgress {
        self.progress
    }

    /// The wired view.
    pub fn view(&self) -> &V {
        &self.view
    }

    /// Begins the session: loads the catalog and, on success, presents
    /// the first question.
    pub async fn start(&mut self) {
        self.state = RoundState::Initializing;
        self.load_catalog().await;
    }

    async fn load_catalog(&mut self) {
        self.view.set_loading_visible(true);
        match self.factory.load().await {
            LoadOutcome::CatalogReady { movie_count } => {
                info!(movie_count, "catalog ready");
                self.request_question().await;
            }
            LoadOutcome::DataLoadFailed(cause) => {
                self.view.set_loading_visible(false);
                self.fail(DialogKind::NetworkError, cause.to_string(), Recovery::RetryLoad);
            }
            LoadOutcome::CatalogEmpty { advisory } => {
                self.view.set_loading_visible(false);
                let message = if advisory.is_empty() {
                    "The server returned an empty movie list".to_owned()
                } else {
                    advisory
                };
                self.fail(DialogKind::CatalogError, message, Recovery::RetryLoad);
            }
        }
    }

    async fn request_question(&mut self) {
        self.view.set_loading_visible(true);
        match self.factory.next().await {
            NextOutcome::QuestionReady(question) => {
                self.view.set_loading_visible(false);
                self.view.present_question(&question, &self.progress);
                self.current_question = Some(question);
                self.state = RoundState::AwaitingAnswer;
                self.view.set_input_enabled(true);
            }
            NextOutcome::ImageFetchFailed(cause) => {
                self.view.set_loading_visible(false);
                // The index is not re-incremented on retry, so no
                // question is ever skipped over an image error.
                self.fail(
                    DialogKind::ImageError,
                    cause.to_string(),
                    Recovery::RetrySameQuestion,
                );
            }
        }
    }

    /// Takes one answer. Accepted only in `AwaitingAnswer`; any other
    /// state rejects it unchanged. On accept the engine locks input and
    /// arms the one-shot lock timer — exactly one may be outstanding.
    pub fn submit_answer(&mut self, answer: Answer) -> SubmitOutcome {
        if self.state != RoundState::AwaitingAnswer {
            return SubmitOutcome::Rejected;
        }
        let Some(question) = self.current_question.as_ref() else {
            return SubmitOutcome::Rejected;
        };

        let correct = question.correct_answer == answer.as_bool();
        if correct {
            self.progress.record_correct();
        }

        self.view.set_input_enabled(false);
        self.state = RoundState::Locked;
        self.lock_timer = Some(self.timer.start(self.lock_duration));
        SubmitOutcome::Accepted(AnswerOutcome { correct })
    }

    /// Waits out the lock window, then advances: either the next
    /// question or, after the last one, round completion. A no-op
    /// outside `Locked`.
    pub async fn complete_lock_window(&mut self) {
        if self.state != RoundState::Locked {
            return;
        }
        let Some(handle) = self.lock_timer.take() else {
            return;
        };
        let _ = handle.fired().await;

        self.view.set_input_enabled(true);
        if self.progress.is_last_question() {
            self.finish_round().await;
        } else {
            self.progress.advance();
            self.request_question().await;
        }
    }

    /// Fires the recovery paired with the dialog on screen. The view
    /// calls this exactly once per presented dialog.
    pub async fn acknowledge_dialog(&mut self) {
        match self.pending_recovery.take() {
            Some(Recovery::RetryLoad) => {
                self.state = RoundState::Initializing;
                self.load_catalog().await;
            }
            Some(Recovery::RetrySameQuestion) => {
                self.request_question().await;
            }
            Some(Recovery::RestartRound) => {
                self.progress.reset();
                self.current_question = None;
                // The catalog survives a restart; only errors force a
                // reload.
                self.request_question().await;
            }
            None => warn!("dialog acknowledged with no pending recovery"),
        }
    }

    async fn finish_round(&mut self) {
        let result = GameResult {
            correct: self.progress.correct_count,
            total: QUESTION_AMOUNT,
            finished_at: self.clock.now(),
        };

        if let Err(e) = self.statistics.record(result).await {
            error!(error = %e, "failed to record game result");
        }
        let summary = match self.statistics.summary().await {
            Ok(summary) => summary,
            Err(e) => {
                error!(error = %e, "failed to read statistics, using empty summary");
                summarize(&[])
            }
        };

        info!(
            correct = result.correct,
            total = result.total,
            "round complete"
        );
        self.state = RoundState::RoundComplete;
        self.pending_recovery = Some(Recovery::RestartRound);
        self.view
            .present_dialog(&messages::round_result_dialog(result, &summary));
    }

    fn fail(&mut self, kind: DialogKind, message: String, recovery: Recovery) {
        warn!(?kind, %message, "entering recoverable error state");
        self.state = RoundState::DataError;
        self.pending_recovery = Some(recovery);
        self.view.present_dialog(&messages::error_dialog(kind, message));
    }
}
