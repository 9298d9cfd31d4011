//! ReelQuiz console entry point.
//!
//! Owns the engine on one task — the single writer of round state —
//! and drives it from stdin.

use std::error::Error;
use std::sync::Arc;

use reelquiz_core::clock::SystemClock;
use reelquiz_core::question::Answer;
use reelquiz_core::rng::SystemRng;
use reelquiz_core::timer::TokioTimer;
use reelquiz_engine::{RoundEngine, RoundState, SubmitOutcome};
use reelquiz_feed::client::HttpFeedClient;
use reelquiz_questions::QuestionFactory;
use reelquiz_statistics::SqliteStatisticsStore;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;

mod console;

const DEFAULT_FEED_URL: &str = "https://tv-api.com/en/API/MostPopularMovies/k_zcuw1ytf";
const DEFAULT_DATABASE_URL: &str = "sqlite://reelquiz-stats.db?mode=rwc";

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Initialize tracing subscriber.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Read configuration from environment.
    let feed_url = std::env::var("FEED_URL").unwrap_or_else(|_| DEFAULT_FEED_URL.to_string());
    let database_url =
        std::env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string());

    tracing::info!(%feed_url, %database_url, "starting ReelQuiz");

    let statistics = Arc::new(SqliteStatisticsStore::connect(&database_url).await?);
    let factory = QuestionFactory::new(
        Arc::new(HttpFeedClient::new()),
        Box::new(SystemRng),
        feed_url,
    );
    let mut engine = RoundEngine::new(
        factory,
        statistics,
        Arc::new(SystemClock),
        Arc::new(TokioTimer),
        console::ConsoleView::default(),
    );

    engine.start().await;

    println!("Answer with y/n, quit with q.");
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        match engine.state() {
            RoundState::AwaitingAnswer => {
                let Some(line) = lines.next_line().await? else {
                    break;
                };
                let answer = match line.trim().to_lowercase().as_str() {
                    "y" | "yes" => Answer::Yes,
                    "n" | "no" => Answer::No,
                    "q" | "quit" => break,
                    other => {
                        println!("Unrecognized answer {other:?}, use y/n.");
                        continue;
                    }
                };
                if let SubmitOutcome::Accepted(outcome) = engine.submit_answer(answer) {
                    println!("{}", if outcome.correct { "Correct!" } else { "Wrong." });
                }
                engine.complete_lock_window().await;
            }
            RoundState::RoundComplete | RoundState::DataError => {
                let Some(line) = lines.next_line().await? else {
                    break;
                };
                if line.trim().eq_ignore_ascii_case("q") {
                    break;
                }
                engine.acknowledge_dialog().await;
            }
            // The driver only regains control in a settled state.
            RoundState::Initializing | RoundState::Locked => break,
        }
    }

    println!("Goodbye!");
    Ok(())
}
