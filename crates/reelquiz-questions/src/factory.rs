//! Question factory.
//!
//! Two-phase by design: the catalog is loaded once before the round may
//! start, while each question's poster is fetched lazily so ten images
//! are never front-loaded before question one is shown.

use std::sync::Arc;

use reelquiz_core::error::{LoadError, TransportError};
use reelquiz_core::movie::Movie;
use reelquiz_core::question::Question;
use reelquiz_core::rng::QuizRng;
use reelquiz_feed::client::FeedClient;
use reelquiz_feed::loader::parse_catalog;
use tracing::{debug, warn};

/// Inclusive bounds of the random rating threshold.
const THRESHOLD_MIN: u32 = 7;
const THRESHOLD_MAX: u32 = 9;

/// Outcome of a catalog load cycle.
#[derive(Debug)]
pub enum LoadOutcome {
    /// A non-empty, clean catalog is installed and questions can be
    /// generated.
    CatalogReady {
        /// Number of movies in the new catalog.
        movie_count: usize,
    },
    /// The feed answered correctly but carried no usable movies. The
    /// advisory message is the feed's own explanation, possibly empty.
    CatalogEmpty {
        /// Advisory message from the feed.
        advisory: String,
    },
    /// The feed could not be fetched or parsed.
    DataLoadFailed(LoadError),
}

/// Outcome of a single question request.
#[derive(Debug)]
pub enum NextOutcome {
    /// A question was generated.
    QuestionReady(Question),
    /// The chosen movie's poster could not be fetched; no question is
    /// produced and the caller decides whether to retry.
    ImageFetchFailed(TransportError),
}

#[derive(Debug, Clone, Copy)]
enum Direction {
    Higher,
    Lower,
}

impl Direction {
    fn word(self) -> &'static str {
        match self {
            Self::Higher => "higher",
            Self::Lower => "lower",
        }
    }

    fn holds(self, rating: f64, threshold: u32) -> bool {
        let threshold = f64::from(threshold);
        match self {
            Self::Higher => rating > threshold,
            Self::Lower => rating < threshold,
        }
    }
}

/// Owns the in-memory movie catalog and produces randomized questions.
pub struct QuestionFactory {
    client: Arc<dyn FeedClient>,
    rng: Box<dyn QuizRng>,
    feed_url: String,
    catalog: Vec<Movie>,
}

impl QuestionFactory {
    /// Creates a factory with an empty catalog.
    #[must_use]
    pub fn new(client: Arc<dyn FeedClient>, rng: Box<dyn QuizRng>, feed_url: String) -> Self {
        Self {
            client,
            rng,
            feed_url,
            catalog: Vec::new(),
        }
    }

    /// Whether a successful `load` has installed a catalog.
    #[must_use]
    pub fn has_catalog(&self) -> bool {
        !self.catalog.is_empty()
    }

    /// Fetches and parses the movie feed, replacing the catalog
    /// wholesale on success.
    pub async fn load(&mut self) -> LoadOutcome {
        let bytes = match self.client.fetch(&self.feed_url).await {
            Ok(bytes) => bytes,
            Err(e) => {
                warn!(error = %e, "movie feed fetch failed");
                return LoadOutcome::DataLoadFailed(LoadError::Transport(e));
            }
        };

        let payload = match parse_catalog(&bytes) {
            Ok(payload) => payload,
            Err(e) => {
                warn!(error = %e, "movie feed parse failed");
                return LoadOutcome::DataLoadFailed(LoadError::Parse(e));
            }
        };

        if payload.movies.is_empty() || !payload.error_message.is_empty() {
            warn!(advisory = %payload.error_message, "movie feed carried no usable catalog");
            return LoadOutcome::CatalogEmpty {
                advisory: payload.error_message,
            };
        }

        self.catalog = payload.movies;
        debug!(movie_count = self.catalog.len(), "catalog installed");
        LoadOutcome::CatalogReady {
            movie_count: self.catalog.len(),
        }
    }

    /// Generates one question: uniform random movie, uniform random
    /// comparison direction and threshold, poster fetched on demand.
    ///
    /// # Panics
    ///
    /// Panics when called before a successful `load`; the caller owns
    /// that ordering.
    pub async fn next(&mut self) -> NextOutcome {
        assert!(
            !self.catalog.is_empty(),
            "next() requires a loaded catalog"
        );

        let last_index = u32::try_from(self.catalog.len() - 1).unwrap_or(u32::MAX);
        let index = self.rng.next_u32_range(0, last_index) as usize;
        let direction = if self.rng.next_u32_range(0, 1) == 0 {
            Direction::Higher
        } else {
            Direction::Lower
        };
        let threshold = self.rng.next_u32_range(THRESHOLD_MIN, THRESHOLD_MAX);

        let movie = &self.catalog[index];
        let poster = match self.client.fetch(&movie.poster_url).await {
            Ok(bytes) => bytes,
            Err(e) => {
                warn!(movie = %movie.title, error = %e, "poster fetch failed");
                return NextOutcome::ImageFetchFailed(e);
            }
        };

        let question = Question {
            poster,
            text: format!(
                "Is this movie's rating {} than {threshold}?",
                direction.word()
            ),
            correct_answer: direction.holds(movie.rating, threshold),
        };
        debug!(movie = %movie.title, "question generated");
        NextOutcome::QuestionReady(question)
    }
}

#[cfg(test)]
mod tests {
    use reelquiz_core::error::TransportError;
    use reelquiz_test_support::{SequenceRng, StubFeedClient};

    use super::*;

    const FEED_URL: &str = "https://feed.example/popular";

    const TWO_MOVIES: &str = r#"
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

    fn factory_with(client: StubFeedClient, rng_values: Vec<u32>) -> QuestionFactory {
        QuestionFactory::new(
            Arc::new(client),
            Box::new(SequenceRng::new(rng_values)),
            FEED_URL.to_owned(),
        )
    }

    #[tokio::test]
    async fn test_load_installs_a_two_movie_catalog() {
        let client = StubFeedClient::with_payload(FEED_URL, TWO_MOVIES);
        let mut factory = factory_with(client, vec![]);

        let outcome = factory.load().await;

        assert!(matches!(
            outcome,
            LoadOutcome::CatalogReady { movie_count: 2 }
        ));
        assert!(factory.has_catalog());
    }

    #[tokio::test]
    async fn test_load_reports_transport_failures() {
        let client = StubFeedClient::failing_feed(
            FEED_URL,
            TransportError::Transport("connection refused".to_owned()),
        );
        let mut factory = factory_with(client, vec![]);

        let outcome = factory.load().await;

        assert!(matches!(
            outcome,
            LoadOutcome::DataLoadFailed(LoadError::Transport(_))
        ));
        assert!(!factory.has_catalog());
    }

    #[tokio::test]
    async fn test_load_reports_malformed_payloads_as_parse_failures() {
        let client = StubFeedClient::with_payload(FEED_URL, "not json at all");
        let mut factory = factory_with(client, vec![]);

        let outcome = factory.load().await;

        assert!(matches!(
            outcome,
            LoadOutcome::DataLoadFailed(LoadError::Parse(_))
        ));
    }

    #[tokio::test]
    async fn test_load_treats_an_advisory_message_as_catalog_empty() {
        let client = StubFeedClient::with_payload(
            FEED_URL,
            r#"{ "errorMessage": "Invalid API Key", "items": [] }"#,
        );
        let mut factory = factory_with(client, vec![]);

        let outcome = factory.load().await;

        match outcome {
            LoadOutcome::CatalogEmpty { advisory } => assert_eq!(advisory, "Invalid API Key"),
            other => panic!("expected CatalogEmpty, got {other:?}"),
        }
        assert!(!factory.has_catalog());
    }

    #[tokio::test]
    async fn test_next_builds_the_question_from_the_scripted_draws() {
        let client = StubFeedClient::with_payload(FEED_URL, TWO_MOVIES);
        // Draws: movie index 0 (rating 9.3), direction 0 ("higher"),
        // threshold 9.
        let mut factory = factory_with(client, vec![0, 0, 9]);
        factory.load().await;

        let outcome = factory.next().await;

        match outcome {
            NextOutcome::QuestionReady(question) => {
                assert_eq!(question.text, "Is this movie's rating higher than 9?");
                assert!(question.correct_answer); // 9.3 > 9
                assert!(!question.poster.is_empty());
            }
            other => panic!("expected QuestionReady, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_next_evaluates_the_lower_direction() {
        let client = StubFeedClient::with_payload(FEED_URL, TWO_MOVIES);
        // Draws: movie index 1 (rating 9.2), direction 1 ("lower"),
        // threshold 7.
        let mut factory = factory_with(client, vec![1, 1, 7]);
        factory.load().await;

        let outcome = factory.next().await;

        match outcome {
            NextOutcome::QuestionReady(question) => {
                assert_eq!(question.text, "Is this movie's rating lower than 7?");
                assert!(!question.correct_answer); // 9.2 is not < 7
            }
            other => panic!("expected QuestionReady, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_next_reports_a_poster_fetch_failure_without_a_question() {
        let client =
            StubFeedClient::with_payload(FEED_URL, TWO_MOVIES).failing_poster_calls(vec![1]);
        let mut factory = factory_with(client, vec![0, 0, 7]);
        factory.load().await;

        let outcome = factory.next().await;

        assert!(matches!(outcome, NextOutcome::ImageFetchFailed(_)));
    }

    #[tokio::test]
    #[should_panic(expected = "next() requires a loaded catalog")]
    async fn test_next_panics_without_a_catalog() {
        let client = StubFeedClient::with_payload(FEED_URL, TWO_MOVIES);
        let mut factory = factory_with(client, vec![0, 0, 7]);

        let _ = factory.next().await;
    }
}
