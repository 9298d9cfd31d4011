//! Movie catalog entry.

/// One movie from the "most popular movies" feed.
///
/// Immutable once parsed. The rating arrives as a string in the feed and
/// is parsed up front, so unparsable ratings have already collapsed to
/// `0.0` by the time a `Movie` exists.
#[derive(Debug, Clone, PartialEq)]
pub struct Movie {
    /// Feed identifier.
    pub id: String,
    /// Display title.
    pub title: String,
    /// Numeric rating, `0.0` when the feed value did not parse.
    pub rating: f64,
    /// URL of the poster image.
    pub poster_url: String,
}
