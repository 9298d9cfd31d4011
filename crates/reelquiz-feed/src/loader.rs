//! Catalog payload parsing.
//!
//! The feed answers with `{ "errorMessage": "...", "items": [...] }`.
//! Only structurally malformed input is a [`ParseError`]; a well-formed
//! payload with zero items or a non-empty advisory message is valid data
//! and the caller decides what to do with it.

use reelquiz_core::error::ParseError;
use reelquiz_core::movie::Movie;
use serde::Deserialize;

/// A successfully parsed feed payload.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogPayload {
    /// Parsed movie entries, possibly empty.
    pub movies: Vec<Movie>,
    /// Advisory message from the feed; empty on a clean response.
    pub error_message: String,
}

#[derive(Debug, Deserialize)]
struct RawFeed {
    #[serde(rename = "errorMessage")]
    error_message: String,
    items: Vec<RawMovie>,
}

#[derive(Debug, Deserialize)]
struct RawMovie {
    id: String,
    title: String,
    rating: String,
    #[serde(rename = "posterURL")]
    poster_url: String,
}

/// Parses a raw feed body into a [`CatalogPayload`].
///
/// Ratings arrive as strings and collapse to `0.0` when they do not
/// parse as a decimal number.
///
/// # Errors
///
/// Returns [`ParseError`] when the payload is not the expected JSON
/// shape.
pub fn parse_catalog(bytes: &[u8]) -> Result<CatalogPayload, ParseError> {
    let raw: RawFeed = serde_json::from_slice(bytes).map_err(|e| ParseError(e.to_string()))?;

    let movies = raw
        .items
        .into_iter()
        .map(|item| Movie {
            rating: item.rating.parse().unwrap_or(0.0),
            id: item.id,
            title: item.title,
            poster_url: item.poster_url,
        })
        .collect();

    Ok(CatalogPayload {
        movies,
        error_message: raw.error_message,
    })
}
