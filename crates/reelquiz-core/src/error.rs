//! Error taxonomy.
//!
//! All four failure classes are recoverable by design: the round engine
//! translates each one into a dialog with a concrete retry action, and
//! none of them terminates a round.

use thiserror::Error;

/// Failure of a single network fetch.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    /// Connection-level failure (refused, reset, timeout).
    #[error("transport failure: {0}")]
    Transport(String),

    /// The server answered with a status outside 200-299.
    #[error("unexpected HTTP status {0}")]
    BadStatus(u16),
}

/// Structurally malformed feed payload.
///
/// A well-formed payload with zero movies or an advisory message is not
/// a parse error; that case is business data, not a failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("malformed feed payload: {0}")]
pub struct ParseError(pub String);

/// Failure of the catalog load cycle as a whole.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    /// The feed could not be fetched.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The feed was fetched but could not be parsed.
    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// Failure inside the statistics store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("statistics store error: {0}")]
pub struct StoreError(pub String);
