//! Unified error types for the profile pipeline
//!
//! This module defines error types for each layer:
//! - `LensError`: upstream GraphQL client errors
//! - `FeedError`: feed normalization errors
//! - `ProfileError`: orchestration errors surfaced to callers

use thiserror::Error;

/// Lens GraphQL client errors
#[derive(Debug, Error)]
pub enum LensError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("GraphQL errors: {0}")]
    GraphQl(String),

    #[error("Malformed response: missing {0}")]
    MalformedResponse(&'static str),

    #[error("Deserialization error: {0}")]
    Deserialization(String),
}

/// Feed normalization errors
///
/// Per-item malformation is not an error here (malformed items are
/// skipped with a warning); only a response that violates the upstream
/// contract as a whole is.
#[derive(Debug, Error)]
pub enum FeedError {
    #[error("Posts response contained no items")]
    EmptyFeed,
}

/// Errors surfaced by the profile orchestration service
#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("{0}")]
    Lens(#[from] LensError),

    #[error("{0}")]
    Feed(#[from] FeedError),
}
