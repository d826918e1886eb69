//! Error types for lexicon loading, scoring, and service configuration.

use thiserror::Error;

/// Errors produced by the sentimeter library.
#[derive(Error, Debug)]
pub enum Error {
    /// Lexicon data could not be parsed or yielded no entries.
    #[error("lexicon error: {0}")]
    Lexicon(String),

    /// Scoring produced a non-finite value, which can only happen with
    /// a malformed (e.g. NaN-valence) user-supplied lexicon.
    #[error("scoring failed: {0}")]
    Scoring(String),

    /// Invalid service configuration.
    #[error("configuration error: {0}")]
    Config(String),

    /// Filesystem failure while loading or caching a lexicon.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Network failure while fetching a remote lexicon.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}
