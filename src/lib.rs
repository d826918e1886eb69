//! # Sentimeter - Lexicon-Based Sentiment Scoring
//!
//! Sentimeter scores the emotional valence of short texts with a
//! valence lexicon and a small set of contextual rules, and exposes the
//! scorer two ways: as a library type and as an HTTP batch endpoint.
//!
//! ## Quick Start
//!
//! ```rust
//! use sentimeter::SentimentIntensityAnalyzer;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let sia = SentimentIntensityAnalyzer::new();
//!     let score = sia.polarity_scores("I love this product! It's amazing!")?;
//!     assert!(score.compound > 0.0);
//!     Ok(())
//! }
//! ```
//!
//! ## HTTP service
//!
//! The `sentimeter-server` binary serves `POST /analyze`, taking
//! `{ "texts": [...] }` and returning one `{ text, sentiment }` record
//! per input in input order. See [`server`] for the router and
//! configuration.

#![deny(unsafe_code)]

pub mod analyzer;
pub mod error;
pub mod server;
pub mod types;

pub use analyzer::{Lexicon, SentimentIntensityAnalyzer};
pub use error::Error;
pub use types::{PolarityScore, ResultRecord, TextInput};
