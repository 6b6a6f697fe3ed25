//! # review-sentiment
//!
//! Lexicon-based sentiment scoring for app-store reviews.
//!
//! Free text is lowercased, split on whitespace and matched by substring
//! against positive and negative word fragments, with one-token look-back
//! for negations ("not great") and intensifiers ("really great"). The text
//! score can be blended with a 1-5 star rating, and any number of results
//! can be rolled up into a label distribution.
//!
//! ```
//! use review_sentiment::{classify_text, classify_text_with_rating, summarize, SentimentType};
//!
//! let a = classify_text("this app is great");
//! assert_eq!(a.kind, SentimentType::Positive);
//!
//! let b = classify_text_with_rating("okay app", 5.0);
//! assert_eq!(b.kind, SentimentType::Positive);
//!
//! let summary = summarize(&[a, b]);
//! assert_eq!(summary.distribution.positive, 100);
//! ```
//!
//! Classification and aggregation are pure and total: no input makes them
//! fail. Only loading a JSON [`config::SentimentSpec`] can return an error.

use std::sync::OnceLock;

/// Enter a tracing span for a processing stage (when the `tracing` feature
/// is enabled). When disabled, this is a no-op and the compiler eliminates it.
macro_rules! trace_stage {
    ($name:expr) => {
        #[cfg(feature = "tracing")]
        let _span = tracing::info_span!("sentiment_stage", stage = $name).entered();
    };
}

pub mod classifier;
pub mod config;
pub mod nlp;
pub mod reviews;
pub mod summarizer;
pub mod types;

pub use classifier::{ClassifierConfig, KeywordTally, SentimentClassifier, TermHit};
pub use config::{ConfigError, SentimentSpec};
pub use nlp::lexicon::{Lexicon, Polarity};
pub use reviews::{analyze_reviews, classify_batch, Platform, Review, ReviewAnalysis};
pub use summarizer::{summarize_with_mode, SentimentTally, SummaryMode};
pub use types::{Distribution, SentimentResult, SentimentSummary, SentimentType, Thresholds};

fn default_classifier() -> &'static SentimentClassifier {
    static DEFAULT: OnceLock<SentimentClassifier> = OnceLock::new();
    DEFAULT.get_or_init(SentimentClassifier::new)
}

/// Classify free text with the built-in lexicon.
///
/// Empty or whitespace-only text yields a neutral result with zero
/// confidence; text without any lexicon hit yields neutral at 0.3.
pub fn classify_text(text: &str) -> SentimentResult {
    default_classifier().classify_text(text)
}

/// Classify free text blended with a star rating (nominally 1-5).
pub fn classify_text_with_rating(text: &str, rating: f64) -> SentimentResult {
    default_classifier().classify_text_with_rating(text, rating)
}

/// Roll a sequence of results up into a [`SentimentSummary`].
pub fn summarize(results: &[SentimentResult]) -> SentimentSummary {
    summarizer::summarize(results)
}
