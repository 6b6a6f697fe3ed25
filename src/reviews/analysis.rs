//! Per-app review roll-up
//!
//! Each review is classified independently on the rayon pool; results are
//! then folded in input order so the output is identical from run to run.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use super::themes::ThemeCounter;
use super::Review;
use crate::classifier::{KeywordTally, SentimentClassifier};
use crate::nlp::lexicon::Polarity;
use crate::nlp::tokenizer::is_blank;
use crate::summarizer::{SentimentTally, SummaryMode};
use crate::types::{Distribution, SentimentResult, SentimentType};

/// Number of themes reported per polarity
pub const TOP_THEMES: usize = 5;

/// Sentiment overview for one app
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewAnalysis {
    pub app_id: String,
    pub total_reviews: usize,
    /// Mean star rating, zero when there are no reviews
    pub average_rating: f64,
    pub sentiment_distribution: Distribution,
    pub overall: SentimentType,
    pub average_score: f64,
    pub top_positive_themes: Vec<String>,
    pub top_negative_themes: Vec<String>,
}

impl SentimentClassifier {
    /// Classify a review's title and body together with its star rating
    pub fn classify_review(&self, review: &Review) -> SentimentResult {
        self.classify_review_detailed(review).0
    }

    fn classify_review_detailed(&self, review: &Review) -> (SentimentResult, KeywordTally) {
        let text = review.text();
        let (text_sentiment, tally) = if is_blank(&text) {
            (SentimentResult::neutral(0.0), KeywordTally::default())
        } else {
            let tally = self.tally(&text);
            (self.score_tally(&tally), tally)
        };
        (self.blend_with_rating(&text_sentiment, review.rating), tally)
    }
}

/// Classify many texts in parallel. Output order matches input order.
pub fn classify_batch(classifier: &SentimentClassifier, texts: &[&str]) -> Vec<SentimentResult> {
    trace_stage!("classify_batch");
    texts
        .par_iter()
        .map(|text| classifier.classify_text(text))
        .collect()
}

/// Classify many (text, rating) pairs in parallel. Output order matches input order.
pub fn classify_batch_with_ratings(
    classifier: &SentimentClassifier,
    items: &[(&str, f64)],
) -> Vec<SentimentResult> {
    trace_stage!("classify_batch_with_ratings");
    items
        .par_iter()
        .map(|&(text, rating)| classifier.classify_text_with_rating(text, rating))
        .collect()
}

/// Build the sentiment overview for one app's reviews, rolled up with the
/// classifier's configured summary mode
pub fn analyze_reviews(
    classifier: &SentimentClassifier,
    app_id: &str,
    reviews: &[Review],
) -> ReviewAnalysis {
    analyze_reviews_with_mode(classifier, app_id, reviews, classifier.config().summary_mode)
}

/// [`analyze_reviews`] with an explicit summary mode
pub fn analyze_reviews_with_mode(
    classifier: &SentimentClassifier,
    app_id: &str,
    reviews: &[Review],
    mode: SummaryMode,
) -> ReviewAnalysis {
    trace_stage!("analyze_reviews");

    let classified: Vec<(SentimentResult, KeywordTally)> = reviews
        .par_iter()
        .map(|review| classifier.classify_review_detailed(review))
        .collect();

    let mut tally = SentimentTally::new();
    let mut themes = ThemeCounter::new();
    for (result, keywords) in &classified {
        tally.push(result);
        themes.add_hits(&keywords.hits);
    }

    let average_rating = if reviews.is_empty() {
        0.0
    } else {
        reviews.iter().map(|r| r.rating).sum::<f64>() / reviews.len() as f64
    };

    let summary = tally.finish_with(mode, &classifier.config().thresholds);

    #[cfg(feature = "tracing")]
    tracing::debug!(
        app_id,
        reviews = reviews.len(),
        overall = %summary.overall,
        average_score = summary.average_score,
        "analyzed reviews"
    );

    ReviewAnalysis {
        app_id: app_id.to_string(),
        total_reviews: reviews.len(),
        average_rating,
        sentiment_distribution: summary.distribution,
        overall: summary.overall,
        average_score: summary.average_score,
        top_positive_themes: themes.top(Polarity::Positive, TOP_THEMES),
        top_negative_themes: themes.top(Polarity::Negative, TOP_THEMES),
    }
}
