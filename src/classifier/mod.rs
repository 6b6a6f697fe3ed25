//! Lexicon-based sentiment classifier
//!
//! Scores free text by counting lexicon hits, with one-token look-back for
//! negations (flip polarity) and intensifiers (half-point bonus), and
//! optionally blends the text score with an explicit star rating.

use serde::{Deserialize, Serialize};

use crate::nlp::lexicon::{Lexicon, Modifier, Polarity};
use crate::nlp::tokenizer::{is_blank, TokenizedText};
use crate::summarizer::{summarize_with_mode, SummaryMode};
use crate::types::{SentimentResult, SentimentSummary, Thresholds};

/// Tunable constants of the classifier.
///
/// Defaults are the constants the app-review dashboards are calibrated on.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClassifierConfig {
    /// Label cut-offs
    pub thresholds: Thresholds,
    /// Extra mass added when a sentiment word follows an intensifier
    pub intensifier_bonus: f64,
    /// Confidence for text that was inspected but had no lexicon hits
    pub uninformative_confidence: f64,
    /// Confidence floor before the density term is added
    pub confidence_baseline: f64,
    /// Multiplier on keyword density (hits per token)
    pub density_weight: f64,
    /// Upper bound on text-only confidence
    pub confidence_cap: f64,
    /// Weight of the text score when blending with a rating
    pub text_weight: f64,
    /// Weight of the rating score when blending with a rating
    pub rating_weight: f64,
    /// Minimum confidence of a rating-adjusted result
    pub rating_confidence_floor: f64,
    /// How batches classified with this config are rolled up
    #[serde(default)]
    pub summary_mode: SummaryMode,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            thresholds: Thresholds::default(),
            intensifier_bonus: 0.5,
            uninformative_confidence: 0.3,
            confidence_baseline: 0.3,
            density_weight: 2.0,
            confidence_cap: 0.9,
            text_weight: 0.7,
            rating_weight: 0.3,
            rating_confidence_floor: 0.8,
            summary_mode: SummaryMode::AsObserved,
        }
    }
}

/// A lexicon term that contributed to a tally
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TermHit {
    /// Matched lexicon fragment
    pub term: String,
    /// Polarity of the fragment itself
    pub polarity: Polarity,
    /// Whether a negation flipped it
    pub negated: bool,
}

impl TermHit {
    /// Counter the hit was credited to
    pub fn effective_polarity(&self) -> Polarity {
        if self.negated {
            self.polarity.flipped()
        } else {
            self.polarity
        }
    }
}

/// Raw counters from one pass over a token sequence
#[derive(Debug, Clone, Default, PartialEq)]
pub struct KeywordTally {
    pub positive: f64,
    pub negative: f64,
    /// Number of tokens inspected
    pub token_count: usize,
    /// Every lexicon hit in token order
    pub hits: Vec<TermHit>,
}

impl KeywordTally {
    /// Combined positive and negative mass
    pub fn total(&self) -> f64 {
        self.positive + self.negative
    }

    fn credit(&mut self, polarity: Polarity, amount: f64) {
        match polarity {
            Polarity::Positive => self.positive += amount,
            Polarity::Negative => self.negative += amount,
        }
    }
}

/// Sentiment classifier over a [`Lexicon`]
#[derive(Debug, Clone, Default)]
pub struct SentimentClassifier {
    lexicon: Lexicon,
    config: ClassifierConfig,
}

impl SentimentClassifier {
    /// Classifier with the built-in English lexicon and default constants
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the lexicon
    pub fn with_lexicon(mut self, lexicon: Lexicon) -> Self {
        self.lexicon = lexicon;
        self
    }

    /// Replace the constants
    pub fn with_config(mut self, config: ClassifierConfig) -> Self {
        self.config = config;
        self
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    pub fn config(&self) -> &ClassifierConfig {
        &self.config
    }

    /// Count lexicon hits in `text`.
    ///
    /// Each token is checked against both sides of the lexicon
    /// independently. The token directly before it decides the modifier;
    /// the first token has no predecessor and is never modified.
    pub fn tally(&self, text: &str) -> KeywordTally {
        let tokens = TokenizedText::new(text);
        let words = tokens.tokens();
        let mut tally = KeywordTally {
            token_count: words.len(),
            ..KeywordTally::default()
        };

        for (i, word) in words.iter().enumerate() {
            let prev = if i > 0 { Some(words[i - 1]) } else { None };
            let modifier = self.lexicon.modifier(prev);

            for polarity in [Polarity::Positive, Polarity::Negative] {
                let Some(term) = self.lexicon.find(polarity, word) else {
                    continue;
                };
                let negated = modifier == Modifier::Negation;
                if negated {
                    tally.credit(polarity.flipped(), 1.0);
                } else {
                    tally.credit(polarity, 1.0);
                    if modifier == Modifier::Intensifier {
                        tally.credit(polarity, self.config.intensifier_bonus);
                    }
                }
                tally.hits.push(TermHit {
                    term: term.to_string(),
                    polarity,
                    negated,
                });
            }
        }

        tally
    }

    /// Classify free text.
    pub fn classify_text(&self, text: &str) -> SentimentResult {
        if is_blank(text) {
            return SentimentResult::neutral(0.0);
        }
        let tally = self.tally(text);
        self.score_tally(&tally)
    }

    /// Turn raw counters into a result
    pub fn score_tally(&self, tally: &KeywordTally) -> SentimentResult {
        let total = tally.total();
        if total == 0.0 {
            return SentimentResult::neutral(self.config.uninformative_confidence);
        }

        let score = ((tally.positive - tally.negative) / total).clamp(-1.0, 1.0);
        let kind = self.config.thresholds.classify(score);

        let density = total / tally.token_count as f64;
        let confidence = (density * self.config.density_weight + self.config.confidence_baseline)
            .min(self.config.confidence_cap);

        SentimentResult::new(kind, score, confidence)
    }

    /// Classify text together with a 1-5 star rating.
    ///
    /// The rating maps linearly onto [-1, 1] and is not clamped, so
    /// out-of-range ratings push the blended score past the unit range.
    pub fn classify_text_with_rating(&self, text: &str, rating: f64) -> SentimentResult {
        let text_sentiment = self.classify_text(text);
        self.blend_with_rating(&text_sentiment, rating)
    }

    /// Blend an existing text result with a rating
    pub fn blend_with_rating(&self, text_sentiment: &SentimentResult, rating: f64) -> SentimentResult {
        let rating_score = (rating - 3.0) / 2.0;
        let combined =
            self.config.text_weight * text_sentiment.score + self.config.rating_weight * rating_score;

        SentimentResult::new(
            self.config.thresholds.classify(combined),
            combined,
            text_sentiment
                .confidence
                .max(self.config.rating_confidence_floor),
        )
    }

    /// Roll results up using this classifier's summary mode and thresholds
    pub fn summarize(&self, results: &[SentimentResult]) -> SentimentSummary {
        summarize_with_mode(results, self.config.summary_mode, &self.config.thresholds)
    }
}
