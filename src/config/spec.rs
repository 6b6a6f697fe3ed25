//! Sentiment specification types.
//!
//! A [`SentimentSpec`] describes edits to the built-in lexicon, the scoring
//! constants and the summary mode. Every section is optional; omitted values
//! keep the defaults.
//!
//! # JSON shape
//!
//! ```json
//! {
//!   "v": 1,
//!   "lexicon": {
//!     "positive": ["solid"],
//!     "negative": ["rigged"],
//!     "remove": ["fun"]
//!   },
//!   "thresholds": { "positive": 0.2, "negative": -0.2 },
//!   "rating": { "text_weight": 0.7, "rating_weight": 0.3, "confidence_floor": 0.8 },
//!   "confidence": { "baseline": 0.3, "density_weight": 2.0, "cap": 0.9 },
//!   "summary": { "mode": "as_observed" },
//!   "strict": false
//! }
//! ```

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::errors::{ConfigError, Result};
use super::validation::{ValidationEngine, ValidationReport};
use crate::classifier::{ClassifierConfig, SentimentClassifier};
use crate::nlp::lexicon::{Lexicon, Polarity};
use crate::summarizer::SummaryMode;
use crate::types::Thresholds;

/// Only supported spec version
pub const SPEC_VERSION: u32 = 1;

/// Top-level sentiment specification (v1).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SentimentSpec {
    /// Spec version (currently `1`).
    pub v: u32,

    #[serde(default)]
    pub lexicon: LexiconSpec,

    #[serde(default)]
    pub thresholds: Option<Thresholds>,

    #[serde(default)]
    pub rating: RatingSpec,

    #[serde(default)]
    pub confidence: ConfidenceSpec,

    #[serde(default)]
    pub summary: SummarySpec,

    /// If `true`, unrecognized fields are errors; if `false`, warnings.
    #[serde(default)]
    pub strict: bool,

    /// Captures any fields not recognized by the schema.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_json::Value>,
}

/// Edits applied to the built-in lexicon
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LexiconSpec {
    /// Start from an empty lexicon instead of the built-in English one
    #[serde(default)]
    pub replace_builtin: bool,

    #[serde(default)]
    pub positive: Vec<String>,

    #[serde(default)]
    pub negative: Vec<String>,

    #[serde(default)]
    pub intensifiers: Vec<String>,

    #[serde(default)]
    pub negations: Vec<String>,

    /// Words removed from every list, applied after the additions
    #[serde(default)]
    pub remove: Vec<String>,

    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_json::Value>,
}

/// Rating blend settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RatingSpec {
    #[serde(default)]
    pub text_weight: Option<f64>,

    #[serde(default)]
    pub rating_weight: Option<f64>,

    #[serde(default)]
    pub confidence_floor: Option<f64>,

    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_json::Value>,
}

/// Text confidence settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfidenceSpec {
    #[serde(default)]
    pub baseline: Option<f64>,

    #[serde(default)]
    pub density_weight: Option<f64>,

    #[serde(default)]
    pub cap: Option<f64>,

    /// Confidence for text with no lexicon hits
    #[serde(default)]
    pub uninformative: Option<f64>,

    #[serde(default)]
    pub intensifier_bonus: Option<f64>,

    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_json::Value>,
}

/// Aggregation settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SummarySpec {
    #[serde(default)]
    pub mode: SummaryMode,

    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_json::Value>,
}

impl Default for SentimentSpec {
    fn default() -> Self {
        Self {
            v: SPEC_VERSION,
            lexicon: LexiconSpec::default(),
            thresholds: None,
            rating: RatingSpec::default(),
            confidence: ConfidenceSpec::default(),
            summary: SummarySpec::default(),
            strict: false,
            unknown_fields: HashMap::new(),
        }
    }
}

impl SentimentSpec {
    /// Parse a spec from JSON without validating it
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Run the default validation rules
    pub fn validate(&self) -> ValidationReport {
        ValidationEngine::with_defaults().validate(self)
    }

    /// Scoring constants with the spec's overrides applied
    pub fn classifier_config(&self) -> ClassifierConfig {
        let defaults = ClassifierConfig::default();
        ClassifierConfig {
            thresholds: self.thresholds.unwrap_or(defaults.thresholds),
            intensifier_bonus: self
                .confidence
                .intensifier_bonus
                .unwrap_or(defaults.intensifier_bonus),
            uninformative_confidence: self
                .confidence
                .uninformative
                .unwrap_or(defaults.uninformative_confidence),
            confidence_baseline: self.confidence.baseline.unwrap_or(defaults.confidence_baseline),
            density_weight: self
                .confidence
                .density_weight
                .unwrap_or(defaults.density_weight),
            confidence_cap: self.confidence.cap.unwrap_or(defaults.confidence_cap),
            text_weight: self.rating.text_weight.unwrap_or(defaults.text_weight),
            rating_weight: self.rating.rating_weight.unwrap_or(defaults.rating_weight),
            rating_confidence_floor: self
                .rating
                .confidence_floor
                .unwrap_or(defaults.rating_confidence_floor),
            summary_mode: self.summary.mode,
        }
    }

    /// Lexicon with the spec's edits applied
    pub fn build_lexicon(&self) -> Lexicon {
        let spec = &self.lexicon;
        let mut lexicon = if spec.replace_builtin {
            Lexicon::empty()
        } else {
            Lexicon::english()
        };
        lexicon.add_terms(Polarity::Positive, &spec.positive);
        lexicon.add_terms(Polarity::Negative, &spec.negative);
        lexicon.add_intensifiers(&spec.intensifiers);
        lexicon.add_negations(&spec.negations);
        lexicon.remove(&spec.remove);
        lexicon
    }

    /// Validate and build a classifier.
    ///
    /// Warnings are logged (with the `tracing` feature) and do not fail the
    /// build; any error-severity diagnostic does.
    pub fn build(&self) -> Result<SentimentClassifier> {
        trace_stage!("build_classifier");

        let report = self.validate();
        if report.has_errors() {
            return Err(ConfigError::Invalid(report));
        }

        #[cfg(feature = "tracing")]
        log_warnings(&report);

        Ok(SentimentClassifier::new()
            .with_lexicon(self.build_lexicon())
            .with_config(self.classifier_config()))
    }
}

#[cfg(feature = "tracing")]
fn log_warnings(report: &ValidationReport) {
    for warning in report.warnings() {
        tracing::warn!(code = warning.code.as_str(), path = %warning.path, "{}", warning.message);
    }
}
