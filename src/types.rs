//! Core data types for sentiment scoring
//!
//! These are the plain values flowing in and out of the classifier and the
//! summarizer. All of them serialize to the JSON shape consumed by the web
//! layer (`type`, `score`, `confidence` / `overall`, `distribution`,
//! `averageScore`).

use serde::{Deserialize, Serialize};

/// Polarity label attached to a piece of text or a group of results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentType {
    Positive,
    Neutral,
    Negative,
}

impl SentimentType {
    /// Returns the lowercase name used in JSON.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Neutral => "neutral",
            Self::Negative => "negative",
        }
    }
}

impl std::fmt::Display for SentimentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Score cut-offs separating the three labels.
///
/// Scores strictly above `positive` are positive, scores strictly below
/// `negative` are negative, and everything in between (inclusive) is the
/// neutral dead-zone.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Thresholds {
    pub positive: f64,
    pub negative: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            positive: 0.2,
            negative: -0.2,
        }
    }
}

impl Thresholds {
    /// Label a score.
    #[inline]
    pub fn classify(&self, score: f64) -> SentimentType {
        if score > self.positive {
            SentimentType::Positive
        } else if score < self.negative {
            SentimentType::Negative
        } else {
            SentimentType::Neutral
        }
    }
}

/// Classification of a single piece of text.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SentimentResult {
    /// Polarity label
    #[serde(rename = "type")]
    pub kind: SentimentType,
    /// Polarity score, nominally in [-1, 1]
    pub score: f64,
    /// Confidence in [0, 1]
    pub confidence: f64,
}

impl SentimentResult {
    /// Create a new result
    pub fn new(kind: SentimentType, score: f64, confidence: f64) -> Self {
        Self {
            kind,
            score,
            confidence,
        }
    }

    /// Neutral result with zero score and the given confidence
    pub fn neutral(confidence: f64) -> Self {
        Self::new(SentimentType::Neutral, 0.0, confidence)
    }
}

/// Integer percentages per label.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Distribution {
    pub positive: u32,
    pub neutral: u32,
    pub negative: u32,
}

impl Distribution {
    /// Sum of the three buckets.
    ///
    /// Not necessarily 100: buckets are rounded independently.
    pub fn total(&self) -> u32 {
        self.positive + self.neutral + self.negative
    }

    /// Percentage for a single label
    pub fn get(&self, kind: SentimentType) -> u32 {
        match kind {
            SentimentType::Positive => self.positive,
            SentimentType::Neutral => self.neutral,
            SentimentType::Negative => self.negative,
        }
    }
}

/// Aggregate over a collection of [`SentimentResult`]s.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SentimentSummary {
    pub overall: SentimentType,
    pub distribution: Distribution,
    pub average_score: f64,
}

impl SentimentSummary {
    /// Summary of an empty collection.
    pub fn empty() -> Self {
        Self {
            overall: SentimentType::Neutral,
            distribution: Distribution::default(),
            average_score: 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_dead_zone_is_inclusive() {
        let t = Thresholds::default();
        assert_eq!(t.classify(0.2), SentimentType::Neutral);
        assert_eq!(t.classify(-0.2), SentimentType::Neutral);
        assert_eq!(t.classify(0.0), SentimentType::Neutral);
        assert_eq!(t.classify(0.21), SentimentType::Positive);
        assert_eq!(t.classify(-0.21), SentimentType::Negative);
    }

    #[test]
    fn test_result_serializes_with_type_field() {
        let r = SentimentResult::new(SentimentType::Positive, 1.0, 0.8);
        let json = serde_json::to_value(r).unwrap();
        assert_eq!(json["type"], "positive");
        assert_eq!(json["score"], 1.0);
        assert_eq!(json["confidence"], 0.8);
    }

    #[test]
    fn test_summary_serializes_camel_case() {
        let json = serde_json::to_value(SentimentSummary::empty()).unwrap();
        assert_eq!(json["overall"], "neutral");
        assert_eq!(json["averageScore"], 0.0);
        assert_eq!(json["distribution"]["positive"], 0);
    }

    #[test]
    fn test_result_deserializes() {
        let r: SentimentResult =
            serde_json::from_str(r#"{"type":"negative","score":-0.5,"confidence":0.4}"#).unwrap();
        assert_eq!(r.kind, SentimentType::Negative);
        assert_eq!(r.score, -0.5);
    }
}
