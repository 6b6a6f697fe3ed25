//! Sentiment aggregation
//!
//! Folds per-review [`SentimentResult`]s into a [`SentimentSummary`]: label
//! percentages, mean score and an overall label.

pub mod tally;

use serde::{Deserialize, Serialize};

use crate::types::{SentimentResult, SentimentSummary, Thresholds};

pub use tally::SentimentTally;

/// How a summary derives its percentages and overall label
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SummaryMode {
    /// Percentages rounded independently (may total 99-101); overall label
    /// from the average score.
    #[default]
    AsObserved,
    /// Largest-remainder percentages totalling exactly 100; overall label
    /// from the most frequent bucket, ties falling back to the average score.
    Corrected,
}

/// Summarize results with the default mode and thresholds.
///
/// The distribution does not depend on input order. `average_score` is a
/// plain floating-point sum, so reordering can change its last bits; compare
/// it with a tolerance. The overall label can only differ when the average
/// sits exactly on a threshold.
pub fn summarize(results: &[SentimentResult]) -> SentimentSummary {
    summarize_with_mode(results, SummaryMode::AsObserved, &Thresholds::default())
}

/// Summarize results with an explicit mode and thresholds
pub fn summarize_with_mode(
    results: &[SentimentResult],
    mode: SummaryMode,
    thresholds: &Thresholds,
) -> SentimentSummary {
    results
        .iter()
        .collect::<SentimentTally>()
        .finish_with(mode, thresholds)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Distribution, SentimentType};

    fn result(kind: SentimentType, score: f64) -> SentimentResult {
        SentimentResult::new(kind, score, 0.8)
    }

    #[test]
    fn test_empty_summary() {
        let s = summarize(&[]);
        assert_eq!(s, SentimentSummary::empty());
        assert_eq!(s.distribution.total(), 0);
    }

    #[test]
    fn test_basic_distribution() {
        let results = [
            result(SentimentType::Positive, 1.0),
            result(SentimentType::Positive, 0.5),
            result(SentimentType::Neutral, 0.0),
            result(SentimentType::Negative, -1.0),
        ];
        let s = summarize(&results);
        assert_eq!(
            s.distribution,
            Distribution {
                positive: 50,
                neutral: 25,
                negative: 25
            }
        );
        assert_eq!(s.average_score, 0.125);
        assert_eq!(s.overall, SentimentType::Neutral);
    }

    #[test]
    fn test_overall_follows_average_not_plurality() {
        // two mild positives outvote one strong negative by count, but the
        // mean sits in the dead-zone
        let results = [
            result(SentimentType::Positive, 0.25),
            result(SentimentType::Positive, 0.25),
            result(SentimentType::Negative, -0.5),
        ];
        let s = summarize(&results);
        assert_eq!(s.average_score, 0.0);
        assert_eq!(s.overall, SentimentType::Neutral);
        assert_eq!(s.distribution.positive, 67);
    }

    #[test]
    fn test_rounding_is_independent() {
        let results = [
            result(SentimentType::Positive, 1.0),
            result(SentimentType::Neutral, 0.0),
            result(SentimentType::Negative, -1.0),
        ];
        let s = summarize(&results);
        assert_eq!(s.distribution.positive, 33);
        assert_eq!(s.distribution.neutral, 33);
        assert_eq!(s.distribution.negative, 33);
        assert_eq!(s.distribution.total(), 99);
    }

    #[test]
    fn test_rounding_can_exceed_hundred() {
        // 1/8 = 12.5% rounds up, 7/8 = 87.5% rounds up
        let mut results = vec![result(SentimentType::Negative, -1.0)];
        results.extend(std::iter::repeat(result(SentimentType::Positive, 1.0)).take(7));
        let s = summarize(&results);
        assert_eq!(s.distribution.negative, 13);
        assert_eq!(s.distribution.positive, 88);
        assert_eq!(s.distribution.total(), 101);
    }

    #[test]
    fn test_overall_positive_and_negative() {
        let pos = [result(SentimentType::Positive, 1.0), result(SentimentType::Neutral, 0.0)];
        assert_eq!(summarize(&pos).overall, SentimentType::Positive);

        let neg = [result(SentimentType::Negative, -1.0), result(SentimentType::Neutral, 0.0)];
        assert_eq!(summarize(&neg).overall, SentimentType::Negative);
    }

    #[test]
    fn test_corrected_mode_sums_to_hundred() {
        let results = [
            result(SentimentType::Positive, 1.0),
            result(SentimentType::Neutral, 0.0),
            result(SentimentType::Negative, -1.0),
        ];
        let s = summarize_with_mode(&results, SummaryMode::Corrected, &Thresholds::default());
        assert_eq!(s.distribution.total(), 100);
        assert_eq!(s.distribution.positive, 34);
    }

    #[test]
    fn test_corrected_mode_uses_plurality() {
        let results = [
            result(SentimentType::Positive, 0.25),
            result(SentimentType::Positive, 0.25),
            result(SentimentType::Negative, -0.5),
        ];
        let s = summarize_with_mode(&results, SummaryMode::Corrected, &Thresholds::default());
        assert_eq!(s.overall, SentimentType::Positive);
        assert_eq!(s.average_score, 0.0);
    }

    #[test]
    fn test_corrected_mode_tie_falls_back_to_average() {
        let results = [
            result(SentimentType::Positive, 0.5),
            result(SentimentType::Negative, -1.0),
        ];
        let s = summarize_with_mode(&results, SummaryMode::Corrected, &Thresholds::default());
        assert_eq!(s.overall, SentimentType::Negative);
    }

    #[test]
    fn test_mode_serde_names() {
        let json = serde_json::to_value(SummaryMode::Corrected).unwrap();
        assert_eq!(json, "corrected");
        let mode: SummaryMode = serde_json::from_str(r#""as_observed""#).unwrap();
        assert_eq!(mode, SummaryMode::AsObserved);
    }
}
