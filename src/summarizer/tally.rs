//! Running tally for incremental aggregation
//!
//! Large review sets can be folded one result at a time (or per worker and
//! then merged) without holding every [`SentimentResult`] in memory.

use crate::summarizer::SummaryMode;
use crate::types::{Distribution, SentimentResult, SentimentSummary, SentimentType, Thresholds};

/// Label counts and score sum accumulated so far
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SentimentTally {
    positive: usize,
    neutral: usize,
    negative: usize,
    score_sum: f64,
}

impl SentimentTally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one result. Scores are summed in push order.
    pub fn push(&mut self, result: &SentimentResult) {
        match result.kind {
            SentimentType::Positive => self.positive += 1,
            SentimentType::Neutral => self.neutral += 1,
            SentimentType::Negative => self.negative += 1,
        }
        self.score_sum += result.score;
    }

    /// Combine with a tally built elsewhere
    pub fn merge(mut self, other: SentimentTally) -> Self {
        self.positive += other.positive;
        self.neutral += other.neutral;
        self.negative += other.negative;
        self.score_sum += other.score_sum;
        self
    }

    /// Number of results seen
    pub fn len(&self) -> usize {
        self.positive + self.neutral + self.negative
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Raw count for a label
    pub fn count(&self, kind: SentimentType) -> usize {
        match kind {
            SentimentType::Positive => self.positive,
            SentimentType::Neutral => self.neutral,
            SentimentType::Negative => self.negative,
        }
    }

    /// Mean score, zero when empty
    pub fn average_score(&self) -> f64 {
        if self.is_empty() {
            0.0
        } else {
            self.score_sum / self.len() as f64
        }
    }

    /// Summary with the default mode and thresholds
    pub fn finish(&self) -> SentimentSummary {
        self.finish_with(SummaryMode::AsObserved, &Thresholds::default())
    }

    /// Summary with an explicit mode and thresholds
    pub fn finish_with(&self, mode: SummaryMode, thresholds: &Thresholds) -> SentimentSummary {
        if self.is_empty() {
            return SentimentSummary::empty();
        }

        let average_score = self.average_score();
        let (distribution, overall) = match mode {
            SummaryMode::AsObserved => (
                self.rounded_percentages(),
                thresholds.classify(average_score),
            ),
            SummaryMode::Corrected => (
                self.largest_remainder_percentages(),
                self.plurality().unwrap_or_else(|| thresholds.classify(average_score)),
            ),
        };

        SentimentSummary {
            overall,
            distribution,
            average_score,
        }
    }

    fn rounded_percentages(&self) -> Distribution {
        let total = self.len() as f64;
        let pct = |count: usize| (count as f64 / total * 100.0).round() as u32;
        Distribution {
            positive: pct(self.positive),
            neutral: pct(self.neutral),
            negative: pct(self.negative),
        }
    }

    fn largest_remainder_percentages(&self) -> Distribution {
        let total = self.len() as u64;
        let counts = [self.positive, self.neutral, self.negative].map(|c| c as u64 * 100);
        let mut shares = counts.map(|c| (c / total) as u32);
        let assigned: u32 = shares.iter().sum();

        let mut order = [0usize, 1, 2];
        // stable sort keeps positive > neutral > negative precedence on ties
        order.sort_by(|&a, &b| (counts[b] % total).cmp(&(counts[a] % total)));
        for &idx in order.iter().take((100 - assigned) as usize) {
            shares[idx] += 1;
        }

        Distribution {
            positive: shares[0],
            neutral: shares[1],
            negative: shares[2],
        }
    }

    /// Most frequent label, `None` on a tie for first place
    fn plurality(&self) -> Option<SentimentType> {
        let buckets = [
            (SentimentType::Positive, self.positive),
            (SentimentType::Neutral, self.neutral),
            (SentimentType::Negative, self.negative),
        ];
        let max = buckets.iter().map(|&(_, c)| c).max()?;
        let mut leaders = buckets.iter().filter(|&&(_, c)| c == max);
        let (kind, _) = *leaders.next()?;
        if leaders.next().is_some() {
            None
        } else {
            Some(kind)
        }
    }
}

impl<'a> Extend<&'a SentimentResult> for SentimentTally {
    fn extend<I: IntoIterator<Item = &'a SentimentResult>>(&mut self, iter: I) {
        for result in iter {
            self.push(result);
        }
    }
}

impl Extend<SentimentResult> for SentimentTally {
    fn extend<I: IntoIterator<Item = SentimentResult>>(&mut self, iter: I) {
        for result in iter {
            self.push(&result);
        }
    }
}

impl<'a> FromIterator<&'a SentimentResult> for SentimentTally {
    fn from_iter<I: IntoIterator<Item = &'a SentimentResult>>(iter: I) -> Self {
        let mut tally = Self::new();
        tally.extend(iter);
        tally
    }
}

impl FromIterator<SentimentResult> for SentimentTally {
    fn from_iter<I: IntoIterator<Item = SentimentResult>>(iter: I) -> Self {
        let mut tally = Self::new();
        tally.extend(iter);
        tally
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(kind: SentimentType, score: f64) -> SentimentResult {
        SentimentResult::new(kind, score, 0.5)
    }

    #[test]
    fn test_push_and_counts() {
        let mut tally = SentimentTally::new();
        assert!(tally.is_empty());
        tally.push(&result(SentimentType::Positive, 1.0));
        tally.push(&result(SentimentType::Negative, -0.5));
        tally.push(&result(SentimentType::Negative, -1.0));

        assert_eq!(tally.len(), 3);
        assert_eq!(tally.count(SentimentType::Negative), 2);
        assert_eq!(tally.count(SentimentType::Neutral), 0);
        assert_eq!(tally.average_score(), -0.5 / 3.0);
    }

    #[test]
    fn test_streaming_matches_batch() {
        let results = [
            result(SentimentType::Positive, 1.0),
            result(SentimentType::Neutral, 0.0),
            result(SentimentType::Positive, 0.5),
            result(SentimentType::Negative, -0.25),
        ];
        let mut streamed = SentimentTally::new();
        for r in &results {
            streamed.push(r);
        }
        assert_eq!(streamed.finish(), crate::summarizer::summarize(&results));
    }

    #[test]
    fn test_merge_equals_single_pass() {
        let results = [
            result(SentimentType::Positive, 1.0),
            result(SentimentType::Neutral, 0.0),
            result(SentimentType::Negative, -1.0),
            result(SentimentType::Positive, 0.5),
        ];
        let whole: SentimentTally = results.iter().collect();
        let left: SentimentTally = results[..2].iter().collect();
        let right: SentimentTally = results[2..].iter().copied().collect();
        assert_eq!(left.merge(right), whole);
    }

    #[test]
    fn test_empty_finish() {
        assert_eq!(SentimentTally::new().finish(), SentimentSummary::empty());
        assert_eq!(
            SentimentTally::new().finish_with(SummaryMode::Corrected, &Thresholds::default()),
            SentimentSummary::empty()
        );
    }

    #[test]
    fn test_largest_remainder_single_bucket() {
        let tally: SentimentTally = [result(SentimentType::Neutral, 0.0)].into_iter().collect();
        let d = tally.largest_remainder_percentages();
        assert_eq!((d.positive, d.neutral, d.negative), (0, 100, 0));
    }

    #[test]
    fn test_largest_remainder_prefers_biggest_fraction() {
        // 1/6 = 16.67, 2/6 = 33.33, 3/6 = 50
        let mut tally = SentimentTally::new();
        tally.push(&result(SentimentType::Positive, 1.0));
        tally.extend([result(SentimentType::Neutral, 0.0); 2]);
        tally.extend([result(SentimentType::Negative, -1.0); 3]);
        let d = tally.largest_remainder_percentages();
        assert_eq!((d.positive, d.neutral, d.negative), (17, 33, 50));
    }

    #[test]
    fn test_plurality_tie() {
        let tally: SentimentTally = [
            result(SentimentType::Positive, 1.0),
            result(SentimentType::Neutral, 0.0),
        ]
        .into_iter()
        .collect();
        assert_eq!(tally.plurality(), None);

        let tally = tally.merge([result(SentimentType::Neutral, 0.0)].into_iter().collect());
        assert_eq!(tally.plurality(), Some(SentimentType::Neutral));
    }
}
