//! Theme extraction from lexicon hits
//!
//! A theme is a lexicon term that pushed reviews toward one polarity. Terms
//! are credited by the counter they actually fed, so `"not slow"` counts
//! `slow` as a positive theme.

use rustc_hash::FxHashMap;

use crate::classifier::TermHit;
use crate::nlp::lexicon::Polarity;

/// Frequency of contributing lexicon terms, per polarity
#[derive(Debug, Clone, Default)]
pub struct ThemeCounter {
    positive: FxHashMap<String, usize>,
    negative: FxHashMap<String, usize>,
}

impl ThemeCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record every hit of one review
    pub fn add_hits(&mut self, hits: &[TermHit]) {
        for hit in hits {
            *self
                .side_mut(hit.effective_polarity())
                .entry(hit.term.clone())
                .or_insert(0) += 1;
        }
    }

    /// Times `term` contributed to `polarity`
    pub fn count(&self, polarity: Polarity, term: &str) -> usize {
        self.side(polarity).get(term).copied().unwrap_or(0)
    }

    /// The `n` most frequent terms, ties broken alphabetically
    pub fn top(&self, polarity: Polarity, n: usize) -> Vec<String> {
        let mut ranked: Vec<(&String, usize)> =
            self.side(polarity).iter().map(|(t, &c)| (t, c)).collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        ranked.truncate(n);
        ranked.into_iter().map(|(t, _)| t.clone()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.positive.is_empty() && self.negative.is_empty()
    }

    fn side(&self, polarity: Polarity) -> &FxHashMap<String, usize> {
        match polarity {
            Polarity::Positive => &self.positive,
            Polarity::Negative => &self.negative,
        }
    }

    fn side_mut(&mut self, polarity: Polarity) -> &mut FxHashMap<String, usize> {
        match polarity {
            Polarity::Positive => &mut self.positive,
            Polarity::Negative => &mut self.negative,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hit(term: &str, polarity: Polarity, negated: bool) -> TermHit {
        TermHit {
            term: term.to_string(),
            polarity,
            negated,
        }
    }

    #[test]
    fn test_counts_by_effective_polarity() {
        let mut themes = ThemeCounter::new();
        themes.add_hits(&[
            hit("fast", Polarity::Positive, false),
            hit("slow", Polarity::Negative, true),
            hit("crash", Polarity::Negative, false),
        ]);

        assert_eq!(themes.count(Polarity::Positive, "fast"), 1);
        assert_eq!(themes.count(Polarity::Positive, "slow"), 1);
        assert_eq!(themes.count(Polarity::Negative, "slow"), 0);
        assert_eq!(themes.count(Polarity::Negative, "crash"), 1);
    }

    #[test]
    fn test_top_orders_by_frequency_then_name() {
        let mut themes = ThemeCounter::new();
        themes.add_hits(&[
            hit("love", Polarity::Positive, false),
            hit("easy", Polarity::Positive, false),
            hit("fast", Polarity::Positive, false),
        ]);
        themes.add_hits(&[hit("love", Polarity::Positive, false)]);

        assert_eq!(themes.top(Polarity::Positive, 2), vec!["love", "easy"]);
        assert_eq!(themes.top(Polarity::Positive, 10).len(), 3);
        assert!(themes.top(Polarity::Negative, 5).is_empty());
    }

    #[test]
    fn test_empty_counter() {
        let themes = ThemeCounter::new();
        assert!(themes.is_empty());
        assert_eq!(themes.count(Polarity::Positive, "love"), 0);
    }
}
