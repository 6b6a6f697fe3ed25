//! Sentiment lexicon
//!
//! Word fragments tagged positive or negative, plus the closed sets of
//! modifier words (intensifiers and negations) that alter the sentiment word
//! directly after them.
//!
//! Fragments match by substring, so `"loved"` and `"great!"` hit `"love"` and
//! `"great"`. Modifiers match by exact token equality.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

const POSITIVE_TERMS: &[&str] = &[
    "excellent", "amazing", "awesome", "fantastic", "great", "love", "perfect", "wonderful",
    "best", "outstanding", "brilliant", "superb", "impressive", "recommend", "helpful", "useful",
    "easy", "intuitive", "smooth", "fast", "reliable", "stable", "worth", "enjoy", "satisfied",
    "happy", "good", "nice", "cool", "fun", "beautiful", "clean", "simple", "efficient",
];

const NEGATIVE_TERMS: &[&str] = &[
    "terrible", "awful", "horrible", "worst", "hate", "useless", "broken", "buggy", "crash",
    "slow", "laggy", "disappointing", "frustrated", "annoying", "bad", "poor", "sucks", "waste",
    "trash", "garbage", "scam", "fraud", "failed", "error", "glitch", "freeze", "stuck",
    "confusing", "complicated", "expensive", "overpriced", "misleading", "fake", "spam",
];

const INTENSIFIERS: &[&str] = &["very", "extremely", "really", "absolutely", "totally", "completely"];

const NEGATIONS: &[&str] = &[
    "not", "never", "no", "none", "don't", "doesn't", "didn't", "won't", "wouldn't", "can't",
    "couldn't",
];

/// Which side of the lexicon a fragment belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Polarity {
    Positive,
    Negative,
}

impl Polarity {
    /// The opposite polarity
    pub fn flipped(self) -> Self {
        match self {
            Self::Positive => Self::Negative,
            Self::Negative => Self::Positive,
        }
    }
}

/// How the token before a sentiment word modifies it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Modifier {
    None,
    Intensifier,
    Negation,
}

/// Fragment lists and modifier sets used by the classifier
#[derive(Debug, Clone)]
pub struct Lexicon {
    /// Positive fragments (lowercase), in insertion order
    positive: Vec<String>,
    /// Negative fragments (lowercase), in insertion order
    negative: Vec<String>,
    intensifiers: FxHashSet<String>,
    negations: FxHashSet<String>,
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::english()
    }
}

impl Lexicon {
    /// The built-in English app-review lexicon
    pub fn english() -> Self {
        Self {
            positive: to_owned_list(POSITIVE_TERMS),
            negative: to_owned_list(NEGATIVE_TERMS),
            intensifiers: to_owned_set(INTENSIFIERS),
            negations: to_owned_set(NEGATIONS),
        }
    }

    /// A lexicon with no entries at all (everything classifies as uninformative)
    pub fn empty() -> Self {
        Self {
            positive: Vec::new(),
            negative: Vec::new(),
            intensifiers: FxHashSet::default(),
            negations: FxHashSet::default(),
        }
    }

    /// Create a lexicon from custom lists
    pub fn from_lists(
        positive: &[&str],
        negative: &[&str],
        intensifiers: &[&str],
        negations: &[&str],
    ) -> Self {
        let mut lexicon = Self::empty();
        lexicon.add_terms(Polarity::Positive, positive);
        lexicon.add_terms(Polarity::Negative, negative);
        lexicon.add_intensifiers(intensifiers);
        lexicon.add_negations(negations);
        lexicon
    }

    /// Add sentiment fragments. Empty strings and duplicates are skipped.
    pub fn add_terms<S: AsRef<str>>(&mut self, polarity: Polarity, terms: &[S]) {
        let list = self.list_mut(polarity);
        for term in terms {
            let term = term.as_ref().to_lowercase();
            if !term.is_empty() && !list.contains(&term) {
                list.push(term);
            }
        }
    }

    /// Add intensifier words
    pub fn add_intensifiers<S: AsRef<str>>(&mut self, words: &[S]) {
        for word in words {
            self.intensifiers.insert(word.as_ref().to_lowercase());
        }
    }

    /// Add negation words
    pub fn add_negations<S: AsRef<str>>(&mut self, words: &[S]) {
        for word in words {
            self.negations.insert(word.as_ref().to_lowercase());
        }
    }

    /// Remove a word from every list and set it appears in
    pub fn remove<S: AsRef<str>>(&mut self, words: &[S]) {
        for word in words {
            let word = word.as_ref().to_lowercase();
            self.positive.retain(|t| *t != word);
            self.negative.retain(|t| *t != word);
            self.intensifiers.remove(&word);
            self.negations.remove(&word);
        }
    }

    /// First fragment of the given polarity contained in `token`
    pub fn find(&self, polarity: Polarity, token: &str) -> Option<&str> {
        if token.is_empty() {
            return None;
        }
        self.list(polarity)
            .iter()
            .find(|term| token.contains(term.as_str()))
            .map(String::as_str)
    }

    /// Whether `token` contains any fragment of the given polarity
    pub fn matches(&self, polarity: Polarity, token: &str) -> bool {
        self.find(polarity, token).is_some()
    }

    pub fn is_intensifier(&self, token: &str) -> bool {
        self.intensifiers.contains(token)
    }

    pub fn is_negation(&self, token: &str) -> bool {
        self.negations.contains(token)
    }

    /// Classify the token preceding a sentiment word.
    ///
    /// Negation wins if a word is registered as both.
    pub fn modifier(&self, prev: Option<&str>) -> Modifier {
        match prev {
            Some(word) if self.is_negation(word) => Modifier::Negation,
            Some(word) if self.is_intensifier(word) => Modifier::Intensifier,
            _ => Modifier::None,
        }
    }

    /// Fragments of the given polarity
    pub fn terms(&self, polarity: Polarity) -> &[String] {
        self.list(polarity)
    }

    /// Total number of entries across all lists and sets
    pub fn len(&self) -> usize {
        self.positive.len() + self.negative.len() + self.intensifiers.len() + self.negations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn list(&self, polarity: Polarity) -> &[String] {
        match polarity {
            Polarity::Positive => &self.positive,
            Polarity::Negative => &self.negative,
        }
    }

    fn list_mut(&mut self, polarity: Polarity) -> &mut Vec<String> {
        match polarity {
            Polarity::Positive => &mut self.positive,
            Polarity::Negative => &mut self.negative,
        }
    }
}

fn to_owned_list(words: &[&str]) -> Vec<String> {
    words.iter().map(|s| s.to_string()).collect()
}

fn to_owned_set(words: &[&str]) -> FxHashSet<String> {
    words.iter().map(|s| s.to_string()).collect()
}
