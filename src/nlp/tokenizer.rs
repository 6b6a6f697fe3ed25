//! Whitespace tokenizer
//!
//! Review text is lowercased and cut on runs of whitespace. No punctuation is
//! stripped, so `"great!"` stays a single token; lexicon matching is
//! substring-based to compensate.

/// Lowercased text plus its token boundaries
#[derive(Debug, Clone)]
pub struct TokenizedText {
    lowered: String,
    spans: Vec<(usize, usize)>,
}

impl TokenizedText {
    /// Tokenize `text`
    pub fn new(text: &str) -> Self {
        let lowered = text.to_lowercase();
        let spans = split_whitespace_runs(&lowered);
        Self { lowered, spans }
    }

    /// Number of tokens, including empty edge tokens
    pub fn len(&self) -> usize {
        self.spans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    /// Token at `idx`
    pub fn get(&self, idx: usize) -> Option<&str> {
        self.spans
            .get(idx)
            .map(|&(start, end)| &self.lowered[start..end])
    }

    /// Iterate over the tokens in order
    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.spans
            .iter()
            .map(move |&(start, end)| &self.lowered[start..end])
    }

    /// Collect the tokens into a vector of borrowed slices
    pub fn tokens(&self) -> Vec<&str> {
        self.iter().collect()
    }
}

/// Whether `c` separates tokens.
///
/// Unicode whitespace plus the byte-order mark U+FEFF, which shows up in
/// pasted and exported review text. NEL (U+0085) is not a separator.
pub fn is_separator(c: char) -> bool {
    match c {
        '\u{FEFF}' => true,
        '\u{0085}' => false,
        _ => c.is_whitespace(),
    }
}

/// True when `text` has no characters other than separators
pub fn is_blank(text: &str) -> bool {
    text.chars().all(is_separator)
}

/// Split on runs of whitespace (see [`is_separator`]).
///
/// Interior runs collapse into a single boundary. A leading or trailing run
/// produces one empty token at that edge, so `" a"` yields `["", "a"]` and
/// `"a "` yields `["a", ""]`. Empty input yields a single empty token.
pub fn split_whitespace_runs(text: &str) -> Vec<(usize, usize)> {
    let mut spans = Vec::new();
    let mut start = 0;
    let mut in_whitespace = false;

    for (i, c) in text.char_indices() {
        if is_separator(c) {
            if !in_whitespace {
                spans.push((start, i));
                in_whitespace = true;
            }
        } else if in_whitespace {
            start = i;
            in_whitespace = false;
        }
    }

    if in_whitespace {
        spans.push((text.len(), text.len()));
    } else {
        spans.push((start, text.len()));
    }

    spans
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(text: &str) -> Vec<String> {
        TokenizedText::new(text)
            .iter()
            .map(|s| s.to_string())
            .collect()
    }

    #[test]
    fn test_basic_split() {
        assert_eq!(tokens("This app is Great"), vec!["this", "app", "is", "great"]);
    }

    #[test]
    fn test_interior_runs_collapse() {
        assert_eq!(tokens("good \t\n  app"), vec!["good", "app"]);
    }

    #[test]
    fn test_edge_whitespace_yields_empty_tokens() {
        assert_eq!(tokens("  good"), vec!["", "good"]);
        assert_eq!(tokens("good  "), vec!["good", ""]);
        assert_eq!(tokens(" good "), vec!["", "good", ""]);
    }

    #[test]
    fn test_punctuation_is_kept() {
        assert_eq!(tokens("Great! Love it."), vec!["great!", "love", "it."]);
    }

    #[test]
    fn test_unicode_text() {
        let t = TokenizedText::new("Ünïcode  ÉCLAIR");
        assert_eq!(t.len(), 2);
        assert_eq!(t.get(0), Some("ünïcode"));
        assert_eq!(t.get(1), Some("éclair"));
        assert_eq!(t.get(2), None);
    }

    #[test]
    fn test_byte_order_mark_separates() {
        assert_eq!(tokens("good\u{FEFF}app"), vec!["good", "app"]);
        assert_eq!(tokens("\u{FEFF}great"), vec!["", "great"]);
        assert_eq!(tokens("nice \u{FEFF}\u{00A0} app"), vec!["nice", "app"]);
    }

    #[test]
    fn test_next_line_is_not_a_separator() {
        assert_eq!(tokens("good\u{0085}app"), vec!["good\u{0085}app"]);
    }

    #[test]
    fn test_is_blank() {
        assert!(is_blank(""));
        assert!(is_blank(" \t\r\n"));
        assert!(is_blank("\u{FEFF}"));
        assert!(is_blank("\u{3000}\u{FEFF} "));
        assert!(!is_blank("\u{0085}"));
        assert!(!is_blank(" a "));
    }
}
