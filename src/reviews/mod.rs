//! App-store review analysis
//!
//! Classifies review collections in parallel and rolls them up into the
//! per-app [`ReviewAnalysis`] shown on the insights dashboard.

pub mod analysis;
pub mod themes;

use serde::{Deserialize, Serialize};

use crate::nlp::tokenizer::is_blank;

pub use analysis::{
    analyze_reviews, analyze_reviews_with_mode, classify_batch, classify_batch_with_ratings,
    ReviewAnalysis, TOP_THEMES,
};
pub use themes::ThemeCounter;

/// Store a review was collected from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Ios,
    Android,
}

/// A single store review
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: String,
    pub app_id: String,
    pub platform: Platform,
    /// Star rating, nominally 1-5
    pub rating: f64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub author: String,
    /// Helpful votes
    #[serde(default)]
    pub helpful: u32,
    #[serde(default)]
    pub version: Option<String>,
}

impl Review {
    /// Text fed to the classifier: title and body joined by a space
    pub fn text(&self) -> String {
        if is_blank(&self.title) {
            self.content.clone()
        } else {
            format!("{} {}", self.title, self.content)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_review_deserializes_camel_case() {
        let json = r#"{
            "id": "r1",
            "appId": "com.example",
            "platform": "ios",
            "rating": 4,
            "title": "Nice",
            "content": "Works well",
            "author": "sam",
            "helpful": 3
        }"#;
        let review: Review = serde_json::from_str(json).unwrap();
        assert_eq!(review.app_id, "com.example");
        assert_eq!(review.platform, Platform::Ios);
        assert_eq!(review.rating, 4.0);
        assert_eq!(review.version, None);
        assert_eq!(review.text(), "Nice Works well");
    }

    #[test]
    fn test_review_text_without_title() {
        let json = r#"{"id":"r2","appId":"a","platform":"android","rating":2,"content":"meh"}"#;
        let review: Review = serde_json::from_str(json).unwrap();
        assert_eq!(review.text(), "meh");
        assert_eq!(review.helpful, 0);
    }

    #[test]
    fn test_review_text_ignores_bom_title() {
        let json = r#"{"id":"r3","appId":"a","platform":"ios","rating":4,"title":"\ufeff","content":"solid"}"#;
        let review: Review = serde_json::from_str(json).unwrap();
        assert_eq!(review.text(), "solid");
    }
}
