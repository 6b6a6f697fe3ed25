//! Configuration errors
//!
//! [`SpecError`] is a single structured finding (code, JSON pointer, message,
//! hint) carried by validation diagnostics. [`ConfigError`] is what loading
//! or building a spec returns.

use serde::Serialize;
use thiserror::Error;

use super::validation::ValidationReport;

/// A [`Result`](std::result::Result) alias using [`ConfigError`].
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Stable machine-readable category of a finding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    UnsupportedVersion,
    InvalidThresholds,
    InvalidWeight,
    InvalidConfidence,
    InvalidLexiconEntry,
    UnknownField,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::UnsupportedVersion => "unsupported_version",
            Self::InvalidThresholds => "invalid_thresholds",
            Self::InvalidWeight => "invalid_weight",
            Self::InvalidConfidence => "invalid_confidence",
            Self::InvalidLexiconEntry => "invalid_lexicon_entry",
            Self::UnknownField => "unknown_field",
        }
    }
}

/// A structured problem found in a [`SentimentSpec`](super::spec::SentimentSpec)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpecError {
    pub code: ErrorCode,
    /// JSON pointer to the offending field
    pub path: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl SpecError {
    pub fn new(code: ErrorCode, path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code,
            path: path.into(),
            message: message.into(),
            hint: None,
        }
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

impl std::fmt::Display for SpecError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}: {}", self.code.as_str(), self.path, self.message)?;
        if let Some(hint) = &self.hint {
            write!(f, " (hint: {hint})")?;
        }
        Ok(())
    }
}

/// Failure to load or build a spec
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ConfigError {
    /// Malformed JSON or a field of the wrong type
    #[error("failed to parse sentiment spec: {0}")]
    Parse(#[from] serde_json::Error),

    /// The spec parsed but failed validation
    #[error("sentiment spec is invalid: {}", first_error(.0))]
    Invalid(ValidationReport),
}

fn first_error(report: &ValidationReport) -> String {
    let count = report.errors().count();
    match report.errors().next() {
        Some(err) if count > 1 => format!("{err} (and {} more)", count - 1),
        Some(err) => err.to_string(),
        None => "no errors reported".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spec_error_display() {
        let err = SpecError::new(ErrorCode::InvalidWeight, "/rating/text_weight", "out of range")
            .with_hint("use a value in [0, 1]");
        assert_eq!(
            err.to_string(),
            "[invalid_weight] /rating/text_weight: out of range (hint: use a value in [0, 1])"
        );
    }

    #[test]
    fn test_spec_error_serializes_without_empty_hint() {
        let err = SpecError::new(ErrorCode::UnknownField, "/bogus", "unrecognized field");
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["code"], "unknown_field");
        assert!(json.get("hint").is_none());
    }

    #[test]
    fn test_parse_error_converts() {
        let err: ConfigError = serde_json::from_str::<serde_json::Value>("{")
            .unwrap_err()
            .into();
        assert!(matches!(err, ConfigError::Parse(_)));
        assert!(err.to_string().starts_with("failed to parse sentiment spec"));
    }
}
