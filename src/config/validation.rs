//! Validation engine for sentiment specifications.
//!
//! The engine runs all registered [`ValidationRule`]s against a
//! [`SentimentSpec`] and collects every diagnostic into a
//! [`ValidationReport`]. It never stops at the first error, so callers see
//! all problems at once.
//!
//! # Quick start
//!
//! ```rust
//! use review_sentiment::config::{SentimentSpec, ValidationEngine};
//!
//! let spec = SentimentSpec::from_json(r#"{ "v": 1 }"#).unwrap();
//! let report = ValidationEngine::with_defaults().validate(&spec);
//! for err in report.errors() {
//!     eprintln!("{err}");
//! }
//! assert!(report.is_valid());
//! ```

use std::collections::HashMap;

use serde::Serialize;

use super::errors::{ErrorCode, SpecError};
use super::spec::{SentimentSpec, SPEC_VERSION};

// ─── Severity ───────────────────────────────────────────────────────────────

/// Whether a diagnostic is a hard error or a soft warning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Error,
    Warning,
}

// ─── Diagnostic ─────────────────────────────────────────────────────────────

/// A single validation finding.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationDiagnostic {
    pub severity: Severity,
    #[serde(flatten)]
    pub error: SpecError,
}

impl ValidationDiagnostic {
    pub fn error(err: SpecError) -> Self {
        Self {
            severity: Severity::Error,
            error: err,
        }
    }

    pub fn warning(err: SpecError) -> Self {
        Self {
            severity: Severity::Warning,
            error: err,
        }
    }
}

// ─── Report ─────────────────────────────────────────────────────────────────

/// Collected diagnostics from running all validation rules.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ValidationReport {
    pub diagnostics: Vec<ValidationDiagnostic>,
}

impl ValidationReport {
    /// Iterate over error-severity diagnostics.
    pub fn errors(&self) -> impl Iterator<Item = &SpecError> {
        self.with_severity(Severity::Error)
    }

    /// Iterate over warning-severity diagnostics.
    pub fn warnings(&self) -> impl Iterator<Item = &SpecError> {
        self.with_severity(Severity::Warning)
    }

    /// Returns `true` if any diagnostic is an error.
    pub fn has_errors(&self) -> bool {
        self.errors().next().is_some()
    }

    /// Returns `true` if there are no errors (warnings are acceptable).
    pub fn is_valid(&self) -> bool {
        !self.has_errors()
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    fn with_severity(&self, severity: Severity) -> impl Iterator<Item = &SpecError> {
        self.diagnostics
            .iter()
            .filter(move |d| d.severity == severity)
            .map(|d| &d.error)
    }
}

// ─── Rule trait ─────────────────────────────────────────────────────────────

/// A single validation rule that inspects a [`SentimentSpec`] and returns
/// zero or more diagnostics.
///
/// Rules are stateless and `Send + Sync` so one engine can be shared across
/// threads.
pub trait ValidationRule: Send + Sync {
    /// Short, stable identifier for this rule (e.g., `"thresholds"`).
    fn name(&self) -> &str;

    /// Inspect `spec` and return any findings.
    fn validate(&self, spec: &SentimentSpec) -> Vec<ValidationDiagnostic>;
}

// ─── Engine ─────────────────────────────────────────────────────────────────

/// Runs a set of [`ValidationRule`]s against a [`SentimentSpec`].
pub struct ValidationEngine {
    rules: Vec<Box<dyn ValidationRule>>,
}

impl ValidationEngine {
    /// Create an empty engine with no rules.
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Create an engine pre-loaded with the default rule set.
    pub fn with_defaults() -> Self {
        let mut engine = Self::new();
        engine.add_rule(Box::new(VersionRule));
        engine.add_rule(Box::new(ThresholdsRule));
        engine.add_rule(Box::new(RatingBlendRule));
        engine.add_rule(Box::new(ConfidenceRule));
        engine.add_rule(Box::new(LexiconEntriesRule));
        engine.add_rule(Box::new(UnknownFieldsRule));
        engine
    }

    /// Register an additional rule.
    pub fn add_rule(&mut self, rule: Box<dyn ValidationRule>) {
        self.rules.push(rule);
    }

    /// Run all rules against `spec` and return the collected report.
    pub fn validate(&self, spec: &SentimentSpec) -> ValidationReport {
        let mut report = ValidationReport::default();
        for rule in &self.rules {
            let found = rule.validate(spec);
            #[cfg(feature = "tracing")]
            tracing::debug!(rule = rule.name(), findings = found.len(), "validation rule ran");
            report.diagnostics.extend(found);
        }
        report
    }
}

impl Default for ValidationEngine {
    fn default() -> Self {
        Self::with_defaults()
    }
}

fn in_unit_range(value: f64) -> bool {
    (0.0..=1.0).contains(&value)
}

// ═══════════════════════════════════════════════════════════════════════════
//  Concrete rules
// ═══════════════════════════════════════════════════════════════════════════

// ─── 1. version ─────────────────────────────────────────────────────────────

struct VersionRule;

impl ValidationRule for VersionRule {
    fn name(&self) -> &str {
        "version"
    }

    fn validate(&self, spec: &SentimentSpec) -> Vec<ValidationDiagnostic> {
        if spec.v == SPEC_VERSION {
            return vec![];
        }
        vec![ValidationDiagnostic::error(
            SpecError::new(
                ErrorCode::UnsupportedVersion,
                "/v",
                format!("unsupported spec version {}", spec.v),
            )
            .with_hint(format!("Set \"v\" to {SPEC_VERSION}")),
        )]
    }
}

// ─── 2. thresholds must be ordered and inside [-1, 1] ───────────────────────

struct ThresholdsRule;

impl ValidationRule for ThresholdsRule {
    fn name(&self) -> &str {
        "thresholds"
    }

    fn validate(&self, spec: &SentimentSpec) -> Vec<ValidationDiagnostic> {
        let Some(t) = spec.thresholds else {
            return vec![];
        };
        let mut out = Vec::new();

        for (field, value) in [("positive", t.positive), ("negative", t.negative)] {
            if !(-1.0..=1.0).contains(&value) {
                out.push(ValidationDiagnostic::error(
                    SpecError::new(
                        ErrorCode::InvalidThresholds,
                        format!("/thresholds/{field}"),
                        format!("{field} threshold {value} is outside [-1, 1]"),
                    )
                    .with_hint("Scores never leave [-1, 1]; pick a cut-off inside that range"),
                ));
            }
        }

        if t.negative > t.positive {
            out.push(ValidationDiagnostic::error(
                SpecError::new(
                    ErrorCode::InvalidThresholds,
                    "/thresholds",
                    format!(
                        "negative threshold {} is above positive threshold {}",
                        t.negative, t.positive
                    ),
                )
                .with_hint("Swap the values so that negative <= positive"),
            ));
        }

        out
    }
}

// ─── 3. rating blend weights and floor ──────────────────────────────────────

struct RatingBlendRule;

impl ValidationRule for RatingBlendRule {
    fn name(&self) -> &str {
        "rating_blend"
    }

    fn validate(&self, spec: &SentimentSpec) -> Vec<ValidationDiagnostic> {
        let mut out = Vec::new();
        let rating = &spec.rating;

        let checks: &[(&str, Option<f64>)] = &[
            ("text_weight", rating.text_weight),
            ("rating_weight", rating.rating_weight),
        ];
        for &(field, value) in checks {
            if let Some(value) = value.filter(|v| !in_unit_range(*v)) {
                out.push(ValidationDiagnostic::error(
                    SpecError::new(
                        ErrorCode::InvalidWeight,
                        format!("/rating/{field}"),
                        format!("{field} {value} is outside [0, 1]"),
                    )
                    .with_hint("Weights are fractions of the blended score"),
                ));
            }
        }

        if let Some(floor) = rating.confidence_floor.filter(|v| !in_unit_range(*v)) {
            out.push(ValidationDiagnostic::error(SpecError::new(
                ErrorCode::InvalidConfidence,
                "/rating/confidence_floor",
                format!("confidence_floor {floor} is outside [0, 1]"),
            )));
        }

        let config = spec.classifier_config();
        let sum = config.text_weight + config.rating_weight;
        if out.is_empty() && (sum - 1.0).abs() > 1e-9 {
            out.push(ValidationDiagnostic::warning(
                SpecError::new(
                    ErrorCode::InvalidWeight,
                    "/rating",
                    format!("text_weight + rating_weight is {sum}, not 1"),
                )
                .with_hint("Blended scores may leave [-1, 1] unless the weights sum to 1"),
            ));
        }

        out
    }
}

// ─── 4. confidence constants ────────────────────────────────────────────────

struct ConfidenceRule;

impl ValidationRule for ConfidenceRule {
    fn name(&self) -> &str {
        "confidence"
    }

    fn validate(&self, spec: &SentimentSpec) -> Vec<ValidationDiagnostic> {
        let mut out = Vec::new();
        let c = &spec.confidence;

        let unit_checks: &[(&str, Option<f64>)] = &[
            ("baseline", c.baseline),
            ("cap", c.cap),
            ("uninformative", c.uninformative),
        ];
        for &(field, value) in unit_checks {
            if let Some(value) = value.filter(|v| !in_unit_range(*v)) {
                out.push(ValidationDiagnostic::error(SpecError::new(
                    ErrorCode::InvalidConfidence,
                    format!("/confidence/{field}"),
                    format!("{field} {value} is outside [0, 1]"),
                )));
            }
        }

        let non_negative: &[(&str, Option<f64>)] = &[
            ("density_weight", c.density_weight),
            ("intensifier_bonus", c.intensifier_bonus),
        ];
        for &(field, value) in non_negative {
            if let Some(value) = value.filter(|v| *v < 0.0 || v.is_nan()) {
                out.push(ValidationDiagnostic::error(SpecError::new(
                    ErrorCode::InvalidConfidence,
                    format!("/confidence/{field}"),
                    format!("{field} {value} must be non-negative"),
                )));
            }
        }

        let config = spec.classifier_config();
        if config.confidence_baseline > config.confidence_cap {
            out.push(ValidationDiagnostic::error(
                SpecError::new(
                    ErrorCode::InvalidConfidence,
                    "/confidence",
                    format!(
                        "baseline {} is above cap {}",
                        config.confidence_baseline, config.confidence_cap
                    ),
                )
                .with_hint("The cap must be at least the baseline"),
            ));
        }

        out
    }
}

// ─── 5. lexicon entries ─────────────────────────────────────────────────────

struct LexiconEntriesRule;

impl ValidationRule for LexiconEntriesRule {
    fn name(&self) -> &str {
        "lexicon_entries"
    }

    fn validate(&self, spec: &SentimentSpec) -> Vec<ValidationDiagnostic> {
        let lexicon = &spec.lexicon;
        let lists: [(&str, &[String]); 5] = [
            ("positive", &lexicon.positive),
            ("negative", &lexicon.negative),
            ("intensifiers", &lexicon.intensifiers),
            ("negations", &lexicon.negations),
            ("remove", &lexicon.remove),
        ];

        let mut out = Vec::new();
        for (field, entries) in lists {
            for (idx, entry) in entries.iter().enumerate() {
                let path = format!("/lexicon/{field}/{idx}");
                if entry.trim().is_empty() {
                    out.push(ValidationDiagnostic::error(
                        SpecError::new(
                            ErrorCode::InvalidLexiconEntry,
                            path,
                            "lexicon entries must not be empty",
                        )
                        .with_hint("Remove the empty string"),
                    ));
                } else if entry.chars().any(char::is_whitespace) {
                    out.push(ValidationDiagnostic::warning(
                        SpecError::new(
                            ErrorCode::InvalidLexiconEntry,
                            path,
                            format!("\"{entry}\" contains whitespace and can never match a token"),
                        )
                        .with_hint("Text is split on whitespace; use single words"),
                    ));
                } else if entry.to_lowercase() != *entry {
                    out.push(ValidationDiagnostic::warning(
                        SpecError::new(
                            ErrorCode::InvalidLexiconEntry,
                            path,
                            format!("\"{entry}\" is not lowercase and will be lowercased"),
                        )
                        .with_hint("Write lexicon entries in lowercase"),
                    ));
                }
            }
        }
        out
    }
}

// ─── 6. Unknown fields (strict → error, non-strict → warning) ──────────────

struct UnknownFieldsRule;

impl UnknownFieldsRule {
    /// Collect unknown-field diagnostics at the given JSON pointer `path`
    /// from a map of extra fields captured by `#[serde(flatten)]`.
    fn check_unknowns(
        path: &str,
        unknowns: &HashMap<String, serde_json::Value>,
        strict: bool,
    ) -> Vec<ValidationDiagnostic> {
        let mut keys: Vec<&String> = unknowns.keys().collect();
        keys.sort();
        keys.into_iter()
            .map(|key| {
                let diag_fn = if strict {
                    ValidationDiagnostic::error
                } else {
                    ValidationDiagnostic::warning
                };
                diag_fn(
                    SpecError::new(
                        ErrorCode::UnknownField,
                        format!("{path}/{key}"),
                        format!("unrecognized field \"{key}\""),
                    )
                    .with_hint("Check spelling or remove this field"),
                )
            })
            .collect()
    }
}

impl ValidationRule for UnknownFieldsRule {
    fn name(&self) -> &str {
        "unknown_fields"
    }

    fn validate(&self, spec: &SentimentSpec) -> Vec<ValidationDiagnostic> {
        let sections: [(&str, &HashMap<String, serde_json::Value>); 5] = [
            ("", &spec.unknown_fields),
            ("/lexicon", &spec.lexicon.unknown_fields),
            ("/rating", &spec.rating.unknown_fields),
            ("/confidence", &spec.confidence.unknown_fields),
            ("/summary", &spec.summary.unknown_fields),
        ];
        sections
            .into_iter()
            .flat_map(|(path, unknowns)| Self::check_unknowns(path, unknowns, spec.strict))
            .collect()
    }
}

// ═══════════════════════════════════════════════════════════════════════════
//  Tests
// ═══════════════════════════════════════════════════════════════════════════
