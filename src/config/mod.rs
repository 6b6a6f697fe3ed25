//! JSON configuration for the classifier
//!
//! A [`SentimentSpec`](spec::SentimentSpec) describes lexicon edits and
//! scoring constants. The [`ValidationEngine`](validation::ValidationEngine)
//! checks it before [`SentimentSpec::build`](spec::SentimentSpec::build)
//! turns it into a classifier.

pub mod errors;
pub mod spec;
pub mod validation;

pub use errors::{ConfigError, ErrorCode, Result, SpecError};
pub use spec::SentimentSpec;
pub use validation::{Severity, ValidationDiagnostic, ValidationEngine, ValidationReport};
