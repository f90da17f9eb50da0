//! Error types for rule configuration.
//!
//! Validation failure is never an error: it is the `false` result of
//! `is_valid` plus an optional message. Configuration is trusted, so the
//! only fallible seam is compiling a pattern string. Uses `thiserror` for
//! typed variants that can be inspected by callers.

use thiserror::Error;

/// Errors raised while configuring a rule.
#[derive(Debug, Error)]
pub enum RuleError {
    /// A pattern string failed to compile.
    #[error("invalid pattern '{pattern}': {source}")]
    InvalidPattern {
        /// The pattern that failed to compile.
        pattern: String,
        /// The underlying compilation error.
        #[source]
        source: Box<regex::Error>,
    },
}

impl RuleError {
    /// Creates an invalid-pattern error.
    #[must_use]
    pub fn invalid_pattern(pattern: impl Into<String>, source: regex::Error) -> Self {
        Self::InvalidPattern {
            pattern: pattern.into(),
            source: Box::new(source),
        }
    }
}
