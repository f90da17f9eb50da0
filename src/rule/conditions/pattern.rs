//! Pattern-match condition.

use regex::Regex;
use serde_json::Value;

use crate::rule::error::RuleError;
use crate::rule::ports::condition::{Condition, RuleContext, Verdict};

/// Checks that the current value is a string matching a pattern.
///
/// Fails with no diagnostic message; hosts that want a message compose
/// this condition inside one that supplies it (as the email check does).
/// Absent and non-string values never match.
#[derive(Debug, Clone)]
pub struct PatternMatch {
    pattern: Regex,
}

impl PatternMatch {
    /// Creates a pattern check from a compiled pattern.
    #[must_use]
    pub const fn new(pattern: Regex) -> Self {
        Self { pattern }
    }

    /// Creates a pattern check by compiling a pattern string.
    ///
    /// # Errors
    ///
    /// Returns [`RuleError::InvalidPattern`] if the pattern fails to
    /// compile.
    pub fn from_pattern(pattern: &str) -> Result<Self, RuleError> {
        Regex::new(pattern)
            .map(Self::new)
            .map_err(|source| RuleError::invalid_pattern(pattern, source))
    }

    /// Returns `true` if the value is a string matching the pattern.
    pub(crate) fn matches(&self, value: Option<&Value>) -> bool {
        value
            .and_then(Value::as_str)
            .is_some_and(|text| self.pattern.is_match(text))
    }
}

impl Condition for PatternMatch {
    fn evaluate(&self, context: &RuleContext<'_>) -> Verdict {
        if self.matches(context.current()) {
            Verdict::pass()
        } else {
            Verdict::fail_silent()
        }
    }
}
