//! Email-format condition.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::rule::conditions::PatternMatch;
use crate::rule::domain::render;
use crate::rule::ports::condition::{Condition, RuleContext, Verdict};

/// Case-insensitive RFC-822-ish address pattern: local part, domain with a
/// recognised TLD list or a dotted-quad IP, optional port suffix.
const EMAIL_PATTERN: &str = r"(?i)^[-a-z0-9~!$%^&*_=+}{'?]+(\.[-a-z0-9~!$%^&*_=+}{'?]+)*@([a-z0-9_][-a-z0-9_]*(\.[-a-z0-9_]+)*\.(aero|arpa|biz|com|coop|edu|gov|info|int|mil|museum|name|net|org|pro|travel|mobi|[a-z][a-z])|([0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}))(:[0-9]{1,5})?$";

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(compile_email_pattern);

#[expect(
    clippy::expect_used,
    reason = "the pattern is a compile-time constant exercised by tests"
)]
fn compile_email_pattern() -> Regex {
    Regex::new(EMAIL_PATTERN).expect("email pattern should compile")
}

/// Checks that the current value is a well-formed email address.
///
/// Composes a [`PatternMatch`] over a fixed pattern, compiled once
/// process-wide. Absent and non-string values are invalid.
#[derive(Debug, Clone)]
pub struct EmailFormat {
    delegate: PatternMatch,
}

impl EmailFormat {
    /// Creates an email-format check.
    #[must_use]
    pub fn new() -> Self {
        Self {
            delegate: PatternMatch::new(EMAIL_REGEX.clone()),
        }
    }
}

impl Default for EmailFormat {
    fn default() -> Self {
        Self::new()
    }
}

impl Condition for EmailFormat {
    fn evaluate(&self, context: &RuleContext<'_>) -> Verdict {
        if self.delegate.matches(context.current()) {
            Verdict::pass()
        } else {
            Verdict::fail(format!(
                "{} is not a valid email address",
                render(context.current())
            ))
        }
    }
}
