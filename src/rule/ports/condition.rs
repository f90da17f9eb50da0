//! Condition port for rule evaluation.
//!
//! A condition is one pass/fail check contributing to a rule's overall
//! result. Conditions are strategy objects: immutable after construction,
//! evaluated against a per-call context, and reporting their outcome as a
//! [`Verdict`] value rather than by mutating shared state.

use serde_json::Value;

#[cfg(test)]
use mockall::automock;

/// One evaluation's view of the values under validation.
///
/// Either side may be absent: a rule validating a fresh insert has no
/// previous value, and a host may invoke a rule with no value at all.
#[derive(Debug, Clone, Copy)]
pub struct RuleContext<'a> {
    previous: Option<&'a Value>,
    current: Option<&'a Value>,
}

impl<'a> RuleContext<'a> {
    /// Creates a context from the value being replaced and the value being
    /// written.
    #[must_use]
    pub const fn new(previous: Option<&'a Value>, current: Option<&'a Value>) -> Self {
        Self { previous, current }
    }

    /// The value being replaced, if any.
    #[must_use]
    pub const fn previous(&self) -> Option<&'a Value> {
        self.previous
    }

    /// The value being written, if any.
    #[must_use]
    pub const fn current(&self) -> Option<&'a Value> {
        self.current
    }
}

/// Outcome of one condition evaluation: a pass/fail flag plus zero or more
/// diagnostic fragments explaining a failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    passed: bool,
    messages: Vec<String>,
}

impl Verdict {
    /// A passing verdict. Carries no messages.
    #[must_use]
    pub const fn pass() -> Self {
        Self {
            passed: true,
            messages: Vec::new(),
        }
    }

    /// A failing verdict with one diagnostic fragment.
    #[must_use]
    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            passed: false,
            messages: vec![message.into()],
        }
    }

    /// A failing verdict with several diagnostic fragments, appended in
    /// order.
    #[must_use]
    pub const fn fail_all(messages: Vec<String>) -> Self {
        Self {
            passed: false,
            messages,
        }
    }

    /// A failing verdict with no diagnostic at all.
    ///
    /// Some conditions fail silently; this constructor makes that silence
    /// explicit at the call site.
    #[must_use]
    pub const fn fail_silent() -> Self {
        Self {
            passed: false,
            messages: Vec::new(),
        }
    }

    /// Returns `true` if the condition passed.
    #[must_use]
    pub const fn passed(&self) -> bool {
        self.passed
    }

    /// The diagnostic fragments carried by this verdict.
    #[must_use]
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Consumes the verdict, yielding its diagnostic fragments.
    #[must_use]
    pub fn into_messages(self) -> Vec<String> {
        self.messages
    }
}

/// Port for a single pass/fail check within a rule.
///
/// # Implementation Notes
///
/// Implementations should:
/// - Be immutable after construction and safe to share (`Send + Sync`)
/// - Treat input values as untrusted: never panic on unexpected types
/// - Report failure reasons through the returned [`Verdict`], not by
///   side effects
#[cfg_attr(test, automock)]
pub trait Condition: Send + Sync {
    /// Evaluates this condition against the per-call context.
    fn evaluate<'a>(&self, context: &RuleContext<'a>) -> Verdict;
}
