//! Allowed-value-transition condition.

use serde_json::Value;

use crate::rule::domain::Transition;
use crate::rule::ports::condition::{Condition, RuleContext, Verdict};

static NULL: Value = Value::Null;

/// Checks that the previous-to-current change is an allowed transition.
///
/// The first entry whose `from` matches the previous value decides the
/// outcome. No entry matching the previous value (including when it is
/// absent) means the change is invalid. Fails silently, with no diagnostic
/// message.
#[derive(Debug, Clone, PartialEq)]
pub struct AllowedTransition {
    matches: Vec<Transition>,
}

impl AllowedTransition {
    /// Creates an allowed-transition check from an ordered transition
    /// list.
    #[must_use]
    pub const fn new(matches: Vec<Transition>) -> Self {
        Self { matches }
    }
}

impl Condition for AllowedTransition {
    fn evaluate(&self, context: &RuleContext<'_>) -> Verdict {
        let previous = context.previous().unwrap_or(&NULL);
        let current = context.current().unwrap_or(&NULL);

        let allowed = self
            .matches
            .iter()
            .find(|transition| transition.applies_from(previous))
            .is_some_and(|transition| transition.allows(current));

        if allowed {
            Verdict::pass()
        } else {
            Verdict::fail_silent()
        }
    }
}
