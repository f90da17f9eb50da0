//! Required-presence condition.

use crate::rule::domain::PresencePolicy;
use crate::rule::ports::condition::{Condition, RuleContext, Verdict};

/// Checks that the current value is provided under a presence policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RequiredPresence {
    policy: PresencePolicy,
}

impl RequiredPresence {
    /// Creates a required-presence check with an explicit policy.
    #[must_use]
    pub const fn new(policy: PresencePolicy) -> Self {
        Self { policy }
    }
}

impl Condition for RequiredPresence {
    fn evaluate(&self, context: &RuleContext<'_>) -> Verdict {
        if self.policy.is_present(context.current()) {
            Verdict::pass()
        } else {
            Verdict::fail("A value is required and was not provided")
        }
    }
}
