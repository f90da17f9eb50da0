//! Length-bounds condition.

use crate::rule::domain::{length_of, render};
use crate::rule::ports::condition::{Condition, RuleContext, Verdict};

/// Checks that the current value's size lies within `min..=max`.
///
/// Both bound branches are evaluated before the verdict is produced, so a
/// verdict can carry two messages if the underlying size concept were ever
/// non-monotonic; for a single size a value trips at most one bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LengthBounds {
    min: usize,
    max: usize,
}

impl LengthBounds {
    /// Creates a length-bounds check.
    ///
    /// Inverted bounds (`min > max`) are not rejected; such a check simply
    /// never passes.
    #[must_use]
    pub const fn new(min: usize, max: usize) -> Self {
        Self { min, max }
    }
}

impl Condition for LengthBounds {
    fn evaluate(&self, context: &RuleContext<'_>) -> Verdict {
        let size = length_of(context.current());
        let mut messages = Vec::new();

        if size < self.min {
            messages.push(format!(
                "{} is shorter than {}",
                render(context.current()),
                self.min
            ));
        }
        if size > self.max {
            messages.push(format!(
                "{} is longer than {}",
                render(context.current()),
                self.max
            ));
        }

        if messages.is_empty() {
            Verdict::pass()
        } else {
            Verdict::fail_all(messages)
        }
    }
}
