//! Shared fixtures and helpers for rule tests.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use rstest::fixture;
use serde_json::json;

use crate::rule::domain::{Transition, TypeShape};
use crate::rule::engine::ValidationRule;
use crate::rule::ports::condition::{Condition, RuleContext, Verdict};

#[fixture]
pub fn length_rule() -> ValidationRule {
    ValidationRule::length_bounds(5, 100)
}

#[fixture]
pub fn email_rule() -> ValidationRule {
    ValidationRule::email()
}

#[fixture]
pub fn required_rule() -> ValidationRule {
    ValidationRule::required()
}

#[fixture]
pub fn status_rule() -> ValidationRule {
    ValidationRule::allowed_transitions(vec![Transition::new(
        "open",
        vec![json!("scheduled"), json!("canceled"), json!("closed")],
    )])
}

/// The document shape exercised throughout the shape tests.
#[fixture]
pub fn document_shape() -> TypeShape {
    TypeShape::object([
        ("_id", TypeShape::string()),
        ("name", TypeShape::string()),
        ("count", TypeShape::number()),
        ("person", TypeShape::object([("plop", TypeShape::string())])),
    ])
}

/// A condition with a fixed outcome that counts how often it is evaluated.
pub struct CountingCondition {
    outcome: bool,
    calls: Arc<AtomicUsize>,
}

impl CountingCondition {
    pub fn new(outcome: bool) -> (Self, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        (
            Self {
                outcome,
                calls: Arc::clone(&calls),
            },
            calls,
        )
    }
}

impl Condition for CountingCondition {
    fn evaluate(&self, _context: &RuleContext<'_>) -> Verdict {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.outcome {
            Verdict::pass()
        } else {
            Verdict::fail_silent()
        }
    }
}
