//! The rule engine: ordered conditions, short-circuit evaluation, and
//! call-scoped message accumulation.

use std::fmt;

use regex::Regex;
use serde_json::Value;

use crate::rule::conditions::{
    AllowedTransition, EmailFormat, LengthBounds, PatternMatch, RequiredPresence, ShapeCheck,
};
use crate::rule::domain::{PresencePolicy, Transition, TypeShape};
use crate::rule::error::RuleError;
use crate::rule::ports::condition::{Condition, RuleContext};

/// A configured validator: an ordered sequence of conditions that all must
/// pass, plus the diagnostic message accumulated by the current call.
///
/// A rule is constructed once with fixed configuration and may be invoked
/// many times; the accumulated message resets at the start of every
/// [`ValidationRule::is_valid`] call, so state never leaks across calls.
///
/// # Examples
///
/// ```
/// use fieldgate::rule::domain::Transition;
/// use fieldgate::rule::engine::ValidationRule;
/// use serde_json::json;
///
/// let mut status = ValidationRule::allowed_transitions(vec![Transition::new(
///     "open",
///     vec![json!("scheduled"), json!("canceled"), json!("closed")],
/// )]);
///
/// assert!(status.is_valid(Some(&json!("open")), Some(&json!("scheduled"))));
/// assert!(!status.is_valid(Some(&json!("scheduled")), Some(&json!("open"))));
/// ```
#[derive(Default)]
pub struct ValidationRule {
    conditions: Vec<Box<dyn Condition>>,
    message: String,
}

impl fmt::Debug for ValidationRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidationRule")
            .field("conditions", &self.conditions.len())
            .field("message", &self.message)
            .finish()
    }
}

impl ValidationRule {
    /// Creates a rule with no conditions. Trivially valid for any input.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            conditions: Vec::new(),
            message: String::new(),
        }
    }

    /// Creates a rule seeded with an ordered condition list.
    ///
    /// The diagnostic message starts empty, as it does after every
    /// variant constructor.
    #[must_use]
    pub const fn with_conditions(conditions: Vec<Box<dyn Condition>>) -> Self {
        Self {
            conditions,
            message: String::new(),
        }
    }

    /// A rule checking that a value's size lies within `min..=max`.
    ///
    /// Strings measure characters, arrays elements, objects entries.
    #[must_use]
    pub fn length_bounds(min: usize, max: usize) -> Self {
        Self::with_conditions(vec![Box::new(LengthBounds::new(min, max))])
    }

    /// A rule checking that a string value matches a compiled pattern.
    #[must_use]
    pub fn pattern(pattern: Regex) -> Self {
        Self::with_conditions(vec![Box::new(PatternMatch::new(pattern))])
    }

    /// A rule checking that a string value matches a pattern string.
    ///
    /// # Errors
    ///
    /// Returns [`RuleError::InvalidPattern`] if the pattern fails to
    /// compile.
    pub fn pattern_str(pattern: &str) -> Result<Self, RuleError> {
        Ok(Self::with_conditions(vec![Box::new(
            PatternMatch::from_pattern(pattern)?,
        )]))
    }

    /// A rule checking that a value is a well-formed email address.
    #[must_use]
    pub fn email() -> Self {
        Self::with_conditions(vec![Box::new(EmailFormat::new())])
    }

    /// A rule checking that a value is provided, under the default
    /// presence policy.
    #[must_use]
    pub fn required() -> Self {
        Self::required_with_policy(PresencePolicy::default())
    }

    /// A rule checking that a value is provided under an explicit presence
    /// policy.
    #[must_use]
    pub fn required_with_policy(policy: PresencePolicy) -> Self {
        Self::with_conditions(vec![Box::new(RequiredPresence::new(policy))])
    }

    /// A rule checking that the previous-to-current value change is one of
    /// the allowed transitions.
    #[must_use]
    pub fn allowed_transitions(matches: Vec<Transition>) -> Self {
        Self::with_conditions(vec![Box::new(AllowedTransition::new(matches))])
    }

    /// A rule checking that a document value satisfies a type shape.
    #[must_use]
    pub fn type_shape(shape: TypeShape) -> Self {
        Self::with_conditions(vec![Box::new(ShapeCheck::new(shape))])
    }

    /// Validates a value (optionally against the value it replaces).
    ///
    /// Clears the diagnostic message, then evaluates the conditions in
    /// insertion order. The first failing condition appends its verdict's
    /// messages and stops evaluation; later conditions do not run and
    /// cannot contribute messages for this call. Returns `true` iff every
    /// condition passed — an empty condition list is trivially valid.
    pub fn is_valid(&mut self, previous: Option<&Value>, current: Option<&Value>) -> bool {
        self.message.clear();
        let context = RuleContext::new(previous, current);

        for condition in &self.conditions {
            let verdict = condition.evaluate(&context);
            if !verdict.passed() {
                for fragment in verdict.into_messages() {
                    self.message.push_str(&fragment);
                }
                return false;
            }
        }
        true
    }

    /// The diagnostic message accumulated by the current call (empty if
    /// none).
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Appends a fragment to the diagnostic message.
    ///
    /// The engine appends failing verdicts' fragments itself; this is
    /// public so composite rules can explain failures of their own.
    pub fn add_message(&mut self, fragment: impl Into<String>) {
        self.message.push_str(&fragment.into());
    }

    /// Appends a condition to the end of the evaluation order.
    pub fn add_condition(&mut self, condition: Box<dyn Condition>) {
        self.conditions.push(condition);
    }

    /// Removes and returns the condition at `index`.
    ///
    /// Out-of-range indices are a no-op returning `None`.
    pub fn remove_condition(&mut self, index: usize) -> Option<Box<dyn Condition>> {
        if index < self.conditions.len() {
            Some(self.conditions.remove(index))
        } else {
            None
        }
    }

    /// The number of conditions this rule evaluates.
    #[must_use]
    pub fn condition_count(&self) -> usize {
        self.conditions.len()
    }
}
