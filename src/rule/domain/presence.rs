//! Presence policy for required-value checks.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Describes which falsy values count as "missing" for required checks.
///
/// The engine's host historically treated every falsy value as absent,
/// conflating a legitimate zero or `false` with a value that was never
/// provided. This policy states that behaviour explicitly: the default
/// reproduces the conflation, and each part of it can be switched off
/// individually.
///
/// # Examples
///
/// ```
/// use fieldgate::rule::domain::PresencePolicy;
/// use serde_json::json;
///
/// let policy = PresencePolicy::default();
/// assert!(!policy.is_present(Some(&json!(0))));
///
/// let lenient = PresencePolicy::null_only();
/// assert!(lenient.is_present(Some(&json!(0))));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresencePolicy {
    /// Whether the number `0` counts as missing.
    pub treat_zero_as_missing: bool,
    /// Whether `false` counts as missing.
    pub treat_false_as_missing: bool,
    /// Whether the empty string counts as missing.
    pub treat_empty_string_as_missing: bool,
}

impl Default for PresencePolicy {
    fn default() -> Self {
        Self {
            treat_zero_as_missing: true,
            treat_false_as_missing: true,
            treat_empty_string_as_missing: true,
        }
    }
}

impl PresencePolicy {
    /// Creates a policy where only null and absent values count as missing.
    ///
    /// Useful when zero, `false`, and the empty string are legitimate
    /// stored values.
    #[must_use]
    pub const fn null_only() -> Self {
        Self {
            treat_zero_as_missing: false,
            treat_false_as_missing: false,
            treat_empty_string_as_missing: false,
        }
    }

    /// Returns `true` if the value counts as provided under this policy.
    ///
    /// Null and absent values are never present. Arrays and objects are
    /// always present, even when empty.
    #[must_use]
    pub fn is_present(&self, value: Option<&Value>) -> bool {
        value.is_some_and(|inner| match inner {
            Value::Null => false,
            Value::Bool(flag) => *flag || !self.treat_false_as_missing,
            Value::Number(number) => !self.treat_zero_as_missing || !is_zero(number),
            Value::String(text) => !text.is_empty() || !self.treat_empty_string_as_missing,
            Value::Array(_) | Value::Object(_) => true,
        })
    }
}

fn is_zero(number: &serde_json::Number) -> bool {
    number.as_i64().is_some_and(|n| n == 0)
        || number.as_u64().is_some_and(|n| n == 0)
        || number.as_f64().is_some_and(|n| n.abs() < f64::EPSILON)
}
