//! Allowed value transitions for finite-state field constraints.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One allowed state change: a source value and the set of values a field
/// holding it may move to.
///
/// # Serialisation
///
/// Transitions use the natural JSON rendering:
///
/// ```json
/// { "from": "open", "to": ["scheduled", "canceled", "closed"] }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transition {
    /// The value the field currently holds.
    pub from: Value,
    /// The values the field may change to.
    pub to: Vec<Value>,
}

impl Transition {
    /// Creates a new transition.
    #[must_use]
    pub fn new(from: impl Into<Value>, to: Vec<Value>) -> Self {
        Self {
            from: from.into(),
            to,
        }
    }

    /// Returns `true` if this transition's source matches the given value.
    #[must_use]
    pub fn applies_from(&self, previous: &Value) -> bool {
        self.from == *previous
    }

    /// Returns `true` if this transition permits moving to the given value.
    #[must_use]
    pub fn allows(&self, current: &Value) -> bool {
        self.to.contains(current)
    }
}
