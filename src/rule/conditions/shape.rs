//! Data-type-shape condition.
//!
//! The one genuinely recursive check in the engine. Four failure branches
//! are distinguished: a field present in the value but not in the shape, a
//! field expected by the shape but missing from the value, a primitive
//! type mismatch, and a nested-shape mismatch. All collapse to a single
//! boolean verdict; the messages are best-effort diagnostics naming the
//! offending field path.

use std::collections::BTreeMap;

use serde_json::Value;

use crate::rule::domain::{PrimitiveType, TypeShape, kind_of};
use crate::rule::ports::condition::{Condition, RuleContext, Verdict};

/// Checks that the current value satisfies a recursive type shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShapeCheck {
    shape: TypeShape,
}

impl ShapeCheck {
    /// Creates a shape check.
    #[must_use]
    pub const fn new(shape: TypeShape) -> Self {
        Self { shape }
    }
}

impl Condition for ShapeCheck {
    fn evaluate(&self, context: &RuleContext<'_>) -> Verdict {
        let mut messages = Vec::new();
        if check_shape(&self.shape, context.current(), "", &mut messages) {
            Verdict::pass()
        } else {
            Verdict::fail_all(messages)
        }
    }
}

fn check_shape(
    expected: &TypeShape,
    value: Option<&Value>,
    path: &str,
    messages: &mut Vec<String>,
) -> bool {
    match expected {
        TypeShape::Primitive(primitive) => check_primitive(*primitive, value, path, messages),
        TypeShape::Object(fields) => check_object(fields, value, path, messages),
    }
}

fn check_primitive(
    expected: PrimitiveType,
    value: Option<&Value>,
    path: &str,
    messages: &mut Vec<String>,
) -> bool {
    match value {
        Some(inner) if expected.matches(inner) => true,
        Some(inner) => {
            messages.push(format!(
                "{} is a {}, expected a {expected}",
                describe(path),
                kind_of(inner)
            ));
            false
        }
        None => {
            messages.push(format!("{} is missing", describe(path)));
            false
        }
    }
}

fn check_object(
    fields: &BTreeMap<String, TypeShape>,
    value: Option<&Value>,
    path: &str,
    messages: &mut Vec<String>,
) -> bool {
    let Some(Value::Object(entries)) = value else {
        messages.push(value.map_or_else(
            || format!("{} is missing", describe(path)),
            |other| {
                format!(
                    "{} is a {}, expected an object",
                    describe(path),
                    kind_of(other)
                )
            },
        ));
        return false;
    };

    let mut valid = true;

    for key in entries.keys() {
        if !fields.contains_key(key) {
            messages.push(format!("unexpected field {}", join(path, key)));
            valid = false;
        }
    }

    for (key, expected) in fields {
        if !check_shape(expected, entries.get(key), &join(path, key), messages) {
            valid = false;
        }
    }

    valid
}

fn join(path: &str, key: &str) -> String {
    if path.is_empty() {
        key.to_owned()
    } else {
        format!("{path}.{key}")
    }
}

const fn describe(path: &str) -> &str {
    if path.is_empty() { "value" } else { path }
}
