//! Recursive type-shape descriptors.
//!
//! A shape describes the expected field names and types of a document
//! value. The descriptor set is closed (a field is either a primitive or a
//! nested shape), so shape-walking code can match exhaustively instead of
//! inspecting types ad hoc.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;

/// The primitive types a field may be expected to hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrimitiveType {
    /// A JSON string.
    String,
    /// A JSON number.
    Number,
    /// A JSON boolean.
    Boolean,
}

impl PrimitiveType {
    /// Returns `true` if the value is of exactly this primitive type.
    #[must_use]
    pub const fn matches(self, value: &Value) -> bool {
        matches!(
            (self, value),
            (Self::String, Value::String(_))
                | (Self::Number, Value::Number(_))
                | (Self::Boolean, Value::Bool(_))
        )
    }
}

impl fmt::Display for PrimitiveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String => write!(f, "string"),
            Self::Number => write!(f, "number"),
            Self::Boolean => write!(f, "boolean"),
        }
    }
}

/// Expected shape of a field: a primitive type or a nested field map.
///
/// # Serialisation
///
/// Shapes use the natural JSON rendering, with primitive kinds as strings
/// and nested shapes as maps:
///
/// ```json
/// { "_id": "string", "count": "number", "person": { "plop": "string" } }
/// ```
///
/// # Examples
///
/// ```
/// use fieldgate::rule::domain::TypeShape;
///
/// let shape = TypeShape::object([
///     ("_id", TypeShape::string()),
///     ("person", TypeShape::object([("plop", TypeShape::string())])),
/// ]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TypeShape {
    /// The field must hold a value of this primitive type.
    Primitive(PrimitiveType),
    /// The field must hold an object satisfying this nested shape.
    Object(BTreeMap<String, TypeShape>),
}

impl TypeShape {
    /// Shorthand for a string expectation.
    #[must_use]
    pub const fn string() -> Self {
        Self::Primitive(PrimitiveType::String)
    }

    /// Shorthand for a number expectation.
    #[must_use]
    pub const fn number() -> Self {
        Self::Primitive(PrimitiveType::Number)
    }

    /// Shorthand for a boolean expectation.
    #[must_use]
    pub const fn boolean() -> Self {
        Self::Primitive(PrimitiveType::Boolean)
    }

    /// Builds a nested object shape from field expectations.
    #[must_use]
    pub fn object<K>(fields: impl IntoIterator<Item = (K, Self)>) -> Self
    where
        K: Into<String>,
    {
        Self::Object(
            fields
                .into_iter()
                .map(|(name, shape)| (name.into(), shape))
                .collect(),
        )
    }
}
