//! The validation-rule engine and its built-in conditions.
//!
//! A [`engine::ValidationRule`] owns an ordered sequence of conditions and
//! evaluates them against an immutable per-call context holding the value
//! being replaced and the value being written. Evaluation short-circuits on
//! the first failing condition; diagnostic messages accumulate on the rule
//! for the duration of that call only.
//!
//! # Architecture
//!
//! The module follows hexagonal architecture principles:
//!
//! - **Domain**: Pure descriptors ([`domain::PresencePolicy`],
//!   [`domain::Transition`], [`domain::TypeShape`]) and helpers over the
//!   dynamic value currency, `serde_json::Value`
//! - **Ports**: The [`ports::condition::Condition`] strategy seam with its
//!   [`ports::condition::Verdict`] outcome type
//! - **Conditions**: The built-in condition implementations
//!   ([`conditions::LengthBounds`], [`conditions::PatternMatch`],
//!   [`conditions::EmailFormat`], [`conditions::RequiredPresence`],
//!   [`conditions::AllowedTransition`], [`conditions::ShapeCheck`])
//! - **Engine**: [`engine::ValidationRule`], driving conditions in order
//!
//! # Example
//!
//! ```
//! use fieldgate::rule::engine::ValidationRule;
//! use serde_json::json;
//!
//! let mut title_length = ValidationRule::length_bounds(5, 100);
//!
//! assert!(title_length.is_valid(None, Some(&json!("a proper title"))));
//!
//! assert!(!title_length.is_valid(None, Some(&json!("ab"))));
//! assert_eq!(title_length.message(), "ab is shorter than 5");
//! ```

pub mod conditions;
pub mod domain;
pub mod engine;
pub mod error;
pub mod ports;

#[cfg(test)]
mod tests;
