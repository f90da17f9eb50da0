//! Fieldgate: declarative validation rules for data-model fields.
//!
//! This crate provides named, composable validation rules that inspect a
//! field value (optionally a before/after pair) and report pass/fail plus
//! human-readable diagnostics, so that writes can be checked against
//! business constraints before being accepted.
//!
//! # Architecture
//!
//! Fieldgate follows hexagonal architecture principles:
//!
//! - **Domain**: Pure descriptors with no infrastructure dependencies
//! - **Ports**: The abstract [`rule::ports::condition::Condition`] seam
//! - **Conditions**: Concrete built-in condition implementations
//! - **Engine**: The [`rule::engine::ValidationRule`] driver
//!
//! # Modules
//!
//! - [`rule`]: The validation-rule engine and its built-in conditions

pub mod rule;
