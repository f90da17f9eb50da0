//! Built-in condition implementations.
//!
//! Each condition is a strategy object configured at construction and
//! evaluated against the per-call context. The engine's named constructors
//! wrap these one-to-one; they are public so composite rules can mix them
//! with custom [`crate::rule::ports::condition::Condition`] implementations.

mod email;
mod length;
mod pattern;
mod required;
mod shape;
mod transition;

pub use email::EmailFormat;
pub use length::LengthBounds;
pub use pattern::PatternMatch;
pub use required::RequiredPresence;
pub use shape::ShapeCheck;
pub use transition::AllowedTransition;
