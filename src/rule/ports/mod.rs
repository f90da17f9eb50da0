//! Abstract interfaces for the rule subsystem.

pub mod condition;
