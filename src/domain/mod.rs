//! Domain layer containing the round phase engine and its domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, errors)
//! - `round` - Round milestones, phase classification, windows, countdowns

pub mod foundation;
pub mod round;
