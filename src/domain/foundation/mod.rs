//! Foundation module - Shared domain primitives.
//!
//! Contains the value objects and error types that form the vocabulary
//! of the round phase engine.

mod errors;
mod timestamp;

pub use errors::ScheduleError;
pub use timestamp::Timestamp;
