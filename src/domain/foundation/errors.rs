//! Error types for the domain layer.

use thiserror::Error;

/// Errors reported by the milestone validation boundary.
///
/// Only `RoundMilestones::validate` produces these. Phase classification
/// and window math never do; they degrade silently so a bad round record
/// cannot take down a page render.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScheduleError {
    #[error("Milestone '{field}' is missing or unparseable")]
    MissingMilestone { field: &'static str },

    #[error("Milestone '{earlier}' falls after '{later}'")]
    OutOfOrder {
        earlier: &'static str,
        later: &'static str,
    },
}

impl ScheduleError {
    /// Creates a missing milestone error.
    pub fn missing(field: &'static str) -> Self {
        ScheduleError::MissingMilestone { field }
    }

    /// Creates an out of order milestone error.
    pub fn out_of_order(earlier: &'static str, later: &'static str) -> Self {
        ScheduleError::OutOfOrder { earlier, later }
    }
}
