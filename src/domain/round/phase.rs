//! Phase enum for the round lifecycle.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The four phases of a round, in chronological order.
///
/// A round progresses linearly and never revisits an earlier phase.
/// Celebration is terminal: once covers are due, the round stays in
/// celebration indefinitely.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    #[default]
    Signups,
    Voting,
    Covering,
    Celebration,
}

impl Phase {
    /// Returns all phases in chronological order.
    pub fn all() -> [Phase; 4] {
        [
            Phase::Signups,
            Phase::Voting,
            Phase::Covering,
            Phase::Celebration,
        ]
    }

    /// Returns the phase that follows this one.
    ///
    /// Returns None for celebration, which has no successor.
    pub fn next(&self) -> Option<Phase> {
        match self {
            Phase::Signups => Some(Phase::Voting),
            Phase::Voting => Some(Phase::Covering),
            Phase::Covering => Some(Phase::Celebration),
            Phase::Celebration => None,
        }
    }

    /// Returns a display label for the phase, suitable for UI headings.
    pub fn label(&self) -> &'static str {
        match self {
            Phase::Signups => "Signups",
            Phase::Voting => "Voting",
            Phase::Covering => "Covering",
            Phase::Celebration => "Celebration",
        }
    }

    /// Returns true if the round is past its voting phase.
    pub fn is_past_voting(&self) -> bool {
        matches!(self, Phase::Covering | Phase::Celebration)
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
