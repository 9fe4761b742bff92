//! PhaseWindow - Derived open/close date ranges per phase.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::domain::foundation::Timestamp;
use crate::domain::round::{Phase, RoundMilestones};

/// The open/close range of a single phase, derived from the milestones.
///
/// An edge is None when the milestone feeding it is missing from the
/// round record. No ordering validation happens here, so a malformed
/// schedule can produce a window that opens after it closes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
pub struct PhaseWindow {
    pub opens: Option<Timestamp>,
    pub closes: Option<Timestamp>,
}

impl RoundMilestones {
    /// Computes the open/close window of every phase.
    ///
    /// Each phase opens at its own milestone and closes one day before
    /// the next phase opens, except celebration, which closes at the
    /// listening party. All four phases are always present in the
    /// result, whatever the state of the record.
    pub fn phase_windows(&self) -> BTreeMap<Phase, PhaseWindow> {
        let mut windows = BTreeMap::new();
        windows.insert(
            Phase::Signups,
            PhaseWindow {
                opens: self.signup_opens(),
                closes: self.voting_opens().map(|ts| ts.minus_days(1)),
            },
        );
        windows.insert(
            Phase::Voting,
            PhaseWindow {
                opens: self.voting_opens(),
                closes: self.covering_begins().map(|ts| ts.minus_days(1)),
            },
        );
        windows.insert(
            Phase::Covering,
            PhaseWindow {
                opens: self.covering_begins(),
                closes: self.covers_due().map(|ts| ts.minus_days(1)),
            },
        );
        windows.insert(
            Phase::Celebration,
            PhaseWindow {
                opens: self.covers_due(),
                closes: self.listening_party(),
            },
        );
        windows
    }
}
