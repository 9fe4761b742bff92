//! Display date labels for phase windows.
//!
//! Pure formatting over [`RoundMilestones::phase_windows`]; no phase
//! logic lives here. Admin tables and phase banners consume these
//! strings directly.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::domain::foundation::Timestamp;
use crate::domain::round::{Phase, RoundMilestones, INVALID_DATE};

/// Day-precision open/close labels for one phase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PhaseDates {
    pub opens: String,
    pub closes: String,
}

/// Formats a timestamp as a day-precision calendar label ("Mar 24, 2025").
pub fn date_label(ts: Timestamp) -> String {
    ts.as_datetime().format("%b %-d, %Y").to_string()
}

pub(super) fn edge_label(edge: Option<Timestamp>) -> String {
    match edge {
        Some(ts) => date_label(ts),
        None => INVALID_DATE.to_string(),
    }
}

impl RoundMilestones {
    /// Derives display date labels for every phase window.
    ///
    /// A window edge whose milestone is missing renders the same
    /// sentinel the countdown formatter uses.
    pub fn phase_date_labels(&self) -> BTreeMap<Phase, PhaseDates> {
        self.phase_windows()
            .into_iter()
            .map(|(phase, window)| {
                (
                    phase,
                    PhaseDates {
                        opens: edge_label(window.opens),
                        closes: edge_label(window.closes),
                    },
                )
            })
            .collect()
    }
}
