//! RoundMilestones value object - The five dates that define a round.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{ScheduleError, Timestamp};
use crate::domain::round::Phase;

/// The five milestone dates of a round, as read from the round record.
///
/// Each milestone is optional because the external record may carry a
/// missing or unparseable value; classification degrades rather than
/// erroring when that happens. Present values are expected to be
/// non-decreasing in field order, but the engine never enforces that
/// during classification - see [`RoundMilestones::validate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct RoundMilestones {
    #[serde(default)]
    signup_opens: Option<Timestamp>,
    #[serde(default)]
    voting_opens: Option<Timestamp>,
    #[serde(default)]
    covering_begins: Option<Timestamp>,
    #[serde(default)]
    covers_due: Option<Timestamp>,
    #[serde(default)]
    listening_party: Option<Timestamp>,
}

impl RoundMilestones {
    /// Creates milestones from already-parsed timestamps.
    pub fn new(
        signup_opens: Option<Timestamp>,
        voting_opens: Option<Timestamp>,
        covering_begins: Option<Timestamp>,
        covers_due: Option<Timestamp>,
        listening_party: Option<Timestamp>,
    ) -> Self {
        Self {
            signup_opens,
            voting_opens,
            covering_begins,
            covers_due,
            listening_party,
        }
    }

    /// Creates milestones from raw string values.
    ///
    /// Each value is parsed leniently (ISO forms or human labels, see
    /// [`Timestamp::parse_lenient`]); anything unparseable becomes a
    /// missing milestone rather than an error.
    pub fn from_raw(
        signup_opens: &str,
        voting_opens: &str,
        covering_begins: &str,
        covers_due: &str,
        listening_party: &str,
    ) -> Self {
        Self {
            signup_opens: Timestamp::parse_lenient(signup_opens),
            voting_opens: Timestamp::parse_lenient(voting_opens),
            covering_begins: Timestamp::parse_lenient(covering_begins),
            covers_due: Timestamp::parse_lenient(covers_due),
            listening_party: Timestamp::parse_lenient(listening_party),
        }
    }

    /// When signups open.
    pub fn signup_opens(&self) -> Option<Timestamp> {
        self.signup_opens
    }

    /// When voting on submitted songs opens.
    pub fn voting_opens(&self) -> Option<Timestamp> {
        self.voting_opens
    }

    /// When the covering period begins.
    pub fn covering_begins(&self) -> Option<Timestamp> {
        self.covering_begins
    }

    /// When covers are due.
    pub fn covers_due(&self) -> Option<Timestamp> {
        self.covers_due
    }

    /// When the listening party happens.
    pub fn listening_party(&self) -> Option<Timestamp> {
        self.listening_party
    }

    /// Classifies which phase the round is in at the given instant.
    ///
    /// Precedence, first match wins:
    /// 1. before `voting_opens` -> signups
    /// 2. before `covering_begins` -> voting
    /// 3. before `covers_due` -> covering
    /// 4. otherwise -> celebration
    ///
    /// Each phase starts inclusively at its own milestone and ends
    /// exclusively at the next. If any of the first four milestones is
    /// missing, the round classifies as signups; the record is
    /// incomplete and this mirrors what the site has always shown.
    /// Callers that need to tell "incomplete record" apart from a real
    /// signups phase should check [`RoundMilestones::validate`] first.
    pub fn current_phase(&self, now: Timestamp) -> Phase {
        // signup_opens is not compared below, but a record missing it
        // is still incomplete.
        if self.signup_opens.is_none() {
            return Phase::Signups;
        }
        let (Some(voting_opens), Some(covering_begins), Some(covers_due)) =
            (self.voting_opens, self.covering_begins, self.covers_due)
        else {
            return Phase::Signups;
        };

        if now < voting_opens {
            Phase::Signups
        } else if now < covering_begins {
            Phase::Voting
        } else if now < covers_due {
            Phase::Covering
        } else {
            Phase::Celebration
        }
    }

    /// Classifies the phase at the current system time.
    pub fn current_phase_now(&self) -> Phase {
        self.current_phase(Timestamp::now())
    }

    /// Validates the record at the construction boundary.
    ///
    /// Reports the first missing milestone, then the first adjacent pair
    /// that is out of order. Classification never calls this; it exists
    /// so the process that writes round records can catch a schedule
    /// that would produce degenerate windows.
    pub fn validate(&self) -> Result<(), ScheduleError> {
        let fields: [(&'static str, Option<Timestamp>); 5] = [
            ("signup_opens", self.signup_opens),
            ("voting_opens", self.voting_opens),
            ("covering_begins", self.covering_begins),
            ("covers_due", self.covers_due),
            ("listening_party", self.listening_party),
        ];

        for (name, value) in &fields {
            if value.is_none() {
                return Err(ScheduleError::missing(name));
            }
        }

        for pair in fields.windows(2) {
            let (earlier_name, earlier) = pair[0];
            let (later_name, later) = pair[1];
            // Both present per the loop above.
            if let (Some(earlier), Some(later)) = (earlier, later) {
                if earlier.is_after(&later) {
                    return Err(ScheduleError::out_of_order(earlier_name, later_name));
                }
            }
        }

        Ok(())
    }
}
