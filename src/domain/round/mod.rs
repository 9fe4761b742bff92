//! Round module - Phase schedule for the cover contest.
//!
//! A round moves through four phases in a fixed order: signups, voting,
//! covering, celebration. Everything here is a pure function of the
//! round's milestone dates and "now"; nothing is cached between calls.

mod countdown;
mod labels;
mod milestones;
mod phase;
mod status;
mod windows;

pub use countdown::{format_time_remaining, Countdown, INVALID_DATE};
pub use labels::{date_label, PhaseDates};
pub use milestones::RoundMilestones;
pub use phase::Phase;
pub use status::RoundStatus;
pub use windows::PhaseWindow;
