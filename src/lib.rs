//! Everyone Plays the Same Song - Round Phase Engine
//!
//! This crate implements the phase schedule for the recurring cover-song
//! contest: given a round's five milestone dates and the current instant,
//! it classifies the active phase (signups, voting, covering, celebration)
//! and derives the open/close windows, countdowns, and date labels the
//! site displays.

pub mod domain;
