//! Countdown model: remaining seconds plus a ticking flag.
//!
//! The timer never drives itself; the caller invokes [`Timer::tick`] once per
//! second. Stopping is observed one tick late: the tick that brings the
//! countdown to zero still reports [`Timer::ticking`], and only the next tick
//! flips it to [`Timer::stopped`].

use crate::config::SECONDS_PER_MINUTE;
use crate::utils::parse_minutes;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Timer {
    seconds_to_run: u64,
    is_ticking: bool,
}

impl Timer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset the countdown to `minutes`. Negative values count as zero and
    /// anything above `u32::MAX` minutes saturates there.
    ///
    /// The ticking flag is left untouched until the next [`Timer::tick`].
    pub fn wind_up_to_minutes(&mut self, minutes: i64) {
        let minutes = minutes.clamp(0, u32::MAX as i64) as u64;
        self.seconds_to_run = minutes * SECONDS_PER_MINUTE;
    }

    /// Wind up from raw form input. Non-numeric input counts as zero.
    pub fn wind_up_from_input(&mut self, raw: &str) {
        self.wind_up_to_minutes(parse_minutes(raw).unwrap_or(0));
    }

    pub fn minutes_remaining(&self) -> u64 {
        self.seconds_to_run / SECONDS_PER_MINUTE
    }

    /// Seconds left over after whole minutes, always in `0..=59`.
    pub fn seconds_remaining(&self) -> u64 {
        self.seconds_to_run - self.minutes_remaining() * SECONDS_PER_MINUTE
    }

    #[cfg(test)]
    pub(crate) fn total_seconds(&self) -> u64 {
        self.seconds_to_run
    }

    /// Advance one second.
    pub fn tick(&mut self) {
        if self.seconds_to_run == 0 {
            self.is_ticking = false;
        } else {
            self.seconds_to_run -= 1;
            self.is_ticking = true;
        }
    }

    pub fn stopped(&self) -> bool {
        !self.is_ticking
    }

    pub fn ticking(&self) -> bool {
        self.is_ticking
    }
}
