//! Depletable duty counters and the transitions that spend or refill them.
//!
//! # Counters
//!
//! | Field                    | Spent by                     | Refilled by              |
//! |--------------------------|------------------------------|--------------------------|
//! | `used_in_cycle`          | driving, on-duty             | restart (to zero)        |
//! | `window_remaining`       | driving, on-duty, breaks     | reset rest, restart      |
//! | `driving_remaining`      | driving                      | reset rest, restart      |
//! | `continuous_since_break` | driving (counts up)          | break, reset, restart    |
//!
//! Counters are signed.  A break is charged against the window in full even
//! when less than a break's worth of window is left, so `window_remaining`
//! can dip below zero until the next step takes a reset rest.
//!
//! Every transition advances `now` and returns the span it covered; the
//! caller decides what to log for it.  Minute amounts enter as `u64` and
//! saturate at `i64::MAX`; counter arithmetic saturates as well.

use std::ops::Range;

use hos_core::{Minute, RuleMinutes};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DutyState {
    /// Global clock.
    pub now: Minute,
    /// On-duty minutes counted toward the cycle limit.
    pub used_in_cycle: i64,
    /// Minutes left in the current on-duty window.
    pub window_remaining: i64,
    /// Driving minutes left in the current window.
    pub driving_remaining: i64,
    /// Driving minutes since the last qualifying break.
    pub continuous_since_break: i64,
    limits: RuleMinutes,
}

impl DutyState {
    /// A fresh window at minute 0 with `used_in_cycle` already spent.
    pub fn new(limits: RuleMinutes, used_in_cycle: u64) -> Self {
        Self {
            now:                    Minute::ZERO,
            used_in_cycle:          signed(used_in_cycle),
            window_remaining:       signed(limits.window),
            driving_remaining:      signed(limits.driving_per_window),
            continuous_since_break: 0,
            limits,
        }
    }

    pub fn limits(&self) -> &RuleMinutes {
        &self.limits
    }

    // ── Queries ───────────────────────────────────────────────────────────

    #[inline]
    pub fn window_exhausted(&self) -> bool {
        self.window_remaining <= 0
    }

    #[inline]
    pub fn driving_exhausted(&self) -> bool {
        self.driving_remaining <= 0
    }

    #[inline]
    pub fn cycle_exhausted(&self) -> bool {
        self.used_in_cycle >= signed(self.limits.cycle_limit)
    }

    /// Cycle minutes still available, floored at zero.
    #[inline]
    pub fn cycle_remaining(&self) -> i64 {
        signed(self.limits.cycle_limit).saturating_sub(self.used_in_cycle).max(0)
    }

    /// Driving minutes left before a break is required, floored at zero.
    #[inline]
    pub fn continuous_allowance(&self) -> i64 {
        signed(self.limits.continuous_driving)
            .saturating_sub(self.continuous_since_break)
            .max(0)
    }

    /// Largest on-duty chunk that fits: bounded by the window and the cycle.
    pub fn service_chunk(&self, remaining: i64) -> i64 {
        remaining.min(self.window_remaining).min(self.cycle_remaining())
    }

    /// Largest driving chunk that fits: bounded by every driving allowance,
    /// the window, and the cycle.
    pub fn driving_chunk(&self, remaining: i64) -> i64 {
        remaining
            .min(self.driving_remaining)
            .min(self.window_remaining)
            .min(self.continuous_allowance())
            .min(self.cycle_remaining())
    }

    // ── Transitions ───────────────────────────────────────────────────────

    /// Refill the window, the driving allowance and the continuous counter.
    pub fn reset_window(&mut self) {
        self.window_remaining       = signed(self.limits.window);
        self.driving_remaining      = signed(self.limits.driving_per_window);
        self.continuous_since_break = 0;
    }

    /// Rest for the configured post-window length and start a new window.
    pub fn take_reset_rest(&mut self) -> Range<Minute> {
        let span = self.advance(self.limits.rest_after_window);
        self.reset_window();
        span
    }

    /// Rest for the restart length, zero the cycle, start a new window.
    pub fn take_restart(&mut self) -> Range<Minute> {
        let span = self.advance(self.limits.restart);
        self.used_in_cycle = 0;
        self.reset_window();
        span
    }

    /// Off-duty for `minutes`.  Counts against the window only and clears
    /// the continuous-driving counter.
    pub fn take_break(&mut self, minutes: u64) -> Range<Minute> {
        let span = self.advance(minutes);
        self.window_remaining = self.window_remaining.saturating_sub(signed(minutes));
        self.continuous_since_break = 0;
        span
    }

    /// On-duty, not driving.
    pub fn work(&mut self, minutes: u64) -> Range<Minute> {
        let span = self.advance(minutes);
        let m = signed(minutes);
        self.used_in_cycle    = self.used_in_cycle.saturating_add(m);
        self.window_remaining = self.window_remaining.saturating_sub(m);
        span
    }

    /// Driving: spends every counter.
    pub fn drive(&mut self, minutes: u64) -> Range<Minute> {
        let span = self.advance(minutes);
        let m = signed(minutes);
        self.used_in_cycle          = self.used_in_cycle.saturating_add(m);
        self.window_remaining       = self.window_remaining.saturating_sub(m);
        self.driving_remaining      = self.driving_remaining.saturating_sub(m);
        self.continuous_since_break = self.continuous_since_break.saturating_add(m);
        span
    }

    /// Move the clock without touching any counter.
    pub fn advance(&mut self, minutes: u64) -> Range<Minute> {
        let start = self.now;
        self.now = start + minutes;
        start..self.now
    }
}

/// `u64` minutes as a counter value, saturating at `i64::MAX`.
#[inline]
pub(crate) fn signed(minutes: u64) -> i64 {
    i64::try_from(minutes).unwrap_or(i64::MAX)
}
