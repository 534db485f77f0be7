//! Simulation time model.
//!
//! # Design
//!
//! Time is an absolute `Minute` counter measured from the start of a plan
//! (minute 0 is the start of day 0, not wall-clock midnight).  All duty
//! arithmetic happens on whole minutes so that rest, break, and window
//! boundaries are exact; hours only appear at the edges (option input and
//! per-day output), where they are converted with [`hours_to_minutes`] and
//! [`minutes_to_hours`].

use std::fmt;

pub const MINUTES_PER_HOUR: u64 = 60;
pub const MINUTES_PER_DAY: u64 = 24 * MINUTES_PER_HOUR;

/// Ceiling for any single duration converted from hours (100 000 h, about
/// eleven years).  Keeps duty counters inside `i64` and bounds the number of
/// days one plan can span.
pub const MAX_DURATION_MINUTES: u64 = 100_000 * MINUTES_PER_HOUR;

// ── Minute ────────────────────────────────────────────────────────────────────

/// An absolute simulation instant, in minutes since plan start.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Minute(pub u64);

impl Minute {
    pub const ZERO: Minute = Minute(0);

    /// Return the instant `n` minutes after `self`, saturating at the end of
    /// time.
    #[inline]
    pub fn offset(self, n: u64) -> Minute {
        Minute(self.0.saturating_add(n))
    }

    /// Minutes elapsed from `earlier` to `self`.
    ///
    /// # Panics
    /// Panics in debug mode if `earlier > self`.
    #[inline]
    pub fn since(self, earlier: Minute) -> u64 {
        self.0 - earlier.0
    }

    /// Zero-based day index containing this instant.
    #[inline]
    pub fn day(self) -> u64 {
        self.0 / MINUTES_PER_DAY
    }

    /// Minutes past the start of [`day`][Self::day].
    #[inline]
    pub fn minute_of_day(self) -> u64 {
        self.0 % MINUTES_PER_DAY
    }

    /// First instant of day `day`.
    #[inline]
    pub fn day_start(day: u64) -> Minute {
        Minute(day.saturating_mul(MINUTES_PER_DAY))
    }

    /// The smallest day boundary `>= self` (`self` itself when already on one).
    /// Saturates when no such boundary fits in a `u64`.
    #[inline]
    pub fn ceil_day(self) -> Minute {
        Minute(self.0.div_ceil(MINUTES_PER_DAY).saturating_mul(MINUTES_PER_DAY))
    }

    /// First instant of the following day.  Saturates on the last day.
    #[inline]
    pub fn next_day_start(self) -> Minute {
        Minute::day_start(self.day()).offset(MINUTES_PER_DAY)
    }
}

impl std::ops::Add<u64> for Minute {
    type Output = Minute;
    #[inline]
    fn add(self, rhs: u64) -> Minute {
        self.offset(rhs)
    }
}

impl std::ops::Sub for Minute {
    type Output = u64;
    #[inline]
    fn sub(self, rhs: Minute) -> u64 {
        self.0 - rhs.0
    }
}

impl fmt::Display for Minute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let m = self.minute_of_day();
        write!(
            f,
            "day {} {:02}:{:02}",
            self.day(),
            m / MINUTES_PER_HOUR,
            m % MINUTES_PER_HOUR
        )
    }
}

// ── Conversions ───────────────────────────────────────────────────────────────

/// Convert decimal hours to whole minutes, rounding to the nearest minute.
///
/// Negative and NaN inputs clamp to zero.  Anything above
/// [`MAX_DURATION_MINUTES`], `+inf` included, saturates at it.
#[inline]
pub fn hours_to_minutes(hours: f64) -> u64 {
    if hours.is_nan() || hours <= 0.0 {
        return 0;
    }
    (hours * MINUTES_PER_HOUR as f64).round().min(MAX_DURATION_MINUTES as f64) as u64
}

/// Convert whole minutes to decimal hours (unrounded).
#[inline]
pub fn minutes_to_hours(minutes: u64) -> f64 {
    minutes as f64 / MINUTES_PER_HOUR as f64
}

/// Round to two decimal places, the precision used for every hour value a
/// plan reports.
#[inline]
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
