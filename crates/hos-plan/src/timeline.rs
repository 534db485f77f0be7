//! Global-minute duty timeline and the record of inserted rests.
//!
//! The generator appends intervals in clock order through
//! [`Timeline::push`], which drops empty spans and extends the previous
//! interval instead of starting a new one when the status repeats.  The
//! timeline therefore never holds two touching intervals with the same
//! status, which also means a restart followed by a reset rest shows up as
//! a single sleeper span.  [`RestInsertion`] keeps the individual rests
//! apart for callers that need to know why a span exists.

use std::ops::Range;

use hos_core::{DutyStatus, Minute};

// ── Interval ──────────────────────────────────────────────────────────────────

/// A status held over `[start, end)` in global minutes.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Interval {
    pub status: DutyStatus,
    pub start:  Minute,
    pub end:    Minute,
}

impl Interval {
    #[inline]
    pub fn minutes(&self) -> u64 {
        self.end - self.start
    }
}

// ── Timeline ──────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, Default)]
pub struct Timeline {
    intervals: Vec<Interval>,
}

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `status` over `span`, merging with the previous interval when
    /// it has the same status and ends exactly at `span.start`.
    ///
    /// Empty and inverted spans are ignored.
    pub fn push(&mut self, status: DutyStatus, span: Range<Minute>) {
        if span.end <= span.start {
            return;
        }
        if let Some(last) = self.intervals.last_mut() {
            if last.status == status && last.end == span.start {
                last.end = span.end;
                return;
            }
        }
        self.intervals.push(Interval { status, start: span.start, end: span.end });
    }

    pub fn last(&self) -> Option<&Interval> {
        self.intervals.last()
    }

    /// End of the last interval, if any.
    pub fn end(&self) -> Option<Minute> {
        self.last().map(|i| i.end)
    }

    pub fn intervals(&self) -> &[Interval] {
        &self.intervals
    }

    pub fn into_intervals(self) -> Vec<Interval> {
        self.intervals
    }

    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    pub fn len(&self) -> usize {
        self.intervals.len()
    }
}

// ── Rest insertions ───────────────────────────────────────────────────────────

/// Why the generator placed a non-working span.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum RestKind {
    /// Configured rest before the first duty.
    InitialRest,
    /// Cycle restart (34 h by default).
    Restart,
    /// Reset rest after the window or the driving allowance ran out.
    WindowReset,
    /// Mandatory break after the continuous-driving limit.
    Break,
    /// Short forced off-duty when no driving chunk could be scheduled.
    Fallback,
    /// Off-duty padding to the end of the last day.
    DayPad,
}

impl RestKind {
    /// Status the span is logged under.
    pub fn status(self) -> DutyStatus {
        match self {
            RestKind::InitialRest | RestKind::Restart | RestKind::WindowReset => DutyStatus::Sleeper,
            RestKind::Break | RestKind::Fallback | RestKind::DayPad => DutyStatus::OffDuty,
        }
    }
}

/// One rest the generator inserted, before any merging.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RestInsertion {
    pub kind:  RestKind,
    pub start: Minute,
    pub end:   Minute,
}

impl RestInsertion {
    #[inline]
    pub fn minutes(&self) -> u64 {
        self.end - self.start
    }
}
