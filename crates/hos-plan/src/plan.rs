//! The generator's output.

use crate::split::DayEvents;
use crate::timeline::{Interval, RestInsertion, RestKind};
use crate::totals::{DailyTotals, PlanTotals};

/// A generated duty plan.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Plan {
    /// Per-day events in day order.  Days without events are absent.
    pub per_day: Vec<DayEvents>,
    /// Advisory compliance remarks (restarts, short rests, horizon overrun).
    pub notes: Vec<String>,
    /// Cycle usage at the end of the plan, to feed into the next plan's
    /// `hours_used_in_cycle`.
    pub final_cycle_used_hours: f64,
    /// Merged global-minute intervals the days were split from.
    pub timeline: Vec<Interval>,
    /// Every rest the generator placed, unmerged, in clock order.
    pub insertions: Vec<RestInsertion>,
}

impl Plan {
    pub fn daily_totals(&self) -> Vec<DailyTotals> {
        self.per_day.iter().map(DailyTotals::from_day).collect()
    }

    pub fn total_hours(&self) -> PlanTotals {
        PlanTotals::from_intervals(&self.timeline)
    }

    /// Number of days the plan touches.
    pub fn day_count(&self) -> usize {
        self.per_day.len()
    }

    /// Inserted rests of one kind.
    pub fn insertions_of(&self, kind: RestKind) -> impl Iterator<Item = &RestInsertion> {
        self.insertions.iter().filter(move |i| i.kind == kind)
    }
}
