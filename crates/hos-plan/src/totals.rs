//! Hour totals per status, per day and across a whole plan.

use hos_core::{DutyStatus, minutes_to_hours, round2};

use crate::split::DayEvents;
use crate::timeline::Interval;

/// Hours spent in each status on one day, rounded to two decimals.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DailyTotals {
    pub day:      u64,
    pub off_duty: f64,
    pub sleeper:  f64,
    pub driving:  f64,
    pub on_duty:  f64,
}

impl DailyTotals {
    pub fn from_day(day: &DayEvents) -> Self {
        let mut totals = DailyTotals { day: day.day, ..Default::default() };
        for event in &day.events {
            *totals.slot(event.status) += event.hours();
        }
        for status in DutyStatus::ALL {
            let slot = totals.slot(status);
            *slot = round2(*slot);
        }
        totals
    }

    pub fn hours(&self, status: DutyStatus) -> f64 {
        match status {
            DutyStatus::OffDuty => self.off_duty,
            DutyStatus::Sleeper => self.sleeper,
            DutyStatus::Driving => self.driving,
            DutyStatus::OnDuty  => self.on_duty,
        }
    }

    /// Driving plus on-duty-not-driving.
    pub fn total_on_duty(&self) -> f64 {
        round2(self.driving + self.on_duty)
    }

    /// Sum over all four statuses; 24 for every full day.
    pub fn total(&self) -> f64 {
        round2(self.off_duty + self.sleeper + self.driving + self.on_duty)
    }

    fn slot(&mut self, status: DutyStatus) -> &mut f64 {
        match status {
            DutyStatus::OffDuty => &mut self.off_duty,
            DutyStatus::Sleeper => &mut self.sleeper,
            DutyStatus::Driving => &mut self.driving,
            DutyStatus::OnDuty  => &mut self.on_duty,
        }
    }
}

/// Whole-plan totals.  On-duty includes driving; off-duty includes sleeper.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlanTotals {
    pub driving:  f64,
    pub on_duty:  f64,
    pub off_duty: f64,
}

impl PlanTotals {
    pub fn from_intervals(intervals: &[Interval]) -> Self {
        let (mut driving, mut on_duty, mut off_duty) = (0u64, 0u64, 0u64);
        for interval in intervals {
            let m = interval.minutes();
            match interval.status {
                DutyStatus::Driving => {
                    driving += m;
                    on_duty += m;
                }
                DutyStatus::OnDuty => on_duty += m,
                DutyStatus::OffDuty | DutyStatus::Sleeper => off_duty += m,
            }
        }
        Self {
            driving:  round2(minutes_to_hours(driving)),
            on_duty:  round2(minutes_to_hours(on_duty)),
            off_duty: round2(minutes_to_hours(off_duty)),
        }
    }
}
