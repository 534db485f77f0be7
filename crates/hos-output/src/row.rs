//! Flat rows written by output backends.

use hos_core::DutyStatus;

/// One per-day event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EventRow {
    pub day:        u64,
    pub status:     DutyStatus,
    pub start_hour: f64,
    pub end_hour:   f64,
}

/// Hours per status for one day.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TotalsRow {
    pub day:      u64,
    pub off_duty: f64,
    pub sleeper:  f64,
    pub driving:  f64,
    pub on_duty:  f64,
}
