//! Day splitting: global-minute intervals → per-day events in local hours.
//!
//! Runs after the simulation and knows nothing about the rules.  Each
//! interval is cut at every 1440-minute boundary it crosses; the pieces land
//! in the bucket of the day they fall in, with `start_hour`/`end_hour`
//! relative to that day's start and rounded to two decimals.  A piece that
//! runs to the end of its day reports `end_hour == 24.0`.

use std::collections::BTreeMap;

use hos_core::{DutyStatus, Minute, minutes_to_hours, round2};

use crate::timeline::Interval;

/// One status span within a single day.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Event {
    pub status:     DutyStatus,
    /// Hours after the day's start, in `[0, 24]`.
    pub start_hour: f64,
    /// Hours after the day's start, in `[0, 24]`.
    pub end_hour:   f64,
}

impl Event {
    pub fn hours(&self) -> f64 {
        self.end_hour - self.start_hour
    }
}

/// All events of one day, in clock order.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DayEvents {
    /// Zero-based day index; day 0 starts at plan start.
    pub day:    u64,
    pub events: Vec<Event>,
}

/// Split `intervals` (ordered, non-overlapping) into per-day buckets.
///
/// Days that no interval touches are absent from the result.
pub fn split_by_day(intervals: &[Interval]) -> Vec<DayEvents> {
    let mut by_day: BTreeMap<u64, Vec<Event>> = BTreeMap::new();

    for interval in intervals {
        let mut start = interval.start;
        while start < interval.end {
            let day = start.day();
            let day_start = Minute::day_start(day);
            let chunk_end = interval.end.min(start.next_day_start());

            by_day.entry(day).or_default().push(Event {
                status:     interval.status,
                start_hour: round2(minutes_to_hours(start - day_start)),
                end_hour:   round2(minutes_to_hours(chunk_end - day_start)),
            });
            start = chunk_end;
        }
    }

    by_day
        .into_iter()
        .map(|(day, events)| DayEvents { day, events })
        .collect()
}
