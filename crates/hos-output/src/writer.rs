//! The `PlanWriter` trait implemented by export backends.

use crate::{EventRow, OutputResult, TotalsRow};

pub trait PlanWriter {
    /// Write a batch of per-day events.
    fn write_events(&mut self, rows: &[EventRow]) -> OutputResult<()>;

    /// Write a batch of per-day totals.
    fn write_totals(&mut self, rows: &[TotalsRow]) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent.
    fn finish(&mut self) -> OutputResult<()>;
}
