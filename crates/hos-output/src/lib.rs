//! `hos-output`: duty-plan export writers.
//!
//! | Backend | Files created                          |
//! |---------|----------------------------------------|
//! | CSV     | `events.csv`, `daily_totals.csv`       |
//!
//! The files are a write-only rendering of one finished plan, the same
//! tables the `trip` CLI prints.  Nothing here reads them back.
//!
//! Backends implement [`PlanWriter`]; [`write_plan`] flattens a
//! [`Plan`][hos_plan::Plan] into rows and feeds them to any writer.
//!
//! # Usage
//!
//! ```rust,ignore
//! use hos_output::{CsvWriter, PlanWriter, write_plan};
//!
//! let mut writer = CsvWriter::new(Path::new("./out"))?;
//! write_plan(&mut writer, &plan)?;
//! writer.finish()?;
//! ```

pub mod csv;
pub mod error;
pub mod export;
pub mod row;
pub mod writer;

#[cfg(test)]
mod tests;

pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use export::{event_rows, totals_rows, write_plan};
pub use row::{EventRow, TotalsRow};
pub use writer::PlanWriter;
