//! CSV export backend.
//!
//! Creates two files in the output directory:
//! - `events.csv`:       `day,status,start_hour,end_hour`
//! - `daily_totals.csv`: `day,off_duty,sleeper,driving,on_duty`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::PlanWriter;
use crate::{EventRow, OutputResult, TotalsRow};

pub const EVENTS_FILE: &str = "events.csv";
pub const TOTALS_FILE: &str = "daily_totals.csv";

pub struct CsvWriter {
    events:   Writer<File>,
    totals:   Writer<File>,
    finished: bool,
}

impl CsvWriter {
    /// Create `dir` if needed, open both files and write their header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        std::fs::create_dir_all(dir)?;

        let mut events = Writer::from_path(dir.join(EVENTS_FILE))?;
        events.write_record(["day", "status", "start_hour", "end_hour"])?;

        let mut totals = Writer::from_path(dir.join(TOTALS_FILE))?;
        totals.write_record(["day", "off_duty", "sleeper", "driving", "on_duty"])?;

        Ok(Self { events, totals, finished: false })
    }
}

impl PlanWriter for CsvWriter {
    fn write_events(&mut self, rows: &[EventRow]) -> OutputResult<()> {
        for row in rows {
            self.events.write_record(&[
                row.day.to_string(),
                row.status.as_str().to_string(),
                row.start_hour.to_string(),
                row.end_hour.to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_totals(&mut self, rows: &[TotalsRow]) -> OutputResult<()> {
        for row in rows {
            self.totals.write_record(&[
                row.day.to_string(),
                row.off_duty.to_string(),
                row.sleeper.to_string(),
                row.driving.to_string(),
                row.on_duty.to_string(),
            ])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.events.flush()?;
        self.totals.flush()?;
        Ok(())
    }
}
