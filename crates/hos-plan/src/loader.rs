//! CSV leg loader.
//!
//! # CSV format
//!
//! One row per leg, in travel order.
//!
//! ```csv
//! drive_hours,load_hours,unload_hours,label
//! 1,1,,Yard to shipper
//! 13,,1,Shipper to consignee
//! ```
//!
//! Empty `load_hours` / `unload_hours` cells mean "unspecified" and pick up
//! the usual defaults (rules default for loading, zero for unloading).  An
//! empty `label` becomes `None`.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use crate::{Leg, PlanError, PlanResult};

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct LegRecord {
    drive_hours:  f64,
    load_hours:   Option<f64>,
    unload_hours: Option<f64>,
    label:        Option<String>,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load legs from a CSV file.
pub fn load_legs_csv(path: &Path) -> PlanResult<Vec<Leg>> {
    let file = std::fs::File::open(path)?;
    load_legs_reader(file)
}

/// Like [`load_legs_csv`] but accepts any `Read` source.
pub fn load_legs_reader<R: Read>(reader: R) -> PlanResult<Vec<Leg>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    csv_reader
        .deserialize::<LegRecord>()
        .enumerate()
        .map(|(i, result)| {
            let row = result.map_err(|e| PlanError::Parse(format!("leg {}: {e}", i + 1)))?;
            Ok(Leg {
                drive_hours:  row.drive_hours,
                load_hours:   row.load_hours,
                unload_hours: row.unload_hours,
                label:        row.label.filter(|l| !l.is_empty()),
            })
        })
        .collect()
}
