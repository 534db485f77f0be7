//! Trip legs: one drive segment plus optional dwell time at its destination.

use hos_core::hours_to_minutes;

/// One drive segment followed by loading and/or unloading at its end.
///
/// Durations are decimal hours.  Negative or non-finite values are treated
/// as zero when the leg is planned.
#[derive(Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Leg {
    pub drive_hours: f64,
    /// `None` uses `HosRules::default_load_hours`.
    pub load_hours: Option<f64>,
    /// `None` means no unloading; the rules' unload default is not applied.
    pub unload_hours: Option<f64>,
    /// Free-form description (e.g. "Pickup – Memphis").
    pub label: Option<String>,
}

impl Leg {
    /// A leg that only drives.  Loading still falls back to the default.
    pub fn drive(hours: f64) -> Self {
        Self { drive_hours: hours, ..Self::default() }
    }

    pub fn with_load(mut self, hours: f64) -> Self {
        self.load_hours = Some(hours);
        self
    }

    pub fn with_unload(mut self, hours: f64) -> Self {
        self.unload_hours = Some(hours);
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn drive_minutes(&self) -> u64 {
        hours_to_minutes(self.drive_hours)
    }

    /// Explicit load time, or `default_load` when unspecified.
    pub fn load_minutes(&self, default_load: u64) -> u64 {
        self.load_hours.map_or(default_load, hours_to_minutes)
    }

    /// Explicit unload time, or zero when unspecified.
    ///
    /// Asymmetric with [`load_minutes`][Self::load_minutes]: the rules'
    /// `default_unload_hours` is never consulted here.
    pub fn unload_minutes(&self) -> u64 {
        self.unload_hours.map_or(0, hours_to_minutes)
    }
}
