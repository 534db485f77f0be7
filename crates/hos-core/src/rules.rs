//! Regulatory constants for the property-carrying driver ruleset.
//!
//! [`HosRules`] holds every option in the units a caller thinks in (hours,
//! plus minutes for the short break).  The planner never reads it directly;
//! it converts once to [`RuleMinutes`] and simulates on whole minutes.
//!
//! With the `serde` feature, rules load from TOML.  Every field carries a
//! default, so a file only names what it overrides:
//!
//! ```toml
//! cycle_limit_hours = 60
//! restart_hours     = 34
//! ```

use crate::time::{MAX_DURATION_MINUTES, hours_to_minutes};
#[cfg(feature = "serde")]
use crate::{HosError, HosResult};

/// Minimum off-duty length after which the 14-hour window is formally reset.
/// Initial rests shorter than this only produce an advisory note.
pub const FULL_RESET_REST_HOURS: f64 = 10.0;

// ── HosRules ──────────────────────────────────────────────────────────────────

/// Hour-based planner options.  `Default` is the federal 11/14/70 ruleset.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct HosRules {
    /// Sleeper-berth rest placed at the very start of the plan.
    pub rest_before_start_hours: f64,
    /// On-duty preparation (pre-trip inspection) before the first leg.
    pub pre_drive_on_duty_hours: f64,
    /// Load time for legs that do not specify `load_hours`.
    pub default_load_hours: f64,
    /// Unload default.  Legs without `unload_hours` do **not** use it; see
    /// `Leg::unload_minutes` in `hos-plan`.
    pub default_unload_hours: f64,
    /// On-duty window length.
    pub max_window_hours: f64,
    /// Driving allowed within one window.
    pub max_driving_hours_per_window: f64,
    /// Driving allowed before a break becomes mandatory.
    pub max_continuous_driving_hours: f64,
    /// Length of the mandatory break, in minutes.
    pub break_minutes_after_continuous: f64,
    /// Rest inserted when the window or the driving allowance runs out.
    pub rest_after_window_hours: f64,
    /// Length of a cycle restart.
    pub restart_hours: f64,
    /// On-duty hours allowed in the rolling 8-day cycle.
    pub cycle_limit_hours: f64,
    /// Soft planning horizon.
    pub max_plan_hours: f64,
}

impl Default for HosRules {
    fn default() -> Self {
        Self {
            rest_before_start_hours:        10.0,
            pre_drive_on_duty_hours:        0.5,
            default_load_hours:             1.0,
            default_unload_hours:           1.0,
            max_window_hours:               14.0,
            max_driving_hours_per_window:   11.0,
            max_continuous_driving_hours:   8.0,
            break_minutes_after_continuous: 30.0,
            rest_after_window_hours:        10.0,
            restart_hours:                  34.0,
            cycle_limit_hours:              70.0,
            max_plan_hours:                 7.0 * 24.0,
        }
    }
}

impl HosRules {
    /// Convert every option to whole minutes.
    ///
    /// Negative and NaN values clamp to zero and oversized values saturate at
    /// [`MAX_DURATION_MINUTES`].  The break is at least one minute so a forced
    /// break always advances the clock.
    pub fn to_minutes(&self) -> RuleMinutes {
        let brk = self.break_minutes_after_continuous;
        let break_len = if brk.is_nan() {
            1
        } else {
            brk.round().clamp(1.0, MAX_DURATION_MINUTES as f64) as u64
        };

        RuleMinutes {
            initial_rest:       hours_to_minutes(self.rest_before_start_hours),
            pre_drive:          hours_to_minutes(self.pre_drive_on_duty_hours),
            default_load:       hours_to_minutes(self.default_load_hours),
            default_unload:     hours_to_minutes(self.default_unload_hours),
            window:             hours_to_minutes(self.max_window_hours),
            driving_per_window: hours_to_minutes(self.max_driving_hours_per_window),
            continuous_driving: hours_to_minutes(self.max_continuous_driving_hours),
            break_len,
            rest_after_window:  hours_to_minutes(self.rest_after_window_hours),
            restart:            hours_to_minutes(self.restart_hours),
            cycle_limit:        hours_to_minutes(self.cycle_limit_hours),
            horizon:            hours_to_minutes(self.max_plan_hours),
        }
    }

    /// Parse rules from a TOML document.  Omitted keys keep their defaults;
    /// unknown keys are an error.
    #[cfg(feature = "serde")]
    pub fn from_toml_str(s: &str) -> HosResult<Self> {
        toml::from_str(s).map_err(|e| HosError::Parse(e.to_string()))
    }

    /// Read and parse a TOML rules file.
    #[cfg(feature = "serde")]
    pub fn load(path: &std::path::Path) -> HosResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }
}

// ── RuleMinutes ───────────────────────────────────────────────────────────────

/// [`HosRules`] converted to whole minutes.  Built by [`HosRules::to_minutes`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RuleMinutes {
    pub initial_rest:       u64,
    pub pre_drive:          u64,
    pub default_load:       u64,
    pub default_unload:     u64,
    pub window:             u64,
    pub driving_per_window: u64,
    pub continuous_driving: u64,
    /// Always `>= 1`.
    pub break_len:          u64,
    pub rest_after_window:  u64,
    pub restart:            u64,
    pub cycle_limit:        u64,
    pub horizon:            u64,
}

impl Default for RuleMinutes {
    fn default() -> Self {
        HosRules::default().to_minutes()
    }
}
