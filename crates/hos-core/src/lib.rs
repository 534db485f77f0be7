//! `hos-core`: foundational types for the `hos_plan` workspace.
//!
//! This crate is a dependency of every other `hos-*` crate.  It has no
//! `hos-*` dependencies and minimal external ones (only `thiserror`, plus
//! optional `serde`/`toml`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`time`]        | `Minute`, hour/minute conversion, 2-decimal rounding  |
//! | [`status`]      | `DutyStatus` enum                                     |
//! | [`rules`]       | `HosRules` (hour-based options), `RuleMinutes`        |
//! | [`error`]       | `HosError`, `HosResult`                               |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types and     |
//! |         | enables `HosRules::from_toml_str` / `HosRules::load`.      |

pub mod error;
pub mod rules;
pub mod status;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{HosError, HosResult};
pub use rules::{HosRules, RuleMinutes};
pub use status::DutyStatus;
pub use time::{
    MAX_DURATION_MINUTES, MINUTES_PER_DAY, MINUTES_PER_HOUR, Minute, hours_to_minutes,
    minutes_to_hours, round2,
};
