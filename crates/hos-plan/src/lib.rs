//! `hos-plan`: Hours-of-Service duty-schedule generator.
//!
//! Given trip legs and the driver's cycle usage, produces a minute-accurate
//! duty timeline that respects the 11-hour driving cap, the 14-hour window,
//! the 30-minute break after 8 hours of driving, the 10-hour reset rest, the
//! 70-hour/8-day cycle and the 34-hour restart.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                  |
//! |----------------|-----------------------------------------------------------|
//! | [`leg`]        | `Leg`                                                     |
//! | [`loader`]     | `load_legs_csv`, `load_legs_reader`                       |
//! | [`timeline`]   | `Interval`, `Timeline` (merging), `RestInsertion`         |
//! | [`state`]      | `DutyState`: the four depletable counters                 |
//! | [`generator`]  | `generate`, `Generator`: the simulation                   |
//! | [`split`]      | `split_by_day`, `DayEvents`, `Event`                      |
//! | [`totals`]     | `DailyTotals`, `PlanTotals`                               |
//! | [`plan`]       | `Plan`                                                    |
//! | [`builder`]    | `PlanBuilder`                                             |
//! | [`batch`]      | `PlanRequest`, `generate_batch`                           |
//! | [`error`]      | `PlanError`, `PlanResult<T>`                              |
//!
//! # Pipeline
//!
//! ```text
//! HosRules ──to_minutes──► Generator ──Timeline──► split_by_day ──► Plan
//!   (hours)                (minutes)   (global)     (day-local hours)
//! ```
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                  |
//! |------------|---------------------------------------------------------|
//! | `serde`    | `Serialize`/`Deserialize` on plan types; TOML rules.    |
//! | `parallel` | `generate_batch` runs on Rayon's thread pool.           |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use hos_core::HosRules;
//! use hos_plan::{Leg, generate};
//!
//! let legs = [Leg::drive(1.0).with_load(1.0), Leg::drive(13.0).with_unload(1.0)];
//! let plan = generate(&legs, 24.0, &HosRules::default())?;
//! for day in &plan.per_day {
//!     println!("day {}: {} events", day.day, day.events.len());
//! }
//! ```

pub mod batch;
pub mod builder;
pub mod error;
pub mod generator;
pub mod leg;
pub mod loader;
pub mod plan;
pub mod split;
pub mod state;
pub mod timeline;
pub mod totals;


pub use batch::{PlanRequest, generate_batch};
pub use builder::PlanBuilder;
pub use error::{PlanError, PlanResult};
pub use generator::{DEFAULT_MAX_STEPS, Generator, generate};
pub use leg::Leg;
pub use loader::{load_legs_csv, load_legs_reader};
pub use plan::Plan;
pub use split::{DayEvents, Event, split_by_day};
pub use state::DutyState;
pub use timeline::{Interval, RestInsertion, RestKind, Timeline};
pub use totals::{DailyTotals, PlanTotals};
