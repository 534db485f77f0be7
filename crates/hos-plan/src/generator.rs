//! The duty-schedule simulation.
//!
//! # Step order
//!
//! ```text
//! setup:
//!   ① initial rest ≥ restart length      → cycle counter zeroed (note)
//!   ② cycle already at the limit         → restart at minute 0 (note)
//!   ③ initial rest                       → sleeper
//! prep:   consume_service(pre_drive)
//! per leg:
//!   consume_driving(drive) → consume_service(load) → consume_service(unload)
//! finish:
//!   pad with off-duty to the next day boundary if the plan ends on duty
//!   split into per-day buckets
//! ```
//!
//! Each pass of a consume loop first checks the window (and, when driving,
//! the driving allowance), then the cycle, then the continuous-driving
//! allowance, and only then spends time.  Any exhausted resource is resolved
//! by inserting the matching rest and re-checking from the top.
//!
//! Every pass costs one step of a fixed budget ([`DEFAULT_MAX_STEPS`]).  A
//! configuration that cannot make progress (for instance a zero-length window
//! with a zero-length reset rest) exhausts the budget and fails with
//! [`PlanError::IterationLimit`] instead of spinning.

use hos_core::rules::FULL_RESET_REST_HOURS;
use hos_core::{
    DutyStatus, HosRules, MINUTES_PER_DAY, Minute, RuleMinutes, hours_to_minutes,
    minutes_to_hours, round2,
};
use tracing::{debug, warn};

use crate::split::split_by_day;
use crate::state::{DutyState, signed};
use crate::timeline::{RestInsertion, RestKind, Timeline};
use crate::{Leg, Plan, PlanError, PlanResult};

/// Step budget for one plan.  Regulatory defaults on a multi-week trip use a
/// few hundred steps.
pub const DEFAULT_MAX_STEPS: u64 = 50_000;

/// Forced off-duty length when no driving chunk fits, capped by the break.
const FALLBACK_OFF_DUTY_MINUTES: u64 = 15;

/// Plan `legs` for a driver who has already spent `hours_used_in_cycle` of
/// the cycle.
///
/// Deterministic: the same inputs always produce the same plan.  Regulatory
/// limits never fail; they are resolved with rests, breaks and restarts and
/// described in [`Plan::notes`].
pub fn generate(legs: &[Leg], hours_used_in_cycle: f64, rules: &HosRules) -> PlanResult<Plan> {
    Generator::new(rules.to_minutes(), hours_used_in_cycle, DEFAULT_MAX_STEPS).run(legs)
}

// ── Generator ─────────────────────────────────────────────────────────────────

/// One plan in progress.  Consumed by [`run`][Self::run].
pub struct Generator {
    limits:          RuleMinutes,
    state:           DutyState,
    timeline:        Timeline,
    insertions:      Vec<RestInsertion>,
    notes:           Vec<String>,
    steps:           u64,
    max_steps:       u64,
    horizon_overrun: bool,
}

impl Generator {
    pub fn new(limits: RuleMinutes, hours_used_in_cycle: f64, max_steps: u64) -> Self {
        Self {
            limits,
            state:           DutyState::new(limits, hours_to_minutes(hours_used_in_cycle)),
            timeline:        Timeline::new(),
            insertions:      Vec::new(),
            notes:           Vec::new(),
            steps:           0,
            max_steps,
            horizon_overrun: false,
        }
    }

    /// Read-only view of the counters, mainly for tests.
    pub fn state(&self) -> &DutyState {
        &self.state
    }

    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    /// Run the whole plan: setup, prep, every leg, then post-processing.
    pub fn run(mut self, legs: &[Leg]) -> PlanResult<Plan> {
        debug!(
            legs = legs.len(),
            used_in_cycle_min = self.state.used_in_cycle,
            "generating duty plan"
        );

        self.setup();

        if self.limits.pre_drive > 0 {
            self.consume_service(self.limits.pre_drive)?;
        }

        for leg in legs {
            self.step()?;

            let drive = leg.drive_minutes();
            if drive > 0 {
                self.consume_driving(drive)?;
            }

            let load = leg.load_minutes(self.limits.default_load);
            if load > 0 {
                self.consume_service(load)?;
            }

            let unload = leg.unload_minutes();
            if unload > 0 {
                self.consume_service(unload)?;
            }
        }

        self.pad_last_day();
        Ok(self.finish())
    }

    // ── Setup ─────────────────────────────────────────────────────────────

    fn setup(&mut self) {
        let limits = self.limits;

        if limits.initial_rest >= limits.restart && self.state.used_in_cycle > 0 {
            self.notes.push(format!(
                "Initial rest of {} covers the {} restart: cycle counter reset.",
                hours_label(limits.initial_rest),
                hours_label(limits.restart),
            ));
            self.state.used_in_cycle = 0;
        }

        if self.state.cycle_exhausted() {
            let used_hours = (self.state.used_in_cycle as f64 / 60.0).round();
            self.notes.push(format!(
                "Already {used_hours}h into the cycle: inserted a {} restart before starting.",
                hours_label(limits.restart),
            ));
            let span = self.state.take_restart();
            self.record(RestKind::Restart, span);
        }

        if limits.initial_rest > 0 {
            let span = self.state.advance(limits.initial_rest);
            self.record(RestKind::InitialRest, span);

            if limits.initial_rest < hours_to_minutes(FULL_RESET_REST_HOURS) {
                warn!(initial_rest_min = limits.initial_rest, "initial rest shorter than a full reset");
                self.notes.push(format!(
                    "Warning: initial rest of {:.2}h is under {FULL_RESET_REST_HOURS}h; \
                     the 14h window may not be formally reset.",
                    minutes_to_hours(limits.initial_rest),
                ));
            }
        }
    }

    // ── Consumption ───────────────────────────────────────────────────────

    /// Spend `minutes` of on-duty, not-driving time, inserting reset rests
    /// and restarts as the window or the cycle runs out.
    pub fn consume_service(&mut self, minutes: u64) -> PlanResult<()> {
        let mut remaining = signed(minutes);
        while remaining > 0 {
            self.step()?;
            if self.past_horizon() {
                return Ok(());
            }

            if self.state.window_exhausted() {
                self.reset_rest();
                continue;
            }

            self.ensure_cycle_capacity()?;
            if self.state.cycle_remaining() <= 0 {
                continue;
            }

            let chunk = self.state.service_chunk(remaining).max(0);
            let span = self.state.work(chunk as u64);
            self.timeline.push(DutyStatus::OnDuty, span);
            remaining -= chunk;
        }
        Ok(())
    }

    /// Spend `minutes` of driving, inserting reset rests, restarts and
    /// breaks as the allowances run out.
    pub fn consume_driving(&mut self, minutes: u64) -> PlanResult<()> {
        let mut remaining = signed(minutes);
        while remaining > 0 {
            self.step()?;
            if self.past_horizon() {
                return Ok(());
            }

            if self.state.window_exhausted() || self.state.driving_exhausted() {
                self.reset_rest();
                continue;
            }

            self.ensure_cycle_capacity()?;
            if self.state.cycle_remaining() <= 0 {
                continue;
            }

            if self.state.continuous_allowance() == 0 {
                self.take_break(RestKind::Break, self.limits.break_len);
                continue;
            }

            let chunk = self.state.driving_chunk(remaining);
            if chunk <= 0 {
                let minutes = FALLBACK_OFF_DUTY_MINUTES.min(self.limits.break_len);
                self.take_break(RestKind::Fallback, minutes);
                continue;
            }

            let span = self.state.drive(chunk as u64);
            self.timeline.push(DutyStatus::Driving, span);
            remaining -= chunk;

            // Threshold hit exactly with driving left: break right away.
            if self.state.continuous_since_break >= signed(self.limits.continuous_driving)
                && remaining > 0
            {
                self.take_break(RestKind::Break, self.limits.break_len);
            }
        }
        Ok(())
    }

    // ── Rest insertion ────────────────────────────────────────────────────

    fn reset_rest(&mut self) {
        let span = self.state.take_reset_rest();
        self.record(RestKind::WindowReset, span);
    }

    fn take_break(&mut self, kind: RestKind, minutes: u64) {
        let span = self.state.take_break(minutes);
        self.record(kind, span);
    }

    /// Insert a restart if the cycle is used up.  Costs one step.
    fn ensure_cycle_capacity(&mut self) -> PlanResult<()> {
        self.step()?;
        if self.state.cycle_exhausted() {
            let span = self.state.take_restart();
            self.record(RestKind::Restart, span);
            self.notes.push(format!(
                "Inserted {} restart (cycle limit of {} reached).",
                hours_label(self.limits.restart),
                hours_label(self.limits.cycle_limit),
            ));
        }
        Ok(())
    }

    fn record(&mut self, kind: RestKind, span: std::ops::Range<Minute>) {
        if span.end <= span.start {
            return;
        }
        debug!(?kind, start = %span.start, minutes = span.end - span.start, "rest inserted");
        self.insertions.push(RestInsertion { kind, start: span.start, end: span.end });
        self.timeline.push(kind.status(), span);
    }

    // ── Guards ────────────────────────────────────────────────────────────

    fn step(&mut self) -> PlanResult<()> {
        self.steps += 1;
        if self.steps > self.max_steps {
            return Err(PlanError::IterationLimit { limit: self.max_steps, at: self.state.now });
        }
        Ok(())
    }

    /// `true` once the clock is more than a day past the horizon.  The first
    /// time this trips it records a note; consumption stops from then on.
    fn past_horizon(&mut self) -> bool {
        if self.state.now.0 <= self.limits.horizon + MINUTES_PER_DAY {
            return false;
        }
        if !self.horizon_overrun {
            self.horizon_overrun = true;
            warn!(at = %self.state.now, "planning horizon exceeded, truncating plan");
            self.notes
                .push("Warning: planning horizon exceeded; returning a partial plan.".to_string());
        }
        true
    }

    // ── Post-processing ───────────────────────────────────────────────────

    /// Off-duty to the next day boundary when the plan ends on duty, so the
    /// last day's grid is complete.  The clock is left where it was.
    fn pad_last_day(&mut self) {
        let ends_on_duty = self.timeline.last().is_none_or(|i| i.status.is_on_duty());
        if !ends_on_duty {
            return;
        }
        let end = self.timeline.end().unwrap_or(self.state.now);
        let boundary = end.ceil_day();
        if boundary > end {
            self.insertions.push(RestInsertion { kind: RestKind::DayPad, start: end, end: boundary });
            self.timeline.push(DutyStatus::OffDuty, end..boundary);
        }
    }

    fn finish(mut self) -> Plan {
        if self.state.now.0 > self.limits.horizon {
            self.notes.push(format!(
                "Warning: plan runs past the {} planning horizon.",
                hours_label(self.limits.horizon),
            ));
        }

        let used = self.state.used_in_cycle.max(0) as u64;
        let timeline = self.timeline.into_intervals();
        let per_day = split_by_day(&timeline);

        debug!(
            days = per_day.len(),
            intervals = timeline.len(),
            steps = self.steps,
            "duty plan generated"
        );

        Plan {
            per_day,
            notes: self.notes,
            final_cycle_used_hours: round2(minutes_to_hours(used)),
            timeline,
            insertions: self.insertions,
        }
    }
}

/// `2040` → `"34h"`, `630` → `"10.5h"`.
fn hours_label(minutes: u64) -> String {
    format!("{}h", round2(minutes_to_hours(minutes)))
}
