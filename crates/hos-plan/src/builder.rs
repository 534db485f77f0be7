//! Fluent builder for a single plan request.

use hos_core::HosRules;

use crate::generator::{DEFAULT_MAX_STEPS, Generator};
use crate::{Leg, Plan, PlanResult};

/// Fluent front end to [`generate`][crate::generate].
///
/// # Optional inputs (have defaults)
///
/// | Method                      | Default                   |
/// |-----------------------------|---------------------------|
/// | `.rules(r)`                 | `HosRules::default()`     |
/// | `.legs(v)` / `.leg(l)`      | no legs                   |
/// | `.hours_used_in_cycle(h)`   | `0.0`                     |
/// | `.max_steps(n)`             | [`DEFAULT_MAX_STEPS`]     |
///
/// # Example
///
/// ```rust,ignore
/// let plan = PlanBuilder::new()
///     .leg(Leg::drive(1.0).with_load(1.0))
///     .leg(Leg::drive(13.0).with_unload(1.0))
///     .hours_used_in_cycle(24.0)
///     .generate()?;
/// ```
#[derive(Clone, Debug)]
pub struct PlanBuilder {
    rules:               HosRules,
    legs:                Vec<Leg>,
    hours_used_in_cycle: f64,
    max_steps:           u64,
}

impl Default for PlanBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PlanBuilder {
    pub fn new() -> Self {
        Self {
            rules:               HosRules::default(),
            legs:                Vec::new(),
            hours_used_in_cycle: 0.0,
            max_steps:           DEFAULT_MAX_STEPS,
        }
    }

    pub fn rules(mut self, rules: HosRules) -> Self {
        self.rules = rules;
        self
    }

    /// Replace the leg list.
    pub fn legs(mut self, legs: Vec<Leg>) -> Self {
        self.legs = legs;
        self
    }

    /// Append one leg.
    pub fn leg(mut self, leg: Leg) -> Self {
        self.legs.push(leg);
        self
    }

    pub fn hours_used_in_cycle(mut self, hours: f64) -> Self {
        self.hours_used_in_cycle = hours;
        self
    }

    /// Override the simulation step budget.
    pub fn max_steps(mut self, steps: u64) -> Self {
        self.max_steps = steps;
        self
    }

    pub fn generate(&self) -> PlanResult<Plan> {
        Generator::new(self.rules.to_minutes(), self.hours_used_in_cycle, self.max_steps)
            .run(&self.legs)
    }
}
