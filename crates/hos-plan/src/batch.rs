//! Planning many independent requests at once.
//!
//! Plans share no state, so a batch is an embarrassingly parallel map.  With
//! the `parallel` Cargo feature the map runs on Rayon's thread pool; results
//! keep input order either way.

use hos_core::HosRules;

use crate::{Leg, Plan, PlanResult, generate};

/// Inputs for one plan.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlanRequest {
    pub legs:                Vec<Leg>,
    pub hours_used_in_cycle: f64,
    pub rules:               HosRules,
}

impl PlanRequest {
    pub fn generate(&self) -> PlanResult<Plan> {
        generate(&self.legs, self.hours_used_in_cycle, &self.rules)
    }
}

/// Generate one plan per request, in request order.
pub fn generate_batch(requests: &[PlanRequest]) -> Vec<PlanResult<Plan>> {
    #[cfg(not(feature = "parallel"))]
    {
        requests.iter().map(PlanRequest::generate).collect()
    }

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;

        requests.par_iter().map(PlanRequest::generate).collect()
    }
}
