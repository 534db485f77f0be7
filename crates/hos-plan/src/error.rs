//! Error types for hos-plan.

use hos_core::{HosError, Minute};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlanError {
    /// The simulation failed to make progress within its step budget.  Only
    /// reachable with a pathological configuration (e.g. a zero-length window
    /// and a zero-length reset rest); surface it to users as "could not
    /// compute a valid schedule".
    #[error("could not compute a valid schedule: exceeded {limit} simulation steps at {at}")]
    IterationLimit { limit: u64, at: Minute },

    #[error("leg parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Core(#[from] HosError),
}

pub type PlanResult<T> = Result<T, PlanError>;
