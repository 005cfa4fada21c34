use serde::{Deserialize, Serialize};

use crate::function::{Scalar, Vector};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
/// Outcome of a single Newton step
pub enum StepStatus {
    /// Step computed and applied
    Success,
    /// Hessian is singular or too ill-conditioned to solve
    Singular,
    /// Gradient or Hessian contains non-finite values
    NonFinite,
}

impl StepStatus {
    /// Checks whether the step was applied.
    pub fn is_success(&self) -> bool {
        *self == StepStatus::Success
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
/// Possible outcomes of an optimization routine
pub enum StatusCode {
    /// Optimization not started
    Initialized,
    /// Stationary point found (up to defined tolerance)
    Optimal,
    /// Maximum number of steps reached
    MaxSteps,
    /// Time limit reached
    TimeLimit,
    /// Stopped by the callback function
    Callback,
    /// Step not possible because of a degenerate Hessian
    Singular,
    /// Step not possible because of non-finite derivatives
    NonFinite,
}

impl From<StepStatus> for StatusCode {
    fn from(status: StepStatus) -> Self {
        match status {
            // a successful step alone says nothing about optimality
            StepStatus::Success => StatusCode::Initialized,
            StepStatus::Singular => StatusCode::Singular,
            StepStatus::NonFinite => StatusCode::NonFinite,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
/// A struct containing information about the current point and state of the optimization routine
pub struct Status {
    /// Current parameter vector
    pub x: Vector,
    /// Norm of the gradient at `x`
    pub residual: Scalar,
    /// Current status
    pub code: StatusCode,
    /// Number of conducted steps
    pub steps: usize,
    /// Elapsed time (in seconds)
    pub time: f64,
}

impl Status {
    /// Create a [`Status`] struct starting at the point `x`
    pub fn new(x: Vector) -> Status {
        Status {
            x,
            residual: f64::INFINITY,
            code: StatusCode::Initialized,
            steps: 0,
            time: 0.0,
        }
    }

    /// Checks whether the routine stopped at a stationary point.
    pub fn is_optimal(&self) -> bool {
        self.code == StatusCode::Optimal
    }
}
