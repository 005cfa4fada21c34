use serde::{Deserialize, Serialize};

/// Parameters of Newton's method
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct Params {
    /// Termination tolerance on the gradient norm
    pub tol: f64,
    /// Maximum number of steps
    pub max_steps: usize,
    /// Frequency of logging (`0` for no logging)
    pub verbose: usize,
    /// Time limit (in seconds)
    pub time_limit: f64,
    /// Singularity tolerance of the Hessian (`None` for a default depending on the dimension)
    pub singular_tol: Option<f64>,
}

impl Params {
    const DEFAULT_TOL: f64 = 1e-8;
    const DEFAULT_MAX_STEPS: usize = 100;
    const DEFAULT_VERBOSE: usize = 0;
    const DEFAULT_TIME_LIMIT: f64 = f64::INFINITY;

    /// Creates a new [`Params`] struct with default parameter values.
    pub fn new() -> Self {
        Params {
            tol: Self::DEFAULT_TOL,
            max_steps: Self::DEFAULT_MAX_STEPS,
            verbose: Self::DEFAULT_VERBOSE,
            time_limit: Self::DEFAULT_TIME_LIMIT,
            singular_tol: None,
        }
    }

    /// Sets the termination tolerance on the gradient norm.
    pub fn with_tol(mut self, tol: f64) -> Self {
        self.tol = tol;
        self
    }

    /// Sets the maximum number of steps.
    pub fn with_max_steps(mut self, max_steps: usize) -> Self {
        self.max_steps = max_steps;
        self
    }

    /// Sets the frequency of logging.
    pub fn with_verbose(mut self, verbose: usize) -> Self {
        self.verbose = verbose;
        self
    }

    /// Sets the time limit (in seconds).
    pub fn with_time_limit(mut self, time_limit: f64) -> Self {
        self.time_limit = time_limit;
        self
    }

    /// Sets the singularity tolerance of the Hessian.
    pub fn with_singular_tol(mut self, singular_tol: f64) -> Self {
        self.singular_tol = Some(singular_tol);
        self
    }
}

impl Default for Params {
    fn default() -> Self {
        Self::new()
    }
}
