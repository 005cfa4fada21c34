//! Newton-Raphson method for stationary points
//!
//! [`step`] performs a single iteration and leaves the convergence criterion to the caller:
//!
//! ```
//! use ndarray::array;
//! use rusopt::function::{norm, Matrix, Vector};
//! use rusopt::{newton, StepStatus};
//!
//! // f(x, y) = x² + y² + 2x + 8y
//! let df = |x: &Vector| array![2.0 * x[0] + 2.0, 2.0 * x[1] + 8.0];
//! let ddf = |_x: &Vector| -> Matrix { array![[2.0, 0.0], [0.0, 2.0]] };
//!
//! let mut x = array![-3.0, -2.0];
//! let mut result = StepStatus::Success;
//! while result.is_success() && norm(&df(&x)) > 1e-3 {
//!     result = newton::step(&df, &ddf, &mut x);
//! }
//! assert!(result.is_success());
//! assert!((x[0] + 1.0).abs() < 1e-3 && (x[1] + 4.0).abs() < 1e-3);
//! ```
//!
//! [`solve`] packages this loop with step and time limits.
mod direction;
mod params;
mod solve;

pub use self::direction::{default_singular_tol, DEFAULT_SINGULAR_TOL};
pub use self::params::Params;
pub use self::solve::{solve, solve_with_status};

use crate::function::{all_finite, Gradient, Hessian, Scalar, Vector};
use crate::status::StepStatus;
use log::debug;

/// Performs one Newton step on `x` with the default singularity tolerance.
///
/// See [`step_with_tol`].
pub fn step(df: &Gradient<'_>, ddf: &Hessian<'_>, x: &mut Vector) -> StepStatus {
    step_with_tol(df, ddf, x, default_singular_tol(x.len()))
}

/// Performs one Newton step on `x`.
///
/// Evaluates gradient `g` and Hessian `H` once each at `x`, solves `H · dx = -g` and updates `x += dx`.
/// If the step fails, `x` is left untouched and must not be treated as refined.
pub fn step_with_tol(
    df: &Gradient<'_>,
    ddf: &Hessian<'_>,
    x: &mut Vector,
    singular_tol: Scalar,
) -> StepStatus {
    let grad = df(x);
    let hess = ddf(x);
    if !all_finite(&grad) || !all_finite(&hess) {
        debug!("non-finite derivatives at {}", x);
        return StepStatus::NonFinite;
    }
    match direction::newton(&grad, hess, singular_tol) {
        Some(dx) => {
            *x += &dx;
            StepStatus::Success
        }
        None => StepStatus::Singular,
    }
}
