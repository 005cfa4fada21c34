use log::info;

use super::direction::default_singular_tol;
use super::params::Params;
use crate::function::{norm, Gradient, Hessian, Vector};
use crate::status::{Status, StatusCode};
use crate::time::{now, until_now};

/// Uses Newton's method to find a stationary point starting from `x0`.
pub fn solve(
    df: &Gradient<'_>,
    ddf: &Hessian<'_>,
    x0: Vector,
    params: &Params,
    callback: Option<&dyn Fn(&Status) -> bool>,
) -> Status {
    let status = Status::new(x0);
    solve_with_status(status, df, ddf, params, callback)
}

/// Uses Newton's method to find a stationary point starting from a particular [`Status`].
///
/// The residual is the gradient norm, evaluated before every step independently of the step itself.
/// Unless the returned code is [`StatusCode::Optimal`], `status.x` must not be taken as a stationary point.
pub fn solve_with_status(
    status: Status,
    df: &Gradient<'_>,
    ddf: &Hessian<'_>,
    params: &Params,
    callback: Option<&dyn Fn(&Status) -> bool>,
) -> Status {
    let mut status = status;
    let start = now();
    let singular_tol = params
        .singular_tol
        .unwrap_or_else(|| default_singular_tol(status.x.len()));
    let mut step: usize = 0;

    if params.verbose > 0 {
        println!("{:>10} {:>10} {:>12} {:>10}", "step", "time", "residual", "code");
    }

    loop {
        let mut stop = false;

        // update steps and time
        status.steps = step;
        let elapsed = until_now(start);
        status.time = elapsed;

        // update residual
        status.residual = norm(&df(&status.x));

        // handle step limit
        if step >= params.max_steps {
            status.code = StatusCode::MaxSteps;
            stop = true;
        }

        // handle time limit
        if params.time_limit > 0.0 && elapsed >= params.time_limit {
            status.code = StatusCode::TimeLimit;
            stop = true;
        }

        // handle callback
        if let Some(callback_fn) = callback {
            if !stop && callback_fn(&status) {
                status.code = StatusCode::Callback;
                stop = true;
            }
        };

        // check for optimality
        let optimal = status.residual <= params.tol;
        if optimal {
            status.code = StatusCode::Optimal;
            stop = true;
        }

        // handle progress output
        if params.verbose > 0 && (step % params.verbose == 0 || stop) {
            println!(
                "{:10} {:10.2} {:12.06e} {:>10}",
                step,
                elapsed,
                status.residual,
                format!("{:?}", status.code),
            )
        }

        // terminate
        if stop {
            break;
        }

        // perform Newton step
        let step_status = super::step_with_tol(df, ddf, &mut status.x, singular_tol);
        if !step_status.is_success() {
            status.code = StatusCode::from(step_status);
            if params.verbose > 0 {
                println!(
                    "{:10} {:10.2} {:>12} {:>10}",
                    step,
                    until_now(start),
                    "",
                    format!("{:?}", status.code),
                )
            }
            break;
        }
        step += 1;
    }
    status.time = until_now(start);

    info!("Newton finished ({:?}).", status.code);
    info!("Iterations: {}", status.steps);
    info!(" Grad Norm: {:e}", status.residual);
    status
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::function::Matrix;
    use approx::assert_abs_diff_eq;
    use ndarray::array;
    use std::cell::Cell;

    fn df(x: &Vector) -> Vector {
        array![2.0 * x[0] + 2.0, 2.0 * x[1] + 8.0]
    }

    fn ddf(_x: &Vector) -> Matrix {
        array![[2.0, 0.0], [0.0, 2.0]]
    }

    #[test]
    fn quadratic_in_one_step() {
        let status = solve(&df, &ddf, array![-3.0, -2.0], &Params::new(), None);
        assert_eq!(status.code, StatusCode::Optimal);
        assert_eq!(status.steps, 1);
        assert_abs_diff_eq!(status.x[0], -1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(status.x[1], -4.0, epsilon = 1e-12);
        assert!(status.residual < 1e-8);
    }

    #[test]
    fn start_at_optimum() {
        let status = solve(&df, &ddf, array![-1.0, -4.0], &Params::new(), None);
        assert!(status.is_optimal());
        assert_eq!(status.steps, 0);
        assert_eq!(status.residual, 0.0);
    }

    #[test]
    fn singular_hessian_stops() {
        let zero = |_x: &Vector| Matrix::zeros((2, 2));
        let status = solve(&df, &zero, array![-3.0, -2.0], &Params::new(), None);
        assert_eq!(status.code, StatusCode::Singular);
        assert_eq!(status.steps, 0);
        assert_eq!(status.x, array![-3.0, -2.0]);
    }

    #[test]
    fn non_finite_gradient_stops() {
        let bad = |_x: &Vector| array![f64::NAN, 1.0];
        let status = solve(&bad, &ddf, array![0.0, 0.0], &Params::new(), None);
        assert_eq!(status.code, StatusCode::NonFinite);
    }

    #[test]
    fn step_limit() {
        let params = Params::new().with_max_steps(0);
        let status = solve(&df, &ddf, array![-3.0, -2.0], &params, None);
        assert_eq!(status.code, StatusCode::MaxSteps);
        assert_eq!(status.x, array![-3.0, -2.0]);
    }

    #[test]
    fn callback_stops() {
        let calls = Cell::new(0);
        let callback = |_status: &Status| {
            calls.set(calls.get() + 1);
            true
        };
        let status = solve(&df, &ddf, array![-3.0, -2.0], &Params::new(), Some(&callback));
        assert_eq!(status.code, StatusCode::Callback);
        assert_eq!(status.steps, 0);
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn callback_sees_current_residual() {
        let seen = Cell::new(f64::NAN);
        let callback = |status: &Status| {
            seen.set(status.residual);
            false
        };
        let status = solve(&df, &ddf, array![-3.0, -2.0], &Params::new(), Some(&callback));
        assert!(status.is_optimal());
        // last call sees the point that turned out optimal
        assert_abs_diff_eq!(seen.get(), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn callback_residual_on_first_call() {
        let seen = Cell::new(f64::NAN);
        let callback = |status: &Status| {
            seen.set(status.residual);
            true
        };
        solve(&df, &ddf, array![-3.0, -2.0], &Params::new(), Some(&callback));
        assert_abs_diff_eq!(seen.get(), norm(&df(&array![-3.0, -2.0])), epsilon = 1e-12);
    }

    #[test]
    fn time_limit() {
        // negative tolerance never reports optimality
        let params = Params::new().with_tol(-1.0).with_time_limit(1e-300);
        let callback = |_status: &Status| {
            std::thread::sleep(std::time::Duration::from_millis(1));
            false
        };
        let x0 = array![-1.0, -4.0];
        let status = solve(&df, &ddf, x0.clone(), &params, Some(&callback));
        assert_eq!(status.code, StatusCode::TimeLimit);
        assert!(status.steps <= 1);
        assert_eq!(status.x, x0);
    }

    #[test]
    fn custom_singular_tol() {
        let hess = |_x: &Vector| array![[1.0, 1.0], [1.0, 1.0 + 1e-6]];
        let params = Params::new().with_singular_tol(1e-3);
        let status = solve(&df, &hess, array![-3.0, -2.0], &params, None);
        assert_eq!(status.code, StatusCode::Singular);
    }

    #[test]
    fn verbose_output() {
        let params = Params::new().with_verbose(1);
        let status = solve(&df, &ddf, array![-3.0, -2.0], &params, None);
        assert!(status.is_optimal());
    }
}
