use crate::function::{all_finite, Matrix, Scalar, Vector};
use log::debug;

#[cfg(feature = "lapack")]
use ndarray_linalg::{Determinant, FactorizeInto, Solve};

#[cfg(not(feature = "lapack"))]
mod nolapack;
#[cfg(not(feature = "lapack"))]
use nolapack::solve_equilibrated;

/// Singularity tolerance per dimension, compared against the relative size of the smallest LU pivot
/// of the row-equilibrated Hessian.
pub const DEFAULT_SINGULAR_TOL: Scalar = 64.0 * Scalar::EPSILON;

/// Returns the default singularity tolerance for a problem with `n` variables.
pub fn default_singular_tol(n: usize) -> Scalar {
    DEFAULT_SINGULAR_TOL * n.max(1) as Scalar
}

/// Scales every row of the system `mat · dx = rhs` to unit norm.
///
/// Returns `false` if the matrix has a zero row.
fn equilibrate(mat: &mut Matrix, rhs: &mut Vector) -> bool {
    for (mut row, r) in mat.rows_mut().into_iter().zip(rhs.iter_mut()) {
        let scale = row.dot(&row).sqrt();
        if scale == 0.0 {
            return false;
        }
        row /= scale;
        *r /= scale;
    }
    true
}

/// Checks whether the smallest pivot of an LU factorization is negligible compared to the largest one.
fn pivots_degenerate<'a>(pivots: impl IntoIterator<Item = &'a Scalar>, singular_tol: Scalar) -> bool {
    let mut min = Scalar::INFINITY;
    let mut max: Scalar = 0.0;
    for &u in pivots {
        let u = u.abs();
        if u.is_nan() {
            return true;
        }
        min = min.min(u);
        max = max.max(u);
    }
    !(min > singular_tol * max)
}

#[cfg(feature = "lapack")]
fn solve_equilibrated(mat: Matrix, rhs: Vector, singular_tol: Scalar) -> Option<Vector> {
    let mat_fact = match mat.factorize_into() {
        Ok(mat_fact) => mat_fact,
        Err(err) => {
            debug!("LU factorization failed: {}", err);
            return None;
        }
    };
    let det = mat_fact.det().ok()?;
    if det == 0.0 || det.is_nan() || pivots_degenerate(mat_fact.a.diag(), singular_tol) {
        debug!("degenerate Hessian (relative pivot below {:e})", singular_tol);
        return None;
    }
    match mat_fact.solve_into(rhs) {
        Ok(dx) => Some(dx),
        Err(err) => {
            debug!("LU solve failed: {}", err);
            None
        }
    }
}

/// Computes the Newton direction `dx` solving `hess · dx = -grad`.
///
/// Returns `None` if the Hessian is degenerate.
pub fn newton(grad: &Vector, hess: Matrix, singular_tol: Scalar) -> Option<Vector> {
    let mut mat = hess;
    let mut rhs = -grad;
    if rhs.is_empty() {
        return Some(rhs);
    }
    if !equilibrate(&mut mat, &mut rhs) {
        debug!("degenerate Hessian (zero row)");
        return None;
    }
    let dx = solve_equilibrated(mat, rhs, singular_tol)?;
    if !all_finite(&dx) {
        debug!("Newton direction is not finite");
        return None;
    }
    Some(dx)
}
