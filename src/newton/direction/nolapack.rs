use crate::function::{Matrix, Scalar, Vector};
use log::debug;

use super::pivots_degenerate;

use rulinalg::matrix::decomposition::{Decomposition, PartialPivLu};
use rulinalg::matrix::{BaseMatrix, Matrix as DenseMatrix};
use rulinalg::vector::Vector as DenseVector;

pub fn solve_equilibrated(mat: Matrix, rhs: Vector, singular_tol: Scalar) -> Option<Vector> {
    let n = rhs.len();
    let mat = DenseMatrix::new(n, n, mat.iter().cloned().collect::<Vec<_>>());
    let mat_fact = match PartialPivLu::decompose(mat) {
        Ok(mat_fact) => mat_fact,
        Err(err) => {
            debug!("LU decomposition failed: {}", err);
            return None;
        }
    };
    let upper = mat_fact.clone().unpack().u;
    if pivots_degenerate(upper.diag(), singular_tol) {
        debug!("degenerate Hessian (relative pivot below {:e})", singular_tol);
        return None;
    }
    match mat_fact.solve(DenseVector::new(rhs.to_vec())) {
        Ok(dx) => Some(Vector::from(dx.into_vec())),
        Err(err) => {
            debug!("LU solve failed: {}", err);
            None
        }
    }
}
