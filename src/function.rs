//! Function abstraction for gradients and Hessians
use ndarray::prelude::*;

/// Scalar type used for all arrays and norms
pub type Scalar = f64;
/// Parameter vector (also the shape of a gradient)
pub type Vector = Array1<Scalar>;
/// Dense square matrix (the shape of a Hessian)
pub type Matrix = Array2<Scalar>;

/// A callable mapping a parameter vector to a freshly allocated array.
///
/// The same type serves both roles of the solver; only the dimension `D` of the
/// returned array differs ([`Ix1`] for a gradient, [`Ix2`] for a Hessian).
pub type F<'a, D> = dyn Fn(&Vector) -> Array<Scalar, D> + 'a;
/// Gradient callable, returning a vector of length `n`
pub type Gradient<'a> = F<'a, Ix1>;
/// Hessian callable, returning an `n`×`n` matrix
pub type Hessian<'a> = F<'a, Ix2>;

/// Returns the Euclidean norm of a vector.
pub fn norm(v: &Vector) -> Scalar {
    v.dot(v).sqrt()
}

/// Checks whether all entries of an array are finite.
pub fn all_finite<D: Dimension>(a: &Array<Scalar, D>) -> bool {
    a.iter().all(|v| v.is_finite())
}
