//! Find stationary points of multivariate functions with Newton's method.
//!
//! The objective is given only through its gradient and Hessian (see [`function::F`]).
//! A single [`newton::step`] reports its outcome as a [`StepStatus`] and never panics on
//! degenerate Hessians; [`newton::solve`] drives the step until the gradient norm is small enough.
#![warn(missing_docs)]

#[cfg(feature = "wasm")]
#[macro_use]
mod console;

pub mod function;
pub mod newton;
mod time;

mod status;
pub use crate::status::{Status, StatusCode, StepStatus};
