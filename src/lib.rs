//! Cubic spline interpolation on non-uniform meshes.
//!
//! A spline is built from samples `(x, y)` by solving a tridiagonal system
//! for the second derivatives ("momentums") at the interior knots. The
//! ends are fixed either by prescribed second derivatives (natural spline
//! when both are zero) or by prescribed first derivatives (clamped
//! spline). Each segment is stored as a cubic in the plain polynomial
//! basis; outside the knots the spline continues along its end tangents.
//!
//! ```
//! use nonuniform_cubic_splines::build_and_evaluate_second_derivative;
//!
//! let x = [0.0f64, 1.0, 2.0, 3.0];
//! let y = [0.0f64, 2.0, 4.0, 6.0];
//!
//! let result =
//!     build_and_evaluate_second_derivative(&[-1.0, 1.5, 4.0], &x, &y, 0.0, 0.0)
//!         .unwrap();
//!
//! for (value, expected) in result.values.iter().zip([-2.0f64, 3.0, 8.0]) {
//!     assert!((value - expected).abs() < 1e-12);
//! }
//! ```
//!
//! The crate also carries the kernels that usually sit next to it:
//! a general [tridiagonal solver](solve_tridiagonal), [Gauss-Jordan
//! inversion](invert_gauss_jordan) and [trapezoidal](integrate_trapezoid)
//! and [Simpson](integrate_simpson) quadrature on non-uniform meshes.
//!
//! ## Cargo Features
#![doc = document_features::document_features!()]
#![cfg_attr(not(test), no_std)]

extern crate alloc;

mod boundary;
mod builder;
mod error;
mod evaluate;
mod integrate;
mod matrix;
mod tridiagonal;

pub use boundary::clamped_boundary_momentums;
pub use builder::{solve_interior_momentums, Boundary, CubicSpline};
pub use error::{InputError, NumericError, NumericResult};
pub use evaluate::{evaluate, Evaluator};
pub use integrate::{integrate_simpson, integrate_trapezoid};
pub use matrix::invert_gauss_jordan;
pub use tridiagonal::{solve_tridiagonal, TridiagonalSystem};

use alloc::vec::Vec;
use num_traits::Float;

/// Everything one interpolation call produces.
#[derive(Clone, Debug, PartialEq)]
pub struct Interpolation<T> {
    /// The spline evaluated at each query abscissa, in query order.
    pub values: Vec<T>,
    /// `N + 1` coefficient rows `[a0, a1, a2, a3]`, see [`CubicSpline`].
    pub coefficients: Vec<[T; 4]>,
    /// Second derivative at each of the `N` knots.
    pub momentums: Vec<T>,
}

impl<T: Float> Interpolation<T> {
    fn from_spline(spline: CubicSpline<T>, xnew: &[T]) -> NumericResult<Self> {
        let values = spline.evaluate(xnew)?;
        let (_, coefficients, momentums) = spline.into_parts();
        Ok(Self {
            values,
            coefficients,
            momentums,
        })
    }
}

/// Builds the spline through `(x, y)` with second derivatives `m_first`
/// and `m_last` at the ends and evaluates it at `xnew`.
///
/// `x` must be strictly increasing. `xnew` may be empty and in any order.
pub fn build_and_evaluate_second_derivative<T: Float>(
    xnew: &[T],
    x: &[T],
    y: &[T],
    m_first: T,
    m_last: T,
) -> NumericResult<Interpolation<T>> {
    let spline = CubicSpline::with_momentums(x, y, m_first, m_last)?;
    Interpolation::from_spline(spline, xnew)
}

/// Builds the spline through `(x, y)` with first derivatives `c_first`
/// and `c_last` at the ends and evaluates it at `xnew`.
///
/// Needs at least two samples; otherwise as
/// [`build_and_evaluate_second_derivative()`].
///
/// # Examples
/// ```
/// use nonuniform_cubic_splines::build_and_evaluate_first_derivative;
///
/// // y = x³ is reproduced exactly when its end slopes are given.
/// let x = [0.0, 0.5, 1.5, 2.0];
/// let y = [0.0, 0.125, 3.375, 8.0];
///
/// let result =
///     build_and_evaluate_first_derivative(&[1.0], &x, &y, 0.0, 12.0).unwrap();
/// assert!((result.values[0] - 1.0f64).abs() < 1e-12);
/// ```
pub fn build_and_evaluate_first_derivative<T: Float>(
    xnew: &[T],
    x: &[T],
    y: &[T],
    c_first: T,
    c_last: T,
) -> NumericResult<Interpolation<T>> {
    let spline = CubicSpline::clamped(x, y, c_first, c_last)?;
    Interpolation::from_spline(spline, xnew)
}
