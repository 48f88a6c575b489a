//! Construction of piecewise-cubic coefficients from sampled data.
//!
//! The free parameters of the spline are its *momentums*, the second
//! derivatives at the knots. The interior momentums follow from a
//! tridiagonal system, the two end momentums come from the boundary
//! condition. Each segment is then stored as a cubic in the plain
//! polynomial basis `a0 + a1·x + a2·x² + a3·x³`.

use crate::{
    boundary::clamped_boundary_momentums,
    evaluate::{polynomial_slope, Evaluator},
    tridiagonal::TridiagonalSystem,
    InputError, NumericResult,
};
use alloc::{vec, vec::Vec};
use log::debug;
use num_traits::Float;

/// How the two ends of the spline are pinned down.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Boundary<T> {
    /// Both end momentums are zero.
    Natural,
    /// Prescribed second derivatives at the first and last knot.
    SecondDerivative { first: T, last: T },
    /// Prescribed first derivatives at the first and last knot (clamped).
    FirstDerivative { first: T, last: T },
}

/// A cubic spline through a set of samples.
///
/// Holds `N` knots, `N + 1` coefficient rows and `N` momentums. Row `j + 1`
/// is the cubic on `[x[j], x[j+1]]`; rows `0` and `N` are the linear
/// continuations used left of the first and right of the last knot.
#[derive(Clone, Debug, PartialEq)]
pub struct CubicSpline<T> {
    knots: Vec<T>,
    coefficients: Vec<[T; 4]>,
    momentums: Vec<T>,
}

impl<T: Float> CubicSpline<T> {
    /// Builds the spline through `(x, y)` for the given boundary condition.
    ///
    /// `x` must be strictly increasing; this is only checked with the
    /// `monotonic_check` feature.
    pub fn new(x: &[T], y: &[T], boundary: Boundary<T>) -> NumericResult<Self> {
        match boundary {
            Boundary::Natural => Self::natural(x, y),
            Boundary::SecondDerivative { first, last } => {
                Self::with_momentums(x, y, first, last)
            }
            Boundary::FirstDerivative { first, last } => {
                Self::clamped(x, y, first, last)
            }
        }
    }

    /// Natural spline: both end momentums are zero.
    pub fn natural(x: &[T], y: &[T]) -> NumericResult<Self> {
        Self::with_momentums(x, y, T::zero(), T::zero())
    }

    /// Clamped spline with first derivatives `c_first` and `c_last` at the
    /// two ends. Needs at least two samples.
    pub fn clamped(
        x: &[T],
        y: &[T],
        c_first: T,
        c_last: T,
    ) -> NumericResult<Self> {
        let (m_first, m_last) =
            clamped_boundary_momentums(x, y, c_first, c_last)?;
        Self::with_momentums(x, y, m_first, m_last)
    }

    /// Builds the spline with the end momentums (second derivatives) set to
    /// `m_first` and `m_last`.
    ///
    /// A single sample gives a constant spline with momentum `0`.
    pub fn with_momentums(
        x: &[T],
        y: &[T],
        m_first: T,
        m_last: T,
    ) -> NumericResult<Self> {
        check_samples(x, y)?;
        let n = x.len();
        let zero = T::zero();

        if n == 1 {
            return Ok(Self {
                knots: x.to_vec(),
                coefficients: vec![[y[0], zero, zero, zero]; 2],
                momentums: vec![zero],
            });
        }

        let interior = solve_interior_momentums(x, y, m_first, m_last)?;
        let mut momentums = Vec::with_capacity(n);
        momentums.push(m_first);
        momentums.extend(interior);
        momentums.push(m_last);

        let mut coefficients = Vec::with_capacity(n + 1);
        // Row 0 depends on row 1, filled in below.
        coefficients.push([zero; 4]);
        for j in 0..n - 1 {
            coefficients.push(segment_coefficients(
                [x[j], x[j + 1]],
                [y[j], y[j + 1]],
                [momentums[j], momentums[j + 1]],
            ));
        }
        coefficients[0] = tangent_row(&coefficients[1], x[0], y[0]);
        let right = tangent_row(&coefficients[n - 1], x[n - 1], y[n - 1]);
        coefficients.push(right);

        debug!(
            "built cubic spline over {} knots, end momentums {:?}/{:?}",
            n,
            m_first.to_f64(),
            m_last.to_f64()
        );

        Ok(Self {
            knots: x.to_vec(),
            coefficients,
            momentums,
        })
    }

    /// The knot abscissae.
    pub fn knots(&self) -> &[T] {
        &self.knots
    }

    /// Coefficient rows `[a0, a1, a2, a3]`, ascending degree.
    pub fn coefficients(&self) -> &[[T; 4]] {
        &self.coefficients
    }

    /// Second derivative at each knot.
    pub fn momentums(&self) -> &[T] {
        &self.momentums
    }

    /// Splits the spline into `(knots, coefficients, momentums)`.
    pub fn into_parts(self) -> (Vec<T>, Vec<[T; 4]>, Vec<T>) {
        (self.knots, self.coefficients, self.momentums)
    }

    /// Evaluates the spline at every abscissa of `xnew`, in any order.
    pub fn evaluate(&self, xnew: &[T]) -> NumericResult<Vec<T>> {
        crate::evaluate(&self.knots, &self.coefficients, xnew)
    }

    /// An [`Evaluator`] for feeding queries one at a time.
    pub fn evaluator(&self) -> Evaluator<'_, T> {
        Evaluator::over(&self.knots, &self.coefficients)
    }
}

/// Solves for the interior momentums `M[1..N-1]` of the spline through
/// `(x, y)` whose end momentums are `m_first` and `m_last`.
///
/// Returns `N - 2` values; fewer than three samples have no interior knot
/// and yield an empty vector.
pub fn solve_interior_momentums<T: Float>(
    x: &[T],
    y: &[T],
    m_first: T,
    m_last: T,
) -> NumericResult<Vec<T>> {
    check_samples(x, y)?;
    if x.len() < 3 {
        return Ok(Vec::new());
    }
    momentum_system(x, y, m_first, m_last).solve()
}

/// The `(N-2)`-sized system for the interior momentums.
///
/// Row `r` is the continuity condition at knot `r + 1`:
/// `μ·M[r] + 2·M[r+1] + λ·M[r+2] = 6·Δ²y / (h[r] + h[r+1])` with
/// `μ = h[r] / (h[r] + h[r+1])` and `λ = h[r+1] / (h[r] + h[r+1])`.
fn momentum_system<T: Float>(
    x: &[T],
    y: &[T],
    m_first: T,
    m_last: T,
) -> TridiagonalSystem<T> {
    let n = x.len() - 2;
    let h = increments(x);
    let two = whole::<T>(2);
    let six = whole::<T>(6);

    let mut system = TridiagonalSystem::zeros(n);
    for r in 0..n {
        let span = h[r] + h[r + 1];
        system.lower[r] = h[r] / span;
        system.diag[r] = two;
        system.upper[r] = h[r + 1] / span;
        system.rhs[r] = six / span
            * ((y[r + 2] - y[r + 1]) / h[r + 1] - (y[r + 1] - y[r]) / h[r]);
    }

    // The end momentums are known: their terms move to the right-hand
    // side and the outermost off-diagonal entries are zero.
    system.rhs[0] = system.rhs[0] - system.lower[0] * m_first;
    system.rhs[n - 1] = system.rhs[n - 1] - system.upper[n - 1] * m_last;
    system.lower[0] = T::zero();
    system.upper[n - 1] = T::zero();

    system
}

/// Cubic through `(x0, y0)` and `(x1, y1)` with second derivatives `m0`
/// and `m1` at the ends, expanded into the plain polynomial basis.
fn segment_coefficients<T: Float>(
    [x0, x1]: [T; 2],
    [y0, y1]: [T; 2],
    [m0, m1]: [T; 2],
) -> [T; 4] {
    let two = whole::<T>(2);
    let six = whole::<T>(6);
    let h = x1 - x0;

    // s(x) = m0·(x1-x)³/6h + m1·(x-x0)³/6h + c0·(x1-x) + c1·(x-x0)
    let c0 = y0 / h - m0 * h / six;
    let c1 = y1 / h - m1 * h / six;

    let a3 = (m1 - m0) / (six * h);
    let a2 = (x1 * m0 - x0 * m1) / (two * h);
    let a1 = (x0 * x0 * m1 - x1 * x1 * m0) / (two * h) + c1 - c0;
    let a0 = (x1 * x1 * x1 * m0 - x0 * x0 * x0 * m1) / (six * h) + c0 * x1
        - c1 * x0;

    [a0, a1, a2, a3]
}

/// Tangent line of the cubic `row` at knot `(x, y)`.
fn tangent_row<T: Float>(row: &[T; 4], x: T, y: T) -> [T; 4] {
    let slope = polynomial_slope(row, x);
    [y - slope * x, slope, T::zero(), T::zero()]
}

/// `h[j] = x[j+1] - x[j]`.
fn increments<T: Float>(x: &[T]) -> Vec<T> {
    x.windows(2).map(|w| w[1] - w[0]).collect()
}

/// `n` as `T`, summed up from ones so no fallible cast is involved.
pub(crate) fn whole<T: Float>(n: u8) -> T {
    (0..n).fold(T::zero(), |total, _| total + T::one())
}

/// Shape checks shared by every spline entry point.
pub(crate) fn check_samples<T: Float>(x: &[T], y: &[T]) -> NumericResult<()> {
    if x.is_empty() {
        return Err(InputError::Empty.into());
    }
    if y.len() != x.len() {
        return Err(InputError::LengthMismatch {
            expected: x.len(),
            actual: y.len(),
        }
        .into());
    }

    #[cfg(feature = "monotonic_check")]
    {
        if let Some(index) = x.windows(2).position(|w| !(w[0] < w[1])) {
            return Err(InputError::NonMonotonic { index: index + 1 }.into());
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{evaluate::polynomial, NumericError};
    use approx::assert_relative_eq;

    #[test]
    fn single_sample_is_constant() {
        let spline = CubicSpline::natural(&[2.0], &[5.0]).unwrap();

        assert_eq!(spline.momentums(), &[0.0]);
        assert_eq!(spline.coefficients(), &[[5.0, 0.0, 0.0, 0.0]; 2]);
    }

    #[test]
    fn two_samples_natural_is_a_line() {
        let spline = CubicSpline::natural(&[1.0, 3.0], &[1.0, 5.0]).unwrap();

        assert_eq!(spline.momentums(), &[0.0, 0.0]);
        for row in spline.coefficients() {
            assert_relative_eq!(row[0], -1.0, epsilon = 1e-12);
            assert_relative_eq!(row[1], 2.0, epsilon = 1e-12);
            assert_relative_eq!(row[2], 0.0);
            assert_relative_eq!(row[3], 0.0);
        }
    }

    #[test]
    fn segment_matches_endpoints_and_curvature() {
        let row = segment_coefficients([1.0, 2.5], [3.0, -1.0], [0.5, -2.0]);

        assert_relative_eq!(polynomial(&row, 1.0), 3.0, epsilon = 1e-12);
        assert_relative_eq!(polynomial(&row, 2.5), -1.0, epsilon = 1e-12);
        // s''(x) = 2·a2 + 6·a3·x
        assert_relative_eq!(2.0 * row[2] + 6.0 * row[3] * 1.0, 0.5, epsilon = 1e-12);
        assert_relative_eq!(2.0 * row[2] + 6.0 * row[3] * 2.5, -2.0, epsilon = 1e-12);
    }

    #[test]
    fn momentum_system_shape() {
        let x = [0.0, 1.0, 3.0, 4.0, 6.0];
        let y = [0.0, 1.0, 0.0, 2.0, 1.0];
        let system = momentum_system(&x, &y, 0.0, 0.0);

        assert_eq!(system.len(), 3);
        assert_eq!(system.lower[0], 0.0);
        assert_eq!(system.upper[2], 0.0);
        assert!(system.diag.iter().all(|&d| d == 2.0));
        // Knot 2 sits between h = 2 and h = 1.
        assert_relative_eq!(system.lower[1], 2.0 / 3.0);
        assert_relative_eq!(system.upper[1], 1.0 / 3.0);
    }

    #[test]
    fn end_momentums_feed_the_interior() {
        let x = [0.0, 1.0, 2.0];
        let y = [0.0, 0.0, 0.0];

        // Single interior row: 2·M1 = -(1/2)·m_first - (1/2)·m_last.
        let interior = solve_interior_momentums(&x, &y, 4.0, 8.0).unwrap();
        assert_relative_eq!(interior[0], -3.0, epsilon = 1e-12);
    }

    #[test]
    fn end_momentums_are_kept_exactly() {
        let x = [0.0, 0.3, 1.1, 2.0];
        let y = [1.0, -1.0, 0.5, 0.25];
        let spline = CubicSpline::with_momentums(&x, &y, 0.1, -0.7).unwrap();

        assert_eq!(spline.momentums().len(), 4);
        assert_eq!(spline.momentums()[0], 0.1);
        assert_eq!(spline.momentums()[3], -0.7);
        assert_eq!(spline.coefficients().len(), 5);
    }

    #[test]
    fn rejects_bad_shapes() {
        assert_eq!(
            CubicSpline::<f64>::natural(&[], &[]),
            Err(NumericError::InvalidInput(InputError::Empty))
        );
        assert_eq!(
            CubicSpline::natural(&[0.0, 1.0], &[0.0]),
            Err(NumericError::InvalidInput(InputError::LengthMismatch {
                expected: 2,
                actual: 1
            }))
        );
    }

    #[cfg(not(feature = "monotonic_check"))]
    #[test]
    fn folded_knots_can_be_singular() {
        // h = [-0.5, 1, -0.5] makes the second pivot 2 + 2·(-1) = 0.
        let x = [0.0, -0.5, 0.5, 0.0];
        let y = [0.0, 1.0, 2.0, 3.0];

        assert_eq!(
            CubicSpline::natural(&x, &y),
            Err(NumericError::SingularSystem { row: 1 })
        );
    }

    #[cfg(feature = "monotonic_check")]
    #[test]
    fn rejects_unordered_knots() {
        assert_eq!(
            CubicSpline::natural(&[0.0, 1.0, 1.0, 2.0], &[0.0; 4]),
            Err(NumericError::InvalidInput(InputError::NonMonotonic {
                index: 2
            }))
        );
    }

    #[test]
    fn whole_numbers() {
        assert_eq!(whole::<f64>(0), 0.0);
        assert_eq!(whole::<f32>(6), 6.0);
    }
}
