//! Evaluation of a built spline on an arbitrary query mesh.

use crate::{builder::whole, InputError, NumericError, NumericResult};
use alloc::vec::Vec;
use log::trace;
use num_traits::Float;

/// Evaluates coefficient rows on the query sequence `xnew`.
///
/// `knots` are the `N` abscissae the spline was built on and
/// `coefficients` its `N + 1` rows. Queries may come in any order; sorted
/// or nearly sorted queries are resolved without scanning the knots.
///
/// A query that no segment contains (a `NaN` query or knot) is reported
/// as [`InputError::UncontainedQuery`] with its position in `xnew`.
///
/// # Examples
/// ```
/// use nonuniform_cubic_splines::{evaluate, CubicSpline};
///
/// let spline = CubicSpline::natural(&[0.0, 1.0, 2.0], &[0.0, 1.0, 0.0]).unwrap();
/// let y = evaluate(spline.knots(), spline.coefficients(), &[1.0, 0.5]).unwrap();
///
/// assert!((y[0] - 1.0f64).abs() < 1e-12);
/// ```
pub fn evaluate<T: Float>(
    knots: &[T],
    coefficients: &[[T; 4]],
    xnew: &[T],
) -> NumericResult<Vec<T>> {
    let mut evaluator = Evaluator::new(knots, coefficients)?;
    xnew.iter()
        .enumerate()
        .map(|(index, &x)| {
            evaluator
                .value_at(x)
                .ok_or(NumericError::InvalidInput(
                    InputError::UncontainedQuery { index },
                ))
        })
        .collect()
}

/// Streams queries through a spline, remembering the last row it used.
///
/// The cursor makes a query in the same or a neighbouring segment O(1);
/// anything else falls back to a scan over all segments. The result never
/// depends on the cursor, only the cost does.
#[derive(Clone, Debug)]
pub struct Evaluator<'a, T> {
    knots: &'a [T],
    coefficients: &'a [[T; 4]],
    cursor: usize,
}

impl<'a, T: Float> Evaluator<'a, T> {
    /// Pairs `N ≥ 1` knots with their `N + 1` coefficient rows.
    pub fn new(
        knots: &'a [T],
        coefficients: &'a [[T; 4]],
    ) -> NumericResult<Self> {
        if knots.is_empty() {
            return Err(InputError::Empty.into());
        }
        if coefficients.len() != knots.len() + 1 {
            return Err(InputError::CoefficientShape {
                expected: knots.len() + 1,
                actual: coefficients.len(),
            }
            .into());
        }
        Ok(Self::over(knots, coefficients))
    }

    pub(crate) fn over(knots: &'a [T], coefficients: &'a [[T; 4]]) -> Self {
        Self {
            knots,
            coefficients,
            cursor: 1,
        }
    }

    /// Row of the coefficient table that applies at `x`.
    ///
    /// `0` left of the first knot, `N` right of the last one, `j + 1` on
    /// `[x[j], x[j+1])`. A query on a shared knot belongs to the segment
    /// that starts there.
    pub fn locate(&mut self, x: T) -> Option<usize> {
        let last = self.knots.len() - 1;

        let row = if x <= self.knots[0] {
            0
        } else if x >= self.knots[last] {
            last + 1
        } else if let Some(row) = [
            self.cursor,
            self.cursor + 1,
            self.cursor.wrapping_sub(1),
        ]
        .into_iter()
        .find(|&row| self.contains(row, x))
        {
            row
        } else {
            trace!(
                "cursor at row {} missed, scanning all segments",
                self.cursor
            );
            // Later segments win if several claim x.
            (1..=last).rev().find(|&row| self.contains(row, x))?
        };

        self.cursor = row;
        Some(row)
    }

    /// Value of the spline at `x`, `None` if no segment contains it.
    pub fn value_at(&mut self, x: T) -> Option<T> {
        let row = self.locate(x)?;
        Some(polynomial(&self.coefficients[row], x))
    }

    /// Whether interior row `row` covers `x`.
    fn contains(&self, row: usize, x: T) -> bool {
        (1..self.knots.len()).contains(&row)
            && self.knots[row - 1] <= x
            && x < self.knots[row]
    }
}

/// `a0 + a1·x + a2·x² + a3·x³`, by Horner's method.
#[inline]
pub(crate) fn polynomial<T: Float>(row: &[T; 4], x: T) -> T {
    ((row[3] * x + row[2]) * x + row[1]) * x + row[0]
}

/// First derivative of [`polynomial`].
#[inline]
pub(crate) fn polynomial_slope<T: Float>(row: &[T; 4], x: T) -> T {
    let (two, three) = (whole::<T>(2), whole::<T>(3));
    (three * row[3] * x + two * row[2]) * x + row[1]
}
