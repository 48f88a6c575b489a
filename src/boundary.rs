//! Conversion of first-derivative (clamped) end conditions into the end
//! momentums the builder consumes.
//!
//! On the first segment the slope at the left knot is
//! `s'(x0) = (y1 - y0)/h - h·(2·M0 + M1)/6`, so a prescribed slope `C`
//! fixes `M0 + M1/2 = 3·((y1 - y0)/h - C)/h`. The right end mirrors this.
//! The interior momentums themselves depend linearly on both end
//! momentums, which turns the two conditions into a 2×2 system.

use crate::{
    builder::{check_samples, solve_interior_momentums, whole},
    InputError, NumericError, NumericResult,
};
use log::debug;
use num_traits::Float;

/// A momentum written as `constant + per_first·M[0] + per_last·M[N-1]`.
#[derive(Clone, Copy, Debug)]
struct Affine<T> {
    constant: T,
    per_first: T,
    per_last: T,
}

/// Returns the end momentums `(M[0], M[N-1])` of the spline through
/// `(x, y)` whose first derivatives at the ends are `c_first` and `c_last`.
///
/// Needs at least two samples.
pub fn clamped_boundary_momentums<T: Float>(
    x: &[T],
    y: &[T],
    c_first: T,
    c_last: T,
) -> NumericResult<(T, T)> {
    check_samples(x, y)?;
    let n = x.len();
    if n < 2 {
        return Err(InputError::TooFewPoints { min: 2, actual: n }.into());
    }

    let (zero, one) = (T::zero(), T::one());
    let half = one / whole::<T>(2);
    let three = whole::<T>(3);

    // Momentum next to each end, as a function of the end momentums.
    let (next_to_first, next_to_last) = if n == 2 {
        (
            Affine {
                constant: zero,
                per_first: zero,
                per_last: one,
            },
            Affine {
                constant: zero,
                per_first: one,
                per_last: zero,
            },
        )
    } else {
        let base = solve_interior_momentums(x, y, zero, zero)?;
        let from_first = solve_interior_momentums(x, y, one, zero)?;
        let from_last = solve_interior_momentums(x, y, zero, one)?;
        let at = |k: usize| Affine {
            constant: base[k],
            per_first: from_first[k] - base[k],
            per_last: from_last[k] - base[k],
        };
        (at(0), at(n - 3))
    };

    let h_first = x[1] - x[0];
    let h_last = x[n - 1] - x[n - 2];
    let slope_first = (y[1] - y[0]) / h_first;
    let slope_last = (y[n - 1] - y[n - 2]) / h_last;

    // M0 + M1/2 = r_first, M[N-1] + M[N-2]/2 = r_last.
    let r_first = three * (slope_first - c_first) / h_first;
    let r_last = three * (c_last - slope_last) / h_last;

    let a11 = one + half * next_to_first.per_first;
    let a12 = half * next_to_first.per_last;
    let b1 = r_first - half * next_to_first.constant;
    let a21 = half * next_to_last.per_first;
    let a22 = one + half * next_to_last.per_last;
    let b2 = r_last - half * next_to_last.constant;

    let det = a11 * a22 - a12 * a21;
    if det == zero {
        return Err(NumericError::SingularSystem { row: 1 });
    }
    let m_first = (b1 * a22 - a12 * b2) / det;
    let m_last = (a11 * b2 - a21 * b1) / det;

    debug!(
        "clamped slopes {:?}/{:?} map to end momentums {:?}/{:?}",
        c_first.to_f64(),
        c_last.to_f64(),
        m_first.to_f64(),
        m_last.to_f64()
    );

    Ok((m_first, m_last))
}
