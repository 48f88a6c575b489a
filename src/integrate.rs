//! Quadrature of sampled functions on non-uniform meshes.

use crate::{builder::whole, InputError, NumericResult};
use lerp::Lerp;
use num_traits::Float;

/// Integrates the samples `y` over the mesh `x` with the trapezoidal rule.
///
/// Fewer than two samples integrate to zero.
pub fn integrate_trapezoid<T: Float>(x: &[T], y: &[T]) -> NumericResult<T> {
    check_mesh(x, y)?;
    Ok(x.windows(2)
        .zip(y.windows(2))
        .fold(T::zero(), |total, (x, y)| total + trapezoid(x, y)))
}

/// Integrates the samples `y` over the mesh `x` with Simpson's rule.
///
/// Consecutive pairs of intervals are integrated exactly through the
/// parabola over their three samples; the intervals may differ in length.
/// With an odd number of intervals the last one uses the trapezoidal rule.
/// Fewer than two samples integrate to zero.
///
/// # Examples
/// ```
/// use nonuniform_cubic_splines::integrate_simpson;
///
/// let x = [0.0, 0.1, 0.5, 0.6, 1.0];
/// let y: Vec<f64> = x.iter().map(|x| x * x).collect();
///
/// assert!((integrate_simpson(&x, &y).unwrap() - 1.0 / 3.0).abs() < 1e-12);
/// ```
pub fn integrate_simpson<T: Float>(x: &[T], y: &[T]) -> NumericResult<T> {
    check_mesh(x, y)?;
    let two = whole::<T>(2);
    let six = whole::<T>(6);

    let mut total = T::zero();
    let panels = x.len().saturating_sub(1) / 2;
    for p in 0..panels {
        let i = 2 * p;
        let h0 = x[i + 1] - x[i];
        let h1 = x[i + 2] - x[i + 1];
        let span = h0 + h1;
        total = total
            + span / six
                * ((two - h1 / h0) * y[i]
                    + span * span / (h0 * h1) * y[i + 1]
                    + (two - h0 / h1) * y[i + 2]);
    }

    let n = x.len();
    if n >= 2 && n % 2 == 0 {
        total = total + trapezoid(&x[n - 2..], &y[n - 2..]);
    }

    Ok(total)
}

/// Area under the chord over one interval.
fn trapezoid<T: Float>(x: &[T], y: &[T]) -> T {
    let half = T::one() / whole::<T>(2);
    (x[1] - x[0]) * y[0].lerp(y[1], half)
}

fn check_mesh<T>(x: &[T], y: &[T]) -> NumericResult<()> {
    if x.len() != y.len() {
        return Err(InputError::LengthMismatch {
            expected: x.len(),
            actual: y.len(),
        }
        .into());
    }
    Ok(())
}
