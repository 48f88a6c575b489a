//! Thomas-algorithm solver for tridiagonal linear systems.

use crate::{InputError, NumericError, NumericResult};
use alloc::{vec, vec::Vec};
use num_traits::Float;

/// A tridiagonal system `A·x = rhs` stored as its three diagonals.
///
/// Row `i` reads `lower[i]·x[i-1] + diag[i]·x[i] + upper[i]·x[i+1] = rhs[i]`.
/// The system has no wrap-around coupling, so `lower[0]` and
/// `upper[n-1]` are zero.
#[derive(Clone, Debug, PartialEq)]
pub struct TridiagonalSystem<T> {
    pub lower: Vec<T>,
    pub diag: Vec<T>,
    pub upper: Vec<T>,
    pub rhs: Vec<T>,
}

impl<T: Float> TridiagonalSystem<T> {
    /// Creates an `n`-sized system with every entry set to zero.
    pub fn zeros(n: usize) -> Self {
        Self {
            lower: vec![T::zero(); n],
            diag: vec![T::zero(); n],
            upper: vec![T::zero(); n],
            rhs: vec![T::zero(); n],
        }
    }

    /// Number of unknowns.
    pub fn len(&self) -> usize {
        self.diag.len()
    }

    pub fn is_empty(&self) -> bool {
        self.diag.is_empty()
    }

    /// Solves the system, see [`solve_tridiagonal()`].
    pub fn solve(&self) -> NumericResult<Vec<T>> {
        solve_tridiagonal(&self.lower, &self.diag, &self.upper, &self.rhs)
    }
}

/// Solves `A·x = rhs` for a tridiagonal `A` given by its `lower`, `diag`
/// and `upper` diagonals.
///
/// All four slices must have the same length `n`. The entries `lower[0]`
/// and `upper[n-1]` lie outside the matrix and are never read. An empty
/// system has an empty solution.
///
/// Diagonal dominance is not checked. A pivot of exactly zero is reported
/// as [`NumericError::SingularSystem`] instead of dividing by it.
///
/// # Examples
/// ```
/// use nonuniform_cubic_splines::solve_tridiagonal;
///
/// // [2 1 0] [x0]   [3]
/// // [1 2 1]·[x1] = [4]
/// // [0 1 2] [x2]   [3]
/// let x = solve_tridiagonal(
///     &[0.0, 1.0, 1.0],
///     &[2.0, 2.0, 2.0],
///     &[1.0, 1.0, 0.0],
///     &[3.0, 4.0, 3.0],
/// )
/// .unwrap();
///
/// assert!(x.iter().all(|xi| (xi - 1.0f64).abs() < 1e-12));
/// ```
pub fn solve_tridiagonal<T: Float>(
    lower: &[T],
    diag: &[T],
    upper: &[T],
    rhs: &[T],
) -> NumericResult<Vec<T>> {
    let n = diag.len();
    for other in [lower.len(), upper.len(), rhs.len()] {
        if other != n {
            return Err(InputError::LengthMismatch {
                expected: n,
                actual: other,
            }
            .into());
        }
    }
    if n == 0 {
        return Ok(Vec::new());
    }

    // Forward sweep: x[i] = p[i]·x[i+1] + q[i].
    let mut p = Vec::with_capacity(n);
    let mut q = Vec::with_capacity(n);
    for i in 0..n {
        let (pivot, numerator) = if i == 0 {
            (diag[0], rhs[0])
        } else {
            (
                diag[i] + lower[i] * p[i - 1],
                rhs[i] - lower[i] * q[i - 1],
            )
        };
        if pivot == T::zero() {
            return Err(NumericError::SingularSystem { row: i });
        }
        let coupling = if i + 1 == n { T::zero() } else { upper[i] };
        p.push(-coupling / pivot);
        q.push(numerator / pivot);
    }

    // Back substitution, in place over q.
    let mut x = q;
    for i in (0..n - 1).rev() {
        x[i] = p[i] * x[i + 1] + x[i];
    }

    Ok(x)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn solves_laplacian() {
        // 1D Laplacian with known solution x = [1, 2, 3, 4].
        let lower = [0.0, -1.0, -1.0, -1.0];
        let diag = [2.0, 2.0, 2.0, 2.0];
        let upper = [-1.0, -1.0, -1.0, 0.0];
        let rhs = [0.0, 0.0, 0.0, 5.0];

        let x = solve_tridiagonal(&lower, &diag, &upper, &rhs).unwrap();

        for (xi, expected) in x.iter().zip([1.0, 2.0, 3.0, 4.0]) {
            assert_relative_eq!(*xi, expected, epsilon = 1e-12);
        }
    }

    #[test]
    fn ignores_entries_outside_the_matrix() {
        let x = solve_tridiagonal(
            &[99.0, 1.0],
            &[4.0, 4.0],
            &[1.0, -99.0],
            &[5.0, 5.0],
        )
        .unwrap();

        assert_relative_eq!(x[0], 1.0, epsilon = 1e-12);
        assert_relative_eq!(x[1], 1.0, epsilon = 1e-12);
    }

    #[test]
    fn single_unknown() {
        let x = solve_tridiagonal(&[0.0f32], &[4.0], &[0.0], &[2.0]).unwrap();
        assert_eq!(x, vec![0.5]);
    }

    #[test]
    fn empty_system() {
        let x = solve_tridiagonal::<f64>(&[], &[], &[], &[]).unwrap();
        assert!(x.is_empty());
    }

    #[test]
    fn zero_pivot_is_singular() {
        assert_eq!(
            solve_tridiagonal(&[0.0, 0.0], &[0.0, 1.0], &[1.0, 0.0], &[1.0, 1.0]),
            Err(NumericError::SingularSystem { row: 0 })
        );

        // Second pivot: 1 + 1·(-1) = 0.
        assert_eq!(
            solve_tridiagonal(&[0.0, 1.0], &[1.0, 1.0], &[1.0, 0.0], &[1.0, 1.0]),
            Err(NumericError::SingularSystem { row: 1 })
        );
    }

    #[test]
    fn mismatched_lengths() {
        assert_eq!(
            solve_tridiagonal(&[0.0], &[1.0, 1.0], &[0.0, 0.0], &[1.0, 1.0]),
            Err(NumericError::InvalidInput(InputError::LengthMismatch {
                expected: 2,
                actual: 1
            }))
        );
    }

    #[test]
    fn system_struct_solves() {
        let mut system = TridiagonalSystem::zeros(3);
        system.diag = vec![2.0, 2.0, 2.0];
        system.lower[1] = 1.0;
        system.lower[2] = 1.0;
        system.upper[0] = 1.0;
        system.upper[1] = 1.0;
        system.rhs = vec![3.0, 4.0, 3.0];

        assert_eq!(system.len(), 3);
        for xi in system.solve().unwrap() {
            assert_relative_eq!(xi, 1.0, epsilon = 1e-12);
        }
    }
}
