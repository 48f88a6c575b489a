//! Dense matrix inversion by Gauss-Jordan elimination.

use crate::{InputError, NumericError, NumericResult};
use alloc::{vec, vec::Vec};
use num_traits::Float;

/// Inverts the square `matrix` (given as rows) by Gauss-Jordan elimination
/// with full pivoting.
///
/// Every step takes the entry of largest magnitude among the rows and
/// columns not yet used as pivots, swaps it onto the diagonal and
/// eliminates its column from all other rows. The column swaps are undone
/// at the end, in reverse order.
///
/// An empty matrix inverts to an empty matrix.
///
/// # Errors
/// [`InputError::NotSquare`] if a row length differs from the row count,
/// [`NumericError::SingularSystem`] if no non-zero pivot is left.
///
/// # Examples
/// ```
/// use nonuniform_cubic_splines::invert_gauss_jordan;
///
/// let inverse = invert_gauss_jordan(&[vec![2.0, 0.0], vec![0.0, 4.0]]).unwrap();
/// assert_eq!(inverse, vec![vec![0.5, 0.0], vec![0.0, 0.25]]);
/// ```
pub fn invert_gauss_jordan<T: Float>(
    matrix: &[Vec<T>],
) -> NumericResult<Vec<Vec<T>>> {
    let n = matrix.len();
    if let Some((row, columns)) = matrix
        .iter()
        .map(Vec::len)
        .enumerate()
        .find(|&(_, columns)| columns != n)
    {
        return Err(InputError::NotSquare {
            row,
            expected: n,
            actual: columns,
        }
        .into());
    }

    let mut a = matrix.to_vec();
    let mut used = vec![false; n];
    let mut swaps = Vec::with_capacity(n);

    for step in 0..n {
        let mut best: Option<(usize, usize, T)> = None;
        for r in (0..n).filter(|&r| !used[r]) {
            for c in (0..n).filter(|&c| !used[c]) {
                let magnitude = a[r][c].abs();
                if best.map_or(true, |(_, _, b)| magnitude > b) {
                    best = Some((r, c, magnitude));
                }
            }
        }
        let (pivot_row, col) = match best {
            Some((r, c, magnitude)) if magnitude > T::zero() => (r, c),
            _ => return Err(NumericError::SingularSystem { row: step }),
        };

        used[col] = true;
        if pivot_row != col {
            a.swap(pivot_row, col);
        }
        swaps.push((pivot_row, col));

        // Replace the pivot by one, so the inverse builds up in place.
        let inverse_pivot = T::one() / a[col][col];
        a[col][col] = T::one();
        for value in a[col].iter_mut() {
            *value = *value * inverse_pivot;
        }

        let pivot = a[col].clone();
        for (r, row) in a.iter_mut().enumerate() {
            if r == col {
                continue;
            }
            let factor = row[col];
            row[col] = T::zero();
            for (value, &p) in row.iter_mut().zip(&pivot) {
                *value = *value - p * factor;
            }
        }
    }

    for &(pivot_row, col) in swaps.iter().rev() {
        if pivot_row != col {
            for row in a.iter_mut() {
                row.swap(pivot_row, col);
            }
        }
    }

    Ok(a)
}
