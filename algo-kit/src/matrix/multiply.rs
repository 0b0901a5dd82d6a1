//! Matrix products.

use std::ops::{Add, Mul};

use super::Matrix;
use crate::error::AlgoError;

/// Below this size Strassen recursion falls back to the cubic product.
const STRASSEN_CUTOFF: usize = 64;

impl<T: Copy + Default + Add<Output = T> + Mul<Output = T>> Matrix<T> {
    /// The product `self * rhs` by the textbook triple loop.
    ///
    /// Fails with [`AlgoError::DimensionMismatch`] unless `self.cols()`
    /// equals `rhs.rows()`.
    ///
    /// ```
    /// use algo_kit::matrix::Matrix;
    ///
    /// let a = Matrix::from_rows(vec![vec![1, 2], vec![3, 4]])?;
    /// let b = Matrix::from_rows(vec![vec![5, 6], vec![7, 8]])?;
    /// assert_eq!(a.multiply(&b)?.into_rows(), vec![vec![19, 22], vec![43, 50]]);
    /// # Ok::<(), algo_kit::AlgoError>(())
    /// ```
    pub fn multiply(&self, rhs: &Matrix<T>) -> Result<Matrix<T>, AlgoError> {
        if self.cols() != rhs.rows() {
            return Err(AlgoError::DimensionMismatch {
                expected: self.cols(),
                found: rhs.rows(),
            });
        }
        let mut out = Matrix::new(self.rows(), rhs.cols());
        for i in 0..self.rows() {
            for k in 0..self.cols() {
                let a = self[(i, k)];
                for j in 0..rhs.cols() {
                    out[(i, j)] = out[(i, j)] + a * rhs[(k, j)];
                }
            }
        }
        Ok(out)
    }
}

/// Strassen's product of two square integer matrices of equal size.
///
/// Inputs are zero-padded to the next power of two. Arithmetic wraps, so
/// the result is exact whenever every entry of the true product fits in an
/// `i64`, even if intermediate sums overflow.
///
/// Fails with [`AlgoError::NotSquare`] for a non-square operand and
/// [`AlgoError::DimensionMismatch`] when the sizes differ.
pub fn strassen_multiply(a: &Matrix<i64>, b: &Matrix<i64>) -> Result<Matrix<i64>, AlgoError> {
    strassen_with_cutoff(a, b, STRASSEN_CUTOFF)
}

fn strassen_with_cutoff(
    a: &Matrix<i64>,
    b: &Matrix<i64>,
    cutoff: usize,
) -> Result<Matrix<i64>, AlgoError> {
    for m in [a, b] {
        if !m.is_square() {
            return Err(AlgoError::NotSquare {
                rows: m.rows(),
                cols: m.cols(),
            });
        }
    }
    if a.rows() != b.rows() {
        return Err(AlgoError::DimensionMismatch {
            expected: a.rows(),
            found: b.rows(),
        });
    }

    let n = a.rows();
    let size = n.next_power_of_two();
    tracing::trace!(n, padded = size, cutoff, "strassen multiply");
    let pad = |m: &Matrix<i64>| -> Vec<i64> {
        let mut flat = vec![0; size * size];
        for (r, row) in m.iter_rows().enumerate() {
            flat[r * size..r * size + n].copy_from_slice(row);
        }
        flat
    };

    let product = strassen(&pad(a), &pad(b), size, cutoff.max(1));
    Ok(Matrix::from_fn(n, n, |r, c| product[r * size + c]))
}

fn naive(a: &[i64], b: &[i64], n: usize) -> Vec<i64> {
    let mut out = vec![0i64; n * n];
    for i in 0..n {
        for k in 0..n {
            let x = a[i * n + k];
            for j in 0..n {
                out[i * n + j] = out[i * n + j].wrapping_add(x.wrapping_mul(b[k * n + j]));
            }
        }
    }
    out
}

fn add(a: &[i64], b: &[i64]) -> Vec<i64> {
    a.iter().zip(b).map(|(x, y)| x.wrapping_add(*y)).collect()
}

fn sub(a: &[i64], b: &[i64]) -> Vec<i64> {
    a.iter().zip(b).map(|(x, y)| x.wrapping_sub(*y)).collect()
}

/// Splits an `n x n` block into its four `n/2` quadrants.
fn quadrants(m: &[i64], n: usize) -> [Vec<i64>; 4] {
    let h = n / 2;
    let block = |row0: usize, col0: usize| -> Vec<i64> {
        (row0..row0 + h)
            .flat_map(|r| m[r * n + col0..r * n + col0 + h].iter().copied())
            .collect()
    };
    [block(0, 0), block(0, h), block(h, 0), block(h, h)]
}

fn strassen(a: &[i64], b: &[i64], n: usize, cutoff: usize) -> Vec<i64> {
    if n <= cutoff {
        return naive(a, b, n);
    }
    let h = n / 2;
    let [a11, a12, a21, a22] = quadrants(a, n);
    let [b11, b12, b21, b22] = quadrants(b, n);

    let m1 = strassen(&add(&a11, &a22), &add(&b11, &b22), h, cutoff);
    let m2 = strassen(&add(&a21, &a22), &b11, h, cutoff);
    let m3 = strassen(&a11, &sub(&b12, &b22), h, cutoff);
    let m4 = strassen(&a22, &sub(&b21, &b11), h, cutoff);
    let m5 = strassen(&add(&a11, &a12), &b22, h, cutoff);
    let m6 = strassen(&sub(&a21, &a11), &add(&b11, &b12), h, cutoff);
    let m7 = strassen(&sub(&a12, &a22), &add(&b21, &b22), h, cutoff);

    let c11 = add(&sub(&add(&m1, &m4), &m5), &m7);
    let c12 = add(&m3, &m5);
    let c21 = add(&m2, &m4);
    let c22 = add(&add(&sub(&m1, &m2), &m3), &m6);

    let mut out = vec![0i64; n * n];
    for r in 0..h {
        for c in 0..h {
            let q = r * h + c;
            out[r * n + c] = c11[q];
            out[r * n + c + h] = c12[q];
            out[(r + h) * n + c] = c21[q];
            out[(r + h) * n + c + h] = c22[q];
        }
    }
    out
}
