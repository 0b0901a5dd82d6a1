//! Row-major dense matrix and its shape transforms.

use std::ops::{Add, Index, IndexMut};

use crate::error::AlgoError;

/// A `rows x cols` matrix stored as one row-major `Vec`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matrix<T> {
    rows: usize,
    cols: usize,
    data: Vec<T>,
}

impl<T> Matrix<T> {
    /// Builds a matrix from a list of rows.
    ///
    /// Fails with [`AlgoError::DimensionMismatch`] if the rows differ in
    /// length. An empty list gives a `0 x 0` matrix.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self, AlgoError> {
        let cols = rows.first().map_or(0, Vec::len);
        if let Some(bad) = rows.iter().find(|row| row.len() != cols) {
            return Err(AlgoError::DimensionMismatch {
                expected: cols,
                found: bad.len(),
            });
        }
        let row_count = rows.len();
        Ok(Self {
            rows: row_count,
            cols,
            data: rows.into_iter().flatten().collect(),
        })
    }

    /// Builds a matrix by evaluating `f(row, col)` for every cell.
    pub fn from_fn(rows: usize, cols: usize, mut f: impl FnMut(usize, usize) -> T) -> Self {
        let mut data = Vec::with_capacity(rows * cols);
        for r in 0..rows {
            for c in 0..cols {
                data.push(f(r, c));
            }
        }
        Self { rows, cols, data }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        (row < self.rows && col < self.cols).then(|| &self.data[row * self.cols + col])
    }

    /// Row `r` as a slice. Panics if `r` is out of range.
    pub fn row(&self, r: usize) -> &[T] {
        &self.data[r * self.cols..(r + 1) * self.cols]
    }

    pub fn iter_rows(&self) -> impl Iterator<Item = &[T]> {
        (0..self.rows).map(|r| self.row(r))
    }

    pub fn into_rows(self) -> Vec<Vec<T>> {
        if self.cols == 0 {
            return (0..self.rows).map(|_| Vec::new()).collect();
        }
        let mut rows = Vec::with_capacity(self.rows);
        let mut data = self.data.into_iter();
        for _ in 0..self.rows {
            rows.push(data.by_ref().take(self.cols).collect());
        }
        rows
    }

    /// Rotates a square matrix a quarter turn clockwise in place: transpose,
    /// then reverse every row.
    ///
    /// ```
    /// use algo_kit::matrix::Matrix;
    ///
    /// let mut m = Matrix::from_rows(vec![vec![1, 2], vec![3, 4]])?;
    /// m.rotate_in_place()?;
    /// assert_eq!(m.into_rows(), vec![vec![3, 1], vec![4, 2]]);
    /// # Ok::<(), algo_kit::AlgoError>(())
    /// ```
    pub fn rotate_in_place(&mut self) -> Result<(), AlgoError> {
        self.require_square()?;
        let n = self.rows;
        for r in 0..n {
            for c in r + 1..n {
                self.data.swap(r * n + c, c * n + r);
            }
        }
        for row in self.data.chunks_mut(n.max(1)) {
            row.reverse();
        }
        Ok(())
    }

    fn require_square(&self) -> Result<(), AlgoError> {
        if self.is_square() {
            Ok(())
        } else {
            Err(AlgoError::NotSquare {
                rows: self.rows,
                cols: self.cols,
            })
        }
    }
}

impl<T: Clone + Default> Matrix<T> {
    /// A `rows x cols` matrix filled with `T::default()`.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            data: vec![T::default(); rows * cols],
        }
    }
}

impl<T: Clone + Default + From<u8>> Matrix<T> {
    /// The `n x n` identity, with `T::from(1)` on the diagonal.
    pub fn identity(n: usize) -> Self {
        Self::from_fn(n, n, |r, c| if r == c { T::from(1) } else { T::default() })
    }
}

impl<T: Clone> Matrix<T> {
    pub fn to_rows(&self) -> Vec<Vec<T>> {
        self.iter_rows().map(<[T]>::to_vec).collect()
    }

    pub fn transpose(&self) -> Self {
        Self::from_fn(self.cols, self.rows, |r, c| self[(c, r)].clone())
    }

    /// A new matrix turned a quarter clockwise; a `r x c` input gives a
    /// `c x r` output.
    pub fn rotate_clockwise(&self) -> Self {
        Self::from_fn(self.cols, self.rows, |r, c| self[(self.rows - 1 - c, r)].clone())
    }

    pub fn rotate_counter_clockwise(&self) -> Self {
        Self::from_fn(self.cols, self.rows, |r, c| self[(c, self.cols - 1 - r)].clone())
    }

    /// Elements in clockwise spiral order from the top-left corner.
    ///
    /// ```
    /// use algo_kit::matrix::Matrix;
    ///
    /// let m = Matrix::from_rows(vec![vec![1, 2, 3], vec![4, 5, 6], vec![7, 8, 9]])?;
    /// assert_eq!(m.spiral_order(), vec![1, 2, 3, 6, 9, 8, 7, 4, 5]);
    /// # Ok::<(), algo_kit::AlgoError>(())
    /// ```
    pub fn spiral_order(&self) -> Vec<T> {
        let mut out = Vec::with_capacity(self.data.len());
        if self.data.is_empty() {
            return out;
        }
        // inclusive bounds of the ring still to walk
        let (mut top, mut bottom) = (0, self.rows - 1);
        let (mut left, mut right) = (0, self.cols - 1);

        loop {
            out.extend((left..=right).map(|c| self[(top, c)].clone()));
            top += 1;
            if top > bottom {
                break;
            }
            out.extend((top..=bottom).map(|r| self[(r, right)].clone()));
            if right == left {
                break;
            }
            right -= 1;
            out.extend((left..=right).rev().map(|c| self[(bottom, c)].clone()));
            if bottom == top {
                break;
            }
            bottom -= 1;
            out.extend((top..=bottom).rev().map(|r| self[(r, left)].clone()));
            left += 1;
            if left > right {
                break;
            }
        }
        out
    }
}

impl<T: Clone + Default + PartialEq> Matrix<T> {
    /// Zeroes (sets to `T::default()`) every row and column containing a
    /// zero, using the first row and column as markers instead of extra
    /// storage.
    pub fn set_zeroes(&mut self) {
        if self.data.is_empty() {
            return;
        }
        let zero = T::default();
        let first_row_zero = self.row(0).contains(&zero);
        let first_col_zero = (0..self.rows).any(|r| self[(r, 0)] == zero);

        for r in 1..self.rows {
            for c in 1..self.cols {
                if self[(r, c)] == zero {
                    self[(r, 0)] = zero.clone();
                    self[(0, c)] = zero.clone();
                }
            }
        }
        for r in 1..self.rows {
            for c in 1..self.cols {
                if self[(r, 0)] == zero || self[(0, c)] == zero {
                    self[(r, c)] = zero.clone();
                }
            }
        }
        if first_row_zero {
            for c in 0..self.cols {
                self[(0, c)] = zero.clone();
            }
        }
        if first_col_zero {
            for r in 0..self.rows {
                self[(r, 0)] = zero.clone();
            }
        }
    }
}

impl<T: Copy + Default + Add<Output = T>> Matrix<T> {
    /// Sums of the primary and secondary diagonals of a square matrix. The
    /// centre of an odd-sized matrix counts towards both.
    pub fn diagonal_sums(&self) -> Result<(T, T), AlgoError> {
        self.require_square()?;
        let n = self.rows;
        Ok((0..n).fold((T::default(), T::default()), |(primary, secondary), i| {
            (primary + self[(i, i)], secondary + self[(i, n - 1 - i)])
        }))
    }
}

impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &T {
        assert!(col < self.cols, "column {col} outside matrix width {}", self.cols);
        &self.data[row * self.cols + col]
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix<T> {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        assert!(col < self.cols, "column {col} outside matrix width {}", self.cols);
        &mut self.data[row * self.cols + col]
    }
}
