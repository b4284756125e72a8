//! Dense matrix implementation.
//!
//! PSLQ works on matrices of dimension equal to the number of input
//! values, so everything is small and dense. Entries are stored row-major
//! which makes the row swaps and row updates of the reduction loop
//! contiguous; column swaps and rotations touch one entry per row.

use std::ops::{Add, Index, IndexMut, Mul, Sub};

use num_traits::{One, Zero};

/// Row-major matrix over an arbitrary entry type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DenseMatrix<T> {
    entries: Vec<T>,
    rows: usize,
    cols: usize,
}

impl<T: Clone + Zero> DenseMatrix<T> {
    /// A `rows × cols` matrix of zeros.
    #[must_use]
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            entries: vec![T::zero(); rows * cols],
            rows,
            cols,
        }
    }

    /// Builds a matrix from its rows.
    ///
    /// # Panics
    ///
    /// Panics if the rows are not all the same length.
    #[must_use]
    pub fn from_rows(rows: Vec<Vec<T>>) -> Self {
        let cols = rows.first().map_or(0, Vec::len);
        let count = rows.len();
        assert!(rows.iter().all(|r| r.len() == cols), "ragged rows");
        Self {
            entries: rows.into_iter().flatten().collect(),
            rows: count,
            cols,
        }
    }

    /// The `n × n` identity.
    #[must_use]
    pub fn identity(n: usize) -> Self
    where
        T: One,
    {
        let mut m = Self::zeros(n, n);
        for i in 0..n {
            m[(i, i)] = T::one();
        }
        m
    }

    /// Copies column `col` out into a vector.
    #[must_use]
    pub fn col(&self, col: usize) -> Vec<T> {
        (0..self.rows).map(|row| self[(row, col)].clone()).collect()
    }

    /// The transpose.
    #[must_use]
    pub fn transpose(&self) -> Self {
        let mut t = Self::zeros(self.cols, self.rows);
        for (index, value) in self.entries.iter().enumerate() {
            t[(index % self.cols, index / self.cols)] = value.clone();
        }
        t
    }

    /// Whether this is a square identity matrix.
    #[must_use]
    pub fn is_identity(&self) -> bool
    where
        T: One + PartialEq,
    {
        self.rows == self.cols
            && self.entries.iter().enumerate().all(|(index, value)| {
                if index / self.cols == index % self.cols {
                    value.is_one()
                } else {
                    value.is_zero()
                }
            })
    }
}

impl<T> DenseMatrix<T> {
    /// Number of rows.
    #[must_use]
    pub fn num_rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[must_use]
    pub fn num_cols(&self) -> usize {
        self.cols
    }

    /// Row `row` as a slice.
    #[must_use]
    pub fn row(&self, row: usize) -> &[T] {
        let start = row * self.cols;
        &self.entries[start..start + self.cols]
    }

    /// The entries `(i, i)` for `i < min(rows, cols)`.
    pub fn diagonal(&self) -> impl Iterator<Item = &T> + '_ {
        (0..self.rows.min(self.cols)).map(move |i| &self[(i, i)])
    }

    /// Exchanges rows `i` and `j`.
    pub fn swap_rows(&mut self, i: usize, j: usize) {
        if i == j {
            return;
        }
        let (low, high) = (i.min(j), i.max(j));
        let (head, tail) = self.entries.split_at_mut(high * self.cols);
        head[low * self.cols..(low + 1) * self.cols].swap_with_slice(&mut tail[..self.cols]);
    }

    /// Exchanges columns `i` and `j`.
    pub fn swap_cols(&mut self, i: usize, j: usize) {
        if i == j {
            return;
        }
        for row in self.entries.chunks_exact_mut(self.cols) {
            row.swap(i, j);
        }
    }
}

impl<T> DenseMatrix<T>
where
    T: Clone + Add<Output = T> + Mul<Output = T> + Sub<Output = T>,
{
    /// `row[target][k] -= scale · row[source][k]` for `k < len`.
    ///
    /// In a lower-trapezoidal matrix row `source` is zero right of its
    /// diagonal, so `len = source + 1` covers every nonzero entry.
    ///
    /// # Panics
    ///
    /// Panics if `len` exceeds the number of columns.
    pub fn sub_scaled_row_prefix(&mut self, target: usize, source: usize, scale: &T, len: usize) {
        assert!(len <= self.cols);
        for k in 0..len {
            let delta = scale.clone() * self[(source, k)].clone();
            self[(target, k)] = self[(target, k)].clone() - delta;
        }
    }

    /// Applies the plane rotation `(c, s)` to columns `left` and `right`
    /// from row `from_row` down:
    ///
    /// ```text
    /// M[i][left]  ←  c·M[i][left] + s·M[i][right]
    /// M[i][right] ← −s·M[i][left] + c·M[i][right]
    /// ```
    pub fn rotate_cols(&mut self, left: usize, right: usize, cos: &T, sin: &T, from_row: usize) {
        for i in from_row..self.rows {
            let l = self[(i, left)].clone();
            let r = self[(i, right)].clone();
            self[(i, left)] = cos.clone() * l.clone() + sin.clone() * r.clone();
            self[(i, right)] = cos.clone() * r - sin.clone() * l;
        }
    }
}

impl<T> DenseMatrix<T>
where
    T: Clone + Zero + Mul<Output = T>,
{
    /// `yᵀ·M`, one entry per column.
    ///
    /// # Panics
    ///
    /// Panics if `y.len()` is not the number of rows.
    #[must_use]
    pub fn vt_m(&self, y: &[T]) -> Vec<T> {
        assert_eq!(y.len(), self.rows);
        let mut out = vec![T::zero(); self.cols];
        for (yi, row) in y.iter().zip(self.entries.chunks_exact(self.cols)) {
            for (acc, m) in out.iter_mut().zip(row) {
                *acc = acc.clone() + yi.clone() * m.clone();
            }
        }
        out
    }

    /// The product `self · other`.
    ///
    /// # Panics
    ///
    /// Panics if `self.num_cols() != other.num_rows()`.
    #[must_use]
    pub fn mm(&self, other: &Self) -> Self {
        assert_eq!(self.cols, other.rows);
        let mut product = Self::zeros(self.rows, other.cols);
        for i in 0..self.rows {
            for k in 0..self.cols {
                let lhs = &self[(i, k)];
                if lhs.is_zero() {
                    continue;
                }
                for j in 0..other.cols {
                    product[(i, j)] = product[(i, j)].clone() + lhs.clone() * other[(k, j)].clone();
                }
            }
        }
        product
    }

    /// Sum of the squares of all entries.
    #[must_use]
    pub fn squared_norm(&self) -> T {
        self.entries
            .iter()
            .fold(T::zero(), |acc, v| acc + v.clone() * v.clone())
    }
}

impl<T> Index<(usize, usize)> for DenseMatrix<T> {
    type Output = T;

    fn index(&self, (row, col): (usize, usize)) -> &T {
        debug_assert!(row < self.rows && col < self.cols);
        &self.entries[row * self.cols + col]
    }
}

impl<T> IndexMut<(usize, usize)> for DenseMatrix<T> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        debug_assert!(row < self.rows && col < self.cols);
        &mut self.entries[row * self.cols + col]
    }
}
