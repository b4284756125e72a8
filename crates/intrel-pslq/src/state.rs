//! The mutable state of a PSLQ search.
//!
//! A search keeps four objects in lockstep:
//!
//! - `y`, the input scaled to unit length and then transformed by `B`
//! - `H`, an n×(n−1) lower-trapezoidal matrix whose columns span the
//!   orthogonal complement of `y`
//! - `A` and `B`, integer matrices with `A·B = I`
//!
//! Every elementary operation below applies the same unimodular change of
//! basis to all four, so `yᵀH = 0` and `A·B = I` hold throughout. A zero
//! entry of `y` means the matching column of `B` is an integer relation.

use intrel_linalg::DenseMatrix;
use intrel_real::Real;

use crate::error::{PrecisionDefect, RelationError};
use crate::validate::Validated;

/// The matrices and vectors of a running search.
///
/// Each search owns its own state; nothing is shared between searches.
#[derive(Clone, Debug)]
pub struct LatticeState<T> {
    x: Vec<T>,
    y: Vec<T>,
    h: DenseMatrix<T>,
    a: DenseMatrix<i64>,
    b: DenseMatrix<i64>,
}

impl<T: Real> LatticeState<T> {
    /// Builds the initial state for a validated input.
    ///
    /// `H` is filled from the partial sums of squares, `y` is `x` scaled to
    /// unit length, and `A`, `B` are the identity.
    ///
    /// # Errors
    ///
    /// Returns [`RelationError::PrecisionInsufficient`] if a scaled value
    /// falls below epsilon or two neighboring scaled values are within two
    /// representable steps of each other.
    ///
    /// # Panics
    ///
    /// Panics if `x` is not the input `validated` was produced from.
    pub fn new(x: &[T], validated: &Validated<T>) -> Result<Self, RelationError> {
        let n = x.len();
        assert_eq!(n, validated.len(), "input does not match its validation");
        let s = validated.partial_sums();

        let mut h = DenseMatrix::zeros(n, n - 1);
        for j in 0..n - 1 {
            let scale = (s[j].clone() * s[j + 1].clone()).sqrt();
            h[(j, j)] = (s[j + 1].clone() / s[j].clone()).sqrt();
            for i in j + 1..n {
                h[(i, j)] = -(x[i].clone() * x[j].clone()) / scale.clone();
            }
        }

        let length = s[0].sqrt();
        let y: Vec<T> = x.iter().map(|xi| xi.clone() / length.clone()).collect();

        let eps = T::epsilon();
        if let Some(index) = y.iter().position(|yi| yi.abs() < eps) {
            return Err(RelationError::PrecisionInsufficient(PrecisionDefect::ValueTooSmall { index }));
        }

        let two = T::from_i64(2);
        for index in 1..n {
            if y[index].float_distance(&y[index - 1]).abs() <= two {
                return Err(RelationError::PrecisionInsufficient(PrecisionDefect::ValuesTooClose { index }));
            }
        }

        Ok(Self {
            x: x.to_vec(),
            y,
            h,
            a: DenseMatrix::identity(n),
            b: DenseMatrix::identity(n),
        })
    }

    /// Number of input values.
    pub fn dimension(&self) -> usize {
        self.x.len()
    }

    /// The original input.
    pub fn x(&self) -> &[T] {
        &self.x
    }

    /// The transformed, normalized input.
    pub fn y(&self) -> &[T] {
        &self.y
    }

    /// The lower-trapezoidal matrix `H`.
    pub fn h(&self) -> &DenseMatrix<T> {
        &self.h
    }

    /// The integer matrix `A`.
    pub fn a(&self) -> &DenseMatrix<i64> {
        &self.a
    }

    /// The integer matrix `B`, the inverse of `A`.
    pub fn b(&self) -> &DenseMatrix<i64> {
        &self.b
    }

    /// Size-reduces entry `(i, j)` of `H` against row `j`.
    ///
    /// With `t = round(H[i][j] / H[j][j])`, subtracts `t` times row `j`
    /// from row `i` of `H` and `A`, adds `t` times column `i` of `B` to
    /// column `j`, and adds `t·y[i]` to `y[j]`. Does nothing when `t = 0`.
    pub(crate) fn reduce_entry(&mut self, i: usize, j: usize, iteration: usize) -> Result<(), RelationError> {
        let pivot = self.h[(j, j)].clone();
        if pivot.is_zero() {
            return Err(RelationError::PrecisionInsufficient(PrecisionDefect::DegenerateDiagonal { index: j }));
        }

        let quotient = self.h[(i, j)].clone() / pivot;
        let multiplier = quotient
            .round_to_i64()
            .ok_or(RelationError::CoefficientOverflow { iteration })?;
        if multiplier == 0 {
            return Ok(());
        }
        let t = T::from_i64(multiplier);

        self.y[j] = self.y[j].clone() + t.clone() * self.y[i].clone();
        self.h.sub_scaled_row_prefix(i, j, &t, j + 1);

        let n = self.dimension();
        let overflow = RelationError::CoefficientOverflow { iteration };
        for k in 0..n {
            let a_ik = multiplier
                .checked_mul(self.a[(j, k)])
                .and_then(|p| self.a[(i, k)].checked_sub(p))
                .ok_or_else(|| overflow.clone())?;
            let b_kj = multiplier
                .checked_mul(self.b[(k, i)])
                .and_then(|p| self.b[(k, j)].checked_add(p))
                .ok_or_else(|| overflow.clone())?;
            self.a[(i, k)] = a_ik;
            self.b[(k, j)] = b_kj;
        }
        Ok(())
    }

    /// Hermite-reduces `H` from its initial state: every entry below the
    /// diagonal, row by row, right to left.
    pub(crate) fn initial_reduction(&mut self) -> Result<(), RelationError> {
        let n = self.dimension();
        for i in 1..n {
            for j in (0..i).rev() {
                self.reduce_entry(i, j, 0)?;
            }
        }
        Ok(())
    }

    /// Index `m` maximizing `γ^(m+1)·|H[m][m]|`, over every diagonal entry.
    ///
    /// Ties go to the smaller index. Returns `None` if the whole diagonal
    /// is zero.
    pub(crate) fn select_pivot(&self, gamma: &T) -> Option<usize> {
        let mut weight = gamma.clone();
        let mut best = T::zero();
        let mut pivot = None;
        for (i, entry) in self.h.diagonal().enumerate() {
            let term = weight.clone() * entry.abs();
            if term > best {
                best = term;
                pivot = Some(i);
            }
            weight = weight * gamma.clone();
        }
        pivot
    }

    /// Exchanges entries `m` and `m + 1` of `y`, the same rows of `A` and
    /// `H`, and the same columns of `B`.
    pub(crate) fn exchange(&mut self, m: usize) {
        self.y.swap(m, m + 1);
        self.a.swap_rows(m, m + 1);
        self.h.swap_rows(m, m + 1);
        self.b.swap_cols(m, m + 1);
    }

    /// Restores lower-trapezoidal shape after an exchange at `m` by
    /// rotating columns `m` and `m + 1` of `H` from row `m` down.
    pub(crate) fn remove_corner(&mut self, m: usize) -> Result<(), RelationError> {
        let d = self.h[(m, m)].clone();
        let e = self.h[(m, m + 1)].clone();
        let norm = (d.clone() * d.clone() + e.clone() * e.clone()).sqrt();
        if norm.is_zero() {
            return Err(RelationError::PrecisionInsufficient(PrecisionDefect::DegenerateDiagonal { index: m }));
        }
        let cos = d / norm.clone();
        let sin = e / norm;
        self.h.rotate_cols(m, m + 1, &cos, &sin, m);
        Ok(())
    }

    /// Size-reduces the rows below an exchange at `m`.
    pub(crate) fn reduce_after_exchange(&mut self, m: usize, iteration: usize) -> Result<(), RelationError> {
        let n = self.dimension();
        for i in m + 1..n {
            for j in (0..=(i - 1).min(m + 1)).rev() {
                self.reduce_entry(i, j, iteration)?;
            }
        }
        Ok(())
    }

    /// First index whose entry of `y` is below `threshold` in magnitude.
    pub(crate) fn vanishing_entry(&self, threshold: &T) -> Option<usize> {
        self.y.iter().position(|yi| yi.abs() < *threshold)
    }

    /// `1 / max |H[i][i]|`: no relation of smaller norm can exist.
    pub(crate) fn norm_bound(&self) -> Result<T, RelationError> {
        let largest = self.h.diagonal().map(T::abs).fold(T::zero(), T::max_of);
        if largest.is_zero() {
            return Err(RelationError::PrecisionInsufficient(PrecisionDefect::DegenerateDiagonal { index: 0 }));
        }
        Ok(T::one() / largest)
    }
}
