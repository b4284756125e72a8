//! Numerical checks of the structural identities of a search.
//!
//! Right after initialization `‖H‖² = n − 1` and `yᵀH = 0`. During the
//! main loop the Frobenius norm of `H` changes with every size reduction,
//! but `yᵀH = 0` and `A·B = I` are preserved by every elementary step.
//! A failure of any of these is a bug in the engine, not a property of
//! the input.

use intrel_real::Real;

use crate::error::{InvariantDefect, RelationError};
use crate::state::LatticeState;

/// Checks the identities that hold right after initialization:
/// `‖H‖² = n − 1` and `yᵀH = 0`, both to within √ε.
///
/// # Errors
///
/// Returns [`RelationError::InvariantViolation`] naming the failed identity.
pub fn check_initial_invariants<T: Real>(state: &LatticeState<T>) -> Result<(), RelationError> {
    check_frobenius_norm(state)?;
    check_orthogonality(state)
}

/// Checks the identities every main-loop iteration preserves: `yᵀH = 0`
/// to within √ε and `A·B = I` exactly.
///
/// # Errors
///
/// Returns [`RelationError::InvariantViolation`] naming the failed identity.
pub fn check_step_invariants<T: Real>(state: &LatticeState<T>) -> Result<(), RelationError> {
    check_orthogonality(state)?;
    check_inverse(state)
}

fn columns<T: Real>(state: &LatticeState<T>) -> T {
    T::from_i64(i64::try_from(state.h().num_cols()).unwrap_or(i64::MAX))
}

fn check_frobenius_norm<T: Real>(state: &LatticeState<T>) -> Result<(), RelationError> {
    let expected = columns(state);
    let observed = state.h().squared_norm();
    let deviation = (observed.clone() / expected.clone() - T::one()).abs();
    if deviation > T::epsilon().sqrt() {
        return Err(RelationError::InvariantViolation(InvariantDefect::FrobeniusNorm {
            observed: observed.to_f64(),
            expected: expected.to_f64(),
        }));
    }
    Ok(())
}

// Column c may deviate by (n − 1)·√ε·max(1, Σ|y_k·H_kc|).
fn check_orthogonality<T: Real>(state: &LatticeState<T>) -> Result<(), RelationError> {
    let h = state.h();
    let y = state.y();
    let tolerance = columns(state) * T::epsilon().sqrt();

    for (column, value) in h.vt_m(y).into_iter().enumerate() {
        let scale = y
            .iter()
            .enumerate()
            .fold(T::zero(), |acc, (row, yi)| acc + yi.abs() * h[(row, column)].abs())
            .max_of(T::one());
        if value.abs() > tolerance.clone() * scale {
            return Err(RelationError::InvariantViolation(InvariantDefect::NotOrthogonal {
                column,
                magnitude: value.abs().to_f64(),
            }));
        }
    }
    Ok(())
}

fn check_inverse<T: Real>(state: &LatticeState<T>) -> Result<(), RelationError> {
    let a = state.a();
    let b = state.b();
    let n = a.num_rows();

    for i in 0..n {
        for j in 0..n {
            let entry = (0..n).try_fold(0_i128, |acc, k| {
                acc.checked_add(i128::from(a[(i, k)]) * i128::from(b[(k, j)]))
            });
            let expected = i128::from(i == j);
            if entry != Some(expected) {
                return Err(RelationError::InvariantViolation(InvariantDefect::TransformNotInverse));
            }
        }
    }
    Ok(())
}
