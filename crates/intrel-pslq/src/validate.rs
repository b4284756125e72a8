//! Input and parameter validation.
//!
//! Validation is pure: it reads the input and parameters, computes the
//! partial sums of squares the initializer needs, and either returns them
//! or the first condition that fails. Checks run in a fixed order and the
//! first failure wins:
//!
//! 1. the input is sorted non-decreasing
//! 2. γ > 2/√3
//! 3. τ ∈ (1, 2)
//! 4. at least two values
//! 5. no zero values
//! 6. no negative values
//! 7. M > 0
//! 8. M² · Σx² ≤ 1/ε

use intrel_real::Real;

use crate::config::{gamma_threshold, tau};
use crate::error::{InputDefect, ParameterDefect, PrecisionDefect, RelationError};

/// An input that passed validation, together with the quantities derived
/// from it along the way.
#[derive(Clone, Debug)]
pub struct Validated<T> {
    gamma: T,
    tau: T,
    max_norm_bound: T,
    partial_sums: Vec<T>,
}

impl<T: Real> Validated<T> {
    /// The γ parameter.
    pub fn gamma(&self) -> &T {
        &self.gamma
    }

    /// τ = 1/√(1/4 + 1/γ²).
    pub fn tau(&self) -> &T {
        &self.tau
    }

    /// The maximum acceptable norm bound.
    pub fn max_norm_bound(&self) -> &T {
        &self.max_norm_bound
    }

    /// Right-to-left partial sums of squares: `s[j] = Σ_{k ≥ j} x_k²`.
    pub fn partial_sums(&self) -> &[T] {
        &self.partial_sums
    }

    /// Length of the input.
    pub fn len(&self) -> usize {
        self.partial_sums.len()
    }

    /// Always false: validation rejects inputs with fewer than two values.
    pub fn is_empty(&self) -> bool {
        self.partial_sums.is_empty()
    }
}

/// Validates an input vector and the search parameters.
///
/// # Errors
///
/// Returns the first failing condition, in the order listed in the module
/// documentation.
pub fn validate<T: Real>(x: &[T], max_norm_bound: &T, gamma: &T) -> Result<Validated<T>, RelationError> {
    if let Some(position) = x.windows(2).position(|w| !(w[0] <= w[1])) {
        return Err(RelationError::InvalidInput(InputDefect::Unsorted { index: position + 1 }));
    }

    if !(*gamma > gamma_threshold::<T>()) {
        return Err(RelationError::ParameterOutOfRange(ParameterDefect::GammaTooSmall {
            gamma: gamma.to_f64(),
        }));
    }

    let tau = tau(gamma);
    if !(tau > T::one() && tau < T::from_i64(2)) {
        return Err(RelationError::ParameterOutOfRange(ParameterDefect::TauOutOfRange {
            tau: tau.to_f64(),
        }));
    }

    if x.len() < 2 {
        return Err(RelationError::InvalidInput(InputDefect::TooFewValues { len: x.len() }));
    }

    for (index, value) in x.iter().enumerate() {
        if value.is_zero() {
            return Err(RelationError::InvalidInput(InputDefect::Zero { index }));
        }
        if *value < T::zero() {
            return Err(RelationError::InvalidInput(InputDefect::Negative { index }));
        }
    }

    if !(*max_norm_bound > T::zero()) {
        return Err(RelationError::ParameterOutOfRange(ParameterDefect::NormBoundNotPositive {
            bound: max_norm_bound.to_f64(),
        }));
    }

    let partial_sums = partial_sums_of_squares(x);
    let total = partial_sums[0].clone();
    let eps = T::epsilon();
    let squared_bound = max_norm_bound.clone() * max_norm_bound.clone();
    if !(squared_bound * total.clone() <= T::one() / eps.clone()) {
        let max_supported = T::one() / (total * eps).sqrt();
        return Err(RelationError::PrecisionInsufficient(PrecisionDefect::NormBoundTooLarge {
            requested: max_norm_bound.to_f64(),
            max_supported: max_supported.to_f64(),
        }));
    }

    Ok(Validated {
        gamma: gamma.clone(),
        tau,
        max_norm_bound: max_norm_bound.clone(),
        partial_sums,
    })
}

/// `s[j] = Σ_{k ≥ j} x_k²`, accumulated from the right.
fn partial_sums_of_squares<T: Real>(x: &[T]) -> Vec<T> {
    let mut sums = vec![T::zero(); x.len()];
    let mut acc = T::zero();
    for (sum, value) in sums.iter_mut().zip(x).rev() {
        acc = acc + value.clone() * value.clone();
        *sum = acc.clone();
    }
    sums
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::default_gamma;

    fn gamma() -> f64 {
        default_gamma()
    }

    #[test]
    fn test_partial_sums() {
        let v = validate(&[1.0, 2.0, 3.0], &10.0, &gamma()).unwrap();
        assert_eq!(v.partial_sums(), &[14.0, 13.0, 9.0]);
        assert_eq!(v.len(), 3);
        assert!(!v.is_empty());
        assert!(*v.tau() > 1.0);
    }

    #[test]
    fn test_unsorted() {
        let err = validate(&[3.0, 2.0, 1.0], &10.0, &gamma()).unwrap_err();
        assert_eq!(err, RelationError::InvalidInput(InputDefect::Unsorted { index: 1 }));

        let err = validate(&[1.0, 3.0, 2.0], &10.0, &gamma()).unwrap_err();
        assert_eq!(err, RelationError::InvalidInput(InputDefect::Unsorted { index: 2 }));
    }

    #[test]
    fn test_nan_is_unsorted() {
        let err = validate(&[1.0, f64::NAN], &10.0, &gamma()).unwrap_err();
        assert!(matches!(err, RelationError::InvalidInput(InputDefect::Unsorted { .. })));
    }

    #[test]
    fn test_gamma_too_small() {
        let err = validate(&[1.0, 2.0], &10.0, &1.0).unwrap_err();
        assert!(matches!(
            err,
            RelationError::ParameterOutOfRange(ParameterDefect::GammaTooSmall { .. })
        ));
        let err = validate(&[1.0, 2.0], &10.0, &f64::NAN).unwrap_err();
        assert!(matches!(err, RelationError::ParameterOutOfRange(_)));
    }

    #[test]
    fn test_sorting_checked_before_gamma() {
        let err = validate(&[2.0, 1.0], &10.0, &1.0).unwrap_err();
        assert!(matches!(err, RelationError::InvalidInput(InputDefect::Unsorted { .. })));
    }

    #[test]
    fn test_too_few_values() {
        let err = validate(&[1.0], &10.0, &gamma()).unwrap_err();
        assert_eq!(err, RelationError::InvalidInput(InputDefect::TooFewValues { len: 1 }));
        let err = validate::<f64>(&[], &10.0, &gamma()).unwrap_err();
        assert_eq!(err, RelationError::InvalidInput(InputDefect::TooFewValues { len: 0 }));
    }

    #[test]
    fn test_zero_and_negative() {
        let err = validate(&[0.0, 1.0, 2.0], &10.0, &gamma()).unwrap_err();
        assert_eq!(err, RelationError::InvalidInput(InputDefect::Zero { index: 0 }));

        let err = validate(&[-2.0, 1.0], &10.0, &gamma()).unwrap_err();
        assert_eq!(err, RelationError::InvalidInput(InputDefect::Negative { index: 0 }));
    }

    #[test]
    fn test_norm_bound_not_positive() {
        let err = validate(&[1.0, 2.0], &0.0, &gamma()).unwrap_err();
        assert!(matches!(
            err,
            RelationError::ParameterOutOfRange(ParameterDefect::NormBoundNotPositive { .. })
        ));
    }

    #[test]
    fn test_norm_bound_too_large() {
        // Σx² = 5, so the largest supportable bound is 1/√(5ε) ≈ 3.0e7.
        let err = validate(&[1.0, 2.0], &1.0e9, &gamma()).unwrap_err();
        match err {
            RelationError::PrecisionInsufficient(PrecisionDefect::NormBoundTooLarge {
                requested,
                max_supported,
            }) => {
                assert_eq!(requested, 1.0e9);
                let expected = 1.0 / (5.0 * f64::EPSILON).sqrt();
                assert!((max_supported - expected).abs() < 1e-6 * expected);
            }
            other => panic!("unexpected error {other:?}"),
        }
        assert!(validate(&[1.0, 2.0], &1.0e7, &gamma()).is_ok());
    }

    #[test]
    fn test_idempotent() {
        let x = [1.0, 2.0_f64.sqrt(), 3.0];
        let first = validate(&x, &100.0, &gamma()).unwrap();
        let second = validate(&x, &100.0, &gamma()).unwrap();
        assert_eq!(first.partial_sums(), second.partial_sums());
        assert_eq!(first.tau(), second.tau());
    }
}
