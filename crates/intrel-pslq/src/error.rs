//! Errors that can occur during a relation search.
//!
//! None of these are fatal. A search that cannot produce a relation says
//! why through one of the variants below, and the reason is also written
//! to the `tracing` side channel. Only [`RelationError::InvariantViolation`]
//! points at a defect in the engine itself; everything else is a property
//! of the input, the parameters, or the working precision.

use thiserror::Error;

/// Why a relation search produced no relation.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum RelationError {
    /// The input vector is malformed.
    #[error("invalid input: {0}")]
    InvalidInput(InputDefect),

    /// γ, τ or the norm bound is outside the range the algorithm needs.
    #[error("parameter out of range: {0}")]
    ParameterOutOfRange(ParameterDefect),

    /// The working precision cannot support the request.
    #[error("insufficient precision: {0}")]
    PrecisionInsufficient(PrecisionDefect),

    /// A structural identity of the reduction failed numerically.
    #[error("invariant violated, this is a bug: {0}")]
    InvariantViolation(InvariantDefect),

    /// No relation exists with norm below the requested bound.
    #[error("no integer relation with norm below {norm_bound} (after {iterations} iterations)")]
    NormBoundExhausted {
        /// The certified norm bound when the search stopped.
        norm_bound: f64,
        /// Number of main-loop iterations performed.
        iterations: usize,
    },

    /// The iteration cap was reached before the bound was.
    #[error("no integer relation found within {iterations} iterations")]
    IterationLimit {
        /// Number of main-loop iterations performed.
        iterations: usize,
    },

    /// A multiplier or transform entry no longer fits in an `i64`.
    #[error("integer coefficients overflowed at iteration {iteration}")]
    CoefficientOverflow {
        /// The iteration in which the overflow occurred.
        iteration: usize,
    },
}

impl RelationError {
    /// Returns true if the error signals a defect in the engine rather
    /// than a property of the input.
    #[must_use]
    pub fn is_defect(&self) -> bool {
        matches!(self, RelationError::InvariantViolation(_))
    }

    /// Returns true if the search ran and simply found nothing.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        matches!(
            self,
            RelationError::NormBoundExhausted { .. } | RelationError::IterationLimit { .. }
        )
    }
}

/// Malformed input vectors.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum InputDefect {
    #[error("elements must be sorted in increasing order (element {index} is out of order)")]
    /// An element is not larger than its predecessor.
    Unsorted {
        /// Position of the out-of-order element.
        index: usize,
    },

    #[error("at least two values are required to find an integer relation, got {len}")]
    /// Fewer than two values were given.
    TooFewValues {
        /// Number of values given.
        len: usize,
    },

    #[error("element {index} is zero, which gives trivial relations")]
    /// An element is zero.
    Zero {
        /// Position of the zero.
        index: usize,
    },

    #[error("element {index} is negative; the algorithm is reflection invariant, remove the sign")]
    /// An element is negative.
    Negative {
        /// Position of the negative element.
        index: usize,
    },
}

/// Parameters outside their admissible range.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum ParameterDefect {
    #[error("γ > 2/√3 is required, got {gamma}")]
    /// γ does not exceed 2/√3.
    GammaTooSmall {
        /// The γ requested.
        gamma: f64,
    },

    #[error("τ ∈ (1, 2) is required, got {tau}")]
    /// The τ derived from γ falls outside (1, 2).
    TauOutOfRange {
        /// The derived τ.
        tau: f64,
    },

    #[error("the maximum acceptable norm bound must be positive, got {bound}")]
    /// The maximum acceptable norm bound is zero or negative.
    NormBoundNotPositive {
        /// The bound requested.
        bound: f64,
    },
}

/// Requests the working precision cannot honor.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum PrecisionDefect {
    #[error(
        "the maximum acceptable norm bound {requested} is too large, spurious relations would be \
         recovered; at this precision it cannot exceed {max_supported}"
    )]
    /// The maximum acceptable norm bound exceeds what the precision can
    /// certify.
    NormBoundTooLarge {
        /// The bound requested.
        requested: f64,
        /// The largest bound this input admits at this precision.
        max_supported: f64,
    },

    #[error("normalized element y[{index}] is below epsilon; more precision is required")]
    /// A normalized element is below epsilon.
    ValueTooSmall {
        /// Position of the element.
        index: usize,
    },

    #[error("normalized elements y[{index}] and y[{}] are too close together", index - 1)]
    /// Two neighboring normalized elements are within two representable
    /// steps of each other.
    ValuesTooClose {
        /// Position of the second of the two elements.
        index: usize,
    },

    #[error("diagonal entry H[{index}][{index}] vanished; precision is exhausted")]
    /// A diagonal entry of `H` that is about to be divided by is zero.
    DegenerateDiagonal {
        /// Row and column of the entry.
        index: usize,
    },
}

/// Structural identities that failed.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum InvariantDefect {
    #[error("‖H‖² = {observed} but should be n - 1 = {expected}")]
    /// The squared Frobenius norm of the initial `H` is not `n − 1`.
    FrobeniusNorm {
        /// The squared norm computed.
        observed: f64,
        /// `n − 1`.
        expected: f64,
    },

    #[error("yᵀH ≠ 0: column {column} has magnitude {magnitude}")]
    /// A column of `H` is not orthogonal to `y`.
    NotOrthogonal {
        /// The offending column.
        column: usize,
        /// `|(yᵀH)_column|`.
        magnitude: f64,
    },

    #[error("A·B is not the identity")]
    /// `A·B` differs from the identity.
    TransformNotInverse,

    #[error("pivot {pivot} leaves no row to swap with")]
    /// The pivot is the last row, which has no successor to swap with.
    PivotOutOfRange {
        /// The pivot chosen.
        pivot: usize,
    },

    #[error("no diagonal entry of H is non-zero, no pivot can be chosen")]
    /// The whole diagonal of `H` is zero.
    NoPivot,
}
