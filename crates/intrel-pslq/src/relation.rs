//! Integer relations and the statistics of the search that found them.

use std::fmt;

use intrel_real::Real;
use smallvec::SmallVec;

/// One nonzero term `coefficient · value` of a relation.
#[derive(Clone, Debug, PartialEq)]
pub struct RelationTerm<T> {
    /// The integer multiplier.
    pub coefficient: i64,
    /// Position of the value in the input.
    pub index: usize,
    /// The input value.
    pub value: T,
}

/// What happened during a search.
#[derive(Clone, Debug)]
pub struct SearchStats<T> {
    /// Main-loop iterations performed.
    pub iterations: usize,
    /// The analytic iteration bound for this input.
    pub expected_iterations: usize,
    /// The certified norm bound after initialization and after every
    /// completed iteration.
    pub norm_bounds: Vec<T>,
    /// Iterations in which the norm bound went down.
    pub norm_bound_decreases: Vec<usize>,
}

impl<T: Real> SearchStats<T> {
    pub(crate) fn new(expected_iterations: usize, initial_bound: T) -> Self {
        Self {
            iterations: 0,
            expected_iterations,
            norm_bounds: vec![initial_bound],
            norm_bound_decreases: Vec::new(),
        }
    }

    /// The last certified norm bound.
    pub fn norm_bound(&self) -> Option<&T> {
        self.norm_bounds.last()
    }
}

/// An integer relation `Σ cᵢ·xᵢ ≈ 0` with at least one nonzero coefficient.
///
/// Only the nonzero terms are stored, in input order.
#[derive(Clone, Debug)]
pub struct Relation<T> {
    pub(crate) terms: SmallVec<[RelationTerm<T>; 8]>,
    pub(crate) dimension: usize,
    pub(crate) residual: T,
    pub(crate) tolerable_residual: T,
    pub(crate) residual_too_large: bool,
    pub(crate) exceeds_norm_bound: bool,
    pub(crate) stats: SearchStats<T>,
}

impl<T: Real> Relation<T> {
    /// The nonzero terms, in input order.
    pub fn terms(&self) -> &[RelationTerm<T>] {
        &self.terms
    }

    /// Number of nonzero terms.
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Always false for a relation produced by a search.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Length of the input the relation was found for.
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// All coefficients, zeros included, indexed like the input.
    pub fn coefficients(&self) -> Vec<i64> {
        let mut dense = vec![0; self.dimension];
        for term in &self.terms {
            dense[term.index] = term.coefficient;
        }
        dense
    }

    /// The coefficients with the sign chosen so the first nonzero one is
    /// positive. A relation and its negation have the same canonical form.
    pub fn canonical_coefficients(&self) -> Vec<i64> {
        let mut dense = self.coefficients();
        if self.terms.first().is_some_and(|t| t.coefficient < 0) {
            for c in &mut dense {
                *c = -*c;
            }
        }
        dense
    }

    /// `(coefficient, value)` pairs of the nonzero terms.
    pub fn pairs(&self) -> Vec<(i64, T)> {
        self.terms
            .iter()
            .map(|t| (t.coefficient, t.value.clone()))
            .collect()
    }

    /// `Σ cᵢ·xᵢ` evaluated at the working precision.
    pub fn residual(&self) -> &T {
        &self.residual
    }

    /// `16·ε·Σ|cᵢ·xᵢ|`.
    pub fn tolerable_residual(&self) -> &T {
        &self.tolerable_residual
    }

    /// True if the residual exceeded the tolerable residual, or the
    /// relation is longer than the maximum acceptable norm bound. Such a
    /// relation is usually an artifact of inputs that were not accurate to
    /// the full working precision.
    pub fn is_suspect(&self) -> bool {
        self.residual_too_large || self.exceeds_norm_bound
    }

    /// True if the residual exceeded `16·ε·Σ|cᵢ·xᵢ|`.
    pub fn residual_too_large(&self) -> bool {
        self.residual_too_large
    }

    /// True if the Euclidean norm of the coefficients is above the
    /// maximum acceptable norm bound of the search.
    pub fn exceeds_norm_bound(&self) -> bool {
        self.exceeds_norm_bound
    }

    /// The search statistics.
    pub fn stats(&self) -> &SearchStats<T> {
        &self.stats
    }

    /// The last certified norm bound before the relation was found.
    pub fn norm_bound(&self) -> Option<&T> {
        self.stats.norm_bound()
    }

    /// Euclidean norm of the coefficient vector.
    pub fn norm(&self) -> T {
        self.terms
            .iter()
            .fold(T::zero(), |acc, t| {
                let c = T::from_i64(t.coefficient);
                acc + c.clone() * c
            })
            .sqrt()
    }
}

/// Writes `c₀⋅l₀ ± |c₁|⋅l₁ ± …`, taking each label from `label`.
///
/// The first coefficient keeps its sign; later ones are joined with `+` or
/// `-` and printed as magnitudes.
///
/// # Errors
///
/// Propagates formatter errors.
pub fn write_combination<T, W, F, L>(out: &mut W, terms: &[RelationTerm<T>], mut label: F) -> fmt::Result
where
    W: fmt::Write,
    F: FnMut(&RelationTerm<T>) -> L,
    L: fmt::Display,
{
    for (position, term) in terms.iter().enumerate() {
        if position == 0 {
            write!(out, "{}⋅{}", term.coefficient, label(term))?;
        } else {
            let sign = if term.coefficient < 0 { '-' } else { '+' };
            write!(out, " {sign} {}⋅{}", term.coefficient.unsigned_abs(), label(term))?;
        }
    }
    Ok(())
}

impl<T: Real> fmt::Display for Relation<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_combination(f, &self.terms, |t| t.value.clone())?;
        write!(f, " = {}", self.residual)
    }
}
