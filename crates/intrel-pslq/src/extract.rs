//! Turning a vanished entry of `y` into a relation.

use intrel_real::Real;
use smallvec::SmallVec;
use tracing::warn;

use crate::relation::{Relation, RelationTerm, SearchStats};
use crate::state::LatticeState;

/// Reads the relation off column `column` of `B` and measures how well it
/// annihilates the input.
///
/// A residual above `16·ε·Σ|cᵢ·xᵢ|` and a coefficient vector longer than
/// `max_norm_bound` are both reported and flagged on the relation, which is
/// still returned.
pub(crate) fn extract_relation<T: Real>(
    state: &LatticeState<T>,
    column: usize,
    max_norm_bound: &T,
    stats: SearchStats<T>,
) -> Relation<T> {
    let coefficients = state.b().col(column);
    let mut terms: SmallVec<[RelationTerm<T>; 8]> = SmallVec::new();
    let mut residual = T::zero();
    let mut magnitude = T::zero();

    for (index, (value, coefficient)) in state.x().iter().zip(coefficients).enumerate() {
        if coefficient == 0 {
            continue;
        }
        let term = T::from_i64(coefficient) * value.clone();
        magnitude = magnitude + term.abs();
        residual = residual + term;
        terms.push(RelationTerm {
            coefficient,
            index,
            value: value.clone(),
        });
    }

    let tolerable_residual = T::from_i64(16) * T::epsilon() * magnitude;
    let residual_too_large = residual.abs() > tolerable_residual;
    if residual_too_large {
        warn!(
            residual = residual.abs().to_f64(),
            tolerable = tolerable_residual.to_f64(),
            real_type = T::type_name(),
            "relation has a large residual; either a bug, or the inputs are not accurate to the full precision of the number type"
        );
    }

    let mut relation = Relation {
        terms,
        dimension: state.dimension(),
        residual,
        tolerable_residual,
        residual_too_large,
        exceeds_norm_bound: false,
        stats,
    };

    let norm = relation.norm();
    if norm > *max_norm_bound {
        warn!(
            norm = norm.to_f64(),
            max_norm_bound = max_norm_bound.to_f64(),
            "relation is longer than the requested norm bound; the inputs may not be exact at this precision"
        );
        relation.exceeds_norm_bound = true;
    }
    relation
}
