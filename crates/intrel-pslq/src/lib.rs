//! # intrel-pslq
//!
//! Integer relation detection with the PSLQ algorithm.
//!
//! Given real numbers `x₀ ≤ x₁ ≤ … ≤ xₙ₋₁`, PSLQ looks for integers
//! `c₀, …, cₙ₋₁`, not all zero, with `Σ cᵢ·xᵢ = 0` to within the working
//! precision. Either it finds one, or it certifies that no relation with
//! Euclidean norm below a requested bound exists.
//!
//! ## Entry points
//!
//! - [`find_relation`] / [`find_relation_default_gamma`]: run a search and
//!   get a [`Relation`] or the [`RelationError`] explaining why there is none
//! - [`pslq`]: the same search as plain `(coefficient, value)` pairs, empty
//!   when nothing was found
//! - [`Pslq`] with a [`PslqConfig`]: reusable searcher with an iteration cap
//!   and optional per-iteration invariant checks
//! - [`validate`], [`LatticeState`], [`check_initial_invariants`]: the
//!   individual stages, for inspection and testing
//!
//! ## Precision
//!
//! The search runs entirely at the precision of the number type. A relation
//! of norm `M` among values with `Σx² = S` can only be told apart from
//! rounding noise if `M²·S ≤ 1/ε`; larger bounds are rejected up front.
//!
//! ## Example
//!
//! ```
//! use intrel_pslq::find_relation_default_gamma;
//!
//! let x = [1.0, 2.0_f64.sqrt(), 1.0 + 2.0_f64.sqrt()];
//! let relation = find_relation_default_gamma(&x, 1000.0).unwrap();
//! let c = relation.canonical_coefficients();
//! assert_eq!(c, vec![1, 1, -1]);
//! ```
//!
//! ## Diagnostics
//!
//! Progress and rejections are reported through `tracing`. Install a
//! subscriber to see them; nothing in the result depends on it.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod error;
mod extract;
pub mod invariants;
pub mod relation;
pub mod search;
pub mod state;
pub mod validate;

#[cfg(test)]
mod proptests;

pub use config::{default_gamma, expected_iterations, PslqConfig};
pub use error::{InputDefect, InvariantDefect, ParameterDefect, PrecisionDefect, RelationError};
pub use invariants::{check_initial_invariants, check_step_invariants};
pub use relation::{Relation, RelationTerm, SearchStats};
pub use search::Pslq;
pub use state::LatticeState;
pub use validate::{validate, Validated};

use intrel_real::Real;

/// Searches for an integer relation among `x` with norm below
/// `max_norm_bound`.
///
/// `x` must be sorted in increasing order and strictly positive; `gamma`
/// must exceed 2/√3.
///
/// # Errors
///
/// Returns why no relation was produced. See [`RelationError`].
pub fn find_relation<T: Real>(x: &[T], max_norm_bound: T, gamma: T) -> Result<Relation<T>, RelationError> {
    Pslq::new(PslqConfig::new(max_norm_bound).with_gamma(gamma)).search(x)
}

/// [`find_relation`] with γ = 2/√3 + 0.01.
///
/// # Errors
///
/// Returns why no relation was produced. See [`RelationError`].
pub fn find_relation_default_gamma<T: Real>(x: &[T], max_norm_bound: T) -> Result<Relation<T>, RelationError> {
    Pslq::new(PslqConfig::new(max_norm_bound)).search(x)
}

/// Searches for an integer relation and returns its nonzero terms as
/// `(coefficient, value)` pairs in input order.
///
/// Returns an empty vector when no relation was found or the input was
/// rejected; the reason is logged through `tracing`.
#[must_use]
pub fn pslq<T: Real>(x: &[T], max_norm_bound: T, gamma: T) -> Vec<(i64, T)> {
    find_relation(x, max_norm_bound, gamma)
        .map(|relation| relation.pairs())
        .unwrap_or_default()
}

/// [`pslq`] with γ = 2/√3 + 0.01.
#[must_use]
pub fn pslq_default_gamma<T: Real>(x: &[T], max_norm_bound: T) -> Vec<(i64, T)> {
    pslq(x, max_norm_bound, default_gamma())
}
