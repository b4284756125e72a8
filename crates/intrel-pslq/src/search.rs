//! The PSLQ main loop.
//!
//! Each iteration selects a pivot row, exchanges it with the row below,
//! restores the lower-trapezoidal shape of `H`, and size-reduces the rows
//! that changed. The search ends when an entry of `y` vanishes (a
//! relation), when the certified norm bound reaches the requested bound
//! (no relation below it), or when the iteration cap is hit.
//!
//! # References
//!
//! - Ferguson, Bailey, Arno, "Analysis of PSLQ, an integer relation
//!   finding algorithm" (1999)
//! - Bailey, Broadhurst, "Parallel integer relation detection" (2000)

use intrel_real::Real;
use tracing::{debug, error, info, warn};

use crate::config::{expected_iterations, PslqConfig};
use crate::error::{InvariantDefect, RelationError};
use crate::extract::extract_relation;
use crate::invariants::{check_initial_invariants, check_step_invariants};
use crate::relation::{Relation, SearchStats};
use crate::state::LatticeState;
use crate::validate::validate;

/// A configured PSLQ searcher.
///
/// The searcher holds no per-search state, so one instance can run any
/// number of searches, from any number of threads.
#[derive(Clone, Debug)]
pub struct Pslq<T> {
    config: PslqConfig<T>,
}

impl<T: Real> Pslq<T> {
    /// Creates a searcher.
    #[must_use]
    pub fn new(config: PslqConfig<T>) -> Self {
        Self { config }
    }

    /// Returns the configuration.
    pub fn config(&self) -> &PslqConfig<T> {
        &self.config
    }

    /// Searches for an integer relation among `x`.
    ///
    /// `x` must be sorted in increasing order, strictly positive, and have
    /// at least two entries.
    ///
    /// # Errors
    ///
    /// Returns why no relation was produced. The same reason is logged
    /// through `tracing`.
    pub fn search(&self, x: &[T]) -> Result<Relation<T>, RelationError> {
        let result = self.run(x);
        if let Err(err) = &result {
            report(err);
        }
        result
    }

    fn run(&self, x: &[T]) -> Result<Relation<T>, RelationError> {
        let config = &self.config;
        let validated = validate(x, &config.max_norm_bound, &config.gamma)?;
        let mut state = LatticeState::new(x, &validated)?;
        check_initial_invariants(&state)?;

        let n = state.dimension();
        let expected = expected_iterations(n, validated.gamma(), validated.max_norm_bound());
        let cap = config.iteration_cap(n);
        info!(
            n,
            expected_iterations = expected,
            iteration_cap = cap,
            real_type = T::type_name(),
            "starting PSLQ search"
        );

        state.initial_reduction()?;

        let threshold = T::epsilon().powf(&(T::from_i64(15) / T::from_i64(16)));
        let mut norm_bound = state.norm_bound()?;
        let mut stats = SearchStats::new(expected, norm_bound.clone());

        while norm_bound < *validated.max_norm_bound() {
            if stats.iterations >= cap {
                return Err(RelationError::IterationLimit {
                    iterations: stats.iterations,
                });
            }
            stats.iterations += 1;
            let iteration = stats.iterations;

            step(&mut state, validated.gamma(), iteration)?;
            if config.check_invariants_each_iteration {
                check_step_invariants(&state)?;
            }

            if let Some(column) = state.vanishing_entry(&threshold) {
                let relation = extract_relation(&state, column, validated.max_norm_bound(), stats);
                info!(iterations = iteration, relation = %relation, "found integer relation");
                return Ok(relation);
            }

            let next = state.norm_bound()?;
            if next < norm_bound {
                warn!(
                    iteration,
                    previous = norm_bound.to_f64(),
                    current = next.to_f64(),
                    "norm bound has decreased"
                );
                stats.norm_bound_decreases.push(iteration);
            }
            debug!(
                iteration,
                norm_bound = next.to_f64(),
                max_norm_bound = validated.max_norm_bound().to_f64(),
                "PSLQ iteration"
            );
            stats.norm_bounds.push(next.clone());
            norm_bound = next;
        }

        Err(RelationError::NormBoundExhausted {
            norm_bound: norm_bound.to_f64(),
            iterations: stats.iterations,
        })
    }
}

/// One iteration: pivot, exchange, corner removal, size reduction.
fn step<T: Real>(state: &mut LatticeState<T>, gamma: &T, iteration: usize) -> Result<(), RelationError> {
    let n = state.dimension();
    let m = state
        .select_pivot(gamma)
        .ok_or(RelationError::InvariantViolation(InvariantDefect::NoPivot))?;
    if m + 1 >= n {
        return Err(RelationError::InvariantViolation(InvariantDefect::PivotOutOfRange { pivot: m }));
    }

    state.exchange(m);
    if m + 2 < n {
        state.remove_corner(m)?;
    }
    state.reduce_after_exchange(m, iteration)
}

fn report(err: &RelationError) {
    match err {
        RelationError::InvariantViolation(_) => error!(%err, "PSLQ search aborted"),
        RelationError::NormBoundExhausted { .. } => info!(%err, "PSLQ search finished without a relation"),
        _ => warn!(%err, "PSLQ search produced no relation"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{InputDefect, ParameterDefect};

    fn searcher(bound: f64) -> Pslq<f64> {
        let _ = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_test_writer()
            .try_init();
        Pslq::new(PslqConfig::paranoid(bound))
    }

    #[test]
    fn test_one_two() {
        let relation = searcher(10.0).search(&[1.0, 2.0]).unwrap();
        assert_eq!(relation.canonical_coefficients(), vec![2, -1]);
        assert_eq!(relation.residual(), &0.0);
        assert!(!relation.is_suspect());
    }

    #[test]
    fn test_two_three() {
        let relation = searcher(10.0).search(&[2.0, 3.0]).unwrap();
        assert_eq!(relation.canonical_coefficients(), vec![3, -2]);
    }

    #[test]
    fn test_silver_ratio() {
        let root2 = 2.0_f64.sqrt();
        let relation = searcher(1000.0).search(&[1.0, root2, 1.0 + root2]).unwrap();
        assert_eq!(relation.canonical_coefficients(), vec![1, 1, -1]);
        assert!(!relation.is_suspect());
    }

    #[test]
    fn test_no_relation_below_bound() {
        let pslq = Pslq::new(PslqConfig::new(1000.0).with_gamma(1.2));
        let err = pslq.search(&[1.0, 2.0_f64.sqrt()]).unwrap_err();
        assert!(matches!(err, RelationError::NormBoundExhausted { .. }));
    }

    #[test]
    fn test_rejections() {
        let err = searcher(10.0).search(&[3.0, 2.0, 1.0]).unwrap_err();
        assert!(matches!(err, RelationError::InvalidInput(InputDefect::Unsorted { .. })));

        let err = searcher(10.0).search(&[0.0, 1.0, 2.0]).unwrap_err();
        assert!(matches!(err, RelationError::InvalidInput(InputDefect::Zero { index: 0 })));

        let pslq = Pslq::new(PslqConfig::new(10.0).with_gamma(1.0));
        let err = pslq.search(&[1.0, 2.0]).unwrap_err();
        assert!(matches!(
            err,
            RelationError::ParameterOutOfRange(ParameterDefect::GammaTooSmall { .. })
        ));
    }

    #[test]
    fn test_iteration_limit() {
        let pslq = Pslq::new(PslqConfig::new(1.0e6).with_max_iterations(1));
        let x = [1.0, 2.0_f64.sqrt(), 3.0_f64.sqrt(), 5.0_f64.sqrt()];
        let err = pslq.search(&x).unwrap_err();
        assert_eq!(err, RelationError::IterationLimit { iterations: 1 });
    }

    #[test]
    fn test_stats_record_every_iteration() {
        let root2 = 2.0_f64.sqrt();
        let relation = searcher(1000.0).search(&[1.0, root2, 1.0 + root2]).unwrap();
        let stats = relation.stats();
        assert!(stats.iterations >= 1);
        // The bound is recorded after initialization and after every
        // iteration that did not end the search.
        assert_eq!(stats.norm_bounds.len(), stats.iterations);
        assert!(stats.iterations <= stats.expected_iterations);
    }

    #[test]
    fn test_decreases_are_flagged() {
        let root2 = 2.0_f64.sqrt();
        let root3 = 3.0_f64.sqrt();
        let x = [1.0, root2, root3, 1.0 + root2 + root3];
        let relation = searcher(1000.0).search(&x).unwrap();
        assert_eq!(relation.canonical_coefficients(), vec![1, 1, 1, -1]);

        let stats = relation.stats();
        for i in 1..stats.norm_bounds.len() {
            let decreased = stats.norm_bounds[i] < stats.norm_bounds[i - 1];
            assert_eq!(decreased, stats.norm_bound_decreases.contains(&i));
        }
    }
}
