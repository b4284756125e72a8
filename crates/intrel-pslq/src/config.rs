//! Search parameters.

use intrel_real::Real;

/// The default γ: a little above the lower limit 2/√3.
///
/// Larger γ gives a weaker termination guarantee, so the default sits just
/// past the admissible threshold.
#[must_use]
pub fn default_gamma<T: Real>() -> T {
    gamma_threshold::<T>() + T::from_i64(1) / T::from_i64(100)
}

/// The strict lower limit 2/√3 on γ.
pub(crate) fn gamma_threshold<T: Real>() -> T {
    T::from_i64(2) / T::from_i64(3).sqrt()
}

/// τ = 1/√(1/4 + 1/γ²).
pub(crate) fn tau<T: Real>(gamma: &T) -> T {
    let quarter = T::one() / T::from_i64(4);
    T::one() / (quarter + T::one() / (gamma.clone() * gamma.clone())).sqrt()
}

/// Number of iterations within which PSLQ provably finds a relation of
/// norm at most `max_norm_bound`, if one exists:
/// `⌈C(n, 2) · ln(γⁿ⁻¹ · M) / ln τ⌉`, and never less than one.
#[must_use]
pub fn expected_iterations<T: Real>(n: usize, gamma: &T, max_norm_bound: &T) -> usize {
    if n < 2 {
        return 1;
    }

    let columns = i64::try_from(n - 1).unwrap_or(i64::MAX);
    let log_term = T::from_i64(columns) * gamma.ln() + max_norm_bound.ln();
    let per_pair = (log_term / tau(gamma).ln()).to_f64();

    #[allow(clippy::cast_precision_loss)]
    let pairs = (n * (n - 1) / 2) as f64;
    let estimate = (pairs * per_pair).ceil();

    if !estimate.is_finite() || estimate < 1.0 {
        return 1;
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let bounded = estimate.min(usize::MAX as f64 / 2.0) as usize;
    bounded.max(1)
}

/// Configuration for a PSLQ search.
#[derive(Clone, Debug)]
pub struct PslqConfig<T> {
    /// The γ parameter, must exceed 2/√3.
    pub gamma: T,
    /// The search gives up once every relation of norm below this bound
    /// has been ruled out.
    pub max_norm_bound: T,
    /// Hard cap on main-loop iterations. `None` means the analytic bound
    /// from [`expected_iterations`].
    pub max_iterations: Option<usize>,
    /// Re-check the structural identities after every iteration.
    /// Costs O(n³) per iteration.
    pub check_invariants_each_iteration: bool,
}

impl<T: Real> PslqConfig<T> {
    /// Creates a configuration with the default γ.
    #[must_use]
    pub fn new(max_norm_bound: T) -> Self {
        Self {
            gamma: default_gamma(),
            max_norm_bound,
            max_iterations: None,
            check_invariants_each_iteration: false,
        }
    }

    /// Sets γ.
    #[must_use]
    pub fn with_gamma(mut self, gamma: T) -> Self {
        self.gamma = gamma;
        self
    }

    /// Caps the number of main-loop iterations.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = Some(max_iterations);
        self
    }

    /// Enables or disables per-iteration invariant checks.
    #[must_use]
    pub fn with_invariant_checks(mut self, enabled: bool) -> Self {
        self.check_invariants_each_iteration = enabled;
        self
    }

    /// A configuration for debugging: invariants are checked after every
    /// iteration.
    #[must_use]
    pub fn paranoid(max_norm_bound: T) -> Self {
        Self::new(max_norm_bound).with_invariant_checks(true)
    }

    /// The iteration cap for an input of length `n`.
    pub(crate) fn iteration_cap(&self, n: usize) -> usize {
        self.max_iterations
            .unwrap_or_else(|| expected_iterations(n, &self.gamma, &self.max_norm_bound))
    }
}
