//! Searching dictionaries for relations.

use intrel_pslq::{default_gamma, find_relation, Relation, RelationError};
use intrel_real::Real;
use rayon::prelude::*;
use tracing::debug;

use crate::dictionary::Dictionary;
use crate::render::render_relation;
use crate::tables::standard_dictionary;

/// Searches for an integer relation among the values of a dictionary.
///
/// Term indices of the returned relation are positions in the dictionary,
/// so [`Dictionary::symbol`] maps them back to symbols.
///
/// # Errors
///
/// Returns why no relation was produced. See [`RelationError`].
pub fn find_dictionary_relation<T: Real>(
    dictionary: &Dictionary<T>,
    max_norm_bound: T,
    gamma: T,
) -> Result<Relation<T>, RelationError> {
    find_relation(&dictionary.values(), max_norm_bound, gamma)
}

/// Searches a dictionary and renders the relation found, or returns an
/// empty string if there is none.
#[must_use]
pub fn pslq_dictionary<T: Real>(dictionary: &Dictionary<T>, max_norm_bound: T, gamma: T) -> String {
    find_dictionary_relation(dictionary, max_norm_bound, gamma)
        .map(|relation| render_relation(dictionary, &relation))
        .unwrap_or_default()
}

/// [`pslq_dictionary`] with γ = 2/√3 + 0.01.
#[must_use]
pub fn pslq_dictionary_default_gamma<T: Real>(dictionary: &Dictionary<T>, max_norm_bound: T) -> String {
    pslq_dictionary(dictionary, max_norm_bound, default_gamma())
}

/// Tries to express `value` through the constants of the standard
/// dictionary.
///
/// Besides `value` itself, `exp(value)`, `1/value` and `value²` are
/// searched too, labelled from `symbol`. Returns the rendered relation, or
/// an empty string if none was found.
///
/// The standard dictionary has several dozen entries; at double precision
/// only tiny norm bounds are admissible. Use a high-precision number type.
#[must_use]
pub fn identify<T: Real>(value: T, symbol: &str, max_norm_bound: T) -> String {
    identify_with(&standard_dictionary(), value, symbol, max_norm_bound)
}

/// [`identify`] against a caller-chosen base dictionary.
#[must_use]
pub fn identify_with<T: Real>(base: &Dictionary<T>, value: T, symbol: &str, max_norm_bound: T) -> String {
    let dictionary = extended(base, value, symbol);
    debug!(symbol, entries = dictionary.len(), "identifying value");
    pslq_dictionary_default_gamma(&dictionary, max_norm_bound)
}

/// Identifies several values in parallel against the standard dictionary.
///
/// Results are in input order.
#[must_use]
pub fn identify_all<T: Real>(values: &[(T, String)], max_norm_bound: T) -> Vec<String> {
    identify_all_with(&standard_dictionary(), values, max_norm_bound)
}

/// [`identify_all`] against a caller-chosen base dictionary.
#[must_use]
pub fn identify_all_with<T: Real>(base: &Dictionary<T>, values: &[(T, String)], max_norm_bound: T) -> Vec<String> {
    values
        .par_iter()
        .map(|(value, symbol)| identify_with(base, value.clone(), symbol, max_norm_bound.clone()))
        .collect()
}

/// `base` plus `value`, `exp(value)`, `1/value` and `value²`. Entries whose
/// value is already present keep their existing symbol.
fn extended<T: Real>(base: &Dictionary<T>, value: T, symbol: &str) -> Dictionary<T> {
    let mut dictionary = base.clone();
    dictionary.insert(value.clone(), symbol);
    dictionary.insert(value.exp(), format!("exp({symbol})"));
    if !value.is_zero() {
        dictionary.insert(T::one() / value.clone(), format!("1/{symbol}"));
    }
    dictionary.insert(value.clone() * value, format!("{symbol}²"));
    dictionary
}
