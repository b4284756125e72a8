//! # intrel-identify
//!
//! Recognizing real numbers as integer combinations of known constants.
//!
//! A [`Dictionary`] maps values to symbols. Running PSLQ over its values
//! and mapping the coefficients back to symbols turns a relation such as
//! `1⋅0.4233… + 1⋅2.7182… − 1⋅3.1415… = 0` into the statement
//! `x + e − π = 0`.
//!
//! ## Entry points
//!
//! - [`find_dictionary_relation`]: the raw [`Relation`](intrel_pslq::Relation)
//! - [`pslq_dictionary`], [`render_relation`]: a rendered report
//! - [`identify`], [`identify_with`]: search for `value`, `exp(value)`,
//!   `1/value` and `value²` alongside a dictionary of constants
//! - [`identify_all`]: many identifications in parallel
//!
//! ## Example
//!
//! ```
//! use intrel_identify::{identify_with, small_dictionary};
//!
//! let x = std::f64::consts::PI - std::f64::consts::E;
//! let report = identify_with(&small_dictionary(), x, "x", 1000.0);
//! assert!(report.contains("it is likely that"));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod dictionary;
pub mod identify;
pub mod render;
pub mod tables;

#[cfg(test)]
mod proptests;

pub use dictionary::{Dictionary, Entry};
pub use identify::{
    find_dictionary_relation, identify, identify_all, identify_all_with, identify_with, pslq_dictionary,
    pslq_dictionary_default_gamma,
};
pub use render::render_relation;
pub use tables::{small_dictionary, standard_dictionary};
