//! # intrel
//!
//! Integer relation detection in Rust.
//!
//! Given real numbers `x₀, …, xₙ₋₁`, find integers `c₀, …, cₙ₋₁`, not all
//! zero, with `Σ cᵢ·xᵢ = 0`, or prove that no such relation exists below a
//! given norm. Relations among constants identify closed forms; relations
//! among powers of one number find its minimal polynomial.
//!
//! ## Features
//!
//! - **PSLQ**: the partial-sum-of-squares, lower-trapezoidal algorithm,
//!   generic over the number type, with a certified norm bound
//! - **Any precision**: `f32`, `f64`, and `BigFloat<BITS>` (feature
//!   `arbitrary-precision`)
//! - **Constant recognition**: dictionaries of named constants and
//!   rendered reports of the relations found among them
//!
//! ## Quick Start
//!
//! ```
//! use intrel::prelude::*;
//!
//! let x = [1.0, 2.0_f64.sqrt(), 1.0 + 2.0_f64.sqrt()];
//! let relation = find_relation_default_gamma(&x, 1000.0).unwrap();
//! assert_eq!(relation.canonical_coefficients(), vec![1, 1, -1]);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use intrel_identify as identify;
pub use intrel_linalg as linalg;
pub use intrel_pslq as pslq;
pub use intrel_real as real;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use intrel_identify::{identify, identify_with, pslq_dictionary, small_dictionary, standard_dictionary, Dictionary};
    pub use intrel_pslq::{
        find_relation, find_relation_default_gamma, pslq, Pslq, PslqConfig, Relation, RelationError,
    };
    pub use intrel_real::Real;

    #[cfg(feature = "arbitrary-precision")]
    pub use intrel_real::bigfloat::{BigFloat, Float100Digits, Float128};
}
