//! # intrel-real
//!
//! The real-number layer for integer relation detection.
//!
//! This crate provides:
//! - The [`Real`] trait: the arithmetic, rounding, square root and
//!   machine-epsilon operations the PSLQ engine needs from a number type
//! - Implementations for `f32` and `f64`
//! - `BigFloat<BITS>`, a fixed-precision binary float backed by `dashu`
//!   (feature `arbitrary-precision`)
//! - A table of mathematical constants as long decimal expansions, so
//!   every `Real` can be seeded at its own precision
//!
//! ## Precision
//!
//! The engine never escalates precision. The number type chosen by the
//! caller decides how large a relation can be told apart from noise:
//! roughly `1 / sqrt(epsilon * Σx²)`.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod constants;
mod primitive;
pub mod traits;

#[cfg(feature = "arbitrary-precision")]
pub mod bigfloat;

#[cfg(test)]
mod proptests;

#[cfg(feature = "arbitrary-precision")]
pub use bigfloat::BigFloat;
pub use traits::Real;
