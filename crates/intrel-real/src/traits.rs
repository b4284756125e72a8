//! The real-number capability trait.
//!
//! PSLQ only needs a handful of operations from its scalar type: field
//! arithmetic, comparison, rounding to an integer, square roots and a
//! notion of machine epsilon. Everything else (dictionaries, rendering)
//! is built on top of those plus `exp`/`ln` and a few constants.

use std::fmt::{Debug, Display};
use std::ops::{Add, Div, Mul, Neg, Sub};

use num_traits::{One, Zero};

/// A real number type with a fixed working precision.
///
/// # Laws
///
/// - `epsilon()` is the distance from `1` to the next representable value
/// - `round_to_i64` rounds half away from zero
/// - `float_distance(a, b)` counts representable values between `a` and `b`
///   and is positive when `b > a`
pub trait Real:
    Clone
    + PartialOrd
    + Debug
    + Display
    + Send
    + Sync
    + Zero
    + One
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
{
    /// Converts an integer, rounding if it is not representable.
    fn from_i64(n: i64) -> Self;

    /// Converts a double, rounding to the working precision.
    fn from_f64(x: f64) -> Self;

    /// Parses a decimal expansion such as `"3.14159…"`.
    ///
    /// Digits beyond the working precision are rounded away. Returns
    /// `None` if the string is not a decimal number.
    fn from_decimal(s: &str) -> Option<Self>;

    /// Nearest double, for diagnostics only.
    fn to_f64(&self) -> f64;

    /// The absolute value.
    fn abs(&self) -> Self;

    /// The principal square root.
    fn sqrt(&self) -> Self;

    /// The exponential function.
    fn exp(&self) -> Self;

    /// The natural logarithm.
    fn ln(&self) -> Self;

    /// Rounds to the nearest integer, half away from zero.
    ///
    /// Returns `None` if the result does not fit in an `i64` or the value
    /// is not finite.
    fn round_to_i64(&self) -> Option<i64>;

    /// Machine epsilon of the working precision.
    fn epsilon() -> Self;

    /// Number of representable values between `self` and `other`.
    fn float_distance(&self, other: &Self) -> Self;

    /// Number of significand bits.
    fn precision_bits() -> usize;

    /// `self` raised to a real power. Only defined for `self > 0`.
    fn powf(&self, exponent: &Self) -> Self {
        (self.ln() * exponent.clone()).exp()
    }

    /// `self` raised to a non-negative integer power.
    fn powu(&self, n: u32) -> Self {
        let mut result = Self::one();
        let mut base = self.clone();
        let mut exp = n;

        while exp > 0 {
            if exp & 1 == 1 {
                result = result * base.clone();
            }
            base = base.clone() * base;
            exp >>= 1;
        }

        result
    }

    /// Returns the larger of two values.
    #[must_use]
    fn max_of(self, other: Self) -> Self {
        if other > self {
            other
        } else {
            self
        }
    }

    /// Returns true if the value is neither infinite nor NaN.
    fn is_finite_value(&self) -> bool {
        // NaN fails both comparisons, infinities fail the difference test.
        let diff = self.clone() - self.clone();
        diff == Self::zero()
    }

    /// π.
    fn pi() -> Self {
        Self::from_decimal(crate::constants::PI).unwrap_or_else(|| Self::from_f64(std::f64::consts::PI))
    }

    /// Euler's number e.
    fn e() -> Self {
        Self::one().exp()
    }

    /// √2.
    fn sqrt2() -> Self {
        Self::from_i64(2).sqrt()
    }

    /// ln 2.
    fn ln2() -> Self {
        Self::from_i64(2).ln()
    }

    /// Name of the concrete type, used in diagnostics.
    fn type_name() -> &'static str {
        std::any::type_name::<Self>()
    }
}
