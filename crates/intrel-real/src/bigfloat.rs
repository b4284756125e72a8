//! Fixed-precision binary floating point.
//!
//! This module provides a wrapper around `dashu`'s `FBig` that pins the
//! working precision to a compile-time number of bits, which is what the
//! PSLQ engine expects from its scalar: a fixed epsilon for the whole
//! search.

use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};
use std::str::FromStr;

use dashu::base::BitTest;
use dashu::float::ops::SquareRoot;
use dashu::float::round::mode::HalfAway;
use dashu::float::{DBig, FBig};
use dashu::integer::IBig;
use num_traits::{One, Zero};

use crate::traits::Real;

type Inner = FBig<HalfAway, 2>;

/// A binary floating point number with `BITS` bits of significand.
///
/// Every operation rounds its result to `BITS` bits, half away from zero.
/// Unlike the hardware types there are no infinities or NaNs: the
/// conversions from `f64` map non-finite inputs to zero, and `sqrt`/`ln`
/// of values outside their domain return zero.
#[derive(Clone, PartialEq, PartialOrd)]
pub struct BigFloat<const BITS: usize>(Inner);

/// Roughly quadruple precision.
pub type Float128 = BigFloat<113>;

/// Roughly 100 decimal digits.
pub type Float100Digits = BigFloat<336>;

impl<const BITS: usize> BigFloat<BITS> {
    /// Wraps a dashu float, rounding it to `BITS` bits.
    #[must_use]
    pub fn new(value: FBig<HalfAway, 2>) -> Self {
        Self(value.with_precision(BITS).value())
    }

    /// Returns the inner dashu float.
    #[must_use]
    pub fn into_inner(self) -> FBig<HalfAway, 2> {
        self.0
    }

    /// Returns a reference to the inner dashu float.
    #[must_use]
    pub fn as_inner(&self) -> &FBig<HalfAway, 2> {
        &self.0
    }

    /// 2^exponent at this precision.
    fn power_of_two(exponent: isize) -> Self {
        Self::new(Inner::from_parts(IBig::ONE, exponent))
    }

    fn is_negative(&self) -> bool {
        self.0 < Inner::ZERO
    }

    /// Unit in the last place of a non-zero value.
    fn ulp(&self) -> Self {
        let repr = self.0.repr();
        let top = repr.exponent() + repr.significand().bit_len() as isize;
        Self::power_of_two(top - BITS as isize)
    }
}

impl<const BITS: usize> Zero for BigFloat<BITS> {
    fn zero() -> Self {
        Self::new(Inner::ZERO)
    }

    fn is_zero(&self) -> bool {
        self.0 == Inner::ZERO
    }
}

impl<const BITS: usize> One for BigFloat<BITS> {
    fn one() -> Self {
        Self::new(Inner::ONE)
    }
}

impl<const BITS: usize> Real for BigFloat<BITS> {
    fn from_i64(n: i64) -> Self {
        Self::new(Inner::from(IBig::from(n)))
    }

    fn from_f64(x: f64) -> Self {
        Inner::try_from(x).map_or_else(|_| Self::zero(), Self::new)
    }

    fn from_decimal(s: &str) -> Option<Self> {
        let decimal = DBig::from_str(s.trim()).ok()?;
        Some(Self::new(decimal.to_binary().value().with_rounding::<HalfAway>()))
    }

    fn to_f64(&self) -> f64 {
        self.0.to_f64().value()
    }

    fn abs(&self) -> Self {
        if self.is_negative() {
            -self.clone()
        } else {
            self.clone()
        }
    }

    fn sqrt(&self) -> Self {
        if self.0 <= Inner::ZERO {
            return Self::zero();
        }
        Self::new(self.0.sqrt())
    }

    fn exp(&self) -> Self {
        Self::new(self.0.exp())
    }

    fn ln(&self) -> Self {
        if self.0 <= Inner::ZERO {
            return Self::zero();
        }
        Self::new(self.0.ln())
    }

    fn round_to_i64(&self) -> Option<i64> {
        let half = Self::power_of_two(-1);
        let shifted = self.abs() + half;
        let (significand, exponent) = shifted.0.into_repr().into_parts();

        let magnitude = if exponent >= 0 {
            if exponent > 64 {
                return None;
            }
            significand << exponent.unsigned_abs()
        } else {
            significand >> exponent.unsigned_abs()
        };

        let magnitude: i64 = magnitude.try_into().ok()?;
        Some(if self.is_negative() { -magnitude } else { magnitude })
    }

    fn epsilon() -> Self {
        Self::power_of_two(1 - BITS as isize)
    }

    fn float_distance(&self, other: &Self) -> Self {
        let larger = self.abs().max_of(other.abs());
        if larger.is_zero() {
            return Self::zero();
        }
        (other.clone() - self.clone()) / larger.ulp()
    }

    fn precision_bits() -> usize {
        BITS
    }

    fn is_finite_value(&self) -> bool {
        true
    }
}

impl<const BITS: usize> fmt::Debug for BigFloat<BITS> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BigFloat<{BITS}>({self})")
    }
}

impl<const BITS: usize> fmt::Display for BigFloat<BITS> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.to_decimal().value())
    }
}

// Arithmetic operations
impl<const BITS: usize> Add for BigFloat<BITS> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.0 + rhs.0)
    }
}

impl<const BITS: usize> Sub for BigFloat<BITS> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(self.0 - rhs.0)
    }
}

impl<const BITS: usize> Mul for BigFloat<BITS> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self::new(self.0 * rhs.0)
    }
}

impl<const BITS: usize> Div for BigFloat<BITS> {
    type Output = Self;

    /// # Panics
    ///
    /// Panics on division by zero.
    fn div(self, rhs: Self) -> Self::Output {
        Self::new(self.0 / rhs.0)
    }
}

impl<const BITS: usize> Neg for BigFloat<BITS> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}
