//! `Real` for the hardware floating point types.

use crate::traits::Real;

macro_rules! impl_real_for_primitive {
    ($float:ident, $signed:ident) => {
        impl Real for $float {
            #[allow(clippy::cast_precision_loss)]
            fn from_i64(n: i64) -> Self {
                n as $float
            }

            #[allow(clippy::cast_possible_truncation)]
            fn from_f64(x: f64) -> Self {
                x as $float
            }

            fn from_decimal(s: &str) -> Option<Self> {
                s.trim().parse::<$float>().ok()
            }

            fn to_f64(&self) -> f64 {
                f64::from(*self)
            }

            fn abs(&self) -> Self {
                $float::abs(*self)
            }

            fn sqrt(&self) -> Self {
                $float::sqrt(*self)
            }

            fn exp(&self) -> Self {
                $float::exp(*self)
            }

            fn ln(&self) -> Self {
                $float::ln(*self)
            }

            #[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
            fn round_to_i64(&self) -> Option<i64> {
                let r = $float::round(*self);
                // -2^63 is exact in every binary format, 2^63 is the first value past i64::MAX.
                let lower = i64::MIN as $float;
                if r.is_finite() && r >= lower && r < -lower {
                    Some(r as i64)
                } else {
                    None
                }
            }

            fn epsilon() -> Self {
                $float::EPSILON
            }

            #[allow(clippy::cast_precision_loss, clippy::cast_possible_wrap)]
            fn float_distance(&self, other: &Self) -> Self {
                fn ordered(x: $float) -> i128 {
                    let b = x.to_bits() as $signed;
                    if b < 0 {
                        i128::from($signed::MIN) - i128::from(b)
                    } else {
                        i128::from(b)
                    }
                }
                (ordered(*other) - ordered(*self)) as $float
            }

            fn precision_bits() -> usize {
                $float::MANTISSA_DIGITS as usize
            }

            fn powf(&self, exponent: &Self) -> Self {
                $float::powf(*self, *exponent)
            }

            fn is_finite_value(&self) -> bool {
                $float::is_finite(*self)
            }

            fn pi() -> Self {
                std::$float::consts::PI
            }

            fn e() -> Self {
                std::$float::consts::E
            }

            fn sqrt2() -> Self {
                std::$float::consts::SQRT_2
            }

            fn ln2() -> Self {
                std::$float::consts::LN_2
            }

            fn type_name() -> &'static str {
                stringify!($float)
            }
        }
    };
}

impl_real_for_primitive!(f32, i32);
impl_real_for_primitive!(f64, i64);
