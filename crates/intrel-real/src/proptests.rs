//! Property-based tests for the real-number layer.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::Real;

    // Strategy for generating moderate finite doubles
    fn moderate() -> impl Strategy<Value = f64> {
        -1.0e6..1.0e6
    }

    // Strategy for generating strictly positive doubles
    fn positive() -> impl Strategy<Value = f64> {
        1.0e-3..1.0e3
    }

    proptest! {
        #[test]
        fn float_distance_antisymmetric(a in moderate(), b in moderate()) {
            prop_assert_eq!(a.float_distance(&b), -b.float_distance(&a));
        }

        #[test]
        fn float_distance_zero_iff_equal(a in moderate()) {
            prop_assert_eq!(a.float_distance(&a), 0.0);
            let next = f64::from_bits(a.to_bits() + 1);
            prop_assert_eq!(a.float_distance(&next).abs(), 1.0);
        }

        #[test]
        fn float_distance_orders_like_values(a in positive(), b in positive()) {
            let d = a.float_distance(&b);
            prop_assert_eq!(d > 0.0, b > a);
        }

        #[test]
        fn round_is_nearest(a in moderate()) {
            let r = Real::round_to_i64(&a).unwrap();
            #[allow(clippy::cast_precision_loss)]
            let diff = (a - r as f64).abs();
            prop_assert!(diff <= 0.5);
        }

        #[test]
        fn round_is_odd(a in moderate()) {
            prop_assert_eq!(Real::round_to_i64(&-a), Real::round_to_i64(&a).map(|r| -r));
        }

        #[test]
        fn powu_matches_powi(a in 0.5f64..2.0, n in 0u32..20) {
            #[allow(clippy::cast_possible_wrap)]
            let expected = a.powi(n as i32);
            let actual = Real::powu(&a, n);
            prop_assert!((actual - expected).abs() <= 1e-12 * expected.abs().max(1.0));
        }

        #[test]
        fn sqrt_squares_back(a in positive()) {
            let r = Real::sqrt(&a);
            prop_assert!((r * r - a).abs() <= 4.0 * f64::EPSILON * a);
        }

        #[test]
        fn from_decimal_matches_parse(a in moderate()) {
            let text = format!("{a:.17e}");
            prop_assert_eq!(<f64 as Real>::from_decimal(&text), text.parse::<f64>().ok());
        }
    }
}
