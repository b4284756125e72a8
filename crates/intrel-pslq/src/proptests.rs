//! Property-based tests for the PSLQ engine.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::config::default_gamma;
    use crate::error::{InputDefect, RelationError};
    use crate::invariants::{check_initial_invariants, check_step_invariants};
    use crate::state::LatticeState;
    use crate::validate::validate;
    use crate::{find_relation_default_gamma, Pslq, PslqConfig};

    // Strategy for strictly increasing positive inputs, well separated
    fn increasing(max_len: usize) -> impl Strategy<Value = Vec<f64>> {
        (0.5f64..2.0, proptest::collection::vec(0.01f64..10.0, 1..max_len)).prop_map(|(start, gaps)| {
            let mut values = vec![start];
            for gap in gaps {
                let last = values[values.len() - 1];
                values.push(last + gap);
            }
            values
        })
    }

    // (√2, √3, p√2 + q√3): the only relations are multiples of (p, q, −1)
    #[allow(clippy::cast_precision_loss)]
    fn planted(p: i64, q: i64) -> [f64; 3] {
        let (r2, r3) = (2.0_f64.sqrt(), 3.0_f64.sqrt());
        [r2, r3, p as f64 * r2 + q as f64 * r3]
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn planted_relation_is_recovered(p in 1i64..=5, q in 1i64..=5) {
            let relation = find_relation_default_gamma(&planted(p, q), 1000.0).unwrap();
            prop_assert_eq!(relation.canonical_coefficients(), vec![p, q, -1]);
            prop_assert!(relation.terms().iter().all(|t| t.coefficient != 0));
            prop_assert!(!relation.is_suspect());
            prop_assert!(relation.residual().abs() <= *relation.tolerable_residual());
        }

        #[test]
        fn validation_is_idempotent(x in increasing(6)) {
            let first = validate(&x, &10.0, &default_gamma()).unwrap();
            let second = validate(&x, &10.0, &default_gamma()).unwrap();
            prop_assert_eq!(first.partial_sums(), second.partial_sums());
            prop_assert_eq!(first.tau(), second.tau());
        }

        #[test]
        fn out_of_order_input_is_rejected(x in increasing(6), i in 0usize..6, j in 0usize..6) {
            let i = i % x.len();
            let j = j % x.len();
            prop_assume!(i != j);
            let mut shuffled = x.clone();
            shuffled.swap(i, j);
            let err = validate(&shuffled, &10.0, &default_gamma()).unwrap_err();
            let is_unsorted = matches!(err, RelationError::InvalidInput(InputDefect::Unsorted { .. }));
            prop_assert!(is_unsorted);
        }

        #[test]
        fn initial_state_satisfies_invariants(x in increasing(7)) {
            let validated = validate(&x, &10.0, &default_gamma()).unwrap();
            let mut state = LatticeState::new(&x, &validated).unwrap();
            prop_assert!(check_initial_invariants(&state).is_ok());

            #[allow(clippy::cast_precision_loss)]
            let columns = (x.len() - 1) as f64;
            prop_assert!((state.h().squared_norm() - columns).abs() <= 1e-12 * columns);

            state.initial_reduction().unwrap();
            prop_assert!(check_step_invariants(&state).is_ok());
        }

        #[test]
        fn every_decrease_is_flagged(p in 1i64..=5, q in 1i64..=5) {
            let relation = Pslq::new(PslqConfig::new(1000.0)).search(&planted(p, q)).unwrap();
            let stats = relation.stats();
            for i in 1..stats.norm_bounds.len() {
                let decreased = stats.norm_bounds[i] < stats.norm_bounds[i - 1];
                prop_assert_eq!(decreased, stats.norm_bound_decreases.contains(&i));
            }
        }
    }

    #[cfg(feature = "arbitrary-precision")]
    mod quad {
        use intrel_real::bigfloat::Float128;
        use intrel_real::constants::{self, constant};
        use intrel_real::Real;
        use proptest::prelude::*;

        use crate::find_relation_default_gamma;

        fn gcd(a: i64, b: i64) -> i64 {
            if b == 0 { a } else { gcd(b, a % b) }
        }

        proptest! {
            #![proptest_config(ProptestConfig::with_cases(24))]

            #[test]
            fn two_values_give_the_swapped_ratio(
                p in 1i64..30,
                gap in 1i64..30,
                k in prop::sample::select(vec![constants::PI, constants::E, constants::CATALAN]),
            ) {
                let q = p + gap;
                prop_assume!(gcd(p, q) == 1);
                let k: Float128 = constant(k);
                let x = [Float128::from_i64(p) * k.clone(), Float128::from_i64(q) * k];

                let relation = find_relation_default_gamma(&x, Float128::from_i64(1000)).unwrap();
                prop_assert_eq!(relation.canonical_coefficients(), vec![q, -p]);
                prop_assert!(!relation.is_suspect());
            }
        }
    }
}
