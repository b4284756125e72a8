//! Property-based tests for dictionaries.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::dictionary::Dictionary;

    proptest! {
        #[test]
        fn insertion_keeps_values_sorted_and_unique(values in proptest::collection::vec(-100i32..100, 0..40)) {
            let mut d = Dictionary::new();
            let mut distinct = std::collections::BTreeSet::new();
            for v in &values {
                let inserted = d.insert(f64::from(*v), v.to_string());
                prop_assert_eq!(inserted, distinct.insert(*v));
            }

            let stored = d.values();
            prop_assert!(stored.windows(2).all(|w| w[0] < w[1]));
            prop_assert_eq!(stored.len(), distinct.len());
        }

        #[test]
        fn symbols_follow_their_values(values in proptest::collection::vec(1i32..1000, 1..20)) {
            let d: Dictionary<f64> = values.iter().map(|v| (f64::from(*v), v.to_string())).collect();
            for (index, entry) in d.iter().enumerate() {
                prop_assert_eq!(d.symbol(index), Some(entry.symbol.as_str()));
                prop_assert_eq!(entry.symbol.parse::<f64>().ok(), Some(entry.value));
            }
        }
    }
}
