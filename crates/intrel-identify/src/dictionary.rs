//! Ordered value-to-symbol dictionaries.
//!
//! A dictionary maps positive real values to human-readable symbols. The
//! values are kept sorted and unique, which is exactly the input shape the
//! PSLQ engine requires, so a dictionary can be searched as-is and the
//! position of each relation term maps straight back to its symbol.

use intrel_real::Real;

/// A value and the symbol it stands for.
#[derive(Clone, Debug, PartialEq)]
pub struct Entry<T> {
    /// The numerical value.
    pub value: T,
    /// Its symbolic name, such as `"π"` or `"ln(2)"`.
    pub symbol: String,
}

/// Values sorted ascending, each with a symbol.
#[derive(Clone, Debug)]
pub struct Dictionary<T> {
    entries: Vec<Entry<T>>,
}

impl<T> Default for Dictionary<T> {
    fn default() -> Self {
        Self { entries: Vec::new() }
    }
}

impl<T: Real> Dictionary<T> {
    /// Creates an empty dictionary.
    #[must_use]
    pub fn new() -> Self {
        Self { entries: Vec::new() }
    }

    /// Inserts `value` under `symbol`.
    ///
    /// Returns `false` and leaves the dictionary unchanged if the value is
    /// already present (under any symbol) or is not a finite number.
    pub fn insert(&mut self, value: T, symbol: impl Into<String>) -> bool {
        if !value.is_finite_value() {
            return false;
        }
        let position = self.entries.partition_point(|e| e.value < value);
        if self.entries.get(position).is_some_and(|e| e.value == value) {
            return false;
        }
        self.entries.insert(
            position,
            Entry {
                value,
                symbol: symbol.into(),
            },
        );
        true
    }

    /// Inserts `value` only if it is strictly positive.
    pub(crate) fn insert_positive(&mut self, value: T, symbol: impl Into<String>) -> bool {
        value > T::zero() && self.insert(value, symbol)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the dictionary has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The values in ascending order.
    pub fn values(&self) -> Vec<T> {
        self.entries.iter().map(|e| e.value.clone()).collect()
    }

    /// The symbol of the entry at `index` in ascending value order.
    pub fn symbol(&self, index: usize) -> Option<&str> {
        self.entries.get(index).map(|e| e.symbol.as_str())
    }

    /// The symbol stored for exactly `value`.
    pub fn symbol_of(&self, value: &T) -> Option<&str> {
        let position = self.entries.partition_point(|e| e.value < *value);
        self.entries
            .get(position)
            .filter(|e| e.value == *value)
            .map(|e| e.symbol.as_str())
    }

    /// Entries in ascending value order.
    pub fn iter(&self) -> impl Iterator<Item = &Entry<T>> {
        self.entries.iter()
    }
}

impl<T: Real, S: Into<String>> Extend<(T, S)> for Dictionary<T> {
    fn extend<I: IntoIterator<Item = (T, S)>>(&mut self, iter: I) {
        for (value, symbol) in iter {
            self.insert(value, symbol);
        }
    }
}

impl<T: Real, S: Into<String>> FromIterator<(T, S)> for Dictionary<T> {
    fn from_iter<I: IntoIterator<Item = (T, S)>>(iter: I) -> Self {
        let mut dictionary = Self::new();
        dictionary.extend(iter);
        dictionary
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sorted_on_insert() {
        let mut d = Dictionary::new();
        assert!(d.insert(3.0, "c"));
        assert!(d.insert(1.0, "a"));
        assert!(d.insert(2.0, "b"));
        assert_eq!(d.values(), vec![1.0, 2.0, 3.0]);
        assert_eq!(d.symbol(0), Some("a"));
        assert_eq!(d.symbol(2), Some("c"));
        assert_eq!(d.symbol(3), None);
    }

    #[test]
    fn test_duplicate_value_keeps_first_symbol() {
        let mut d = Dictionary::new();
        assert!(d.insert(2.0, "two"));
        assert!(!d.insert(2.0, "deux"));
        assert_eq!(d.len(), 1);
        assert_eq!(d.symbol_of(&2.0), Some("two"));
        assert_eq!(d.symbol_of(&3.0), None);
    }

    #[test]
    fn test_non_finite_rejected() {
        let mut d = Dictionary::new();
        assert!(!d.insert(f64::NAN, "nan"));
        assert!(!d.insert(f64::INFINITY, "inf"));
        assert!(d.is_empty());
    }

    #[test]
    fn test_insert_positive() {
        let mut d = Dictionary::new();
        assert!(!d.insert_positive(0.0, "zero"));
        assert!(!d.insert_positive(-1.0, "minus one"));
        assert!(d.insert_positive(1.0, "one"));
        assert_eq!(d.len(), 1);
    }

    #[test]
    fn test_from_iter() {
        let d: Dictionary<f64> = [(2.0, "b"), (1.0, "a"), (2.0, "again")].into_iter().collect();
        let symbols: Vec<&str> = d.iter().map(|e| e.symbol.as_str()).collect();
        assert_eq!(symbols, vec!["a", "b"]);
    }
}
