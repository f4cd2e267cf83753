//! Transaction module - one record's items plus a weight

use crate::Item;

/// A transaction: a set of unique items plus a non-negative weight
///
/// Items are kept sorted and de-duplicated so membership is a set and
/// subset checks are a merge. A transaction with no items is valid: it never
/// matches a non-empty itemset and only contributes to the denominator.
/// Transactions are immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    items: Vec<Item>,
    weight: f64,
}

impl Transaction {
    /// Create an unweighted transaction (weight 1.0)
    ///
    /// # Examples
    ///
    /// ```
    /// use syndicate_domain::{Item, Transaction};
    ///
    /// let items = ["Accel", "Blume", "Accel"].map(|s| Item::parse(s).unwrap());
    /// let tx = Transaction::new(items);
    /// assert_eq!(tx.len(), 2);
    /// assert_eq!(tx.weight(), 1.0);
    /// ```
    pub fn new(items: impl IntoIterator<Item = Item>) -> Self {
        Self {
            items: canonical(items),
            weight: 1.0,
        }
    }

    /// Create a weighted transaction
    ///
    /// Returns `None` if the weight is negative, NaN or infinite.
    pub fn weighted(items: impl IntoIterator<Item = Item>, weight: f64) -> Option<Self> {
        if !weight.is_finite() || weight < 0.0 {
            return None;
        }
        Some(Self {
            items: canonical(items),
            weight,
        })
    }

    /// Items in canonical (sorted) order
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Transaction weight
    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// Number of distinct items
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the transaction carries no items
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Check whether a single item is present
    pub fn contains(&self, item: &Item) -> bool {
        self.items.binary_search(item).is_ok()
    }

    /// Check whether every item of a canonical (sorted) slice is present
    pub fn contains_all(&self, items: &[Item]) -> bool {
        let mut own = self.items.iter();
        'outer: for wanted in items {
            for candidate in own.by_ref() {
                match candidate.cmp(wanted) {
                    std::cmp::Ordering::Less => continue,
                    std::cmp::Ordering::Equal => continue 'outer,
                    std::cmp::Ordering::Greater => return false,
                }
            }
            return false;
        }
        true
    }
}

fn canonical(items: impl IntoIterator<Item = Item>) -> Vec<Item> {
    let mut items: Vec<Item> = items.into_iter().collect();
    items.sort();
    items.dedup();
    items
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: items are strictly increasing after construction
        #[test]
        fn test_items_are_canonical(names in prop::collection::vec("[a-e]", 0..12)) {
            let tx = Transaction::new(names.iter().filter_map(|n| Item::parse(n.as_str())));
            for pair in tx.items().windows(2) {
                prop_assert!(pair[0] < pair[1]);
            }
        }

        /// Property: contains_all agrees with per-item membership
        #[test]
        fn test_contains_all_matches_contains(
            names in prop::collection::vec("[a-f]", 0..10),
            query in prop::collection::btree_set("[a-f]", 0..4),
        ) {
            let tx = Transaction::new(names.iter().filter_map(|n| Item::parse(n.as_str())));
            let query: Vec<Item> = query.into_iter().filter_map(Item::parse).collect();
            let expected = query.iter().all(|item| tx.contains(item));
            prop_assert_eq!(tx.contains_all(&query), expected);
        }
    }
}
