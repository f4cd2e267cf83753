//! Itemset module - a set of items with measured support

use crate::measure::{tolerance_key, SUPPORT_TOLERANCE};
use crate::Item;
use std::cmp::Ordering;

/// A non-empty set of items paired with its support
///
/// Support is the weighted fraction of transactions containing every item of
/// the set. For `A ⊆ B`, `support(A) >= support(B)` always holds for itemsets
/// produced by the miner.
#[derive(Debug, Clone, PartialEq)]
pub struct Itemset {
    items: Vec<Item>,
    support: f64,
}

impl Itemset {
    /// Create an itemset; items are sorted and de-duplicated
    ///
    /// Returns `None` when no items are given.
    pub fn new(items: impl IntoIterator<Item = Item>, support: f64) -> Option<Self> {
        let mut items: Vec<Item> = items.into_iter().collect();
        if items.is_empty() {
            return None;
        }
        items.sort();
        items.dedup();
        Some(Self { items, support })
    }

    /// Items in canonical order
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Support in [0, 1]
    pub fn support(&self) -> f64 {
        self.support
    }

    /// Number of items
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Always false; itemsets are non-empty
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Check whether every item of `self` also belongs to `other`
    pub fn is_subset_of(&self, other: &Itemset) -> bool {
        self.items
            .iter()
            .all(|item| other.items.binary_search(item).is_ok())
    }

    /// Item identifiers as plain strings
    pub fn labels(&self) -> Vec<&str> {
        self.items.iter().map(Item::as_str).collect()
    }

    /// Presentation order: descending support, then canonical item order
    ///
    /// Supports within [`SUPPORT_TOLERANCE`] of each other rank as equal, so
    /// rounding noise in weighted sums cannot reorder tied itemsets.
    pub fn ranking(a: &Itemset, b: &Itemset) -> Ordering {
        let key = |set: &Itemset| tolerance_key(set.support, SUPPORT_TOLERANCE);
        key(b)
            .total_cmp(&key(a))
            .then_with(|| a.items.cmp(&b.items))
            .then_with(|| b.support.total_cmp(&a.support))
    }
}
