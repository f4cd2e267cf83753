//! Level-wise (apriori) frequent itemset mining
//!
//! Items are indexed in their sorted order and each one gets a bitset of
//! the transactions containing it. Level k candidates are built by joining
//! two frequent (k-1)-itemsets that share their first k-2 items, and a
//! candidate is dropped before counting if any of its (k-1)-subsets is not
//! frequent. A level with no survivors ends the search: no larger itemset
//! can be frequent once every itemset of a smaller size is not.

use crate::config::{meets_threshold, SupportBasis};
use crate::stats::MiningStats;
use crate::tidset::TidSet;
use crate::{MiningConfig, MiningError, Result};
use rayon::prelude::*;
use std::collections::{BTreeMap, BTreeSet, HashSet};
use syndicate_domain::{Item, Itemset, Transaction};

/// Levels with fewer candidates than this are counted sequentially
const PARALLEL_MIN_CANDIDATES: usize = 64;

/// Every frequent itemset found by one mining call
///
/// Itemsets are ordered by descending support, ties broken by canonical
/// item order, so truncating to the top N is deterministic. All frequent
/// itemsets are retained (not only maximal ones) because the rule generator
/// needs the support of every antecedent and consequent.
#[derive(Debug, Clone, PartialEq)]
pub struct FrequentItemsets {
    itemsets: Vec<Itemset>,
    supports: BTreeMap<Vec<Item>, f64>,
    denominator: f64,
    transaction_count: usize,
    stats: MiningStats,
}

impl FrequentItemsets {
    /// Wrap externally computed itemsets
    ///
    /// The itemsets are re-ordered into presentation order. Useful for
    /// feeding the rule generator with supports that did not come from
    /// [`Miner::mine`].
    pub fn from_itemsets(itemsets: Vec<Itemset>) -> Self {
        Self::assemble(itemsets, 1.0, 0, MiningStats::new())
    }

    fn assemble(
        mut itemsets: Vec<Itemset>,
        denominator: f64,
        transaction_count: usize,
        stats: MiningStats,
    ) -> Self {
        itemsets.sort_by(Itemset::ranking);
        let supports = itemsets
            .iter()
            .map(|set| (set.items().to_vec(), set.support()))
            .collect();

        Self {
            itemsets,
            supports,
            denominator,
            transaction_count,
            stats,
        }
    }

    /// Itemsets in presentation order
    pub fn as_slice(&self) -> &[Itemset] {
        &self.itemsets
    }

    /// Iterate itemsets in presentation order
    pub fn iter(&self) -> std::slice::Iter<'_, Itemset> {
        self.itemsets.iter()
    }

    /// Number of frequent itemsets
    pub fn len(&self) -> usize {
        self.itemsets.len()
    }

    /// Whether nothing met the threshold
    pub fn is_empty(&self) -> bool {
        self.itemsets.is_empty()
    }

    /// The first `n` itemsets in presentation order
    pub fn top(&self, n: usize) -> &[Itemset] {
        &self.itemsets[..n.min(self.itemsets.len())]
    }

    /// Itemsets with exactly `len` items, in presentation order
    pub fn of_len(&self, len: usize) -> impl Iterator<Item = &Itemset> {
        self.itemsets.iter().filter(move |set| set.len() == len)
    }

    /// Support of a canonical (sorted) item set, if it is frequent
    pub fn support_of(&self, items: &[Item]) -> Option<f64> {
        self.supports.get(items).copied()
    }

    /// Denominator support was measured against
    pub fn denominator(&self) -> f64 {
        self.denominator
    }

    /// Number of transactions mined
    pub fn transaction_count(&self) -> usize {
        self.transaction_count
    }

    /// Per-level statistics of the mining call
    pub fn stats(&self) -> &MiningStats {
        &self.stats
    }

    /// Consume and return the itemsets in presentation order
    pub fn into_vec(self) -> Vec<Itemset> {
        self.itemsets
    }
}

impl<'a> IntoIterator for &'a FrequentItemsets {
    type Item = &'a Itemset;
    type IntoIter = std::slice::Iter<'a, Itemset>;

    fn into_iter(self) -> Self::IntoIter {
        self.itemsets.iter()
    }
}

/// Frequent itemset miner
///
/// # Examples
///
/// ```
/// use syndicate_domain::{Item, Transaction};
/// use syndicate_miner::{Miner, MiningConfig};
///
/// let tx = |names: &[&str]| Transaction::new(names.iter().filter_map(|n| Item::parse(*n)));
/// let transactions = vec![tx(&["A", "B"]), tx(&["A", "B", "C"]), tx(&["A"]), tx(&["B", "C"])];
///
/// let miner = Miner::new(MiningConfig::with_thresholds(0.5, 0.5));
/// let frequent = miner.mine(&transactions).unwrap();
///
/// let ab = [Item::parse("A").unwrap(), Item::parse("B").unwrap()];
/// assert_eq!(frequent.support_of(&ab), Some(0.5));
/// ```
#[derive(Debug, Clone)]
pub struct Miner {
    config: MiningConfig,
}

impl Miner {
    /// Create a new miner with the given configuration
    pub fn new(config: MiningConfig) -> Self {
        Self { config }
    }

    /// Create a miner with default configuration
    pub fn default_config() -> Self {
        Self::new(MiningConfig::default())
    }

    /// Get the configuration
    pub fn config(&self) -> &MiningConfig {
        &self.config
    }

    /// Find every itemset whose support meets `min_support`
    ///
    /// # Errors
    ///
    /// - [`MiningError::Configuration`] for invalid thresholds or a zero
    ///   support denominator
    /// - [`MiningError::ResourceLimit`] when candidate generation exceeds
    ///   `max_candidates`
    pub fn mine(&self, transactions: &[Transaction]) -> Result<FrequentItemsets> {
        self.config.validate()?;
        // Canonical row order, so weighted sums do not depend on submission order
        let mut rows: Vec<&Transaction> = transactions.iter().collect();
        rows.sort_by(|a, b| {
            a.items()
                .cmp(b.items())
                .then_with(|| a.weight().total_cmp(&b.weight()))
        });
        let denominator = denominator(&rows, self.config.support_basis)?;

        let vocabulary: Vec<Item> = rows
            .iter()
            .flat_map(|tx| tx.items().iter().cloned())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        let mut stats = MiningStats::new();
        stats.distinct_items = vocabulary.len();

        let mut tidsets = vec![TidSet::with_capacity(rows.len()); vocabulary.len()];
        for (tid, tx) in rows.iter().enumerate() {
            // Zero-weight transactions can never add to a numerator
            if tx.weight() <= 0.0 {
                continue;
            }
            for item in tx.items() {
                let index = vocabulary.binary_search(item).map_err(|_| {
                    MiningError::InternalConsistency(format!(
                        "item '{}' missing from vocabulary",
                        item
                    ))
                })?;
                tidsets[index].insert(tid);
            }
        }

        let weights: Vec<f64> = rows.iter().map(|tx| tx.weight()).collect();
        let counter = SupportCounter {
            weights: &weights,
            basis: self.config.support_basis,
            denominator,
        };
        let min_support = self.config.min_support;
        let mut budget = Budget::new(self.config.max_candidates);

        // Level 1
        budget.spend(1, vocabulary.len())?;
        let mut level: Vec<Entry> = tidsets
            .into_iter()
            .enumerate()
            .filter_map(|(index, tids)| {
                let support = counter.support(&tids);
                meets_threshold(support, min_support).then(|| Entry {
                    items: vec![index],
                    tids,
                    support,
                })
            })
            .collect();
        stats.record_level(1, vocabulary.len(), 0, level.len());

        let mut found: Vec<(Vec<usize>, f64)> =
            level.iter().map(|e| (e.items.clone(), e.support)).collect();

        // Level k >= 2
        let mut k = 2;
        while !level.is_empty() && self.config.max_itemset_len.is_none_or(|max| k <= max) {
            let (candidates, pruned) = generate_candidates(&level, k, &mut budget)?;
            if candidates.is_empty() {
                stats.record_level(k, 0, pruned, 0);
                break;
            }

            let parallel = self.config.parallel && candidates.len() >= PARALLEL_MIN_CANDIDATES;
            stats.parallel |= parallel;

            let evaluate = |candidate: &Candidate| {
                let tids = level[candidate.left].tids.intersect(&level[candidate.right].tids);
                let support = counter.support(&tids);
                (tids, support)
            };
            // Both paths keep candidate order, so output does not depend on scheduling
            let measured: Vec<(TidSet, f64)> = if parallel {
                candidates.par_iter().map(&evaluate).collect()
            } else {
                candidates.iter().map(&evaluate).collect()
            };

            let counted = candidates.len();
            let next: Vec<Entry> = candidates
                .into_iter()
                .zip(measured)
                .filter(|(_, (_, support))| meets_threshold(*support, min_support))
                .map(|(candidate, (tids, support))| Entry {
                    items: candidate.items,
                    tids,
                    support,
                })
                .collect();

            stats.record_level(k, counted, pruned, next.len());
            found.extend(next.iter().map(|e| (e.items.clone(), e.support)));
            level = next;
            k += 1;
        }

        let itemsets = found
            .into_iter()
            .map(|(indices, support)| {
                Itemset::new(indices.iter().map(|&i| vocabulary[i].clone()), support).ok_or_else(
                    || MiningError::InternalConsistency("mined an empty itemset".to_string()),
                )
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(FrequentItemsets::assemble(
            itemsets,
            denominator,
            transactions.len(),
            stats,
        ))
    }
}

/// A frequent itemset of the current level, with its transaction index
struct Entry {
    items: Vec<usize>,
    tids: TidSet,
    support: f64,
}

/// A candidate of the next level and the two entries it was joined from
struct Candidate {
    items: Vec<usize>,
    left: usize,
    right: usize,
}

struct SupportCounter<'a> {
    weights: &'a [f64],
    basis: SupportBasis,
    denominator: f64,
}

impl SupportCounter<'_> {
    fn support(&self, tids: &TidSet) -> f64 {
        let numerator = match self.basis {
            SupportBasis::TotalWeight => tids.iter().map(|tid| self.weights[tid]).sum::<f64>(),
            SupportBasis::TransactionCount => tids.count() as f64,
        };
        numerator / self.denominator
    }
}

/// Running count of generated candidates against `max_candidates`
struct Budget {
    used: usize,
    limit: usize,
}

impl Budget {
    fn new(limit: usize) -> Self {
        Self { used: 0, limit }
    }

    fn spend(&mut self, level: usize, candidates: usize) -> Result<()> {
        self.used = self.used.saturating_add(candidates);
        if self.used > self.limit {
            return Err(MiningError::ResourceLimit {
                level,
                candidates: self.used,
                limit: self.limit,
            });
        }
        Ok(())
    }
}

fn denominator(transactions: &[&Transaction], basis: SupportBasis) -> Result<f64> {
    match basis {
        SupportBasis::TotalWeight => {
            let total: f64 = transactions.iter().map(|tx| tx.weight()).sum();
            if total > 0.0 && total.is_finite() {
                Ok(total)
            } else {
                Err(MiningError::Configuration(format!(
                    "total transaction weight is {} across {} transactions; support is undefined",
                    total,
                    transactions.len()
                )))
            }
        }
        SupportBasis::TransactionCount => {
            if transactions.is_empty() {
                Err(MiningError::Configuration(
                    "no transactions to mine; support is undefined".to_string(),
                ))
            } else {
                Ok(transactions.len() as f64)
            }
        }
    }
}

/// Join frequent (k-1)-itemsets sharing a (k-2)-prefix, then prune
///
/// `level` must be in lexicographic order; the output is too. Returns the
/// surviving candidates and the number pruned.
fn generate_candidates(
    level: &[Entry],
    k: usize,
    budget: &mut Budget,
) -> Result<(Vec<Candidate>, usize)> {
    let known: HashSet<&[usize]> = level.iter().map(|e| e.items.as_slice()).collect();
    let prefix = k - 2;
    let mut candidates = Vec::new();
    let mut pruned = 0;
    let mut scratch = Vec::with_capacity(k - 1);

    for (i, left) in level.iter().enumerate() {
        for (offset, right) in level[i + 1..].iter().enumerate() {
            if left.items[..prefix] != right.items[..prefix] {
                break;
            }
            budget.spend(k, 1)?;

            let mut items = left.items.clone();
            items.push(right.items[prefix]);

            if has_infrequent_subset(&items, &known, &mut scratch) {
                pruned += 1;
                continue;
            }
            candidates.push(Candidate {
                items,
                left: i,
                right: i + 1 + offset,
            });
        }
    }

    Ok((candidates, pruned))
}

fn has_infrequent_subset(
    items: &[usize],
    known: &HashSet<&[usize]>,
    scratch: &mut Vec<usize>,
) -> bool {
    // Dropping either of the last two items gives back a joined parent
    (0..items.len().saturating_sub(2)).any(|skip| {
        scratch.clear();
        scratch.extend(
            items
                .iter()
                .enumerate()
                .filter(|&(position, _)| position != skip)
                .map(|(_, &id)| id),
        );
        !known.contains(scratch.as_slice())
    })
}
