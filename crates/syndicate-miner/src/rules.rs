//! Association rule generation from frequent itemsets

use crate::config::{meets_threshold, THRESHOLD_EPSILON};
use crate::{FrequentItemsets, MiningConfig, MiningError, Result};
use syndicate_domain::{Item, Itemset, Rule};

/// Widest itemset whose antecedents can be enumerated with a 64-bit mask
const MAX_RULE_ITEMSET_LEN: usize = 63;

/// Derives directional rules from frequent itemsets
///
/// Every non-empty proper subset of a frequent itemset is tried as an
/// antecedent. Itemsets are small in practice, so exhaustive enumeration per
/// itemset is cheap. Supports are only read from the miner's output; the
/// generator never touches transactions.
#[derive(Debug, Clone)]
pub struct RuleGenerator {
    min_confidence: f64,
    min_lift: Option<f64>,
}

impl RuleGenerator {
    /// Create a generator with a confidence threshold and optional lift floor
    pub fn new(min_confidence: f64, min_lift: Option<f64>) -> Self {
        Self {
            min_confidence,
            min_lift,
        }
    }

    /// Create a generator using the thresholds of a mining configuration
    pub fn from_config(config: &MiningConfig) -> Self {
        Self::new(config.min_confidence, config.min_lift)
    }

    /// Generate every rule meeting the thresholds
    ///
    /// Rules come back ordered by confidence, then lift, then canonical
    /// antecedent and consequent.
    ///
    /// # Errors
    ///
    /// - [`MiningError::Configuration`] for thresholds out of range
    /// - [`MiningError::InternalConsistency`] if a subset of a frequent
    ///   itemset has no recorded support, or has less support than the
    ///   itemset itself
    pub fn generate(&self, frequent: &FrequentItemsets) -> Result<Vec<Rule>> {
        self.validate()?;

        let mut rules = Vec::new();
        for itemset in frequent.iter().filter(|set| set.len() >= 2) {
            self.rules_for(itemset, frequent, &mut rules)?;
        }
        rules.sort_by(Rule::ranking);
        Ok(rules)
    }

    fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.min_confidence) {
            return Err(MiningError::Configuration(format!(
                "min_confidence must be in [0, 1], got {}",
                self.min_confidence
            )));
        }
        if let Some(min_lift) = self.min_lift {
            if !min_lift.is_finite() || min_lift < 0.0 {
                return Err(MiningError::Configuration(format!(
                    "min_lift must be a non-negative number, got {}",
                    min_lift
                )));
            }
        }
        Ok(())
    }

    fn rules_for(
        &self,
        itemset: &Itemset,
        frequent: &FrequentItemsets,
        out: &mut Vec<Rule>,
    ) -> Result<()> {
        let items = itemset.items();
        if items.len() > MAX_RULE_ITEMSET_LEN {
            return Err(MiningError::InternalConsistency(format!(
                "itemset of {} items is too wide to enumerate antecedents",
                items.len()
            )));
        }

        let support = itemset.support();
        let full: u64 = (1u64 << items.len()) - 1;

        for mask in 1..full {
            let (antecedent, consequent) = split(items, mask);
            let antecedent_support = lookup(frequent, &antecedent, itemset)?;
            let consequent_support = lookup(frequent, &consequent, itemset)?;

            if antecedent_support + THRESHOLD_EPSILON < support
                || consequent_support + THRESHOLD_EPSILON < support
            {
                return Err(MiningError::InternalConsistency(format!(
                    "subset of {:?} has less support than the itemset ({})",
                    itemset.labels(),
                    support
                )));
            }

            let confidence = support / antecedent_support;
            if !meets_threshold(confidence, self.min_confidence) {
                continue;
            }

            let rule = Rule::from_supports(
                antecedent,
                consequent,
                support,
                antecedent_support,
                consequent_support,
            );
            if let Some(min_lift) = self.min_lift {
                if !meets_threshold(rule.lift, min_lift) {
                    continue;
                }
            }
            out.push(rule);
        }
        Ok(())
    }
}

/// Split canonical items by a bitmask: set bits go to the antecedent
fn split(items: &[Item], mask: u64) -> (Vec<Item>, Vec<Item>) {
    let mut antecedent = Vec::new();
    let mut consequent = Vec::new();
    for (position, item) in items.iter().enumerate() {
        if mask & (1 << position) != 0 {
            antecedent.push(item.clone());
        } else {
            consequent.push(item.clone());
        }
    }
    (antecedent, consequent)
}

fn lookup(frequent: &FrequentItemsets, subset: &[Item], parent: &Itemset) -> Result<f64> {
    match frequent.support_of(subset) {
        Some(support) if support > 0.0 => Ok(support),
        Some(support) => Err(MiningError::InternalConsistency(format!(
            "subset {:?} of frequent itemset {:?} has support {}",
            subset.iter().map(Item::as_str).collect::<Vec<_>>(),
            parent.labels(),
            support
        ))),
        None => Err(MiningError::InternalConsistency(format!(
            "subset {:?} of frequent itemset {:?} is not frequent",
            subset.iter().map(Item::as_str).collect::<Vec<_>>(),
            parent.labels()
        ))),
    }
}
