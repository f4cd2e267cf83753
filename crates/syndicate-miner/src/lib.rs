//! Syndicate Miner
//!
//! Frequent itemset and association rule mining over weighted transactions.
//!
//! # Overview
//!
//! The miner is the only part of Syndicate with real combinatorial
//! structure. It is responsible for:
//! - **Transaction building**: turning raw rows into weighted item sets
//! - **Itemset mining**: level-wise apriori search with subset pruning
//! - **Rule generation**: directional rules with confidence, lift,
//!   leverage and conviction
//!
//! The miner knows nothing about investors or startups; it operates on
//! opaque item identifiers and weights. It keeps no state between calls and
//! does not log.
//!
//! # Architecture
//!
//! ```text
//! rows → build_transactions → Miner::mine → RuleGenerator::generate → rules
//! ```
//!
//! # Usage
//!
//! ```
//! use syndicate_domain::{Item, Transaction};
//! use syndicate_miner::{mine_rules, MiningConfig};
//!
//! # fn main() -> Result<(), syndicate_miner::MiningError> {
//! let tx = |names: &[&str]| Transaction::new(names.iter().filter_map(|n| Item::parse(*n)));
//! let transactions = vec![tx(&["A", "B"]), tx(&["A", "B", "C"]), tx(&["A"]), tx(&["B", "C"])];
//!
//! let (itemsets, rules) = mine_rules(&transactions, &MiningConfig::with_thresholds(0.5, 0.5))?;
//! assert_eq!(itemsets.len(), 5);
//! assert_eq!(rules.len(), 4);
//! # Ok(())
//! # }
//! ```
//!
//! # Configuration
//!
//! ```toml
//! min_support = 0.02
//! min_confidence = 0.4
//! min_lift = 1.0
//! max_itemset_len = 4
//! max_candidates = 100000
//! support_basis = "total_weight"
//! parallel = true
//! ```

#![warn(missing_docs)]

mod apriori;
mod config;
mod error;
mod rules;
mod stats;
mod tidset;
mod transactions;

pub use apriori::{FrequentItemsets, Miner};
pub use config::{meets_threshold, MiningConfig, SupportBasis, THRESHOLD_EPSILON};
pub use error::{MiningError, Result};
pub use rules::RuleGenerator;
pub use stats::{LevelStats, MiningStats};
pub use transactions::{build_transactions, build_unweighted, Unweighted};

use syndicate_domain::{Rule, Transaction};

/// Mine frequent itemsets and derive rules with one configuration
pub fn mine_rules(
    transactions: &[Transaction],
    config: &MiningConfig,
) -> Result<(FrequentItemsets, Vec<Rule>)> {
    let itemsets = Miner::new(config.clone()).mine(transactions)?;
    let rules = RuleGenerator::from_config(config).generate(&itemsets)?;
    Ok((itemsets, rules))
}
