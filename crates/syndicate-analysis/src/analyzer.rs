//! The analysis facade: one miner, four transaction definitions

use crate::extract::{AmountWeight, InvestorItems, Portfolio, PortfolioItems, VerticalItems};
use crate::{AnalysisConfig, Dataset, Result};
use std::fmt;
use syndicate_domain::{Itemset, Rule, Transaction};
use syndicate_miner::{
    build_transactions, build_unweighted, FrequentItemsets, Miner, RuleGenerator,
};
use tracing::{debug, info};

/// Which transaction definition an analysis mines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnalysisKind {
    /// One transaction per funding record, items are its investors
    Investors,
    /// As `Investors`, weighted by the reported amount
    WeightedInvestors,
    /// One transaction per investor, items are the startups it backed
    Startups,
    /// One transaction per funding record, items are its verticals
    Sectors,
}

impl AnalysisKind {
    /// Short name used on the command line and in output
    pub fn as_str(&self) -> &'static str {
        match self {
            AnalysisKind::Investors => "investors",
            AnalysisKind::WeightedInvestors => "weighted",
            AnalysisKind::Startups => "startups",
            AnalysisKind::Sectors => "sectors",
        }
    }

    /// Parse a short name
    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "investors" => Some(AnalysisKind::Investors),
            "weighted" | "weighted_investors" => Some(AnalysisKind::WeightedInvestors),
            "startups" => Some(AnalysisKind::Startups),
            "sectors" => Some(AnalysisKind::Sectors),
            _ => None,
        }
    }

    /// Every kind, in display order
    pub fn all() -> [AnalysisKind; 4] {
        [
            AnalysisKind::Investors,
            AnalysisKind::WeightedInvestors,
            AnalysisKind::Startups,
            AnalysisKind::Sectors,
        ]
    }
}

impl fmt::Display for AnalysisKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of one analysis run
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisReport {
    /// What was mined
    pub kind: AnalysisKind,

    /// Frequent itemsets, highest support first
    pub itemsets: FrequentItemsets,

    /// Rules, highest confidence first
    pub rules: Vec<Rule>,

    /// True when a weighted analysis had no amounts and mined unweighted
    pub weighted_fallback: bool,

    /// Number of transactions mined
    pub transaction_count: usize,
}

impl AnalysisReport {
    /// At most `n` itemsets, highest support first
    pub fn top_itemsets(&self, n: usize) -> &[Itemset] {
        self.itemsets.top(n)
    }

    /// At most `n` rules, highest confidence first
    pub fn top_rules(&self, n: usize) -> &[Rule] {
        &self.rules[..n.min(self.rules.len())]
    }
}

/// Runs the configured miner over each transaction definition
///
/// The analyzer holds only configuration. Transactions are rebuilt from the
/// dataset on every call.
#[derive(Debug, Clone, Default)]
pub struct Analyzer {
    config: AnalysisConfig,
}

impl Analyzer {
    /// Create an analyzer, validating its configuration
    pub fn new(config: AnalysisConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The active configuration
    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Run the analysis of the given kind
    pub fn run(&self, kind: AnalysisKind, dataset: &Dataset) -> Result<AnalysisReport> {
        match kind {
            AnalysisKind::Investors => self.investor_cooccurrence(dataset),
            AnalysisKind::WeightedInvestors => self.weighted_investor_cooccurrence(dataset),
            AnalysisKind::Startups => self.startup_similarity(dataset),
            AnalysisKind::Sectors => self.sector_cooccurrence(dataset),
        }
    }

    /// Investors that appear together on funding records
    pub fn investor_cooccurrence(&self, dataset: &Dataset) -> Result<AnalysisReport> {
        let transactions = build_unweighted(dataset.records(), &InvestorItems)?;
        self.mine(AnalysisKind::Investors, &transactions, false)
    }

    /// Investor co-occurrence where each record counts by its amount
    ///
    /// Records without an amount weigh 0. When no record has an amount at
    /// all, mining falls back to the unweighted definition and the report is
    /// flagged with `weighted_fallback`.
    pub fn weighted_investor_cooccurrence(&self, dataset: &Dataset) -> Result<AnalysisReport> {
        if !dataset.has_amounts() {
            info!("No funding amounts in dataset, falling back to unweighted investor analysis");
            let transactions = build_unweighted(dataset.records(), &InvestorItems)?;
            return self.mine(AnalysisKind::WeightedInvestors, &transactions, true);
        }

        let transactions = build_transactions(dataset.records(), &InvestorItems, &AmountWeight)?;
        self.mine(AnalysisKind::WeightedInvestors, &transactions, false)
    }

    /// Startups that share backers
    ///
    /// Each investor becomes one transaction whose items are the startups in
    /// its portfolio.
    pub fn startup_similarity(&self, dataset: &Dataset) -> Result<AnalysisReport> {
        let portfolios = Portfolio::from_dataset(dataset);
        let transactions = build_unweighted(&portfolios, &PortfolioItems)?;
        self.mine(AnalysisKind::Startups, &transactions, false)
    }

    /// Verticals that appear together on funding records
    pub fn sector_cooccurrence(&self, dataset: &Dataset) -> Result<AnalysisReport> {
        let transactions = build_unweighted(dataset.records(), &VerticalItems)?;
        self.mine(AnalysisKind::Sectors, &transactions, false)
    }

    fn mine(
        &self,
        kind: AnalysisKind,
        transactions: &[Transaction],
        weighted_fallback: bool,
    ) -> Result<AnalysisReport> {
        let mining = &self.config.mining;
        debug!(
            "Mining {} transactions for {} analysis (min_support={}, min_confidence={})",
            transactions.len(),
            kind,
            mining.min_support,
            mining.min_confidence
        );

        let itemsets = Miner::new(mining.clone()).mine(transactions)?;
        let rules = RuleGenerator::from_config(mining).generate(&itemsets)?;

        info!(
            "{} analysis: {} itemsets, {} rules",
            kind,
            itemsets.len(),
            rules.len()
        );
        debug!("{}", itemsets.stats().summary());

        Ok(AnalysisReport {
            kind,
            itemsets,
            rules,
            weighted_fallback,
            transaction_count: transactions.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use syndicate_domain::FundingRecord;
    use syndicate_miner::MiningConfig;

    fn record(startup: &str, investors: &[&str]) -> FundingRecord {
        FundingRecord::new(startup, investors.iter().map(|s| s.to_string()).collect())
    }

    fn analyzer(min_support: f64, min_confidence: f64) -> Analyzer {
        Analyzer::new(AnalysisConfig {
            mining: MiningConfig::with_thresholds(min_support, min_confidence),
            top_n: 10,
        })
        .unwrap()
    }

    fn scenario() -> Dataset {
        Dataset::from_records(vec![
            record("S1", &["A", "B"]),
            record("S2", &["A", "B", "C"]),
            record("S3", &["A"]),
            record("S4", &["B", "C"]),
        ])
        .unwrap()
    }

    #[test]
    fn test_kind_names() {
        for kind in AnalysisKind::all() {
            assert_eq!(AnalysisKind::parse(kind.as_str()), Some(kind));
        }
        assert_eq!(AnalysisKind::parse("Weighted"), Some(AnalysisKind::WeightedInvestors));
        assert_eq!(AnalysisKind::parse("nope"), None);
    }

    #[test]
    fn test_investor_cooccurrence() {
        let report = analyzer(0.5, 0.5).investor_cooccurrence(&scenario()).unwrap();
        assert_eq!(report.kind, AnalysisKind::Investors);
        assert_eq!(report.transaction_count, 4);
        assert_eq!(report.itemsets.len(), 5);
        assert_eq!(report.rules.len(), 4);
        assert!(!report.weighted_fallback);
    }

    #[test]
    fn test_weighted_fallback() {
        let analyzer = analyzer(0.5, 0.5);
        let dataset = scenario();

        let plain = analyzer.investor_cooccurrence(&dataset).unwrap();
        let weighted = analyzer.weighted_investor_cooccurrence(&dataset).unwrap();

        assert!(weighted.weighted_fallback);
        assert_eq!(weighted.kind, AnalysisKind::WeightedInvestors);
        assert_eq!(weighted.itemsets.as_slice(), plain.itemsets.as_slice());
        assert_eq!(weighted.rules, plain.rules);
    }

    #[test]
    fn test_weighted_uses_amounts() {
        // {A,B} carries 90 of 100 units of capital but only 1 of 2 records
        let dataset = Dataset::from_records(vec![
            record("S1", &["A", "B"]).with_amount(90.0),
            record("S2", &["C"]).with_amount(10.0),
        ])
        .unwrap();

        let report = analyzer(0.6, 0.5)
            .weighted_investor_cooccurrence(&dataset)
            .unwrap();
        assert!(!report.weighted_fallback);
        assert_eq!(report.itemsets.top(1)[0].labels().len(), 1);
        assert!(report
            .itemsets
            .iter()
            .any(|set| set.labels() == vec!["A", "B"] && (set.support() - 0.9).abs() < 1e-12));
    }

    #[test]
    fn test_startup_similarity_is_transposed() {
        let dataset = Dataset::from_records(vec![
            record("Ola", &["Tiger", "Accel"]),
            record("Swiggy", &["Tiger", "Accel"]),
            record("Zomato", &["Info Edge"]),
        ])
        .unwrap();

        let report = analyzer(0.5, 0.5).startup_similarity(&dataset).unwrap();
        assert_eq!(report.transaction_count, 3);
        assert!(report
            .itemsets
            .iter()
            .any(|set| set.labels() == vec!["Ola", "Swiggy"]));
        assert!(report
            .rules
            .iter()
            .all(|rule| rule.confidence == 1.0));
    }

    #[test]
    fn test_sector_cooccurrence() {
        let dataset = Dataset::from_records(vec![
            record("Ola", &["Tiger"]).with_verticals(vec!["Mobility".into(), "AI".into()]),
            record("Uber", &["Accel"]).with_verticals(vec!["Mobility".into(), "AI".into()]),
            record("Zomato", &["Info Edge"]).with_verticals(vec!["Food".into()]),
        ])
        .unwrap();

        let report = analyzer(0.5, 0.9).run(AnalysisKind::Sectors, &dataset).unwrap();
        assert!(report
            .itemsets
            .iter()
            .any(|set| set.labels() == vec!["AI", "Mobility"]));
        assert_eq!(report.rules.len(), 2);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = AnalysisConfig {
            mining: MiningConfig::with_thresholds(0.0, 0.5),
            top_n: 10,
        };
        assert!(Analyzer::new(config).is_err());
    }

    #[test]
    fn test_top_rules_clamps() {
        let report = analyzer(0.5, 0.5).investor_cooccurrence(&scenario()).unwrap();
        assert_eq!(report.top_rules(2).len(), 2);
        assert_eq!(report.top_rules(100).len(), 4);
        assert_eq!(report.top_itemsets(3).len(), 3);
    }
}
