//! End-to-end analysis over a small funding dataset

use proptest::prelude::*;
use syndicate_analysis::{
    AnalysisConfig, AnalysisContext, AnalysisError, AnalysisKind, Analyzer, Dataset,
};
use syndicate_domain::FundingRecord;
use syndicate_miner::{MiningConfig, MiningError};

fn record(startup: &str, investors: &[&str], verticals: &[&str]) -> FundingRecord {
    FundingRecord::new(startup, investors.iter().map(|s| s.to_string()).collect())
        .with_verticals(verticals.iter().map(|s| s.to_string()).collect())
}

fn funding_rounds() -> Vec<FundingRecord> {
    vec![
        record("Ola", &["Tiger Global", "Softbank"], &["Mobility"]).with_amount(250e6),
        record("Swiggy", &["Accel", "Tiger Global"], &["Food", "Logistics"]).with_amount(80e6),
        record("Zomato", &["Info Edge", "Tiger Global"], &["Food"]).with_amount(60e6),
        record("Dunzo", &["Accel", "Google"], &["Logistics"]),
        record("Rapido", &["Westbridge"], &["Mobility"]).with_amount(52e6),
        record("Meesho", &["Softbank", "Tiger Global"], &["Commerce"]).with_amount(300e6),
        record("", &["Sequoia"], &["Food"]),
    ]
}

fn context(min_support: f64, min_confidence: f64) -> AnalysisContext {
    let config = AnalysisConfig {
        mining: MiningConfig::with_thresholds(min_support, min_confidence),
        top_n: 5,
    };
    let mut context = AnalysisContext::new(Analyzer::new(config).unwrap());
    context.load(funding_rounds()).unwrap();
    context
}

#[test]
fn test_incomplete_records_are_dropped() {
    let context = context(0.2, 0.5);
    let dataset = context.dataset().unwrap();
    assert_eq!(dataset.len(), 6);
    assert_eq!(dataset.dropped(), 1);
}

#[test]
fn test_every_kind_runs() {
    let mut context = context(0.3, 0.5);
    for kind in AnalysisKind::all() {
        let report = context.report(kind).unwrap();
        assert_eq!(report.kind, kind);
        assert!(!report.itemsets.is_empty(), "{} produced nothing", kind);
    }
}

#[test]
fn test_investor_rules() {
    let mut context = context(0.3, 0.6);
    let report = context.report(AnalysisKind::Investors).unwrap();

    // Softbank appears twice, both times with Tiger Global
    let rule = report
        .rules
        .iter()
        .find(|r| r.antecedent[0].as_str() == "Softbank")
        .expect("Softbank => Tiger Global");
    assert_eq!(rule.consequent[0].as_str(), "Tiger Global");
    assert_eq!(rule.confidence, 1.0);
    assert!(rule.conviction.is_infinite());
}

#[test]
fn test_weighted_analysis_weighs_by_amount() {
    let mut context = context(0.5, 0.5);
    let report = context.report(AnalysisKind::WeightedInvestors).unwrap();
    assert!(!report.weighted_fallback);

    // Softbank deals hold 550M of the 742M reported
    let softbank_tiger = report
        .itemsets
        .iter()
        .find(|set| set.labels() == vec!["Softbank", "Tiger Global"])
        .expect("pair is frequent by capital");
    assert!((softbank_tiger.support() - 550.0 / 742.0).abs() < 1e-9);
}

#[test]
fn test_weighted_fallback_matches_unweighted() {
    let analyzer = Analyzer::new(AnalysisConfig {
        mining: MiningConfig::with_thresholds(0.2, 0.5),
        top_n: 5,
    })
    .unwrap();
    let records: Vec<_> = funding_rounds()
        .into_iter()
        .map(|mut r| {
            r.amount_usd = None;
            r
        })
        .collect();
    let dataset = Dataset::from_records(records).unwrap();

    let plain = analyzer.investor_cooccurrence(&dataset).unwrap();
    let weighted = analyzer.weighted_investor_cooccurrence(&dataset).unwrap();
    assert!(weighted.weighted_fallback);
    assert_eq!(plain.itemsets.as_slice(), weighted.itemsets.as_slice());
    assert_eq!(plain.rules, weighted.rules);
}

#[test]
fn test_startup_similarity_groups_shared_backers() {
    let mut context = context(0.2, 0.5);
    let report = context.report(AnalysisKind::Startups).unwrap();

    // One transaction per distinct investor
    assert_eq!(report.transaction_count, 6);
    assert!(report
        .itemsets
        .iter()
        .any(|set| set.labels() == vec!["Meesho", "Ola"]));
}

#[test]
fn test_reload_recomputes_reports() {
    let mut context = context(0.2, 0.5);
    let before = context.report(AnalysisKind::Investors).unwrap().transaction_count;
    assert_eq!(before, 6);

    context
        .load(vec![record("Cred", &["Tiger Global"], &["Fintech"])])
        .unwrap();
    let after = context.report(AnalysisKind::Investors).unwrap().transaction_count;
    assert_eq!(after, 1);
}

#[test]
fn test_resource_limit_surfaces() {
    let analyzer = Analyzer::new(AnalysisConfig {
        mining: MiningConfig {
            max_candidates: 3,
            ..MiningConfig::with_thresholds(0.01, 0.5)
        },
        top_n: 5,
    })
    .unwrap();
    let investors: Vec<String> = (0..8).map(|i| format!("Fund {}", i)).collect();
    let records = vec![FundingRecord::new("Dense", investors); 3];
    let dataset = Dataset::from_records(records).unwrap();

    let err = analyzer.investor_cooccurrence(&dataset).unwrap_err();
    assert!(matches!(
        err,
        AnalysisError::Mining(MiningError::ResourceLimit { .. })
    ));
}

#[test]
fn test_insights_serialize() {
    let mut context = context(0.2, 0.5);
    let insights = context.insights().unwrap();
    let json = serde_json::to_value(insights).unwrap();

    assert_eq!(json["stats"]["startups"], 6);
    assert_eq!(json["top_investors"][0]["name"], "Tiger Global");
    assert_eq!(json["top_investors"][0]["count"], 4);
}

proptest! {
    /// Property: without amounts, weighted analysis equals unweighted analysis
    #[test]
    fn test_fallback_equivalence(
        rows in prop::collection::vec(prop::collection::btree_set(0usize..5, 1..=5), 1..15),
        min_support in 0.1f64..=0.8,
    ) {
        let records: Vec<_> = rows
            .iter()
            .enumerate()
            .map(|(i, set)| {
                FundingRecord::new(
                    format!("S{}", i),
                    set.iter().map(|n| format!("I{}", n)).collect(),
                )
            })
            .collect();
        let dataset = Dataset::from_records(records).unwrap();
        let analyzer = Analyzer::new(AnalysisConfig {
            mining: MiningConfig::with_thresholds(min_support, 0.3),
            top_n: 5,
        })
        .unwrap();

        let plain = analyzer.investor_cooccurrence(&dataset).unwrap();
        let weighted = analyzer.weighted_investor_cooccurrence(&dataset).unwrap();
        prop_assert!(weighted.weighted_fallback);
        prop_assert_eq!(plain.itemsets.as_slice(), weighted.itemsets.as_slice());
        prop_assert_eq!(plain.rules, weighted.rules);
    }
}
