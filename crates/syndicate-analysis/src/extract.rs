//! Extractors that turn funding records into transactions
//!
//! Records are validated at ingestion, so none of these can fail.

use crate::Dataset;
use std::collections::BTreeMap;
use std::convert::Infallible;
use syndicate_domain::traits::{ItemExtractor, WeightExtractor};
use syndicate_domain::FundingRecord;

/// Items are the investors of a funding record
#[derive(Debug, Clone, Copy, Default)]
pub struct InvestorItems;

impl ItemExtractor<FundingRecord> for InvestorItems {
    type Error = Infallible;

    fn extract_items(&self, row: &FundingRecord) -> Result<Vec<String>, Infallible> {
        Ok(row.investors.clone())
    }
}

/// Items are the vertical tokens of a funding record
#[derive(Debug, Clone, Copy, Default)]
pub struct VerticalItems;

impl ItemExtractor<FundingRecord> for VerticalItems {
    type Error = Infallible;

    fn extract_items(&self, row: &FundingRecord) -> Result<Vec<String>, Infallible> {
        Ok(row.verticals.clone())
    }
}

/// Weight is the reported amount; unreported amounts weigh 0
#[derive(Debug, Clone, Copy, Default)]
pub struct AmountWeight;

impl WeightExtractor<FundingRecord> for AmountWeight {
    type Error = Infallible;

    fn extract_weight(&self, row: &FundingRecord) -> Result<Option<f64>, Infallible> {
        Ok(row.amount_usd)
    }
}

/// Every startup an investor has backed
///
/// Used for the transposed construction: each investor is a transaction
/// whose items are startups, so frequent itemsets are groups of startups
/// that share backers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Portfolio {
    /// The investor
    pub investor: String,

    /// Startups it backed, sorted
    pub startups: Vec<String>,
}

impl Portfolio {
    /// One portfolio per distinct investor, ordered by investor
    pub fn from_dataset(dataset: &Dataset) -> Vec<Portfolio> {
        let mut by_investor: BTreeMap<&str, Vec<&str>> = BTreeMap::new();
        for record in dataset.records() {
            for investor in &record.investors {
                by_investor
                    .entry(investor.as_str())
                    .or_default()
                    .push(record.startup.as_str());
            }
        }

        by_investor
            .into_iter()
            .map(|(investor, mut startups)| {
                startups.sort_unstable();
                startups.dedup();
                Portfolio {
                    investor: investor.to_string(),
                    startups: startups.into_iter().map(str::to_string).collect(),
                }
            })
            .collect()
    }
}

/// Items are the startups of an investor's portfolio
#[derive(Debug, Clone, Copy, Default)]
pub struct PortfolioItems;

impl ItemExtractor<Portfolio> for PortfolioItems {
    type Error = Infallible;

    fn extract_items(&self, row: &Portfolio) -> Result<Vec<String>, Infallible> {
        Ok(row.startups.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dataset() -> Dataset {
        Dataset::from_records(vec![
            FundingRecord::new("Ola", vec!["Tiger".into(), "Accel".into()]),
            FundingRecord::new("Zomato", vec!["Tiger".into()]),
            FundingRecord::new("Ola", vec!["Tiger".into()]),
        ])
        .unwrap()
    }

    #[test]
    fn test_portfolios_transpose() {
        let portfolios = Portfolio::from_dataset(&dataset());
        assert_eq!(portfolios.len(), 2);
        assert_eq!(portfolios[0].investor, "Accel");
        assert_eq!(portfolios[0].startups, vec!["Ola"]);
        assert_eq!(portfolios[1].investor, "Tiger");
        assert_eq!(portfolios[1].startups, vec!["Ola", "Zomato"]);
    }

    #[test]
    fn test_extractors() {
        let record = FundingRecord::new("Ola", vec!["Tiger".into()])
            .with_verticals(vec!["Mobility".into()])
            .with_amount(5.0);

        assert_eq!(InvestorItems.extract_items(&record).unwrap(), vec!["Tiger"]);
        assert_eq!(VerticalItems.extract_items(&record).unwrap(), vec!["Mobility"]);
        assert_eq!(AmountWeight.extract_weight(&record).unwrap(), Some(5.0));
    }
}
