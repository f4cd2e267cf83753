//! Dataset insights and investor profiles
//!
//! Plain counting over the ingested records, no mining involved. Every
//! ranked list is ordered by count (descending) and then by name, so equal
//! counts always come back in the same order.

use crate::{AnalysisError, Dataset, Result};
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

/// A name with the number of times it was counted
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Ranked {
    /// Investor, startup or vertical
    pub name: String,
    /// Occurrences
    pub count: usize,
}

/// Headline numbers for a dataset
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DatasetStats {
    /// Funding records
    pub records: usize,
    /// Distinct startups
    pub startups: usize,
    /// Distinct investors
    pub investors: usize,
    /// Records carrying an amount
    pub records_with_amount: usize,
}

/// Summary of a dataset
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Insights {
    /// Headline numbers
    pub stats: DatasetStats,
    /// Investors by number of deals
    pub top_investors: Vec<Ranked>,
    /// Verticals by number of deals
    pub top_domains: Vec<Ranked>,
    /// Startups by number of distinct investors
    pub top_startups: Vec<Ranked>,
    /// Total reported funding, when any record has an amount
    pub total_amount_usd: Option<f64>,
}

impl Insights {
    /// Compute insights with lists of at most `top_n` entries
    pub fn compute(dataset: &Dataset, top_n: usize) -> Self {
        let records = dataset.records();

        let mut deals: BTreeMap<&str, usize> = BTreeMap::new();
        let mut domains: BTreeMap<&str, usize> = BTreeMap::new();
        let mut backers: BTreeMap<&str, BTreeSet<&str>> = BTreeMap::new();

        for record in records {
            for investor in &record.investors {
                *deals.entry(investor).or_default() += 1;
            }
            for vertical in &record.verticals {
                *domains.entry(vertical).or_default() += 1;
            }
            backers
                .entry(record.startup.as_str())
                .or_default()
                .extend(record.investors.iter().map(String::as_str));
        }

        let amounts: Vec<f64> = records.iter().filter_map(|r| r.amount_usd).collect();

        Self {
            stats: DatasetStats {
                records: records.len(),
                startups: backers.len(),
                investors: deals.len(),
                records_with_amount: amounts.len(),
            },
            top_investors: rank(deals, top_n),
            top_domains: rank(domains, top_n),
            top_startups: rank(
                backers.into_iter().map(|(name, set)| (name, set.len())),
                top_n,
            ),
            total_amount_usd: (!amounts.is_empty()).then(|| amounts.iter().sum()),
        }
    }
}

/// What one investor has done in the dataset
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InvestorProfile {
    /// The investor
    pub investor: String,
    /// Funding records it appears on
    pub deals: usize,
    /// Distinct startups backed, sorted
    pub startups: Vec<String>,
    /// Verticals of its deals
    pub top_domains: Vec<Ranked>,
    /// Investors it shared deals with, by number of shared deals
    pub top_co_investors: Vec<Ranked>,
}

impl InvestorProfile {
    /// Build the profile of `investor`
    ///
    /// # Errors
    ///
    /// [`AnalysisError::UnknownInvestor`] when no record names the investor.
    pub fn compute(dataset: &Dataset, investor: &str, top_n: usize) -> Result<Self> {
        let mut deals = 0;
        let mut startups = BTreeSet::new();
        let mut domains: BTreeMap<&str, usize> = BTreeMap::new();
        let mut partners: BTreeMap<&str, usize> = BTreeMap::new();

        for record in dataset.records().iter().filter(|r| r.has_investor(investor)) {
            deals += 1;
            startups.insert(record.startup.clone());
            for vertical in &record.verticals {
                *domains.entry(vertical).or_default() += 1;
            }
            for partner in record.investors.iter().filter(|i| *i != investor) {
                *partners.entry(partner).or_default() += 1;
            }
        }

        if deals == 0 {
            return Err(AnalysisError::UnknownInvestor(investor.to_string()));
        }

        Ok(Self {
            investor: investor.to_string(),
            deals,
            startups: startups.into_iter().collect(),
            top_domains: rank(domains, top_n),
            top_co_investors: rank(partners, top_n),
        })
    }
}

fn rank<'a>(counts: impl IntoIterator<Item = (&'a str, usize)>, top_n: usize) -> Vec<Ranked> {
    // Input is name-ordered; a stable sort by count keeps names ascending on ties
    let mut ranked: Vec<(&str, usize)> = counts.into_iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
    ranked
        .into_iter()
        .take(top_n)
        .map(|(name, count)| Ranked {
            name: name.to_string(),
            count,
        })
        .collect()
}
