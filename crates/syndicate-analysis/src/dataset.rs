//! Typed dataset ingestion
//!
//! Records are validated once, here, so nothing downstream has to re-check
//! them. Rows without a startup name or without any investor are dropped
//! (they cannot describe a funding relationship); amounts that are negative
//! or not finite are rejected outright.

use crate::{AnalysisError, Result};
use std::collections::BTreeSet;
use syndicate_domain::FundingRecord;

/// An ingested, validated set of funding records
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    records: Vec<FundingRecord>,
    dropped: usize,
}

impl Dataset {
    /// Validate and ingest records
    ///
    /// Investors and verticals are de-duplicated per record (first occurrence
    /// wins) and blank entries are removed. Identifiers are otherwise taken
    /// as-is.
    ///
    /// # Errors
    ///
    /// [`AnalysisError::InvalidRecord`] when an amount is negative or not
    /// finite.
    pub fn from_records(records: Vec<FundingRecord>) -> Result<Self> {
        let mut kept = Vec::with_capacity(records.len());
        let mut dropped = 0;

        for (index, mut record) in records.into_iter().enumerate() {
            if let Some(amount) = record.amount_usd {
                if !amount.is_finite() || amount < 0.0 {
                    return Err(AnalysisError::InvalidRecord {
                        index,
                        reason: format!("amount_usd must be finite and non-negative, got {}", amount),
                    });
                }
            }

            record.investors = distinct_non_blank(record.investors);
            record.verticals = distinct_non_blank(record.verticals);

            if record.startup.trim().is_empty() || record.investors.is_empty() {
                dropped += 1;
                continue;
            }
            kept.push(record);
        }

        if dropped > 0 {
            tracing::warn!(
                "Dropped {} funding record(s) without a startup name or investors",
                dropped
            );
        }

        Ok(Self {
            records: kept,
            dropped,
        })
    }

    /// Ingested records, in submission order
    pub fn records(&self) -> &[FundingRecord] {
        &self.records
    }

    /// Number of ingested records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether no record survived ingestion
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of records dropped at ingestion
    pub fn dropped(&self) -> usize {
        self.dropped
    }

    /// Whether any record reports an amount
    ///
    /// Weighted analysis falls back to unweighted mining when this is false.
    pub fn has_amounts(&self) -> bool {
        self.records.iter().any(|r| r.amount_usd.is_some())
    }

    /// Distinct investors, sorted
    pub fn investors(&self) -> BTreeSet<&str> {
        self.records
            .iter()
            .flat_map(|r| r.investors.iter().map(String::as_str))
            .collect()
    }

    /// Distinct startups, sorted
    pub fn startups(&self) -> BTreeSet<&str> {
        self.records.iter().map(|r| r.startup.as_str()).collect()
    }
}

fn distinct_non_blank(values: Vec<String>) -> Vec<String> {
    let mut seen = BTreeSet::new();
    values
        .into_iter()
        .filter(|v| !v.trim().is_empty())
        .filter(|v| seen.insert(v.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(startup: &str, investors: &[&str]) -> FundingRecord {
        FundingRecord::new(startup, investors.iter().map(|s| s.to_string()).collect())
    }

    #[test]
    fn test_drops_incomplete_records() {
        let dataset = Dataset::from_records(vec![
            record("Ola", &["Accel"]),
            record("", &["Accel"]),
            record("Zomato", &[]),
            record("Swiggy", &["  "]),
        ])
        .unwrap();

        assert_eq!(dataset.len(), 1);
        assert_eq!(dataset.dropped(), 3);
    }

    #[test]
    fn test_dedupes_investors() {
        let dataset =
            Dataset::from_records(vec![record("Ola", &["Tiger", "Accel", "Tiger"])]).unwrap();
        assert_eq!(dataset.records()[0].investors, vec!["Tiger", "Accel"]);
    }

    #[test]
    fn test_rejects_negative_amount() {
        let err = Dataset::from_records(vec![
            record("Ola", &["Accel"]).with_amount(10.0),
            record("Zomato", &["Info Edge"]).with_amount(-5.0),
        ])
        .unwrap_err();
        assert!(matches!(err, AnalysisError::InvalidRecord { index: 1, .. }));
    }

    #[test]
    fn test_has_amounts() {
        let without = Dataset::from_records(vec![record("Ola", &["Accel"])]).unwrap();
        assert!(!without.has_amounts());

        let with = Dataset::from_records(vec![
            record("Ola", &["Accel"]),
            record("Zomato", &["Info Edge"]).with_amount(0.0),
        ])
        .unwrap();
        assert!(with.has_amounts());
    }

    #[test]
    fn test_vocabularies() {
        let dataset = Dataset::from_records(vec![
            record("Ola", &["Tiger", "Accel"]),
            record("Ola", &["Softbank"]),
            record("Zomato", &["Tiger"]),
        ])
        .unwrap();

        assert_eq!(
            dataset.investors().into_iter().collect::<Vec<_>>(),
            vec!["Accel", "Softbank", "Tiger"]
        );
        assert_eq!(dataset.startups().len(), 2);
    }
}
