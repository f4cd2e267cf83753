//! Owned analysis state: the loaded dataset and memoized results

use crate::{
    AnalysisError, AnalysisKind, AnalysisReport, Analyzer, Dataset, Insights, InvestorProfile,
    Result,
};
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use syndicate_domain::FundingRecord;
use tracing::{debug, info};

/// Holds at most one dataset and caches what was computed from it
///
/// Loading a dataset replaces the previous one and discards every cached
/// insight and report.
#[derive(Debug, Default)]
pub struct AnalysisContext {
    analyzer: Analyzer,
    dataset: Option<Dataset>,
    insights: Option<Insights>,
    reports: HashMap<AnalysisKind, AnalysisReport>,
    generation: u64,
}

impl AnalysisContext {
    /// Create an empty context
    pub fn new(analyzer: Analyzer) -> Self {
        Self {
            analyzer,
            ..Self::default()
        }
    }

    /// Validate and load records, replacing any loaded dataset
    pub fn load(&mut self, records: Vec<FundingRecord>) -> Result<&Dataset> {
        let dataset = Dataset::from_records(records)?;
        Ok(self.load_dataset(dataset))
    }

    /// Load an already validated dataset
    pub fn load_dataset(&mut self, dataset: Dataset) -> &Dataset {
        self.invalidate();
        self.generation += 1;
        info!(
            "Loaded dataset #{} with {} records ({} dropped)",
            self.generation,
            dataset.len(),
            dataset.dropped()
        );
        self.dataset.insert(dataset)
    }

    /// Drop the dataset and every cached result
    pub fn clear(&mut self) {
        self.invalidate();
        self.dataset = None;
    }

    /// Whether a dataset is loaded
    pub fn is_loaded(&self) -> bool {
        self.dataset.is_some()
    }

    /// Number of datasets loaded so far
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// The analyzer in use
    pub fn analyzer(&self) -> &Analyzer {
        &self.analyzer
    }

    /// The loaded dataset
    pub fn dataset(&self) -> Result<&Dataset> {
        self.dataset.as_ref().ok_or(AnalysisError::NoDataset)
    }

    /// Insights for the loaded dataset, computed once
    pub fn insights(&mut self) -> Result<&Insights> {
        let dataset = self.dataset.as_ref().ok_or(AnalysisError::NoDataset)?;
        let top_n = self.analyzer.config().top_n;
        let insights = self
            .insights
            .get_or_insert_with(|| Insights::compute(dataset, top_n));
        Ok(&*insights)
    }

    /// Report of the given kind for the loaded dataset, computed once
    pub fn report(&mut self, kind: AnalysisKind) -> Result<&AnalysisReport> {
        let dataset = self.dataset.as_ref().ok_or(AnalysisError::NoDataset)?;
        match self.reports.entry(kind) {
            Entry::Occupied(cached) => {
                debug!("Serving cached {} report", kind);
                Ok(&*cached.into_mut())
            }
            Entry::Vacant(slot) => {
                let report = self.analyzer.run(kind, dataset)?;
                Ok(&*slot.insert(report))
            }
        }
    }

    /// Profile of one investor in the loaded dataset
    ///
    /// Profiles are cheap and are not cached.
    pub fn investor_profile(&self, investor: &str) -> Result<InvestorProfile> {
        let dataset = self.dataset()?;
        InvestorProfile::compute(dataset, investor, self.analyzer.config().top_n)
    }

    fn invalidate(&mut self) {
        if self.insights.is_some() || !self.reports.is_empty() {
            debug!("Invalidating cached insights and {} report(s)", self.reports.len());
        }
        self.insights = None;
        self.reports.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records(names: &[(&str, &[&str])]) -> Vec<FundingRecord> {
        names
            .iter()
            .map(|(startup, investors)| {
                FundingRecord::new(*startup, investors.iter().map(|s| s.to_string()).collect())
            })
            .collect()
    }

    #[test]
    fn test_queries_without_dataset() {
        let mut context = AnalysisContext::default();
        assert!(!context.is_loaded());
        assert!(matches!(context.insights(), Err(AnalysisError::NoDataset)));
        assert!(matches!(
            context.report(AnalysisKind::Investors),
            Err(AnalysisError::NoDataset)
        ));
        assert!(matches!(
            context.investor_profile("Tiger"),
            Err(AnalysisError::NoDataset)
        ));
    }

    #[test]
    fn test_reload_invalidates_caches() {
        let mut context = AnalysisContext::default();
        context
            .load(records(&[("Ola", &["Tiger"]), ("Zomato", &["Tiger"])]))
            .unwrap();
        assert_eq!(context.insights().unwrap().stats.records, 2);

        context.load(records(&[("Swiggy", &["Accel"])])).unwrap();
        assert_eq!(context.generation(), 2);
        assert_eq!(context.insights().unwrap().stats.records, 1);
        assert_eq!(context.insights().unwrap().top_investors[0].name, "Accel");
    }

    #[test]
    fn test_clear() {
        let mut context = AnalysisContext::default();
        context.load(records(&[("Ola", &["Tiger"])])).unwrap();
        context.clear();
        assert!(!context.is_loaded());
        assert!(context.dataset().is_err());
    }

    #[test]
    fn test_failed_load_keeps_previous_dataset() {
        let mut context = AnalysisContext::default();
        context.load(records(&[("Ola", &["Tiger"])])).unwrap();

        let bad = vec![FundingRecord::new("Zomato", vec!["Info Edge".into()]).with_amount(f64::NAN)];
        assert!(context.load(bad).is_err());
        assert_eq!(context.dataset().unwrap().len(), 1);
        assert_eq!(context.generation(), 1);
    }
}
