//! Syndicate Analysis
//!
//! Turns funding records into co-investment patterns by running the miner
//! over four transaction definitions.
//!
//! # Overview
//!
//! | Analysis | Transaction | Items |
//! |----------|-------------|-------|
//! | `investors` | funding record | its investors |
//! | `weighted` | funding record, weighted by amount | its investors |
//! | `startups` | investor | startups it backed |
//! | `sectors` | funding record | its verticals |
//!
//! Besides mining, the crate computes dataset [`Insights`] and
//! [`InvestorProfile`]s, and provides [`AnalysisContext`] to own a loaded
//! dataset together with cached results.
//!
//! # Usage
//!
//! ```
//! use syndicate_analysis::{AnalysisConfig, AnalysisContext, AnalysisKind, Analyzer};
//! use syndicate_domain::FundingRecord;
//!
//! # fn main() -> syndicate_analysis::Result<()> {
//! let mut config = AnalysisConfig::default();
//! config.mining.min_support = 0.5;
//! config.mining.min_confidence = 0.5;
//!
//! let mut context = AnalysisContext::new(Analyzer::new(config)?);
//! context.load(vec![
//!     FundingRecord::new("Ola", vec!["Tiger".into(), "Accel".into()]),
//!     FundingRecord::new("Swiggy", vec!["Tiger".into(), "Accel".into()]),
//!     FundingRecord::new("Zomato", vec!["Info Edge".into()]),
//! ])?;
//!
//! let report = context.report(AnalysisKind::Investors)?;
//! assert_eq!(report.rules.len(), 2);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

mod analyzer;
mod config;
mod context;
mod dataset;
mod error;
mod extract;
mod insights;

pub use analyzer::{AnalysisKind, AnalysisReport, Analyzer};
pub use config::AnalysisConfig;
pub use context::AnalysisContext;
pub use dataset::Dataset;
pub use error::{AnalysisError, Result};
pub use extract::{AmountWeight, InvestorItems, Portfolio, PortfolioItems, VerticalItems};
pub use insights::{DatasetStats, Insights, InvestorProfile, Ranked};
