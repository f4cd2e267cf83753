//! Configuration for mining operations
//!
//! Defines support and confidence thresholds, the support denominator, and
//! the resource budget that keeps dense inputs from blowing up.

use crate::{MiningError, Result};
use serde::{Deserialize, Serialize};

/// Tolerance used when comparing a measured ratio against a threshold
///
/// Weighted supports are sums of floating-point fractions, so a ratio that
/// is mathematically equal to the threshold may land a few ulps below it.
/// Shared with the ranking of itemsets and rules.
pub const THRESHOLD_EPSILON: f64 = syndicate_domain::SUPPORT_TOLERANCE;

/// Check whether a measured support or confidence meets a threshold
pub fn meets_threshold(value: f64, threshold: f64) -> bool {
    value + THRESHOLD_EPSILON >= threshold
}

/// What support is measured against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SupportBasis {
    /// Sum of weights of matching transactions over the total weight
    #[default]
    TotalWeight,

    /// Matching transactions with a positive weight over the transaction count
    TransactionCount,
}

/// Configuration for the miner and the rule generator
///
/// # Threshold tolerance
///
/// `min_support`, `min_confidence` and `min_lift` are compared with
/// [`meets_threshold`], which accepts a measure up to [`THRESHOLD_EPSILON`]
/// (1e-12) below its threshold. A support of `0.1 + 0.2` therefore meets a
/// `0.3` threshold. The slack is far below any support a real dataset can
/// distinguish, but it does mean an emitted itemset or rule is only
/// guaranteed to satisfy `measure >= threshold - 1e-12`.
///
/// # Examples
///
/// ```
/// use syndicate_miner::MiningConfig;
///
/// let config = MiningConfig::default();
/// assert_eq!(config.min_support, 0.02);
/// assert!(config.validate().is_ok());
///
/// let config = MiningConfig::exploratory();
/// assert!(config.min_support < MiningConfig::default().min_support);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MiningConfig {
    /// Minimum support for an itemset to be frequent, in (0, 1]
    /// Default: 0.02
    #[serde(default = "default_min_support")]
    pub min_support: f64,

    /// Minimum confidence for a rule to be emitted, in [0, 1]
    /// Default: 0.4
    #[serde(default = "default_min_confidence")]
    pub min_confidence: f64,

    /// Optional minimum lift for a rule to be emitted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_lift: Option<f64>,

    /// Largest itemset size to mine; unbounded when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_itemset_len: Option<usize>,

    /// Budget of candidate itemsets across all levels
    /// Default: 100,000
    #[serde(default = "default_max_candidates")]
    pub max_candidates: usize,

    /// Support denominator
    /// Default: total weight
    #[serde(default)]
    pub support_basis: SupportBasis,

    /// Count candidate supports on the rayon pool
    /// Default: true
    #[serde(default = "default_parallel")]
    pub parallel: bool,
}

fn default_min_support() -> f64 {
    0.02
}

fn default_min_confidence() -> f64 {
    0.4
}

fn default_max_candidates() -> usize {
    100_000
}

fn default_parallel() -> bool {
    true
}

impl Default for MiningConfig {
    fn default() -> Self {
        Self {
            min_support: default_min_support(),
            min_confidence: default_min_confidence(),
            min_lift: None,
            max_itemset_len: None,
            max_candidates: default_max_candidates(),
            support_basis: SupportBasis::TotalWeight,
            parallel: true,
        }
    }
}

impl MiningConfig {
    /// Create a configuration with the given thresholds and default limits
    pub fn with_thresholds(min_support: f64, min_confidence: f64) -> Self {
        Self {
            min_support,
            min_confidence,
            ..Self::default()
        }
    }

    /// Exploratory preset: low thresholds, itemsets capped at four items
    pub fn exploratory() -> Self {
        Self {
            min_support: 0.01,
            min_confidence: 0.3,
            min_lift: None,
            max_itemset_len: Some(4),
            max_candidates: 250_000,
            support_basis: SupportBasis::TotalWeight,
            parallel: true,
        }
    }

    /// Strict preset: only well-supported, positively correlated rules
    pub fn strict() -> Self {
        Self {
            min_support: 0.05,
            min_confidence: 0.6,
            min_lift: Some(1.0),
            max_itemset_len: None,
            max_candidates: 50_000,
            support_basis: SupportBasis::TotalWeight,
            parallel: true,
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if !(self.min_support > 0.0 && self.min_support <= 1.0) {
            return Err(MiningError::Configuration(format!(
                "min_support must be in (0, 1], got {}",
                self.min_support
            )));
        }
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
        if self.max_itemset_len == Some(0) {
            return Err(MiningError::Configuration(
                "max_itemset_len must be greater than 0".to_string(),
            ));
        }
        if self.max_candidates == 0 {
            return Err(MiningError::Configuration(
                "max_candidates must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self> {
        toml::from_str(toml_str)
            .map_err(|e| MiningError::Configuration(format!("Failed to parse TOML: {}", e)))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| MiningError::Configuration(format!("Failed to serialize to TOML: {}", e)))
    }
}
