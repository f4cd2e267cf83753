//! Configuration for analyses

use crate::{AnalysisError, Result};
use serde::{Deserialize, Serialize};
use syndicate_miner::MiningConfig;

/// Configuration shared by every analysis
///
/// # Examples
///
/// ```
/// use syndicate_analysis::AnalysisConfig;
///
/// let config = AnalysisConfig::from_toml(
///     r#"
///     top_n = 5
///
///     [mining]
///     min_support = 0.1
///     min_confidence = 0.5
///     "#,
/// ).unwrap();
/// assert_eq!(config.top_n, 5);
/// assert_eq!(config.mining.min_support, 0.1);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Thresholds and limits handed to the miner
    #[serde(default)]
    pub mining: MiningConfig,

    /// Length of every "top N" list in insights and profiles
    /// Default: 10
    #[serde(default = "default_top_n")]
    pub top_n: usize,
}

fn default_top_n() -> usize {
    10
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            mining: MiningConfig::default(),
            top_n: default_top_n(),
        }
    }
}

impl AnalysisConfig {
    /// Exploratory preset: low thresholds, longer lists
    pub fn exploratory() -> Self {
        Self {
            mining: MiningConfig::exploratory(),
            top_n: 25,
        }
    }

    /// Strict preset: only strong, positively correlated patterns
    pub fn strict() -> Self {
        Self {
            mining: MiningConfig::strict(),
            top_n: 10,
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        self.mining.validate()?;
        if self.top_n == 0 {
            return Err(AnalysisError::Config(
                "top_n must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self> {
        toml::from_str(toml_str)
            .map_err(|e| AnalysisError::Config(format!("Failed to parse TOML: {}", e)))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| AnalysisError::Config(format!("Failed to serialize to TOML: {}", e)))
    }
}
