//! Error types for analysis operations

use syndicate_miner::MiningError;
use thiserror::Error;

/// Result type alias for analysis operations.
pub type Result<T> = std::result::Result<T, AnalysisError>;

/// Errors that can occur while ingesting records or running analyses
#[derive(Error, Debug)]
pub enum AnalysisError {
    /// The mining core rejected the input or configuration
    #[error("Mining error: {0}")]
    Mining(#[from] MiningError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// A record failed validation at ingestion
    #[error("Invalid record at index {index}: {reason}")]
    InvalidRecord {
        /// Zero-based position in the submitted records
        index: usize,
        /// What was wrong with it
        reason: String,
    },

    /// No dataset has been loaded into the context
    #[error("No dataset loaded. Load funding records first.")]
    NoDataset,

    /// The investor does not appear in the dataset
    #[error("Unknown investor: {0}")]
    UnknownInvestor(String),
}
