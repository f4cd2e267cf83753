//! Error types for mining operations

use thiserror::Error;

/// Result type alias for mining operations.
pub type Result<T> = std::result::Result<T, MiningError>;

/// Errors that can occur while building transactions, mining itemsets or
/// generating rules
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MiningError {
    /// Invalid thresholds or a zero support denominator
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Candidate generation exceeded the configured budget
    #[error(
        "Resource limit exceeded: {candidates} candidates generated by level {level} (limit {limit}); raise min_support or max_candidates"
    )]
    ResourceLimit {
        /// Itemset size being generated when the budget ran out
        level: usize,
        /// Candidates generated so far
        candidates: usize,
        /// Configured budget
        limit: usize,
    },

    /// A row could not be turned into a transaction
    #[error("Input error at row {row}: {message}")]
    Input {
        /// Zero-based row index
        row: usize,
        /// What was wrong with the row
        message: String,
    },

    /// An invariant of the itemset lattice was violated
    #[error("Internal consistency error: {0}")]
    InternalConsistency(String),
}

impl MiningError {
    /// Whether this error is a configuration-class failure
    ///
    /// Resource limits count as configuration errors: the threshold was too
    /// low for the density of the data.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            MiningError::Configuration(_) | MiningError::ResourceLimit { .. }
        )
    }
}
