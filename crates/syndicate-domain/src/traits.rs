//! Trait definitions for transaction extraction
//!
//! These traits define the boundary between raw rows and the mining core.
//! Implementations live in the analysis layer; the core only sees the
//! identifiers and weights they produce.

/// Maps one raw row to the identifiers of its items
///
/// Implemented by the application layer (syndicate-analysis)
pub trait ItemExtractor<R: ?Sized> {
    /// Error type for extraction failures
    type Error;

    /// Extract item identifiers; duplicates are allowed and collapse later
    fn extract_items(&self, row: &R) -> Result<Vec<String>, Self::Error>;
}

/// Maps one raw row to a transaction weight
///
/// Implemented by the application layer (syndicate-analysis)
pub trait WeightExtractor<R: ?Sized> {
    /// Error type for extraction failures
    type Error;

    /// Extract the weight; `None` means missing or non-numeric and counts as 0
    fn extract_weight(&self, row: &R) -> Result<Option<f64>, Self::Error>;
}
