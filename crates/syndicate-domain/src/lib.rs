//! Syndicate Domain Layer
//!
//! This crate contains the value types shared by every other Syndicate crate.
//! It has no external runtime dependencies and knows nothing about how
//! itemsets are mined; it only defines what the pieces are.
//!
//! ## Key Concepts
//!
//! - **Item**: An opaque identifier (an investor, a startup, a sector token)
//! - **Transaction**: A set of items plus a non-negative weight
//! - **Itemset**: A set of items whose joint support has been measured
//! - **Rule**: A directional association `antecedent ⇒ consequent`
//! - **FundingRecord**: A typed funding row, the raw material for transactions
//!
//! ## Architecture
//!
//! - No external crate dependencies
//! - Pure value types only
//! - Extraction seams are expressed as traits in [`traits`]

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod item;
pub mod itemset;
pub mod measure;
pub mod record;
pub mod rule;
pub mod traits;
pub mod transaction;

// Re-exports for convenience
pub use item::Item;
pub use itemset::Itemset;
pub use measure::SUPPORT_TOLERANCE;
pub use record::FundingRecord;
pub use rule::Rule;
pub use transaction::Transaction;
