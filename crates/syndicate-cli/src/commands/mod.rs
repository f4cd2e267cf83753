//! Command implementations.

pub mod config;
pub mod insights;
pub mod investor;
pub mod mine;

pub use self::config::execute_config;
pub use self::insights::execute_insights;
pub use self::investor::execute_investor;
pub use self::mine::execute_mine;

use crate::error::Result;
use crate::records::read_records;
use syndicate_analysis::{AnalysisConfig, AnalysisContext, Analyzer};

/// Build an analysis context and load the records at `input` into it.
pub fn load_context(input: &str, config: AnalysisConfig) -> Result<AnalysisContext> {
    let analyzer = Analyzer::new(config)?;
    let mut context = AnalysisContext::new(analyzer);
    context.load(read_records(input)?)?;
    Ok(context)
}
