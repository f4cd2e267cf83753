//! Insights command implementation.

use super::load_context;
use crate::cli::InsightsArgs;
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;

/// Execute the insights command.
pub fn execute_insights(args: InsightsArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let mut analysis = config.analysis.clone();
    if let Some(limit) = args.limit {
        analysis.top_n = limit;
    }

    let mut context = load_context(&args.input, analysis)?;
    println!("{}", formatter.format_insights(context.insights()?)?);
    Ok(())
}
