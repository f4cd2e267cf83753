//! Investor command implementation.

use super::load_context;
use crate::cli::InvestorArgs;
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;

/// Execute the investor command.
pub fn execute_investor(args: InvestorArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let mut analysis = config.analysis.clone();
    if let Some(limit) = args.limit {
        analysis.top_n = limit;
    }

    let context = load_context(&args.input, analysis)?;
    let profile = context.investor_profile(&args.name)?;
    println!("{}", formatter.format_profile(&profile)?);
    Ok(())
}
