//! Mine command implementation.

use super::load_context;
use crate::cli::MineArgs;
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use syndicate_analysis::{AnalysisConfig, AnalysisKind};

/// Execute the mine command.
pub fn execute_mine(args: MineArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let kind: AnalysisKind = args.kind.into();
    let analysis = apply_overrides(&args, config.analysis.clone());
    let limit = args.limit.unwrap_or(analysis.top_n);

    let mut context = load_context(&args.input, analysis)?;
    let report = context.report(kind)?;

    println!("{}", formatter.format_report(report, limit)?);
    Ok(())
}

/// Command-line thresholds take precedence over the configuration file.
fn apply_overrides(args: &MineArgs, mut analysis: AnalysisConfig) -> AnalysisConfig {
    let mining = &mut analysis.mining;
    if let Some(min_support) = args.min_support {
        mining.min_support = min_support;
    }
    if let Some(min_confidence) = args.min_confidence {
        mining.min_confidence = min_confidence;
    }
    if let Some(min_lift) = args.min_lift {
        mining.min_lift = Some(min_lift);
    }
    if let Some(max_len) = args.max_len {
        mining.max_itemset_len = Some(max_len);
    }
    if let Some(basis) = args.basis {
        mining.support_basis = basis.into();
    }
    analysis
}
