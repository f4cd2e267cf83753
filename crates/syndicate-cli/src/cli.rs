//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};
use syndicate_analysis::AnalysisKind;
use syndicate_miner::SupportBasis;

/// Syndicate CLI - Mine co-investment patterns from funding records.
#[derive(Debug, Parser)]
#[command(name = "syndicate")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true, env = "SYNDICATE_CONFIG")]
    pub config: Option<String>,

    /// Log at debug level (overrides RUST_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (one pattern per line)
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Mine frequent itemsets and association rules
    Mine(MineArgs),

    /// Summarize a dataset
    Insights(InsightsArgs),

    /// Show one investor's deals, domains and co-investors
    Investor(InvestorArgs),

    /// Show or create the configuration file
    Config(ConfigArgs),
}

/// Arguments for the mine command.
#[derive(Debug, Parser)]
pub struct MineArgs {
    /// JSON file of funding records ("-" reads stdin)
    #[arg(short, long)]
    pub input: String,

    /// Which co-occurrence to mine
    #[arg(short, long, value_enum, default_value = "investors")]
    pub kind: KindArg,

    /// Minimum itemset support (0.0-1.0]
    #[arg(short = 's', long)]
    pub min_support: Option<f64>,

    /// Minimum rule confidence (0.0-1.0)
    #[arg(short = 'C', long)]
    pub min_confidence: Option<f64>,

    /// Minimum rule lift
    #[arg(long)]
    pub min_lift: Option<f64>,

    /// Largest itemset to mine
    #[arg(long)]
    pub max_len: Option<usize>,

    /// How support is normalized
    #[arg(long, value_enum)]
    pub basis: Option<BasisArg>,

    /// Maximum number of itemsets and rules to show
    #[arg(short, long)]
    pub limit: Option<usize>,
}

/// Arguments for the insights command.
#[derive(Debug, Parser)]
pub struct InsightsArgs {
    /// JSON file of funding records ("-" reads stdin)
    #[arg(short, long)]
    pub input: String,

    /// Length of each ranked list
    #[arg(short, long)]
    pub limit: Option<usize>,
}

/// Arguments for the investor command.
#[derive(Debug, Parser)]
pub struct InvestorArgs {
    /// Investor name, exactly as it appears in the records
    pub name: String,

    /// JSON file of funding records ("-" reads stdin)
    #[arg(short, long)]
    pub input: String,

    /// Length of each ranked list
    #[arg(short, long)]
    pub limit: Option<usize>,
}

/// Arguments for configuration management.
#[derive(Debug, Parser)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

/// Configuration actions.
#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Print the effective configuration
    Show,

    /// Write a configuration file
    Init {
        /// Starting thresholds
        #[arg(short, long, value_enum, default_value = "default")]
        preset: PresetArg,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

/// Analysis kind argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum KindArg {
    /// Investors appearing together on a funding record
    Investors,
    /// Investor co-occurrence weighted by amount
    Weighted,
    /// Startups sharing investors
    Startups,
    /// Verticals appearing together on a funding record
    Sectors,
}

/// Support basis argument.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum BasisArg {
    /// Share of total weight
    TotalWeight,
    /// Share of transactions with positive weight
    TransactionCount,
}

/// Configuration preset argument.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum PresetArg {
    /// Balanced thresholds
    Default,
    /// Low thresholds, long lists
    Exploratory,
    /// High thresholds, positive lift only
    Strict,
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}

impl From<KindArg> for AnalysisKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Investors => AnalysisKind::Investors,
            KindArg::Weighted => AnalysisKind::WeightedInvestors,
            KindArg::Startups => AnalysisKind::Startups,
            KindArg::Sectors => AnalysisKind::Sectors,
        }
    }
}

impl From<BasisArg> for SupportBasis {
    fn from(basis: BasisArg) -> Self {
        match basis {
            BasisArg::TotalWeight => SupportBasis::TotalWeight,
            BasisArg::TransactionCount => SupportBasis::TransactionCount,
        }
    }
}

impl From<PresetArg> for syndicate_analysis::AnalysisConfig {
    fn from(preset: PresetArg) -> Self {
        match preset {
            PresetArg::Default => Self::default(),
            PresetArg::Exploratory => Self::exploratory(),
            PresetArg::Strict => Self::strict(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mine_command() {
        let cli = Cli::parse_from([
            "syndicate",
            "mine",
            "--input",
            "records.json",
            "--kind",
            "startups",
            "--min-support",
            "0.1",
        ]);
        match cli.command {
            Command::Mine(args) => {
                assert_eq!(args.input, "records.json");
                assert_eq!(args.kind, KindArg::Startups);
                assert_eq!(args.min_support, Some(0.1));
                assert!(args.min_confidence.is_none());
            }
            _ => panic!("Expected Mine command"),
        }
    }

    #[test]
    fn test_mine_defaults_to_investors() {
        let cli = Cli::parse_from(["syndicate", "mine", "-i", "records.json"]);
        match cli.command {
            Command::Mine(args) => assert_eq!(args.kind, KindArg::Investors),
            _ => panic!("Expected Mine command"),
        }
    }

    #[test]
    fn test_global_flags() {
        let cli = Cli::parse_from([
            "syndicate",
            "investor",
            "Tiger Global",
            "--input",
            "records.json",
            "--format",
            "json",
            "--no-color",
            "-v",
        ]);
        assert!(cli.no_color);
        assert!(cli.verbose);
        assert!(matches!(cli.format, Some(CliFormat::Json)));
        match cli.command {
            Command::Investor(args) => assert_eq!(args.name, "Tiger Global"),
            _ => panic!("Expected Investor command"),
        }
    }

    #[test]
    fn test_config_init() {
        let cli = Cli::parse_from(["syndicate", "config", "init", "--preset", "strict"]);
        match cli.command {
            Command::Config(ConfigArgs {
                action: ConfigAction::Init { preset, force },
            }) => {
                assert!(matches!(preset, PresetArg::Strict));
                assert!(!force);
            }
            _ => panic!("Expected Config Init command"),
        }
    }

    #[test]
    fn test_missing_input_is_rejected() {
        assert!(Cli::try_parse_from(["syndicate", "insights"]).is_err());
    }

    #[test]
    fn test_kind_conversion() {
        let kind: AnalysisKind = KindArg::Weighted.into();
        assert_eq!(kind, AnalysisKind::WeightedInvestors);
    }
}
