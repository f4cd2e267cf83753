//! Syndicate CLI - mine co-investment patterns from funding records.

use clap::Parser;
use std::path::Path;
use syndicate_cli::commands;
use syndicate_cli::config::OutputFormat;
use syndicate_cli::{Cli, Command, Config, Formatter};
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let errors = Formatter::new(OutputFormat::Table, !cli.no_color);

    if let Err(e) = run(cli) {
        eprintln!("{}", errors.error(&format!("Error: {}", e)));
        std::process::exit(1);
    }
}

/// Log to stderr so stdout stays machine-readable.
fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();
}

fn run(cli: Cli) -> syndicate_cli::Result<()> {
    // Errors in an explicit --config file are fatal; the default file is best-effort
    let config_path = match &cli.config {
        Some(path) => Path::new(path).to_path_buf(),
        None => Config::path()?,
    };
    let config = if cli.config.is_some() {
        Config::load_from(&config_path)?
    } else {
        Config::load_from(&config_path).unwrap_or_else(|e| {
            tracing::warn!("Ignoring unreadable config at {}: {}", config_path.display(), e);
            Config::default()
        })
    };

    // Determine output format
    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);

    // Determine color setting
    let color_enabled = !cli.no_color && config.settings.color;

    let formatter = Formatter::new(format, color_enabled);

    match cli.command {
        Command::Mine(args) => commands::execute_mine(args, &config, &formatter),
        Command::Insights(args) => commands::execute_insights(args, &config, &formatter),
        Command::Investor(args) => commands::execute_investor(args, &config, &formatter),
        Command::Config(args) => {
            commands::execute_config(args, &config, &config_path, &formatter, format)
        }
    }
}
