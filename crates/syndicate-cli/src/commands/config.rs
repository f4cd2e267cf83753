//! Config command implementation.

use crate::cli::{ConfigAction, ConfigArgs};
use crate::config::{Config, OutputFormat};
use crate::error::{CliError, Result};
use crate::output::Formatter;
use std::path::Path;

/// Execute the config command.
pub fn execute_config(
    args: ConfigArgs,
    config: &Config,
    path: &Path,
    formatter: &Formatter,
    format: OutputFormat,
) -> Result<()> {
    match args.action {
        ConfigAction::Show => {
            if format == OutputFormat::Json {
                println!("{}", serde_json::to_string_pretty(config)?);
            } else {
                println!("{}", formatter.info(&format!("Configuration: {}", path.display())));
                println!("{}", config.to_toml()?);
            }
            Ok(())
        }
        ConfigAction::Init { preset, force } => {
            let written = init_config(path, preset.into(), force)?;
            println!(
                "{}",
                formatter.success(&format!("Wrote configuration to {}", written.display()))
            );
            Ok(())
        }
    }
}

/// Write a fresh configuration file with the given analysis thresholds.
fn init_config<'a>(
    path: &'a Path,
    analysis: syndicate_analysis::AnalysisConfig,
    force: bool,
) -> Result<&'a Path> {
    if path.exists() && !force {
        return Err(CliError::InvalidInput(format!(
            "{} already exists (use --force to overwrite)",
            path.display()
        )));
    }

    let config = Config {
        analysis,
        ..Config::default()
    };
    config.save_to(path)?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use syndicate_analysis::AnalysisConfig;
    use tempfile::TempDir;

    #[test]
    fn test_init_writes_preset() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");

        init_config(&path, AnalysisConfig::strict(), false).unwrap();
        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.analysis, AnalysisConfig::strict());
    }

    #[test]
    fn test_init_refuses_to_overwrite() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");

        init_config(&path, AnalysisConfig::default(), false).unwrap();
        assert!(matches!(
            init_config(&path, AnalysisConfig::strict(), false),
            Err(CliError::InvalidInput(_))
        ));

        init_config(&path, AnalysisConfig::strict(), true).unwrap();
        assert_eq!(
            Config::load_from(&path).unwrap().analysis,
            AnalysisConfig::strict()
        );
    }
}
