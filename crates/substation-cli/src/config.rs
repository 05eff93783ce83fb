use crate::cli::Cli;
use anyhow::{Context, Result};
use substation_config::SubstationConfig;

/// Load configuration with precedence: defaults < file < env < args
pub fn load(cli: &Cli) -> Result<SubstationConfig> {
    let mut config =
        SubstationConfig::load(cli.config.clone()).context("Failed to load configuration")?;

    if let Some(path) = &cli.equipment {
        config.data.equipment_path = path.clone();
    }
    if let Some(path) = &cli.maintenance {
        config.data.maintenance_path = path.clone();
    }

    Ok(config)
}
