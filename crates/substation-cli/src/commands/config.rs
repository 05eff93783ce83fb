use anyhow::{Context, Result};
use colored::Colorize;
use std::path::PathBuf;
use substation_config::SubstationConfig;

/// Initialize a new config file
pub fn init(path: Option<PathBuf>, force: bool) -> Result<()> {
    let config_path = path
        .or_else(SubstationConfig::default_config_path)
        .context("Could not determine config file path")?;

    if config_path.exists() && !force {
        println!(
            "{} Config file already exists at: {}",
            "Error:".red().bold(),
            config_path.display()
        );
        println!("Use {} to overwrite", "--force".yellow());
        return Ok(());
    }

    if let Some(parent) = config_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).context("Failed to create config directory")?;
    }
    std::fs::write(&config_path, SubstationConfig::example_toml())
        .context("Failed to write config file")?;

    println!(
        "{} Created config file at: {}",
        "Success:".green().bold(),
        config_path.display()
    );
    Ok(())
}

/// Show the effective configuration
pub fn show(config: &SubstationConfig, json: bool) -> Result<()> {
    if json {
        crate::output::print_json(config)
    } else {
        let toml = toml::to_string_pretty(config).context("Failed to serialize config as TOML")?;
        print!("{toml}");
        Ok(())
    }
}
