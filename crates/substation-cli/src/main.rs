use anyhow::Result;
use clap::Parser;
use std::process::ExitCode;
use tracing::debug;

use substation_cli::{
    cli::{Cli, Commands, ConfigCommands},
    commands, config, logging,
};

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Writing an example file must work even when the current one is broken
    if let Some(Commands::Config(ConfigCommands::Init { path, force })) = &cli.command {
        commands::config::init(path.clone(), *force)?;
        return Ok(ExitCode::SUCCESS);
    }

    let config = config::load(&cli)?;
    logging::init(cli.log_level, cli.verbose, &config.logging.level);
    debug!(?config, "effective configuration");

    // Execute command (default to serve if no command provided)
    let code = match cli.command {
        None => {
            commands::serve::execute(config, None, None).await?;
            ExitCode::SUCCESS
        }
        Some(Commands::Serve { host, port }) => {
            commands::serve::execute(config, host, port).await?;
            ExitCode::SUCCESS
        }
        Some(Commands::Check { json }) => commands::check::execute(config, json)?,
        Some(Commands::Entities { json }) => {
            commands::entities::execute(config, json)?;
            ExitCode::SUCCESS
        }
        Some(Commands::Search { query, json }) => {
            commands::search::execute(config, query, json)?;
            ExitCode::SUCCESS
        }
        Some(Commands::Show { equipment_id, json }) => {
            commands::show::execute(config, equipment_id, json)?
        }
        Some(Commands::Config(ConfigCommands::Show { json })) => {
            commands::config::show(&config, json)?;
            ExitCode::SUCCESS
        }
        Some(Commands::Config(ConfigCommands::Init { .. })) => ExitCode::SUCCESS,
    };

    Ok(code)
}
