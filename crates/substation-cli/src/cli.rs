use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tracing_subscriber::filter::LevelFilter;

/// Value of `--log-level`; applies to the substation crates and `tower_http`
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Off,
    Error,
    /// Load failures and integrity warnings
    Warn,
    /// Record counts and request traces
    Info,
    /// Per-query filter and search details
    Debug,
    Trace,
}

impl LogLevel {
    pub fn filter(self) -> LevelFilter {
        match self {
            Self::Off => LevelFilter::OFF,
            Self::Error => LevelFilter::ERROR,
            Self::Warn => LevelFilter::WARN,
            Self::Info => LevelFilter::INFO,
            Self::Debug => LevelFilter::DEBUG,
            Self::Trace => LevelFilter::TRACE,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "substation")]
#[command(about = "substation - query utility equipment inventories and maintenance logs")]
#[command(version)]
pub struct Cli {
    /// Subcommand to execute (defaults to serve if not provided)
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Set log level (off, error, warn, info, debug, trace)
    /// If not specified, uses RUST_LOG, then the config file value
    #[arg(short = 'l', long, global = true, value_enum)]
    pub log_level: Option<LogLevel>,

    /// Enable verbose logging (shortcut for --log-level=debug)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Config file path (defaults to ./substation.toml, then ~/.config/substation/config.toml)
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// Equipment inventory file (overrides config file)
    #[arg(long, global = true, value_name = "PATH")]
    pub equipment: Option<PathBuf>,

    /// Maintenance log file (overrides config file)
    #[arg(long, global = true, value_name = "PATH")]
    pub maintenance: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Load the data sources and serve the HTTP query API
    Serve {
        /// Interface to bind (overrides config file)
        #[arg(long)]
        host: Option<String>,

        /// Port to bind (overrides config file)
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Load the data sources and report integrity issues
    ///
    /// Exits with status 1 when any issue is found.
    Check {
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// List the distinct equipment types, locations, manufacturers,
    /// maintenance types and technicians
    Entities {
        #[arg(long)]
        json: bool,
    },

    /// Case-insensitive substring search across both collections
    Search {
        /// Text to look for
        query: String,

        #[arg(long)]
        json: bool,
    },

    /// Show one piece of equipment with its maintenance history
    Show {
        /// Equipment identifier, matched exactly
        equipment_id: String,

        #[arg(long)]
        json: bool,
    },

    /// Configuration management
    #[command(subcommand)]
    Config(ConfigCommands),
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Write a commented example config file
    Init {
        /// Path for the config file (defaults to ~/.config/substation/config.toml)
        #[arg(short, long)]
        path: Option<PathBuf>,

        /// Overwrite existing config file
        #[arg(short = 'F', long)]
        force: bool,
    },

    /// Show the effective configuration after all overrides
    Show {
        #[arg(long)]
        json: bool,
    },
}
