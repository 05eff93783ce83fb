//! # Substation Configuration
//!
//! Typed settings for the Substation query service: listener address, data
//! source locations, and default log verbosity.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use substation_config::SubstationConfig;
//!
//! fn main() -> Result<(), substation_config::ConfigError> {
//!     let config = SubstationConfig::load(None)?;
//!     println!("listening on {}", config.bind_address());
//!     Ok(())
//! }
//! ```

#![warn(clippy::all)]

pub mod components;
mod config;
mod error;
mod loader;

pub use components::*;
pub use config::SubstationConfig;
pub use error::{ConfigError, ConfigResult};
pub use loader::{
    ENV_ENABLE_CORS, ENV_EQUIPMENT_PATH, ENV_HOST, ENV_LOG_LEVEL, ENV_MAINTENANCE_PATH, ENV_PORT,
    LOCAL_CONFIG_FILE,
};
