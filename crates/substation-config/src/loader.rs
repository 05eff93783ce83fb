//! Configuration loading
//!
//! Precedence, lowest first: defaults, TOML file, environment. Command-line
//! overrides are applied by the binary on top of the loaded value.

use crate::config::SubstationConfig;
use crate::error::{ConfigError, ConfigResult};
use std::path::{Path, PathBuf};
use tracing::debug;

pub const ENV_HOST: &str = "SUBSTATION_HOST";
pub const ENV_PORT: &str = "SUBSTATION_PORT";
pub const ENV_ENABLE_CORS: &str = "SUBSTATION_ENABLE_CORS";
pub const ENV_EQUIPMENT_PATH: &str = "SUBSTATION_EQUIPMENT_PATH";
pub const ENV_MAINTENANCE_PATH: &str = "SUBSTATION_MAINTENANCE_PATH";
pub const ENV_LOG_LEVEL: &str = "SUBSTATION_LOG_LEVEL";

/// File name looked up in the working directory
pub const LOCAL_CONFIG_FILE: &str = "substation.toml";

impl SubstationConfig {
    /// Load configuration with precedence: defaults < file < env
    ///
    /// An explicit `config_file` must exist. Without one, the first existing
    /// of [`LOCAL_CONFIG_FILE`] and [`SubstationConfig::default_config_path`]
    /// is read, and defaults are used when neither exists.
    pub fn load(config_file: Option<PathBuf>) -> ConfigResult<Self> {
        let mut config = match config_file {
            Some(path) if !path.exists() => return Err(ConfigError::NotFound { path }),
            Some(path) => Self::from_file(&path)?,
            None => match Self::discover() {
                Some(path) => Self::from_file(&path)?,
                None => {
                    debug!("no config file found, using defaults");
                    Self::default()
                }
            },
        };

        config.apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Read a single TOML file without environment overrides
    pub fn from_file(path: &Path) -> ConfigResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "loaded config file");
        Ok(config)
    }

    /// Per-user config file location
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("substation").join("config.toml"))
    }

    fn discover() -> Option<PathBuf> {
        std::iter::once(PathBuf::from(LOCAL_CONFIG_FILE))
            .chain(Self::default_config_path())
            .find(|path| path.is_file())
    }

    /// Apply `SUBSTATION_*` variables from the process environment
    pub fn apply_env_overrides(&mut self) -> ConfigResult<()> {
        self.apply_overrides_from(|var| std::env::var(var).ok())
    }

    /// Apply `SUBSTATION_*` overrides resolved through `lookup`
    pub fn apply_overrides_from<F>(&mut self, lookup: F) -> ConfigResult<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup(ENV_HOST) {
            self.server.host = host;
        }
        if let Some(port) = lookup(ENV_PORT) {
            self.server.port = port.trim().parse().map_err(|e: std::num::ParseIntError| {
                ConfigError::InvalidEnv {
                    var: ENV_PORT,
                    value: port.clone(),
                    reason: e.to_string(),
                }
            })?;
        }
        if let Some(flag) = lookup(ENV_ENABLE_CORS) {
            self.server.enable_cors = parse_flag(&flag).ok_or_else(|| ConfigError::InvalidEnv {
                var: ENV_ENABLE_CORS,
                value: flag.clone(),
                reason: "expected true/false, yes/no, on/off or 1/0".to_string(),
            })?;
        }
        if let Some(path) = lookup(ENV_EQUIPMENT_PATH) {
            self.data.equipment_path = PathBuf::from(path);
        }
        if let Some(path) = lookup(ENV_MAINTENANCE_PATH) {
            self.data.maintenance_path = PathBuf::from(path);
        }
        if let Some(level) = lookup(ENV_LOG_LEVEL) {
            if !crate::LoggingConfig::is_valid_level(&level) {
                return Err(ConfigError::InvalidEnv {
                    var: ENV_LOG_LEVEL,
                    value: level,
                    reason: format!("expected one of {}", crate::LOG_LEVELS.join(", ")),
                });
            }
            self.logging.level = level;
        }
        Ok(())
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Some(true),
        "false" | "no" | "off" | "0" => Some(false),
        _ => None,
    }
}
