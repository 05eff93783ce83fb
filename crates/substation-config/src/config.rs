use crate::components::{DataConfig, LoggingConfig, ServerConfig};
use crate::error::{ConfigError, ConfigResult};
use serde::{Deserialize, Serialize};

/// Top-level service configuration
///
/// Every section is optional in the file; missing sections and keys take
/// their defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SubstationConfig {
    pub server: ServerConfig,
    pub data: DataConfig,
    pub logging: LoggingConfig,
}

const EXAMPLE_TOML: &str = r#"# Substation Configuration
# Location: ./substation.toml or ~/.config/substation/config.toml

[server]
# Interface to bind (SUBSTATION_HOST)
host = "0.0.0.0"

# TCP port (SUBSTATION_PORT)
port = 8000

# Allow cross-origin GET requests (SUBSTATION_ENABLE_CORS)
enable_cors = true

[data]
# Equipment inventory, CSV with a header row (SUBSTATION_EQUIPMENT_PATH)
equipment_path = "data/equipment_inventory.csv"

# Maintenance logs, JSON array of objects (SUBSTATION_MAINTENANCE_PATH)
# A .csv extension switches either source to CSV and .json to JSON
maintenance_path = "data/maintenance_logs.json"

[logging]
# off, error, warn, info, debug or trace (SUBSTATION_LOG_LEVEL)
# RUST_LOG, --verbose and --log-level take precedence
level = "info"
"#;

impl SubstationConfig {
    /// Parse a TOML document
    pub fn from_toml_str(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }

    /// `host:port` for the listener
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// A commented configuration file holding the default values
    pub fn example_toml() -> &'static str {
        EXAMPLE_TOML
    }

    /// Reject values no consumer can use
    pub fn validate(&self) -> ConfigResult<()> {
        if self.server.host.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "server.host",
                value: self.server.host.clone(),
            });
        }
        if !LoggingConfig::is_valid_level(&self.logging.level) {
            return Err(ConfigError::InvalidValue {
                field: "logging.level",
                value: self.logging.level.clone(),
            });
        }
        Ok(())
    }
}
