//! Logging component configuration

use serde::{Deserialize, Serialize};

/// Level names accepted in `logging.level`
pub const LOG_LEVELS: [&str; 6] = ["off", "error", "warn", "info", "debug", "trace"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default verbosity when neither the command line nor `RUST_LOG` sets one
    pub level: String,
}

impl LoggingConfig {
    /// Whether `level` names a known verbosity, ignoring case
    pub fn is_valid_level(level: &str) -> bool {
        LOG_LEVELS.iter().any(|known| known.eq_ignore_ascii_case(level))
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}
