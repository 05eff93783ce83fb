use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while assembling a [`crate::SubstationConfig`]
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An explicitly requested config file does not exist
    #[error("config file not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("failed to read config file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// An environment override could not be interpreted
    #[error("invalid value {value:?} for {var}: {reason}")]
    InvalidEnv {
        var: &'static str,
        value: String,
        reason: String,
    },

    /// A setting holds a value outside its domain
    #[error("invalid {field}: {value:?}")]
    InvalidValue { field: &'static str, value: String },
}

pub type ConfigResult<T> = Result<T, ConfigError>;
