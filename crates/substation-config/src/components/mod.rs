//! Configuration sections

pub mod data;
pub mod logging;
pub mod server;

pub use data::DataConfig;
pub use logging::{LoggingConfig, LOG_LEVELS};
pub use server::ServerConfig;
