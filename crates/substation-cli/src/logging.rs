//! Subscriber setup
//!
//! Level precedence: `--log-level`, then `--verbose`, then `RUST_LOG`, then
//! the configured `logging.level`. Explicit levels apply to the workspace
//! crates and `tower_http` only; `RUST_LOG` is used verbatim.

use crate::cli::LogLevel;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

const LOG_TARGETS: [&str; 5] = [
    "substation_cli",
    "substation_config",
    "substation_core",
    "substation_web",
    "tower_http",
];

/// Filter directives for the given inputs
pub fn filter_directives(
    log_level: Option<LogLevel>,
    verbose: bool,
    rust_log: Option<&str>,
    config_level: &str,
) -> String {
    let explicit = log_level
        .map(LogLevel::filter)
        .or(verbose.then_some(LevelFilter::DEBUG));

    match (explicit, rust_log) {
        (Some(level), _) => scoped(level),
        (None, Some(directives)) if !directives.trim().is_empty() => directives.to_string(),
        _ => scoped(config_level.parse().unwrap_or(LevelFilter::INFO)),
    }
}

fn scoped(level: LevelFilter) -> String {
    LOG_TARGETS
        .iter()
        .map(|target| format!("{target}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}

/// Install the global subscriber, writing to stderr
pub fn init(log_level: Option<LogLevel>, verbose: bool, config_level: &str) {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let directives = filter_directives(log_level, verbose, rust_log.as_deref(), config_level);

    let filter = EnvFilter::try_new(&directives).unwrap_or_else(|_| {
        EnvFilter::new(scoped(config_level.parse().unwrap_or(LevelFilter::INFO)))
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
