//! Substation CLI library
//!
//! Argument definitions, configuration resolution, logging setup and the
//! subcommand implementations behind the `substation` binary.

pub mod cli;
pub mod commands;
pub mod config;
pub mod logging;
pub mod output;
