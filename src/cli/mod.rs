//! CLI module for postdrive
//!
//! Provides command-line interface for:
//! - serve: Load config, open the store, run the HTTP server
//! - check-config: Validate a config file and print the effective settings

mod args;
mod commands;
mod config;
mod errors;

pub use args::{Cli, Command};
pub use commands::{check_config, open_store, run, run_command, seed_store, serve};
pub use config::{Config, StoreConfig};
pub use errors::{CliError, CliErrorCode, CliResult};
