//! CLI argument definitions using clap
//!
//! Commands:
//! - postdrive serve [--config <path>] [--port <port>]
//! - postdrive check-config [--config <path>]

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// postdrive - HTTP service for managing posts
#[derive(Parser, Debug)]
#[command(name = "postdrive")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Start the HTTP server
    Serve {
        /// Path to configuration file (defaults apply when omitted)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Port to listen on, overriding the config file
        #[arg(long)]
        port: Option<u16>,
    },

    /// Validate configuration and print the effective settings
    CheckConfig {
        /// Path to configuration file (defaults apply when omitted)
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
