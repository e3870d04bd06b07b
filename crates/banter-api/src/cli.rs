//! CLI definitions for the `banter` binary.
//!
//! Uses clap derive macros for argument parsing.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// A small rule-based chat service with per-session memory.
#[derive(Parser)]
#[command(name = "banter", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to config.toml (defaults to the platform config directory).
    #[arg(long, global = true, env = "BANTER_CONFIG")]
    pub config: Option<PathBuf>,

    /// Suppress all output except errors.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Detailed output (-v for debug, -vv for trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Emit logs as JSON lines.
    #[arg(long, global = true)]
    pub json_logs: bool,

    /// Export tracing spans via OpenTelemetry (stdout exporter).
    #[arg(long, global = true)]
    pub otel: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the HTTP server.
    Serve {
        /// Port to listen on (overrides config).
        #[arg(long)]
        port: Option<u16>,

        /// Host to bind to (overrides config).
        #[arg(long)]
        host: Option<String>,
    },

    /// Generate shell completions.
    Completions {
        /// Shell to generate completions for.
        shell: Shell,
    },
}
