//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for Clientbook using clap.

pub mod commands;

use clap::{Parser, Subcommand};

/// Clientbook - client records service with spreadsheet import
#[derive(Parser, Debug)]
#[command(name = "clientbook")]
#[command(version, about, long_about = None)]
#[command(author = "Clientbook Contributors")]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "clientbook.toml", env = "CLIENTBOOK_CONFIG")]
    pub config: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "CLIENTBOOK_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the HTTP API
    Serve(commands::serve::ServeArgs),

    /// Import clients from a local spreadsheet
    Import(commands::import::ImportArgs),

    /// Validate configuration file
    ValidateConfig(commands::validate::ValidateArgs),

    /// Initialize a new configuration file
    Init(commands::init::InitArgs),
}
