//! Command-Line Interface

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Signscribe - Fingerspelling session engine
#[derive(Parser, Debug)]
#[command(name = "signscribe")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Replay a recorded frame log through a session
    Run {
        /// Input frame log (JSON)
        #[arg(short, long)]
        input: PathBuf,

        /// Centroid model file (JSON templates)
        #[arg(short, long)]
        model: PathBuf,

        /// Override the configured capture interval (seconds)
        #[arg(long)]
        interval: Option<f64>,

        /// Print the final snapshot as JSON
        #[arg(long)]
        json: bool,
    },

    /// Send text to the grammar corrector
    Correct {
        /// Text to correct
        text: String,

        /// Override the configured corrector endpoint
        #[arg(short, long)]
        endpoint: Option<String>,
    },

    /// Validate a frame log
    Validate {
        /// Frame log to check
        input: PathBuf,
    },

    /// Initialize configuration
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config subcommand actions
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show the effective configuration
    Show,
    /// Print the default config file path
    Path,
}

impl Cli {
    /// Parse command-line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
