//! CLI definitions and command implementations.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

pub mod check;
pub mod init;
pub mod list;
pub mod show;

/// Polar network registry — inspect and validate network profiles.
#[derive(Debug, Parser)]
#[command(name = "polar-networks")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to the configuration file (TOML, or JSON by extension).
    #[arg(short, long, global = true, env = "CONFIG", default_value = "polar.toml")]
    pub config: PathBuf,

    /// Log loader activity to stderr.
    #[arg(short, long, global = true, default_value_t = false)]
    pub verbose: bool,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate the default TOML configuration file.
    Init {
        /// Output path for the configuration file.
        #[arg(short, long, default_value = "polar.toml")]
        output: PathBuf,

        /// Overwrite the file if it already exists.
        #[arg(long, default_value_t = false)]
        force: bool,
    },

    /// Load and validate the configuration.
    Check,

    /// List declared networks, marking the default.
    List,

    /// Print a network profile.
    Show {
        /// Network name; the default network when omitted.
        network: Option<String>,

        /// Output format.
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Toml)]
        format: OutputFormat,
    },

    /// Print one account of a network.
    Account {
        /// Network name.
        network: String,

        /// Account name.
        account: String,

        /// Include the mnemonic in the output.
        #[arg(long, default_value_t = false)]
        reveal: bool,
    },
}

/// Rendering used by `show`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// TOML, as written in configuration files.
    Toml,
    /// Pretty-printed JSON.
    Json,
}
