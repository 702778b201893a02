//! CLI argument parsing and command definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Top-level CLI arguments.
#[derive(Parser, Debug)]
#[command(name = "yamdown", author, version, about, long_about = None)]
pub struct CliArgs {
    /// Path to configuration file.
    #[arg(short, long, env = "YAMDOWN_CONFIG")]
    pub config: Option<String>,

    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress non-essential output.
    #[arg(short, long)]
    pub quiet: bool,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Read documents and print body and metadata as JSON.
    Read {
        /// Markdown files to read; `-` reads one document from stdin.
        #[arg(required = true)]
        paths: Vec<PathBuf>,

        /// Pretty-print each JSON document.
        #[arg(long)]
        pretty: bool,
    },

    /// Print the effective settings as TOML.
    Config,

    /// Print version information.
    Version,
}
