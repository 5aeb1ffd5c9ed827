//! CLI argument parsing for erdos
//!
//! Global flags: --format, --quiet, --verbose, --log-level, --log-json, --config

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

pub use erdos_core::format::OutputFormat;

/// Erdos - all tied shortest paths between two vertices
#[derive(Parser, Debug)]
#[command(name = "erdos")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format (human or json)
    #[arg(long, global = true, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level or filter directive (e.g. `info`, `erdos_core=trace`)
    #[arg(long, global = true, env = "ERDOS_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Search configuration file (TOML)
    #[arg(long, global = true, env = "ERDOS_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the minimal cost from SOURCE to DESTINATION
    Distance(SearchArgs),

    /// Print every tied shortest path from SOURCE to DESTINATION
    Paths {
        #[command(flatten)]
        search: SearchArgs,

        /// Stop after this many paths (overrides `max_paths` in the config)
        #[arg(long)]
        max_paths: Option<usize>,
    },
}

#[derive(Args, Debug, Clone)]
pub struct SearchArgs {
    /// Graph file: adjacency object or edge list (JSON)
    #[arg(long, short)]
    pub graph: PathBuf,

    /// Vertex the search starts from
    pub source: String,

    /// Vertex to reach
    pub destination: String,
}
