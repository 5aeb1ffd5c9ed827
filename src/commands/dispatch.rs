//! Command dispatch logic for erdos
use std::time::Instant;

use erdos_core::config::SearchConfig;
use erdos_core::error::Result;
use erdos_core::graph::{load_graph, DiGraph, ShortestPaths};

use crate::cli::{Cli, Commands, SearchArgs};
use crate::commands;

pub fn run(cli: &Cli) -> Result<()> {
    let config = load_config(cli)?;

    match &cli.command {
        Commands::Distance(args) => {
            let search = run_search(args, &config)?;
            commands::distance::execute(cli, &search, &args.destination)
        }
        Commands::Paths { search, max_paths } => {
            let config = config.with_max_paths(*max_paths)?;
            let engine = run_search(search, &config)?;
            commands::paths::execute(cli, &engine, &search.destination, config.max_paths)
        }
    }
}

fn load_config(cli: &Cli) -> Result<SearchConfig> {
    match &cli.config {
        Some(path) => SearchConfig::load(path),
        None => Ok(SearchConfig::default()),
    }
}

fn run_search(args: &SearchArgs, config: &SearchConfig) -> Result<ShortestPaths> {
    let start = Instant::now();
    let graph: DiGraph = load_graph(&args.graph, config)?;
    tracing::debug!(elapsed = ?start.elapsed(), "load_graph");

    if !graph.contains_vertex(&args.source) {
        tracing::warn!(source = %args.source, "source vertex has no entry in the graph");
    }

    let search = ShortestPaths::new(&graph, &args.source);
    tracing::debug!(elapsed = ?start.elapsed(), reached = search.reached_count(), "search");
    Ok(search)
}
