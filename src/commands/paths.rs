//! Paths command
use erdos_core::error::Result;
use erdos_core::graph::{PathsResult, ShortestPaths};

use crate::cli::{Cli, OutputFormat};

/// Execute the paths command
pub fn execute(
    cli: &Cli,
    search: &ShortestPaths,
    destination: &str,
    max_paths: Option<usize>,
) -> Result<()> {
    let result = search.paths_limited(destination, max_paths)?;

    match cli.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        OutputFormat::Human => output_paths_human(cli, &result),
    }

    Ok(())
}

fn output_paths_human(cli: &Cli, result: &PathsResult) {
    if !cli.quiet {
        let noun = if result.paths.len() == 1 { "path" } else { "paths" };
        println!(
            "distance: {} ({} {})",
            result.distance,
            result.paths.len(),
            noun
        );
    }

    for path in &result.paths {
        println!("{}", path.join(" -> "));
    }

    if result.truncated && !cli.quiet {
        println!("(truncated)");
    }
}
