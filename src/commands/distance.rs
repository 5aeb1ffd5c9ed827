//! Distance command
use erdos_core::error::{ErdosError, Result};
use erdos_core::graph::ShortestPaths;

use crate::cli::{Cli, OutputFormat};

/// Execute the distance command
pub fn execute(cli: &Cli, search: &ShortestPaths, destination: &str) -> Result<()> {
    let distance = search
        .distance(destination)
        .ok_or_else(|| ErdosError::not_reachable(destination))?;

    match cli.format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "source": search.source(),
                "destination": destination,
                "distance": distance,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            println!("{}", distance);
        }
    }

    Ok(())
}
