//! Configuration type definitions

use serde::{Deserialize, Serialize};

/// Search configuration, read from `erdos.toml`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Stop path enumeration after this many tied paths (optional; unlimited by default)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_paths: Option<usize>,

    /// Cost given to every edge of an edge-list graph file
    #[serde(default = "default_edge_cost")]
    pub default_cost: f64,

    /// Treat edge-list pairs as undirected (optional; default true)
    #[serde(default = "default_undirected")]
    pub undirected: bool,
}

fn default_edge_cost() -> f64 {
    1.0
}

fn default_undirected() -> bool {
    true
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            max_paths: None,
            default_cost: default_edge_cost(),
            undirected: default_undirected(),
        }
    }
}
