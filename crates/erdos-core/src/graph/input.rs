//! Graph files accepted by the command line

use crate::config::SearchConfig;
use crate::error::Result;
use crate::graph::types::{Cost, DiGraph, VertexId};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// JSON shapes a graph file may take
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum GraphInput {
    /// `{"A": {"B": 1}, "B": {}}`
    Adjacency(DiGraph),
    /// `[["C1", "I1"], ["I1", "C2"]]`, costed and directed per config
    Edges(Vec<(VertexId, VertexId)>),
}

impl GraphInput {
    pub fn parse(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Build the graph, using `config` for edge-list costs and direction
    pub fn into_graph(self, config: &SearchConfig) -> DiGraph {
        match self {
            GraphInput::Adjacency(graph) => graph,
            GraphInput::Edges(edges) => {
                let cost = Cost::new(config.default_cost);
                let mut graph = DiGraph::new();
                for (a, b) in edges {
                    if config.undirected {
                        graph.add_undirected_edge(a, b, cost);
                    } else {
                        graph.add_edge(a, b, cost);
                    }
                }
                graph
            }
        }
    }
}

/// Read and validate a graph file
pub fn load_graph(path: &Path, config: &SearchConfig) -> Result<DiGraph> {
    let content = fs::read_to_string(path)?;
    let graph = GraphInput::parse(&content)?.into_graph(config);
    graph.validate()?;
    tracing::debug!(
        path = %path.display(),
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        "loaded graph"
    );
    Ok(graph)
}
