//! Erdos Core Library
//!
//! All tied shortest paths between two vertices of a weighted directed graph.
//!
//! ```
//! use erdos_core::graph::{Cost, DiGraph, ShortestPaths};
//!
//! let mut graph = DiGraph::new();
//! graph.add_edge("A", "B", Cost::UNIT);
//! graph.add_edge("A", "C", Cost::UNIT);
//! graph.add_edge("B", "D", Cost::UNIT);
//! graph.add_edge("C", "D", Cost::UNIT);
//!
//! let search = ShortestPaths::new(&graph, "A");
//! assert_eq!(search.distance("D"), Some(Cost::from(2)));
//! assert_eq!(search.paths("D").unwrap().len(), 2);
//! ```

pub mod config;
pub mod error;
pub mod format;
pub mod graph;
pub mod logging;
