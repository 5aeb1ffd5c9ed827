//! Weighted directed graphs and all-shortest-paths search
//!
//! - `types`: graph model and edge costs
//! - `queue`: min-priority queue with decrease-key by re-insertion
//! - `dijkstra`: single-source search keeping every tied predecessor
//! - `paths`: expansion of the predecessor map into every tied path
//! - `input`: graph files accepted by the command line

pub mod dijkstra;
pub mod input;
pub mod paths;
pub mod queue;
pub mod types;

pub use dijkstra::ShortestPaths;
pub use input::{load_graph, GraphInput};
pub use paths::PathsResult;
pub use queue::PriorityQueue;
pub use types::{Cost, DiGraph, VertexId};
