use crate::graph::queue::PriorityQueue;
use crate::graph::types::{Cost, DiGraph, VertexId};
use crate::trace_time;
use std::collections::HashMap;
use std::time::Instant;

/// Single-source shortest paths that keep every tied predecessor.
///
/// The whole search runs inside [`ShortestPaths::new`]; afterwards the
/// value is read-only and can be shared between threads.
#[derive(Debug, Clone)]
pub struct ShortestPaths {
    source: VertexId,
    /// Minimal cost from the source; absent means unreachable
    costs: HashMap<VertexId, Cost>,
    /// Predecessors achieving the minimal cost, in discovery order
    predecessors: HashMap<VertexId, Vec<VertexId>>,
}

impl ShortestPaths {
    /// Run the search from `source` over `graph`.
    ///
    /// Edge costs must be non-negative. Negative costs are not detected and
    /// give meaningless results; see [`DiGraph::validate`].
    #[tracing::instrument(skip(graph), fields(source = %source, vertices = graph.vertex_count(), edges = graph.edge_count()))]
    pub fn new(graph: &DiGraph, source: &str) -> Self {
        let start = Instant::now();

        let mut search = ShortestPaths {
            source: source.to_string(),
            costs: HashMap::new(),
            predecessors: HashMap::new(),
        };
        search.costs.insert(search.source.clone(), Cost::ZERO);

        let mut open = PriorityQueue::new();
        open.push(source, Cost::ZERO);

        // The queue drops stale entries, so the popped cost is always the
        // current best cost of `u`.
        while let Some((u, cost_to_u)) = open.pop() {
            for (v, edge_cost) in graph.neighbors(&u) {
                search.relax(&u, v, cost_to_u + edge_cost, &mut open);
            }
        }

        tracing::debug!(reached = search.costs.len(), "search complete");
        trace_time!(start, "shortest_paths", reached = search.costs.len());
        search
    }

    /// Offer `candidate` as the cost of reaching `v` through `u`
    fn relax(&mut self, u: &str, v: &str, candidate: Cost, open: &mut PriorityQueue) {
        match self.costs.get(v).copied() {
            Some(current) if candidate == current => {
                // tie: another minimal route into v
                self.predecessors
                    .entry(v.to_string())
                    .or_default()
                    .push(u.to_string());
            }
            Some(current) if candidate >= current => {}
            _ => {
                self.costs.insert(v.to_string(), candidate);
                self.predecessors.insert(v.to_string(), vec![u.to_string()]);
                open.push(v, candidate);
            }
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// Whether the search reached `dst`
    pub fn reachable(&self, dst: &str) -> bool {
        self.costs.contains_key(dst)
    }

    /// Minimal cost from the source to `dst`, or `None` when unreachable
    pub fn distance(&self, dst: &str) -> Option<Cost> {
        self.costs.get(dst).copied()
    }

    /// Predecessors of `dst` on its minimal paths, in the order they were found.
    ///
    /// Empty for unreachable vertices. The source has predecessors only when
    /// a zero-cost cycle leads back to it.
    pub fn predecessors(&self, dst: &str) -> &[VertexId] {
        self.predecessors.get(dst).map_or(&[], Vec::as_slice)
    }

    /// All reached vertices with their minimal cost, in no particular order
    pub fn costs(&self) -> impl Iterator<Item = (&str, Cost)> {
        self.costs.iter().map(|(v, c)| (v.as_str(), *c))
    }

    /// Number of reached vertices, the source included
    pub fn reached_count(&self) -> usize {
        self.costs.len()
    }
}

#[cfg(test)]
mod tests;
