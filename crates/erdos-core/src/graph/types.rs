use crate::bail_graph;
use crate::error::Result;
use serde::{Deserialize, Serialize, Serializer};
use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;

/// Opaque vertex identifier. Prefixes such as `C` (creator) or `I` (item)
/// carry meaning only for the caller.
pub type VertexId = String;

/// Cost of traversing an edge, or the accumulated cost of a path.
///
/// Ties between paths are detected with exact equality, so graphs whose
/// weights are small integers (the common unit-weight case) compare exactly.
///
/// Whole costs serialize as JSON integers, matching their `Display` form.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Deserialize)]
#[serde(transparent)]
pub struct Cost(f64);

/// Largest magnitude at which every integer is exactly representable
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

impl Cost {
    pub const ZERO: Cost = Cost(0.0);
    pub const UNIT: Cost = Cost(1.0);

    pub fn new(cost: f64) -> Self {
        Cost(cost)
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    /// Total order used by the priority queue
    pub fn total_cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl std::ops::Add for Cost {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Cost(self.0 + other.0)
    }
}

impl From<u32> for Cost {
    fn from(cost: u32) -> Self {
        Cost(f64::from(cost))
    }
}

impl Serialize for Cost {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        if self.0.fract() == 0.0 && self.0.abs() <= MAX_EXACT_INTEGER {
            serializer.serialize_i64(self.0 as i64)
        } else {
            serializer.serialize_f64(self.0)
        }
    }
}

impl fmt::Display for Cost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Weighted directed graph: vertex -> neighbor -> edge cost.
///
/// Adjacency is kept in ordered maps so that every search over the same
/// graph visits edges in the same order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DiGraph {
    adjacency: BTreeMap<VertexId, BTreeMap<VertexId, Cost>>,
}

impl DiGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a vertex with no outgoing edges (no-op if it already exists)
    pub fn add_vertex(&mut self, vertex: impl Into<VertexId>) {
        self.adjacency.entry(vertex.into()).or_default();
    }

    /// Add or overwrite the directed edge `from -> to`
    pub fn add_edge(&mut self, from: impl Into<VertexId>, to: impl Into<VertexId>, cost: Cost) {
        let to = to.into();
        self.add_vertex(to.clone());
        self.adjacency.entry(from.into()).or_default().insert(to, cost);
    }

    /// Add the two opposite directed edges between `a` and `b`
    pub fn add_undirected_edge(
        &mut self,
        a: impl Into<VertexId>,
        b: impl Into<VertexId>,
        cost: Cost,
    ) {
        let (a, b) = (a.into(), b.into());
        self.add_edge(a.clone(), b.clone(), cost);
        self.add_edge(b, a, cost);
    }

    /// Outgoing edges of `vertex`; empty when it has none or is unknown
    pub fn neighbors<'a>(&'a self, vertex: &str) -> impl Iterator<Item = (&'a str, Cost)> + 'a {
        self.adjacency
            .get(vertex)
            .into_iter()
            .flat_map(|edges| edges.iter().map(|(to, cost)| (to.as_str(), *cost)))
    }

    pub fn edge_cost(&self, from: &str, to: &str) -> Option<Cost> {
        self.adjacency.get(from)?.get(to).copied()
    }

    pub fn contains_vertex(&self, vertex: &str) -> bool {
        self.adjacency.contains_key(vertex)
    }

    pub fn vertices(&self) -> impl Iterator<Item = &str> {
        self.adjacency.keys().map(String::as_str)
    }

    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(BTreeMap::len).sum()
    }

    /// Check that every edge cost is finite and non-negative.
    ///
    /// The search itself never checks; call this on graphs from untrusted input.
    pub fn validate(&self) -> Result<()> {
        for (from, edges) in &self.adjacency {
            for (to, cost) in edges {
                if !cost.value().is_finite() || cost.value() < 0.0 {
                    bail_graph!("edge {} -> {} has cost {}", from, to, cost);
                }
            }
        }
        Ok(())
    }
}
