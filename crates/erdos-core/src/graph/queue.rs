//! Min-priority queue over vertex identifiers with decrease-key by re-insertion

use crate::graph::types::{Cost, VertexId};
use std::cmp::{Ordering, Reverse};
use std::collections::{BinaryHeap, HashMap};

/// Heap entry ordered by priority, then by insertion sequence
#[derive(Debug, Clone)]
struct QueueEntry {
    vertex: VertexId,
    priority: Cost,
    seq: u64,
}

impl PartialEq for QueueEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for QueueEntry {}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.priority
            .total_cmp(&other.priority)
            .then_with(|| self.seq.cmp(&other.seq))
    }
}

/// Min-priority queue keyed by a side map of current priorities.
///
/// `push` on a vertex that is already queued overwrites its priority; the old
/// heap entry stays behind and is discarded when it surfaces, so `pop` only
/// ever returns a vertex together with its current priority. Equal priorities
/// pop in push order.
#[derive(Debug, Default)]
pub struct PriorityQueue {
    heap: BinaryHeap<Reverse<QueueEntry>>,
    priorities: HashMap<VertexId, Cost>,
    next_seq: u64,
}

impl PriorityQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue `vertex` with `priority`, replacing any pending priority
    pub fn push(&mut self, vertex: impl Into<VertexId>, priority: Cost) {
        let vertex = vertex.into();
        let seq = self.next_seq;
        self.next_seq += 1;
        self.priorities.insert(vertex.clone(), priority);
        self.heap.push(Reverse(QueueEntry {
            vertex,
            priority,
            seq,
        }));
    }

    /// Remove and return the pending vertex with the smallest priority.
    ///
    /// Returns `None` once no vertex is pending.
    pub fn pop(&mut self) -> Option<(VertexId, Cost)> {
        while let Some(Reverse(entry)) = self.heap.pop() {
            let current = match self.priorities.get(&entry.vertex) {
                Some(current) => *current,
                // already popped
                None => continue,
            };
            if current.total_cmp(&entry.priority) != Ordering::Equal {
                // superseded by a later push
                continue;
            }
            self.priorities.remove(&entry.vertex);
            return Some((entry.vertex, current));
        }
        None
    }

    pub fn is_empty(&self) -> bool {
        self.priorities.is_empty()
    }

    /// Number of distinct pending vertices
    pub fn len(&self) -> usize {
        self.priorities.len()
    }
}
