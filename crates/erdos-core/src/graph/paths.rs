//! Reconstruction of every tied shortest path from the predecessor map

use crate::error::{ErdosError, Result};
use crate::graph::dijkstra::ShortestPaths;
use crate::graph::types::{Cost, VertexId};
use serde::Serialize;
use std::time::Instant;

/// Tied shortest paths to one destination
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PathsResult {
    pub source: VertexId,
    pub destination: VertexId,
    pub distance: Cost,
    /// Each path runs from `source` to `destination`
    pub paths: Vec<Vec<VertexId>>,
    pub truncated: bool,
}

/// Path buffers addressed by integer handles.
///
/// A buffer holds a partial path from the destination backwards; its last
/// element is the head still to be expanded.
#[derive(Debug, Default)]
struct PathArena<'a> {
    buffers: Vec<Vec<&'a str>>,
}

impl<'a> PathArena<'a> {
    fn start(&mut self, vertex: &'a str) -> usize {
        self.buffers.push(vec![vertex]);
        self.buffers.len() - 1
    }

    fn extend(&mut self, handle: usize, vertex: &'a str) {
        self.buffers[handle].push(vertex);
    }

    /// Copy the buffer at `handle` into a new buffer
    fn fork(&mut self, handle: usize) -> usize {
        let copy = self.buffers[handle].clone();
        self.buffers.push(copy);
        self.buffers.len() - 1
    }

    fn head(&self, handle: usize) -> &'a str {
        let buffer = &self.buffers[handle];
        buffer[buffer.len() - 1]
    }

    fn contains(&self, handle: usize, vertex: &str) -> bool {
        self.buffers[handle].iter().any(|v| *v == vertex)
    }

    /// Source-to-destination copy of a finished buffer
    fn forward(&self, handle: usize) -> Vec<VertexId> {
        self.buffers[handle]
            .iter()
            .rev()
            .map(|v| v.to_string())
            .collect()
    }
}

impl ShortestPaths {
    /// Every minimal-cost path from the source to `dst`.
    ///
    /// Paths come back in a fixed order: the one that always follows the
    /// first-found predecessor is first.
    pub fn paths(&self, dst: &str) -> Result<Vec<Vec<VertexId>>> {
        Ok(self.paths_limited(dst, None)?.paths)
    }

    /// Like [`ShortestPaths::paths`], stopping once `limit` paths are complete
    #[tracing::instrument(skip(self), fields(source = %self.source()))]
    pub fn paths_limited(&self, dst: &str, limit: Option<usize>) -> Result<PathsResult> {
        let start = Instant::now();
        let distance = self
            .distance(dst)
            .ok_or_else(|| ErdosError::not_reachable(dst))?;

        let mut arena = PathArena::default();
        let mut pending = vec![arena.start(dst)];
        let mut complete: Vec<usize> = Vec::new();
        let mut truncated = false;

        while let Some(handle) = pending.pop() {
            if arena.head(handle) == self.source() {
                if limit.is_some_and(|max| complete.len() >= max) {
                    truncated = true;
                    break;
                }
                complete.push(handle);
                continue;
            }

            // Skipping vertices already on the buffer keeps zero-cost cycles
            // from looping; a buffer with nothing left to follow is dropped.
            // Every vertex on the buffer costs at least as much as the head, so
            // only a predecessor at the head's own cost can already be there.
            let head = arena.head(handle);
            let head_cost = self.distance(head);
            let mut admissible = self
                .predecessors(head)
                .iter()
                .map(String::as_str)
                .filter(|pred| {
                    self.distance(pred) != head_cost || !arena.contains(handle, pred)
                });

            let Some(first) = admissible.next() else {
                tracing::trace!(head = %head, "dropping path with no admissible predecessor");
                continue;
            };
            let rest: Vec<&str> = admissible.collect();

            // Push forks in reverse so the first predecessor is expanded first
            for pred in rest.into_iter().rev() {
                let branch = arena.fork(handle);
                arena.extend(branch, pred);
                pending.push(branch);
            }
            arena.extend(handle, first);
            pending.push(handle);
        }

        complete.sort_unstable();
        let paths: Vec<Vec<VertexId>> = complete.iter().map(|h| arena.forward(*h)).collect();

        tracing::debug!(count = paths.len(), truncated = truncated, "paths reconstructed");
        crate::trace_time!(start, "paths", count = paths.len());

        Ok(PathsResult {
            source: self.source().to_string(),
            destination: dst.to_string(),
            distance,
            paths,
            truncated,
        })
    }
}
