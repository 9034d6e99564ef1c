use std::collections::VecDeque;

use ahash::AHashSet;
use tracing::debug;

use crate::{
    errors::GraphError,
    graph::{Graph, Key, Value},
};

/// Breadth-first walk from `start`; `visit` returning `true` stops the walk.
pub fn bfs<K, T, D, G, F>(graph: &G, start: &K, mut visit: F) -> Result<(), GraphError>
where
    K: Key,
    T: Value,
    D: Value,
    G: Graph<K, T, D> + ?Sized,
    F: FnMut(&K) -> bool,
{
    bfs_with_depth(graph, start, |vertex, _| visit(vertex))
}

/// Breadth-first walk that also hands `visit` a depth counter.
///
/// The counter grows by one per dequeued vertex across the whole walk, so it is
/// the visit sequence number (starting at 1), not the BFS layer. Neighbors are
/// marked visited when queued, so each vertex is queued at most once.
pub fn bfs_with_depth<K, T, D, G, F>(graph: &G, start: &K, mut visit: F) -> Result<(), GraphError>
where
    K: Key,
    T: Value,
    D: Value,
    G: Graph<K, T, D> + ?Sized,
    F: FnMut(&K, usize) -> bool,
{
    let adjacency = graph.adjacency_map()?;
    if !adjacency.contains_key(start) {
        return Err(GraphError::vertex_not_found(start));
    }
    let mut visited = AHashSet::with_capacity(adjacency.len());
    let mut queue = VecDeque::new();
    visited.insert(start.clone());
    queue.push_back(start.clone());
    let mut depth = 0;
    while let Some(current) = queue.pop_front() {
        depth += 1;
        if visit(&current, depth) {
            break;
        }
        if let Some(neighbors) = adjacency.get(&current) {
            for next in neighbors.keys() {
                if visited.insert(next.clone()) {
                    queue.push_back(next.clone());
                }
            }
        }
    }
    debug!(visited = depth, queued = visited.len(), "bfs finished");
    Ok(())
}
