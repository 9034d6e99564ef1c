use ahash::AHashSet;
use tracing::debug;

use crate::{
    errors::GraphError,
    graph::{Graph, Key, Value},
};

/// Iterative depth-first walk from `start`; `visit` returning `true` stops the walk.
///
/// Neighbors are pushed in adjacency order, so the last one pushed is visited
/// first. A vertex may sit on the stack several times; repeats are skipped when
/// popped.
pub fn dfs<K, T, D, G, F>(graph: &G, start: &K, mut visit: F) -> Result<(), GraphError>
where
    K: Key,
    T: Value,
    D: Value,
    G: Graph<K, T, D> + ?Sized,
    F: FnMut(&K) -> bool,
{
    let adjacency = graph.adjacency_map()?;
    if !adjacency.contains_key(start) {
        return Err(GraphError::vertex_not_found(start));
    }
    let mut visited = AHashSet::with_capacity(adjacency.len());
    let mut stack = vec![start.clone()];
    while let Some(current) = stack.pop() {
        if visited.contains(&current) {
            continue;
        }
        if visit(&current) {
            break;
        }
        if let Some(neighbors) = adjacency.get(&current) {
            stack.extend(neighbors.keys().cloned());
        }
        visited.insert(current);
    }
    debug!(visited = visited.len(), "dfs finished");
    Ok(())
}
