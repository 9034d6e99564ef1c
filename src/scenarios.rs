//! Worked scenarios composed from the traversal primitives.
//!
//! Each sample graph reproduces a small fixed exercise; the analysis functions
//! work on any graph and back the `graphkit` binary.

use ahash::AHashMap;
use serde::Serialize;

use crate::{
    bfs::bfs,
    config::{GraphConfig, int_hash, new_graph},
    dfs::dfs,
    errors::GraphError,
    graph::{EdgeOptions, Graph, Key, Value},
};

pub type SampleGraph = Box<dyn Graph<i64, i64>>;

fn build(
    cfg: &GraphConfig,
    vertices: &[i64],
    edges: &[(i64, i64, i64)],
) -> Result<SampleGraph, GraphError> {
    let graph: SampleGraph = new_graph(int_hash, cfg);
    for &vertex in vertices {
        graph.add_vertex(vertex)?;
    }
    for &(source, target, weight) in edges {
        graph.add_edge_with(source, target, EdgeOptions::new().weight(weight))?;
    }
    Ok(graph)
}

/// Directed graph on 1..=6 used for the in-degree scan.
pub fn sample_directed() -> Result<SampleGraph, GraphError> {
    let edges = [
        (1, 2, 0),
        (1, 3, 0),
        (2, 3, 0),
        (3, 4, 0),
        (3, 2, 0),
        (3, 5, 0),
        (4, 5, 0),
        (5, 6, 0),
    ];
    build(&GraphConfig::directed(), &[1, 2, 3, 4, 5, 6], &edges)
}

/// Connected undirected graph on 1..=5 containing a cycle.
pub fn sample_undirected() -> Result<SampleGraph, GraphError> {
    let edges = [(1, 2, 0), (1, 3, 0), (2, 4, 0), (4, 5, 0), (5, 1, 0)];
    build(&GraphConfig::undirected(), &[1, 2, 3, 4, 5], &edges)
}

/// Directed graph on 1..=5 where 3 is a sink and 1, 2, 4, 5 form a cycle.
pub fn sample_reachability() -> Result<SampleGraph, GraphError> {
    let edges = [(1, 2, 0), (1, 3, 0), (2, 4, 0), (4, 5, 0), (5, 1, 0)];
    build(&GraphConfig::directed(), &[1, 2, 3, 4, 5], &edges)
}

/// Weighted undirected graph for the spanning tree scenario.
pub fn sample_weighted() -> Result<SampleGraph, GraphError> {
    let edges = [
        (1, 2, 2),
        (2, 3, 4),
        (3, 4, 1),
        (4, 1, 3),
        (5, 2, 6),
        (5, 4, 2),
    ];
    build(&GraphConfig::undirected().weighted(), &[1, 2, 3, 4, 5], &edges)
}

/// Undirected tree on 1..=5, the graph rendered by `graphkit dot`.
pub fn sample_tree() -> Result<SampleGraph, GraphError> {
    let edges = [(1, 2, 0), (1, 3, 0), (2, 4, 0), (4, 5, 0)];
    build(&GraphConfig::undirected(), &[1, 2, 3, 4, 5], &edges)
}

/// Vertices other than `vertex` whose in-degree is strictly lower than its own.
pub fn in_degree_below<K, T, D, G>(graph: &G, vertex: &K) -> Result<Vec<K>, GraphError>
where
    K: Key,
    T: Value,
    D: Value,
    G: Graph<K, T, D> + ?Sized,
{
    let predecessors = graph.predecessor_map()?;
    let threshold = predecessors
        .get(vertex)
        .map(|incoming| incoming.len())
        .ok_or_else(|| GraphError::vertex_not_found(vertex))?;
    Ok(predecessors
        .iter()
        .filter(|(key, incoming)| *key != vertex && incoming.len() < threshold)
        .map(|(key, _)| key.clone())
        .collect())
}

/// True when a depth-first walk from every vertex reaches all vertices.
pub fn is_connected<K, T, D, G>(graph: &G) -> Result<bool, GraphError>
where
    K: Key,
    T: Value,
    D: Value,
    G: Graph<K, T, D> + ?Sized,
{
    let order = graph.order()?;
    for vertex in graph.adjacency_map()?.keys() {
        let mut count = 0;
        dfs(graph, vertex, |_| {
            count += 1;
            false
        })?;
        if count != order {
            return Ok(false);
        }
    }
    Ok(true)
}

/// Vertices, other than `target`, from which `target` is reachable.
pub fn vertices_reaching<K, T, D, G>(graph: &G, target: &K) -> Result<Vec<K>, GraphError>
where
    K: Key,
    T: Value,
    D: Value,
    G: Graph<K, T, D> + ?Sized,
{
    let adjacency = graph.adjacency_map()?;
    if !adjacency.contains_key(target) {
        return Err(GraphError::vertex_not_found(target));
    }
    let mut reaching = Vec::new();
    for vertex in adjacency.keys().filter(|key| *key != target) {
        let mut reached = false;
        bfs(graph, vertex, |current| {
            reached = current == target;
            reached
        })?;
        if reached {
            reaching.push(vertex.clone());
        }
    }
    Ok(reaching)
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SpanningForest<K> {
    /// `(source, target, weight)` in the order they were accepted.
    pub edges: Vec<(K, K, i64)>,
    pub total_weight: i64,
}

/// Kruskal's algorithm over the logical edges, lightest first.
///
/// Equal weights keep the order reported by [`Graph::edges`]. A disconnected
/// graph yields one tree per component.
pub fn minimum_spanning_forest<K, T, D, G>(graph: &G) -> Result<SpanningForest<K>, GraphError>
where
    K: Key,
    T: Value,
    D: Value,
    G: Graph<K, T, D> + ?Sized,
{
    let mut edges = graph.edges()?;
    edges.sort_by_key(|edge| edge.properties.weight);
    let mut sets = DisjointSets::default();
    let mut forest = SpanningForest {
        edges: Vec::new(),
        total_weight: 0,
    };
    for edge in edges {
        if sets.union(&edge.source, &edge.target) {
            forest.total_weight += edge.properties.weight;
            forest
                .edges
                .push((edge.source, edge.target, edge.properties.weight));
        }
    }
    Ok(forest)
}

struct DisjointSets<K> {
    parent: AHashMap<K, K>,
}

impl<K: Key> Default for DisjointSets<K> {
    fn default() -> Self {
        Self {
            parent: AHashMap::new(),
        }
    }
}

impl<K: Key> DisjointSets<K> {
    fn find(&mut self, key: &K) -> K {
        let mut root = key.clone();
        while let Some(parent) = self.parent.get(&root) {
            if *parent == root {
                break;
            }
            root = parent.clone();
        }
        // path compression
        let mut current = key.clone();
        while current != root {
            let next = self
                .parent
                .insert(current.clone(), root.clone())
                .unwrap_or_else(|| root.clone());
            current = next;
        }
        root
    }

    /// Merges the sets of `a` and `b`; false when they were already joined.
    fn union(&mut self, a: &K, b: &K) -> bool {
        let root_a = self.find(a);
        let root_b = self.find(b);
        if root_a == root_b {
            return false;
        }
        self.parent.insert(root_b, root_a);
        true
    }
}
