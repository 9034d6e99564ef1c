//! Concurrency-safe vertex and edge storage.
//!
//! A [`Store`] knows nothing about directedness: it keeps ordered `(source, target)`
//! edges in an outgoing and an incoming index and leaves existence checks on
//! endpoints to the graph layer.

use parking_lot::RwLock;
use tracing::trace;

use crate::{
    errors::GraphError,
    graph::{Key, Value},
    graph::types::{Edge, FastIndexMap, VertexProperties},
};

pub trait Store<K, T, D>: Send + Sync {
    fn add_vertex(&self, key: K, value: T, properties: VertexProperties)
    -> Result<(), GraphError>;
    fn vertex(&self, key: &K) -> Result<(T, VertexProperties), GraphError>;
    /// Fails with [`GraphError::VertexHasEdges`] while any edge references `key`.
    fn remove_vertex(&self, key: &K) -> Result<(), GraphError>;
    fn list_vertices(&self) -> Result<Vec<K>, GraphError>;
    fn vertex_count(&self) -> Result<usize, GraphError>;
    /// Inserts or overwrites the ordered pair without checking endpoints.
    fn add_edge(&self, source: K, target: K, edge: Edge<K, D>) -> Result<(), GraphError>;
    fn edit_edge(&self, source: &K, target: &K, edge: Edge<K, D>) -> Result<(), GraphError>;
    /// Removing an absent pair is a no-op.
    fn remove_edge(&self, source: &K, target: &K) -> Result<(), GraphError>;
    fn edge(&self, source: &K, target: &K) -> Result<Edge<K, D>, GraphError>;
    fn list_edges(&self) -> Result<Vec<Edge<K, D>>, GraphError>;
}

struct VertexRecord<T> {
    value: T,
    properties: VertexProperties,
}

struct StoreState<K, T, D> {
    vertices: FastIndexMap<K, VertexRecord<T>>,
    // source -> target
    out_edges: FastIndexMap<K, FastIndexMap<K, Edge<K, D>>>,
    // target -> source
    in_edges: FastIndexMap<K, FastIndexMap<K, Edge<K, D>>>,
}

/// In-memory [`Store`] guarded by a single reader/writer lock.
pub struct MemoryStore<K, T, D = ()> {
    state: RwLock<StoreState<K, T, D>>,
}

impl<K: Key, T: Value, D: Value> MemoryStore<K, T, D> {
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    pub fn with_capacity(vertices: usize) -> Self {
        Self {
            state: RwLock::new(StoreState {
                vertices: FastIndexMap::with_capacity_and_hasher(vertices, Default::default()),
                out_edges: FastIndexMap::with_capacity_and_hasher(vertices, Default::default()),
                in_edges: FastIndexMap::with_capacity_and_hasher(vertices, Default::default()),
            }),
        }
    }
}

impl<K: Key, T: Value, D: Value> Default for MemoryStore<K, T, D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Key, T: Value, D: Value> Store<K, T, D> for MemoryStore<K, T, D> {
    fn add_vertex(
        &self,
        key: K,
        value: T,
        properties: VertexProperties,
    ) -> Result<(), GraphError> {
        let mut state = self.state.write();
        if state.vertices.contains_key(&key) {
            return Err(GraphError::vertex_exists(&key));
        }
        trace!(?key, "store: add vertex");
        state
            .vertices
            .insert(key, VertexRecord { value, properties });
        Ok(())
    }

    fn vertex(&self, key: &K) -> Result<(T, VertexProperties), GraphError> {
        let state = self.state.read();
        state
            .vertices
            .get(key)
            .map(|record| (record.value.clone(), record.properties.clone()))
            .ok_or_else(|| GraphError::vertex_not_found(key))
    }

    fn remove_vertex(&self, key: &K) -> Result<(), GraphError> {
        let mut state = self.state.write();
        if !state.vertices.contains_key(key) {
            return Err(GraphError::vertex_not_found(key));
        }
        let has_incoming = state.in_edges.get(key).is_some_and(|edges| !edges.is_empty());
        let has_outgoing = state.out_edges.get(key).is_some_and(|edges| !edges.is_empty());
        if has_incoming || has_outgoing {
            return Err(GraphError::vertex_has_edges(key));
        }
        trace!(?key, "store: remove vertex");
        state.in_edges.shift_remove(key);
        state.out_edges.shift_remove(key);
        state.vertices.shift_remove(key);
        Ok(())
    }

    fn list_vertices(&self) -> Result<Vec<K>, GraphError> {
        let state = self.state.read();
        Ok(state.vertices.keys().cloned().collect())
    }

    fn vertex_count(&self) -> Result<usize, GraphError> {
        Ok(self.state.read().vertices.len())
    }

    fn add_edge(&self, source: K, target: K, edge: Edge<K, D>) -> Result<(), GraphError> {
        let mut state = self.state.write();
        trace!(?source, ?target, "store: add edge");
        state
            .out_edges
            .entry(source.clone())
            .or_default()
            .insert(target.clone(), edge.clone());
        state
            .in_edges
            .entry(target)
            .or_default()
            .insert(source, edge);
        Ok(())
    }

    fn edit_edge(&self, source: &K, target: &K, edge: Edge<K, D>) -> Result<(), GraphError> {
        let mut state = self.state.write();
        let exists = state
            .out_edges
            .get(source)
            .is_some_and(|targets| targets.contains_key(target));
        if !exists {
            return Err(GraphError::edge_not_found(source, target));
        }
        trace!(?source, ?target, "store: edit edge");
        if let Some(slot) = state
            .out_edges
            .get_mut(source)
            .and_then(|targets| targets.get_mut(target))
        {
            *slot = edge.clone();
        }
        if let Some(slot) = state
            .in_edges
            .get_mut(target)
            .and_then(|sources| sources.get_mut(source))
        {
            *slot = edge;
        }
        Ok(())
    }

    fn remove_edge(&self, source: &K, target: &K) -> Result<(), GraphError> {
        let mut state = self.state.write();
        trace!(?source, ?target, "store: remove edge");
        if let Some(sources) = state.in_edges.get_mut(target) {
            sources.shift_remove(source);
        }
        if let Some(targets) = state.out_edges.get_mut(source) {
            targets.shift_remove(target);
        }
        Ok(())
    }

    fn edge(&self, source: &K, target: &K) -> Result<Edge<K, D>, GraphError> {
        let state = self.state.read();
        state
            .out_edges
            .get(source)
            .and_then(|targets| targets.get(target))
            .cloned()
            .ok_or_else(|| GraphError::edge_not_found(source, target))
    }

    fn list_edges(&self) -> Result<Vec<Edge<K, D>>, GraphError> {
        let state = self.state.read();
        Ok(state
            .out_edges
            .values()
            .flat_map(|targets| targets.values().cloned())
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::types::EdgeProperties;

    fn edge(source: i64, target: i64, weight: i64) -> Edge<i64> {
        Edge::new(
            source,
            target,
            EdgeProperties {
                weight,
                ..Default::default()
            },
        )
    }

    #[test]
    fn test_remove_edge_clears_both_indices() {
        let store: MemoryStore<i64, i64> = MemoryStore::new();
        store.add_vertex(1, 1, VertexProperties::default()).unwrap();
        store.add_vertex(2, 2, VertexProperties::default()).unwrap();
        store.add_edge(1, 2, edge(1, 2, 0)).unwrap();

        store.remove_edge(&1, &2).unwrap();
        let state = store.state.read();
        assert!(state.out_edges[&1].is_empty());
        assert!(state.in_edges[&2].is_empty());
    }

    #[test]
    fn test_remove_vertex_drops_empty_index_entries() {
        let store: MemoryStore<i64, i64> = MemoryStore::new();
        store.add_vertex(1, 1, VertexProperties::default()).unwrap();
        store.add_vertex(2, 2, VertexProperties::default()).unwrap();
        store.add_edge(1, 2, edge(1, 2, 0)).unwrap();
        store.remove_edge(&1, &2).unwrap();

        store.remove_vertex(&1).unwrap();
        store.remove_vertex(&2).unwrap();
        let state = store.state.read();
        assert!(state.out_edges.is_empty());
        assert!(state.in_edges.is_empty());
        assert!(state.vertices.is_empty());
    }

    #[test]
    fn test_edit_edge_updates_incoming_index() {
        let store: MemoryStore<i64, i64> = MemoryStore::new();
        store.add_edge(1, 2, edge(1, 2, 1)).unwrap();
        store.edit_edge(&1, &2, edge(1, 2, 9)).unwrap();
        let state = store.state.read();
        assert_eq!(state.in_edges[&2][&1].properties.weight, 9);
    }
}
