//! Directed graph variant: every stored edge is one logical edge.

use std::sync::Arc;

use tracing::debug;

use crate::{
    config::{HashFn, Traits},
    errors::GraphError,
    store::{MemoryStore, Store},
};

use super::{
    AdjacencyMap, Edge, EdgeOptions, EdgeProperties, Graph, Key, Orientation, Value,
    VertexOptions, VertexProperties, build_adjacency, copy_edges, copy_vertices, insert_vertex,
    require_endpoints, resolve_edge,
};

pub struct Directed<K, T, D = ()> {
    hash: HashFn<K, T>,
    traits: Traits,
    store: Arc<dyn Store<K, T, D>>,
}

impl<K: Key, T: Value, D: Value> Directed<K, T, D> {
    /// Directed graph over a fresh [`MemoryStore`]. The directed flag is forced on.
    pub fn new(hash: HashFn<K, T>, traits: Traits) -> Self {
        Self::with_store(hash, traits, Arc::new(MemoryStore::<K, T, D>::new()))
    }

    /// Directed graph over a caller-provided store, which must not be shared
    /// with another graph.
    pub fn with_store(hash: HashFn<K, T>, traits: Traits, store: Arc<dyn Store<K, T, D>>) -> Self {
        Self {
            hash,
            traits: traits.directed(),
            store,
        }
    }
}

impl<K: Key, T: Value, D: Value> Graph<K, T, D> for Directed<K, T, D> {
    fn traits(&self) -> &Traits {
        &self.traits
    }

    fn add_vertex_with(&self, value: T, options: VertexOptions) -> Result<K, GraphError> {
        insert_vertex(self.store.as_ref(), self.hash, value, options)
    }

    fn add_vertices_from(&self, other: &dyn Graph<K, T, D>) -> Result<(), GraphError> {
        copy_vertices(self, other)
    }

    fn vertex(&self, key: &K) -> Result<T, GraphError> {
        self.store.vertex(key).map(|(value, _)| value)
    }

    fn vertex_with_properties(&self, key: &K) -> Result<(T, VertexProperties), GraphError> {
        self.store.vertex(key)
    }

    fn remove_vertex(&self, key: &K) -> Result<(), GraphError> {
        self.store
            .remove_vertex(key)
            .inspect_err(|err| debug!(?key, %err, "vertex removal rejected"))
    }

    fn add_edge_with(
        &self,
        source: K,
        target: K,
        options: EdgeOptions<D>,
    ) -> Result<(), GraphError> {
        require_endpoints(self.store.as_ref(), &source, &target)?;
        match self.store.edge(&source, &target) {
            Ok(_) => {
                debug!(?source, ?target, "rejected duplicate edge");
                return Err(GraphError::edge_exists(&source, &target));
            }
            Err(err) if err.is_edge_not_found() => {}
            Err(err) => return Err(err),
        }
        let mut properties = EdgeProperties::default();
        options.apply(&mut properties);
        let edge = Edge::new(source.clone(), target.clone(), properties);
        self.store.add_edge(source, target, edge)
    }

    fn add_edges_from(&self, other: &dyn Graph<K, T, D>) -> Result<(), GraphError> {
        copy_edges(self, other)
    }

    fn edge(&self, source: &K, target: &K) -> Result<Edge<T, D>, GraphError> {
        let edge = self.store.edge(source, target)?;
        resolve_edge(self.store.as_ref(), edge)
    }

    fn edges(&self) -> Result<Vec<Edge<K, D>>, GraphError> {
        self.store.list_edges()
    }

    fn edit_edge(
        &self,
        source: &K,
        target: &K,
        options: EdgeOptions<D>,
    ) -> Result<(), GraphError> {
        let mut existing = self.store.edge(source, target)?;
        options.apply(&mut existing.properties);
        self.store.edit_edge(source, target, existing)
    }

    fn remove_edge(&self, source: &K, target: &K) -> Result<(), GraphError> {
        self.store.edge(source, target)?;
        self.store.remove_edge(source, target)
    }

    fn adjacency_map(&self) -> Result<AdjacencyMap<K, D>, GraphError> {
        build_adjacency(self.store.as_ref(), Orientation::Outgoing)
    }

    fn predecessor_map(&self) -> Result<AdjacencyMap<K, D>, GraphError> {
        build_adjacency(self.store.as_ref(), Orientation::Incoming)
    }

    fn clone_graph(&self) -> Result<Box<dyn Graph<K, T, D>>, GraphError> {
        let store = MemoryStore::<K, T, D>::with_capacity(self.order()?);
        let clone = Directed::with_store(self.hash, self.traits, Arc::new(store));
        clone.add_vertices_from(self)?;
        clone.add_edges_from(self)?;
        debug!(
            vertices = clone.order()?,
            edges = clone.size()?,
            "cloned directed graph"
        );
        Ok(Box::new(clone))
    }

    fn new_like(&self) -> Box<dyn Graph<K, T, D>> {
        Box::new(Directed::<K, T, D>::new(self.hash, self.traits))
    }

    fn order(&self) -> Result<usize, GraphError> {
        self.store.vertex_count()
    }

    fn size(&self) -> Result<usize, GraphError> {
        Ok(self.store.list_edges()?.len())
    }
}
