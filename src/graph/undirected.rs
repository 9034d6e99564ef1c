//! Undirected graph variant.
//!
//! One logical edge `{a, b}` is materialized as two mirrored store entries,
//! `(a, b)` and `(b, a)`, carrying identical properties. Every add, edit and
//! remove writes both orientations; lookups accept either argument order.
//!
//! The two writes are separate store calls. A concurrent reader can observe one
//! orientation before the other lands.

use std::sync::Arc;

use ahash::AHashSet;
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

pub struct Undirected<K, T, D = ()> {
    hash: HashFn<K, T>,
    traits: Traits,
    store: Arc<dyn Store<K, T, D>>,
}

impl<K: Key, T: Value, D: Value> Undirected<K, T, D> {
    /// Undirected graph over a fresh [`MemoryStore`]. The directed flag is forced off.
    pub fn new(hash: HashFn<K, T>, traits: Traits) -> Self {
        Self::with_store(hash, traits, Arc::new(MemoryStore::<K, T, D>::new()))
    }

    pub fn with_store(hash: HashFn<K, T>, traits: Traits, store: Arc<dyn Store<K, T, D>>) -> Self {
        Self {
            hash,
            traits: Traits {
                is_directed: false,
                ..traits
            },
            store,
        }
    }

    /// Stored orientation of `{source, target}`, trying `(source, target)` first.
    fn stored_edge(&self, source: &K, target: &K) -> Result<Edge<K, D>, GraphError> {
        match self.store.edge(source, target) {
            Err(err) if err.is_edge_not_found() => self.store.edge(target, source),
            other => other,
        }
    }
}

impl<K: Key, T: Value, D: Value> Graph<K, T, D> for Undirected<K, T, D> {
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
        match self.stored_edge(&source, &target) {
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
        let mirrored = edge.reversed();
        self.store.add_edge(source.clone(), target.clone(), edge)?;
        self.store.add_edge(target, source, mirrored)
    }

    fn add_edges_from(&self, other: &dyn Graph<K, T, D>) -> Result<(), GraphError> {
        copy_edges(self, other)
    }

    fn edge(&self, source: &K, target: &K) -> Result<Edge<T, D>, GraphError> {
        let stored = self.stored_edge(source, target)?;
        // Report endpoints in the caller's argument order.
        let edge = Edge {
            source: source.clone(),
            target: target.clone(),
            properties: stored.properties,
        };
        resolve_edge(self.store.as_ref(), edge)
    }

    /// One edge per unordered pair; the first orientation listed by the store wins.
    fn edges(&self) -> Result<Vec<Edge<K, D>>, GraphError> {
        let stored = self.store.list_edges()?;
        let mut edges = Vec::with_capacity(stored.len() / 2 + 1);
        let mut seen: AHashSet<(K, K)> = AHashSet::with_capacity(stored.len() / 2 + 1);
        for edge in stored {
            if seen.contains(&(edge.target.clone(), edge.source.clone())) {
                continue;
            }
            seen.insert((edge.source.clone(), edge.target.clone()));
            edges.push(edge);
        }
        Ok(edges)
    }

    fn edit_edge(
        &self,
        source: &K,
        target: &K,
        options: EdgeOptions<D>,
    ) -> Result<(), GraphError> {
        let mut existing = self.store.edge(source, target)?;
        options.apply(&mut existing.properties);
        let mirrored = existing.reversed();
        self.store.edit_edge(source, target, existing)?;
        self.store.edit_edge(target, source, mirrored)
    }

    fn remove_edge(&self, source: &K, target: &K) -> Result<(), GraphError> {
        self.stored_edge(source, target)?;
        self.store.remove_edge(source, target)?;
        self.store.remove_edge(target, source)
    }

    fn adjacency_map(&self) -> Result<AdjacencyMap<K, D>, GraphError> {
        build_adjacency(self.store.as_ref(), Orientation::Outgoing)
    }

    /// Identical to the adjacency map: every edge is both incoming and outgoing.
    fn predecessor_map(&self) -> Result<AdjacencyMap<K, D>, GraphError> {
        self.adjacency_map()
    }

    fn clone_graph(&self) -> Result<Box<dyn Graph<K, T, D>>, GraphError> {
        let store = MemoryStore::<K, T, D>::with_capacity(self.order()?);
        let clone = Undirected::with_store(self.hash, self.traits, Arc::new(store));
        clone.add_vertices_from(self)?;
        clone.add_edges_from(self)?;
        debug!(
            vertices = clone.order()?,
            edges = clone.size()?,
            "cloned undirected graph"
        );
        Ok(Box::new(clone))
    }

    fn new_like(&self) -> Box<dyn Graph<K, T, D>> {
        Box::new(Undirected::<K, T, D>::new(self.hash, self.traits))
    }

    fn order(&self) -> Result<usize, GraphError> {
        self.store.vertex_count()
    }

    /// Mirrored entries count twice; a self-loop is stored once and counts once.
    fn size(&self) -> Result<usize, GraphError> {
        let edges = self.store.list_edges()?;
        let loops = edges.iter().filter(|edge| edge.source == edge.target).count();
        Ok((edges.len() + loops) / 2)
    }
}
