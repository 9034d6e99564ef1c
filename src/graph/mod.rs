mod directed;
pub mod types;
mod undirected;

use std::{fmt::Debug, hash::Hash};

pub use directed::Directed;
pub use types::{
    AdjacencyMap, Edge, EdgeOptions, EdgeProperties, FastIndexMap, VertexOptions,
    VertexProperties,
};
pub use undirected::Undirected;

use tracing::debug;

use crate::{
    config::{HashFn, Traits},
    errors::GraphError,
    store::Store,
};

/// Bound for vertex keys produced by a hash function.
pub trait Key: Eq + Hash + Clone + Debug + Send + Sync + 'static {}

impl<K> Key for K where K: Eq + Hash + Clone + Debug + Send + Sync + 'static {}

/// Bound for vertex values and edge payloads.
pub trait Value: Clone + Send + Sync + 'static {}

impl<V> Value for V where V: Clone + Send + Sync + 'static {}

/// Vertex/edge API shared by the directed and undirected variants.
///
/// Both variants delegate storage to a [`crate::store::Store`] and differ only in
/// how they interpret edges. Selection happens once, in [`crate::new_graph`].
pub trait Graph<K: Key, T: Value, D: Value = ()>: Send + Sync {
    fn traits(&self) -> &Traits;

    /// Hashes `value` and stores it with default properties, returning its key.
    fn add_vertex(&self, value: T) -> Result<K, GraphError> {
        self.add_vertex_with(value, VertexOptions::default())
    }
    fn add_vertex_with(&self, value: T, options: VertexOptions) -> Result<K, GraphError>;
    /// Copies every vertex of `other`, properties included.
    fn add_vertices_from(&self, other: &dyn Graph<K, T, D>) -> Result<(), GraphError>;
    fn vertex(&self, key: &K) -> Result<T, GraphError>;
    fn vertex_with_properties(&self, key: &K) -> Result<(T, VertexProperties), GraphError>;
    fn remove_vertex(&self, key: &K) -> Result<(), GraphError>;

    fn add_edge(&self, source: K, target: K) -> Result<(), GraphError> {
        self.add_edge_with(source, target, EdgeOptions::default())
    }
    fn add_edge_with(
        &self,
        source: K,
        target: K,
        options: EdgeOptions<D>,
    ) -> Result<(), GraphError>;
    /// Copies every logical edge of `other`; endpoints must already exist here.
    fn add_edges_from(&self, other: &dyn Graph<K, T, D>) -> Result<(), GraphError>;
    /// Edge between `source` and `target` with both endpoints resolved to values.
    fn edge(&self, source: &K, target: &K) -> Result<Edge<T, D>, GraphError>;
    fn edges(&self) -> Result<Vec<Edge<K, D>>, GraphError>;
    fn edit_edge(&self, source: &K, target: &K, options: EdgeOptions<D>)
    -> Result<(), GraphError>;
    fn remove_edge(&self, source: &K, target: &K) -> Result<(), GraphError>;

    fn adjacency_map(&self) -> Result<AdjacencyMap<K, D>, GraphError>;
    fn predecessor_map(&self) -> Result<AdjacencyMap<K, D>, GraphError>;

    /// Deep copy into a fresh store.
    fn clone_graph(&self) -> Result<Box<dyn Graph<K, T, D>>, GraphError>;
    /// Empty graph with the same hash function and traits.
    fn new_like(&self) -> Box<dyn Graph<K, T, D>>;

    /// Number of vertices.
    fn order(&self) -> Result<usize, GraphError>;
    /// Number of logical edges.
    fn size(&self) -> Result<usize, GraphError>;
}

impl<K, T, D, G> Graph<K, T, D> for Box<G>
where
    K: Key,
    T: Value,
    D: Value,
    G: Graph<K, T, D> + ?Sized,
{
    fn traits(&self) -> &Traits {
        (**self).traits()
    }

    fn add_vertex_with(&self, value: T, options: VertexOptions) -> Result<K, GraphError> {
        (**self).add_vertex_with(value, options)
    }

    fn add_vertices_from(&self, other: &dyn Graph<K, T, D>) -> Result<(), GraphError> {
        (**self).add_vertices_from(other)
    }

    fn vertex(&self, key: &K) -> Result<T, GraphError> {
        (**self).vertex(key)
    }

    fn vertex_with_properties(&self, key: &K) -> Result<(T, VertexProperties), GraphError> {
        (**self).vertex_with_properties(key)
    }

    fn remove_vertex(&self, key: &K) -> Result<(), GraphError> {
        (**self).remove_vertex(key)
    }

    fn add_edge_with(
        &self,
        source: K,
        target: K,
        options: EdgeOptions<D>,
    ) -> Result<(), GraphError> {
        (**self).add_edge_with(source, target, options)
    }

    fn add_edges_from(&self, other: &dyn Graph<K, T, D>) -> Result<(), GraphError> {
        (**self).add_edges_from(other)
    }

    fn edge(&self, source: &K, target: &K) -> Result<Edge<T, D>, GraphError> {
        (**self).edge(source, target)
    }

    fn edges(&self) -> Result<Vec<Edge<K, D>>, GraphError> {
        (**self).edges()
    }

    fn edit_edge(
        &self,
        source: &K,
        target: &K,
        options: EdgeOptions<D>,
    ) -> Result<(), GraphError> {
        (**self).edit_edge(source, target, options)
    }

    fn remove_edge(&self, source: &K, target: &K) -> Result<(), GraphError> {
        (**self).remove_edge(source, target)
    }

    fn adjacency_map(&self) -> Result<AdjacencyMap<K, D>, GraphError> {
        (**self).adjacency_map()
    }

    fn predecessor_map(&self) -> Result<AdjacencyMap<K, D>, GraphError> {
        (**self).predecessor_map()
    }

    fn clone_graph(&self) -> Result<Box<dyn Graph<K, T, D>>, GraphError> {
        (**self).clone_graph()
    }

    fn new_like(&self) -> Box<dyn Graph<K, T, D>> {
        (**self).new_like()
    }

    fn order(&self) -> Result<usize, GraphError> {
        (**self).order()
    }

    fn size(&self) -> Result<usize, GraphError> {
        (**self).size()
    }
}

/// Adjacency skeleton with an empty neighbor map for every vertex.
pub(crate) fn empty_adjacency<K: Key, D: Value>(vertices: Vec<K>) -> AdjacencyMap<K, D> {
    let mut map = AdjacencyMap::with_capacity_and_hasher(vertices.len(), Default::default());
    for vertex in vertices {
        map.insert(vertex, FastIndexMap::default());
    }
    map
}

pub(crate) fn insert_vertex<K: Key, T: Value, D: Value>(
    store: &dyn Store<K, T, D>,
    hash: HashFn<K, T>,
    value: T,
    options: VertexOptions,
) -> Result<K, GraphError> {
    let key = hash(&value);
    let mut properties = VertexProperties::default();
    options.apply(&mut properties);
    store
        .add_vertex(key.clone(), value, properties)
        .inspect_err(|_| debug!(?key, "vertex insert rejected"))?;
    Ok(key)
}

/// Fails with [`GraphError::VertexNotFound`] unless both endpoints are stored.
pub(crate) fn require_endpoints<K: Key, T: Value, D: Value>(
    store: &dyn Store<K, T, D>,
    source: &K,
    target: &K,
) -> Result<(), GraphError> {
    for key in [source, target] {
        store
            .vertex(key)
            .inspect_err(|_| debug!(?key, "edge endpoint missing"))?;
    }
    Ok(())
}

/// Replaces the endpoint keys of a stored edge with the vertex values.
pub(crate) fn resolve_edge<K: Key, T: Value, D: Value>(
    store: &dyn Store<K, T, D>,
    edge: Edge<K, D>,
) -> Result<Edge<T, D>, GraphError> {
    let (source, _) = store.vertex(&edge.source)?;
    let (target, _) = store.vertex(&edge.target)?;
    Ok(Edge {
        source,
        target,
        properties: edge.properties,
    })
}

#[derive(Clone, Copy)]
pub(crate) enum Orientation {
    Outgoing,
    Incoming,
}

pub(crate) fn build_adjacency<K: Key, T: Value, D: Value>(
    store: &dyn Store<K, T, D>,
    orientation: Orientation,
) -> Result<AdjacencyMap<K, D>, GraphError> {
    let vertices = store.list_vertices()?;
    let edges = store.list_edges()?;
    let mut map = empty_adjacency(vertices);
    for edge in edges {
        let (from, to) = match orientation {
            Orientation::Outgoing => (edge.source.clone(), edge.target.clone()),
            Orientation::Incoming => (edge.target.clone(), edge.source.clone()),
        };
        map.entry(from).or_default().insert(to, edge);
    }
    Ok(map)
}

pub(crate) fn copy_vertices<K, T, D, G>(
    target: &G,
    other: &dyn Graph<K, T, D>,
) -> Result<(), GraphError>
where
    K: Key,
    T: Value,
    D: Value,
    G: Graph<K, T, D> + ?Sized,
{
    for key in other.adjacency_map()?.keys() {
        let (value, properties) = other.vertex_with_properties(key)?;
        target.add_vertex_with(value, VertexOptions::from_properties(&properties))?;
    }
    Ok(())
}

pub(crate) fn copy_edges<K, T, D, G>(target: &G, other: &dyn Graph<K, T, D>) -> Result<(), GraphError>
where
    K: Key,
    T: Value,
    D: Value,
    G: Graph<K, T, D> + ?Sized,
{
    for edge in other.edges()? {
        let options = EdgeOptions::from_properties(&edge.properties);
        target.add_edge_with(edge.source, edge.target, options)?;
    }
    Ok(())
}
