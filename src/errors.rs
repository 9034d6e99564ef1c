use std::fmt::Debug;

use thiserror::Error;

/// Error type for graph and store operations.
///
/// Every variant except [`GraphError::Io`] is recoverable: the failed call left
/// the graph untouched, so callers may fix the precondition and retry.
#[derive(Debug, Error)]
pub enum GraphError {
    #[error("vertex already exists: {0}")]
    VertexExists(String),
    #[error("vertex not found: {0}")]
    VertexNotFound(String),
    #[error("edge already exists: {0}")]
    EdgeExists(String),
    #[error("edge not found: {0}")]
    EdgeNotFound(String),
    #[error("vertex still has edges: {0}")]
    VertexHasEdges(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl GraphError {
    pub fn vertex_exists<K: Debug>(key: &K) -> Self {
        GraphError::VertexExists(format!("{key:?}"))
    }

    pub fn vertex_not_found<K: Debug>(key: &K) -> Self {
        GraphError::VertexNotFound(format!("{key:?}"))
    }

    pub fn edge_exists<K: Debug>(source: &K, target: &K) -> Self {
        GraphError::EdgeExists(format!("{source:?} -> {target:?}"))
    }

    pub fn edge_not_found<K: Debug>(source: &K, target: &K) -> Self {
        GraphError::EdgeNotFound(format!("{source:?} -> {target:?}"))
    }

    pub fn vertex_has_edges<K: Debug>(key: &K) -> Self {
        GraphError::VertexHasEdges(format!("{key:?}"))
    }

    pub fn is_edge_not_found(&self) -> bool {
        matches!(self, GraphError::EdgeNotFound(_))
    }
}
