//! In-memory directed and undirected graphs with weighted, attributed vertices and edges.
//!
//! graphkit keys every vertex by a caller-supplied hash of its value, stores vertices
//! and edges behind a single reader/writer lock, and offers iterative breadth-first
//! and depth-first traversals over adjacency snapshots.
//!
//! # Quick Start
//!
//! ```rust
//! use graphkit::{EdgeOptions, GraphConfig, Graph, bfs, int_hash, new_graph};
//!
//! let graph: Box<dyn Graph<i64, i64>> = new_graph(int_hash, &GraphConfig::directed());
//! for value in 1..=3 {
//!     graph.add_vertex(value)?;
//! }
//! graph.add_edge_with(1, 2, EdgeOptions::new().weight(5))?;
//! graph.add_edge(2, 3)?;
//!
//! let mut order = Vec::new();
//! bfs(&graph, &1, |vertex| {
//!     order.push(*vertex);
//!     false
//! })?;
//! assert_eq!(order, vec![1, 2, 3]);
//! # Ok::<(), graphkit::GraphError>(())
//! ```
//!
//! # Public API Organization
//!
//! ## Core Types
//! - [`Graph`] - vertex/edge API shared by both variants
//! - [`Directed`], [`Undirected`] - the two variants
//! - [`Store`], [`MemoryStore`] - lock-guarded storage underneath a graph
//! - [`VertexProperties`], [`EdgeProperties`], [`Edge`] - stored records
//!
//! ## Configuration
//! - [`Traits`], [`GraphConfig`] - fixed at construction
//! - [`new_graph()`] - picks the variant
//! - [`VertexOptions`], [`EdgeOptions`] - per-element settings
//!
//! ## Traversal
//! - [`bfs()`], [`bfs_with_depth()`], [`dfs()`]
//!
//! ## Utilities
//! - [`GraphError`] - error kinds
//! - [`dot`] - Graphviz export
//! - [`scenarios`] - worked examples composed from traversals

pub mod bench_utils;
pub mod bfs;
pub mod client;
pub mod config;
pub mod dfs;
pub mod dot;
pub mod errors;
pub mod graph;
pub mod scenarios;
pub mod store;

pub use bfs::{bfs, bfs_with_depth};
pub use config::{GraphConfig, HashFn, Traits, int_hash, new_graph, string_hash};
pub use dfs::dfs;
pub use dot::{DotOptions, to_dot_string, write_dot};
pub use errors::GraphError;
pub use graph::{
    AdjacencyMap, Directed, Edge, EdgeOptions, EdgeProperties, Graph, Key, Undirected, Value,
    VertexOptions, VertexProperties,
};
pub use store::{MemoryStore, Store};
