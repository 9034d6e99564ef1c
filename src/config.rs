//! Graph construction settings.
//!
//! [`Traits`] are fixed for the lifetime of a graph. [`GraphConfig`] bundles them
//! with store sizing hints and is consumed by [`new_graph`], which picks the
//! directed or undirected variant.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::{
    graph::{Directed, Graph, Key, Undirected, Value},
    store::MemoryStore,
};

/// Caller-supplied function deriving a unique key from a vertex value.
pub type HashFn<K, T> = fn(&T) -> K;

#[allow(clippy::ptr_arg)]
pub fn string_hash(value: &String) -> String {
    value.clone()
}

pub fn int_hash(value: &i64) -> i64 {
    *value
}

/// Structural flags of a graph.
///
/// # Default Behavior
///
/// All flags are off: an unweighted, unrooted, undirected graph.
/// `is_weighted` and `is_rooted` are informational and never gate behavior.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Traits {
    pub is_directed: bool,
    pub is_weighted: bool,
    pub is_rooted: bool,
}

impl Traits {
    pub fn directed(mut self) -> Self {
        self.is_directed = true;
        self
    }

    pub fn weighted(mut self) -> Self {
        self.is_weighted = true;
        self
    }

    pub fn rooted(mut self) -> Self {
        self.is_rooted = true;
        self
    }
}

/// Configuration consumed by [`new_graph`].
///
/// ```rust
/// use graphkit::{Graph, GraphConfig, int_hash, new_graph};
///
/// let graph = new_graph::<i64, i64, ()>(int_hash, &GraphConfig::directed().weighted());
/// assert!(graph.traits().is_directed);
/// assert!(graph.traits().is_weighted);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GraphConfig {
    pub traits: Traits,

    /// Optional pre-allocation for vertices
    ///
    /// **Default:** `None`
    ///
    /// A sizing hint for the store, not a limit. The store grows past it as needed.
    pub vertex_capacity: Option<usize>,
}

impl GraphConfig {
    pub fn new(traits: Traits) -> Self {
        Self {
            traits,
            vertex_capacity: None,
        }
    }

    pub fn directed() -> Self {
        Self::new(Traits::default().directed())
    }

    pub fn undirected() -> Self {
        Self::new(Traits::default())
    }

    pub fn weighted(mut self) -> Self {
        self.traits = self.traits.weighted();
        self
    }

    pub fn rooted(mut self) -> Self {
        self.traits = self.traits.rooted();
        self
    }

    pub fn with_vertex_capacity(mut self, capacity: usize) -> Self {
        self.vertex_capacity = Some(capacity);
        self
    }
}

/// Creates an empty graph backed by a fresh [`MemoryStore`].
pub fn new_graph<K: Key, T: Value, D: Value>(
    hash: HashFn<K, T>,
    cfg: &GraphConfig,
) -> Box<dyn Graph<K, T, D>> {
    let store = Arc::new(MemoryStore::<K, T, D>::with_capacity(
        cfg.vertex_capacity.unwrap_or(0),
    ));
    if cfg.traits.is_directed {
        Box::new(Directed::with_store(hash, cfg.traits, store))
    } else {
        Box::new(Undirected::with_store(hash, cfg.traits, store))
    }
}
