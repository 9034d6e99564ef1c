use std::collections::BTreeMap;

use ahash::RandomState;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Insertion-ordered map used for every keyed collection the graph hands out.
pub type FastIndexMap<K, V> = IndexMap<K, V, RandomState>;

/// Key -> (neighbor key -> edge). Holds an entry for every vertex, isolated ones included.
pub type AdjacencyMap<K, D> = FastIndexMap<K, FastIndexMap<K, Edge<K, D>>>;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VertexProperties {
    pub weight: i64,
    pub attributes: BTreeMap<String, String>,
}

/// Edge weight, attributes and an opaque caller payload the graph never inspects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeProperties<D = ()> {
    pub weight: i64,
    pub attributes: BTreeMap<String, String>,
    pub data: Option<D>,
}

impl<D> Default for EdgeProperties<D> {
    fn default() -> Self {
        Self {
            weight: 0,
            attributes: BTreeMap::new(),
            data: None,
        }
    }
}

/// Ordered pair of endpoints plus properties.
///
/// Store-level edges carry vertex keys (`N = K`); [`crate::Graph::edge`] resolves
/// the endpoints to vertex values (`N = T`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge<N, D = ()> {
    pub source: N,
    pub target: N,
    pub properties: EdgeProperties<D>,
}

impl<N: Clone, D: Clone> Edge<N, D> {
    pub fn new(source: N, target: N, properties: EdgeProperties<D>) -> Self {
        Self {
            source,
            target,
            properties,
        }
    }

    pub(crate) fn reversed(&self) -> Self {
        Self {
            source: self.target.clone(),
            target: self.source.clone(),
            properties: self.properties.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VertexOptions {
    pub weight: Option<i64>,
    pub attributes: BTreeMap<String, String>,
}

impl VertexOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn weight(mut self, weight: i64) -> Self {
        self.weight = Some(weight);
        self
    }

    pub fn attribute<A: Into<String>, B: Into<String>>(mut self, key: A, value: B) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// Options that reproduce `properties` exactly when applied to defaults.
    pub fn from_properties(properties: &VertexProperties) -> Self {
        Self {
            weight: Some(properties.weight),
            attributes: properties.attributes.clone(),
        }
    }

    pub(crate) fn apply(self, properties: &mut VertexProperties) {
        if let Some(weight) = self.weight {
            properties.weight = weight;
        }
        properties.attributes.extend(self.attributes);
    }
}

/// Settings for a new edge, or changes layered over an existing one.
///
/// Unset fields leave the target untouched; attributes merge key by key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeOptions<D = ()> {
    pub weight: Option<i64>,
    pub attributes: BTreeMap<String, String>,
    pub data: Option<D>,
}

impl<D> Default for EdgeOptions<D> {
    fn default() -> Self {
        Self {
            weight: None,
            attributes: BTreeMap::new(),
            data: None,
        }
    }
}

impl<D: Clone> EdgeOptions<D> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn weight(mut self, weight: i64) -> Self {
        self.weight = Some(weight);
        self
    }

    pub fn attribute<A: Into<String>, B: Into<String>>(mut self, key: A, value: B) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    pub fn data(mut self, data: D) -> Self {
        self.data = Some(data);
        self
    }

    pub fn from_properties(properties: &EdgeProperties<D>) -> Self {
        Self {
            weight: Some(properties.weight),
            attributes: properties.attributes.clone(),
            data: properties.data.clone(),
        }
    }

    pub(crate) fn apply(self, properties: &mut EdgeProperties<D>) {
        if let Some(weight) = self.weight {
            properties.weight = weight;
        }
        properties.attributes.extend(self.attributes);
        if self.data.is_some() {
            properties.data = self.data;
        }
    }
}
