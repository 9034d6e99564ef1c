//! Deterministic graph datasets for benches and tests.

use ahash::AHashSet;
use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::{
    config::{GraphConfig, int_hash, new_graph},
    errors::GraphError,
    graph::{EdgeOptions, Graph},
};

const MAX_WEIGHT: i64 = 100;

#[derive(Clone, Debug)]
pub struct GraphDataset {
    pub vertices: Vec<i64>,
    /// `(source, target, weight)`; no pair appears twice in either orientation.
    pub edges: Vec<(i64, i64, i64)>,
}

impl GraphDataset {
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Vertex with the most incident edges; lowest key on ties.
    pub fn hub(&self) -> i64 {
        let mut degrees = vec![0usize; self.vertices.len()];
        for &(source, target, _) in &self.edges {
            degrees[source as usize] += 1;
            degrees[target as usize] += 1;
        }
        let mut best = (0usize, 0usize);
        for (idx, degree) in degrees.into_iter().enumerate() {
            if degree > best.0 {
                best = (degree, idx);
            }
        }
        best.1 as i64
    }

    /// Loads the dataset into a new graph built from `cfg`.
    pub fn materialize(&self, cfg: &GraphConfig) -> Result<Box<dyn Graph<i64, i64>>, GraphError> {
        let cfg = cfg.clone().with_vertex_capacity(self.vertices.len());
        let graph: Box<dyn Graph<i64, i64>> = new_graph(int_hash, &cfg);
        for &vertex in &self.vertices {
            graph.add_vertex(vertex)?;
        }
        for &(source, target, weight) in &self.edges {
            graph.add_edge_with(source, target, EdgeOptions::new().weight(weight))?;
        }
        Ok(graph)
    }
}

#[derive(Clone, Debug)]
pub enum GraphShape {
    Line,
    Star,
    Grid2D { width: usize, height: usize },
    RandomErdosRenyi { edges: usize },
}

/// Builds `vertex_count` vertices keyed `0..vertex_count` wired as `shape`.
///
/// The same `seed` always yields the same edges and weights.
pub fn generate_graph(shape: GraphShape, vertex_count: usize, seed: u64) -> GraphDataset {
    assert!(vertex_count > 1, "vertex_count must exceed 1");
    let n = vertex_count as i64;
    let pairs: Vec<(i64, i64)> = match shape {
        GraphShape::Line => (0..n - 1).map(|idx| (idx, idx + 1)).collect(),
        GraphShape::Star => (1..n).map(|leaf| (0, leaf)).collect(),
        GraphShape::Grid2D { width, height } => grid_pairs(width, height, vertex_count),
        GraphShape::RandomErdosRenyi { edges } => random_pairs(vertex_count, edges, seed),
    };
    let mut rng = StdRng::seed_from_u64(seed ^ 0x5EED);
    let edges = pairs
        .into_iter()
        .map(|(source, target)| (source, target, rng.gen_range(1..=MAX_WEIGHT)))
        .collect();
    GraphDataset {
        vertices: (0..n).collect(),
        edges,
    }
}

fn grid_pairs(width: usize, height: usize, vertex_count: usize) -> Vec<(i64, i64)> {
    assert_eq!(
        width * height,
        vertex_count,
        "grid dimensions must match vertex count"
    );
    let index = |x: usize, y: usize| (y * width + x) as i64;
    let mut pairs = Vec::with_capacity(vertex_count * 2);
    for y in 0..height {
        for x in 0..width {
            if x + 1 < width {
                pairs.push((index(x, y), index(x + 1, y)));
            }
            if y + 1 < height {
                pairs.push((index(x, y), index(x, y + 1)));
            }
        }
    }
    pairs
}

fn random_pairs(vertex_count: usize, edge_count: usize, seed: u64) -> Vec<(i64, i64)> {
    let possible = vertex_count * (vertex_count - 1) / 2;
    assert!(edge_count <= possible, "edge_count exceeds possible pairs");
    let mut rng = StdRng::seed_from_u64(seed);
    let mut seen = AHashSet::with_capacity(edge_count);
    let mut pairs = Vec::with_capacity(edge_count);
    while pairs.len() < edge_count {
        let a = rng.gen_range(0..vertex_count as i64);
        let b = rng.gen_range(0..vertex_count as i64);
        if a == b || !seen.insert((a.min(b), a.max(b))) {
            continue;
        }
        pairs.push((a, b));
    }
    pairs
}
