use std::time::Duration;

use criterion::{Criterion, criterion_group, criterion_main};
use graphkit::{
    Graph, GraphConfig,
    bench_utils::{GraphShape, generate_graph},
    bfs, bfs_with_depth, dfs,
};

const LINE_SEED: u64 = 0xDD21;
const ER_SEED: u64 = 0xEE45;
const STAR_SEED: u64 = 0xFF89;
const SAMPLE_SIZE: usize = 20;
const WARM_UP: Duration = Duration::from_millis(300);
const MEASURE: Duration = Duration::from_millis(500);
const VISIT_LIMIT: usize = 1_000;

struct PreparedGraph {
    graph: Box<dyn Graph<i64, i64>>,
    start: i64,
    label: &'static str,
}

fn bench_scale() -> usize {
    #[cfg(feature = "bench-ci")]
    {
        5_000
    }
    #[cfg(not(feature = "bench-ci"))]
    {
        50_000
    }
}

fn prepared_graphs() -> Vec<PreparedGraph> {
    let vertices = bench_scale();
    let cfg = GraphConfig::undirected();
    let shapes = [
        ("line", GraphShape::Line, LINE_SEED),
        (
            "er",
            GraphShape::RandomErdosRenyi {
                edges: vertices.saturating_mul(5),
            },
            ER_SEED,
        ),
        ("star", GraphShape::Star, STAR_SEED),
    ];
    shapes
        .into_iter()
        .map(|(label, shape, seed)| {
            let dataset = generate_graph(shape, vertices, seed);
            PreparedGraph {
                start: dataset.hub(),
                graph: dataset.materialize(&cfg).expect("graph"),
                label,
            }
        })
        .collect()
}

fn bench_adjacency(c: &mut Criterion) {
    let graphs = prepared_graphs();
    let mut group = c.benchmark_group("adjacency_map");
    group.sample_size(SAMPLE_SIZE);
    group.warm_up_time(WARM_UP);
    group.measurement_time(MEASURE);
    for prepared in &graphs {
        group.bench_function(prepared.label, |b| {
            b.iter(|| prepared.graph.adjacency_map().expect("adjacency"));
        });
    }
    group.finish();
}

fn bench_bfs(c: &mut Criterion) {
    let graphs = prepared_graphs();
    let mut group = c.benchmark_group("bfs");
    group.sample_size(SAMPLE_SIZE);
    group.warm_up_time(WARM_UP);
    group.measurement_time(MEASURE);
    for prepared in &graphs {
        group.bench_function(prepared.label, |b| {
            b.iter(|| bfs(&prepared.graph, &prepared.start, |_| false).expect("bfs"));
        });
    }
    group.finish();
}

fn bench_bfs_bounded(c: &mut Criterion) {
    let graphs = prepared_graphs();
    let mut group = c.benchmark_group("bfs_bounded");
    group.sample_size(SAMPLE_SIZE);
    group.warm_up_time(WARM_UP);
    group.measurement_time(MEASURE);
    for prepared in &graphs {
        group.bench_function(prepared.label, |b| {
            b.iter(|| {
                bfs_with_depth(&prepared.graph, &prepared.start, |_, depth| {
                    depth >= VISIT_LIMIT
                })
                .expect("bfs")
            });
        });
    }
    group.finish();
}

fn bench_dfs(c: &mut Criterion) {
    let graphs = prepared_graphs();
    let mut group = c.benchmark_group("dfs");
    group.sample_size(SAMPLE_SIZE);
    group.warm_up_time(WARM_UP);
    group.measurement_time(MEASURE);
    for prepared in &graphs {
        group.bench_function(prepared.label, |b| {
            b.iter(|| dfs(&prepared.graph, &prepared.start, |_| false).expect("dfs"));
        });
    }
    group.finish();
}

criterion_group!(
    name = traversal_benches;
    config = Criterion::default();
    targets = bench_adjacency, bench_bfs, bench_bfs_bounded, bench_dfs
);
criterion_main!(traversal_benches);
