use graphkit::{Graph, GraphConfig, GraphError, dfs, int_hash, new_graph};

fn build_graph(
    cfg: &GraphConfig,
    vertices: usize,
    edges: &[(i64, i64)],
) -> Box<dyn Graph<i64, i64>> {
    let graph: Box<dyn Graph<i64, i64>> = new_graph(int_hash, cfg);
    for value in 1..=vertices as i64 {
        graph.add_vertex(value).expect("vertex");
    }
    for &(source, target) in edges {
        graph.add_edge(source, target).expect("edge");
    }
    graph
}

fn collect_dfs(graph: &dyn Graph<i64, i64>, start: i64) -> Vec<i64> {
    let mut visited = Vec::new();
    dfs(graph, &start, |vertex| {
        visited.push(*vertex);
        false
    })
    .expect("dfs");
    visited
}

#[test]
fn test_dfs_visits_last_pushed_neighbor_first() {
    let graph = build_graph(&GraphConfig::directed(), 3, &[(1, 2), (1, 3)]);
    assert_eq!(collect_dfs(graph.as_ref(), 1), vec![1, 3, 2]);
}

#[test]
fn test_dfs_goes_deep_before_wide() {
    let edges = [(1, 2), (1, 3), (3, 4), (4, 5)];
    let graph = build_graph(&GraphConfig::directed(), 5, &edges);
    assert_eq!(collect_dfs(graph.as_ref(), 1), vec![1, 3, 4, 5, 2]);
}

#[test]
fn test_dfs_tolerates_duplicate_stack_entries() {
    // 3 is pushed by both 1 and 2 but visited once
    let edges = [(1, 2), (1, 3), (2, 3), (3, 1)];
    let graph = build_graph(&GraphConfig::directed(), 3, &edges);
    let visited = collect_dfs(graph.as_ref(), 1);
    assert_eq!(visited, vec![1, 3, 2]);
}

#[test]
fn test_dfs_stops_when_visitor_returns_true() {
    let graph = build_graph(&GraphConfig::directed(), 4, &[(1, 2), (2, 3), (3, 4)]);
    let mut visited = Vec::new();
    dfs(&graph, &1, |vertex| {
        visited.push(*vertex);
        *vertex == 3
    })
    .expect("dfs");
    assert_eq!(visited, vec![1, 2, 3]);
}

#[test]
fn test_dfs_missing_start_fails() {
    let graph = build_graph(&GraphConfig::undirected(), 2, &[(1, 2)]);
    let mut called = false;
    let err = dfs(&graph, &7, |_| {
        called = true;
        false
    })
    .expect_err("missing start");
    assert!(matches!(err, GraphError::VertexNotFound(_)));
    assert!(!called);
}

#[test]
fn test_dfs_isolated_vertex_visits_only_itself() {
    let graph = build_graph(&GraphConfig::undirected(), 3, &[(1, 2)]);
    assert_eq!(collect_dfs(graph.as_ref(), 3), vec![3]);
}

#[test]
fn test_dfs_undirected_connected_graph_reaches_all() {
    let edges = [(1, 2), (1, 3), (2, 4), (4, 5), (5, 1)];
    let graph = build_graph(&GraphConfig::undirected(), 5, &edges);
    for start in 1..=5 {
        let mut visited = collect_dfs(graph.as_ref(), start);
        assert_eq!(visited.len(), 5);
        visited.sort();
        assert_eq!(visited, vec![1, 2, 3, 4, 5]);
    }
}

#[test]
fn test_dfs_handles_long_chain_without_recursion() {
    let count = 50_000;
    let edges: Vec<(i64, i64)> = (1..count as i64).map(|idx| (idx, idx + 1)).collect();
    let graph = build_graph(&GraphConfig::directed(), count, &edges);
    assert_eq!(collect_dfs(graph.as_ref(), 1).len(), count);
}
