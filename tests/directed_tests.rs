use graphkit::{
    EdgeOptions, Graph, GraphConfig, GraphError, VertexOptions, int_hash, new_graph,
};

fn directed() -> Box<dyn Graph<i64, i64, &'static str>> {
    let graph: Box<dyn Graph<i64, i64, &'static str>> =
        new_graph(int_hash, &GraphConfig::directed());
    for value in 1..=4 {
        graph.add_vertex(value).expect("vertex");
    }
    graph
}

#[test]
fn test_add_vertex_returns_hashed_key() {
    let graph: Box<dyn Graph<String, String>> =
        new_graph(graphkit::string_hash, &GraphConfig::directed());
    let key = graph.add_vertex("alpha".to_string()).expect("vertex");
    assert_eq!(key, "alpha");
    assert_eq!(graph.vertex(&key).expect("value"), "alpha");
}

#[test]
fn test_duplicate_vertex_leaves_order_unchanged() {
    let graph = directed();
    let err = graph.add_vertex(1).expect_err("duplicate");
    assert!(matches!(err, GraphError::VertexExists(_)));
    assert_eq!(graph.order().expect("order"), 4);
}

#[test]
fn test_vertex_options_set_properties() {
    let graph = directed();
    graph
        .add_vertex_with(
            10,
            VertexOptions::new().weight(3).attribute("shape", "box"),
        )
        .expect("vertex");
    let (value, properties) = graph.vertex_with_properties(&10).expect("vertex");
    assert_eq!(value, 10);
    assert_eq!(properties.weight, 3);
    assert_eq!(properties.attributes["shape"], "box");
}

#[test]
fn test_add_edge_requires_both_endpoints() {
    let graph = directed();
    assert!(matches!(
        graph.add_edge(1, 9),
        Err(GraphError::VertexNotFound(_))
    ));
    assert!(matches!(
        graph.add_edge(9, 1),
        Err(GraphError::VertexNotFound(_))
    ));
    assert_eq!(graph.size().expect("size"), 0);
}

#[test]
fn test_duplicate_edge_rejected_but_reverse_allowed() {
    let graph = directed();
    graph.add_edge(1, 2).expect("edge");
    assert!(matches!(
        graph.add_edge(1, 2),
        Err(GraphError::EdgeExists(_))
    ));
    graph.add_edge(2, 1).expect("reverse edge is distinct");
    assert_eq!(graph.size().expect("size"), 2);
}

#[test]
fn test_edge_resolves_vertex_values_and_properties() {
    let graph = directed();
    graph
        .add_edge_with(
            1,
            2,
            EdgeOptions::new()
                .weight(7)
                .attribute("label", "calls")
                .data("payload"),
        )
        .expect("edge");
    let edge = graph.edge(&1, &2).expect("edge");
    assert_eq!((edge.source, edge.target), (1, 2));
    assert_eq!(edge.properties.weight, 7);
    assert_eq!(edge.properties.attributes["label"], "calls");
    assert_eq!(edge.properties.data, Some("payload"));
    assert!(matches!(
        graph.edge(&2, &1),
        Err(GraphError::EdgeNotFound(_))
    ));
}

#[test]
fn test_default_edge_properties() {
    let graph = directed();
    graph.add_edge(3, 4).expect("edge");
    let edge = graph.edge(&3, &4).expect("edge");
    assert_eq!(edge.properties.weight, 0);
    assert!(edge.properties.attributes.is_empty());
    assert!(edge.properties.data.is_none());
}

#[test]
fn test_edit_edge_layers_changes() {
    let graph = directed();
    graph
        .add_edge_with(1, 2, EdgeOptions::new().weight(1).attribute("a", "x"))
        .expect("edge");
    graph
        .edit_edge(&1, &2, EdgeOptions::new().attribute("b", "y"))
        .expect("edit");
    let edge = graph.edge(&1, &2).expect("edge");
    assert_eq!(edge.properties.weight, 1);
    assert_eq!(edge.properties.attributes.len(), 2);
    assert!(matches!(
        graph.edit_edge(&2, &1, EdgeOptions::new().weight(3)),
        Err(GraphError::EdgeNotFound(_))
    ));
}

#[test]
fn test_remove_edge_then_vertex() {
    let graph = directed();
    graph.add_edge(1, 2).expect("edge");
    assert!(matches!(
        graph.remove_vertex(&2),
        Err(GraphError::VertexHasEdges(_))
    ));
    graph.remove_edge(&1, &2).expect("remove edge");
    assert!(matches!(
        graph.remove_edge(&1, &2),
        Err(GraphError::EdgeNotFound(_))
    ));
    graph.remove_vertex(&2).expect("remove vertex");
    assert_eq!(graph.order().expect("order"), 3);
}

#[test]
fn test_adjacency_map_covers_isolated_vertices() {
    let graph = directed();
    graph.add_edge(1, 2).expect("edge");
    graph.add_edge(1, 3).expect("edge");
    let adjacency = graph.adjacency_map().expect("adjacency");
    assert_eq!(adjacency.len(), 4);
    assert_eq!(adjacency[&1].keys().copied().collect::<Vec<_>>(), vec![2, 3]);
    assert!(adjacency[&4].is_empty());
    assert!(adjacency[&2].is_empty());
}

#[test]
fn test_predecessor_map_inverts_edges() {
    let graph = directed();
    graph.add_edge(1, 3).expect("edge");
    graph.add_edge(2, 3).expect("edge");
    let predecessors = graph.predecessor_map().expect("predecessors");
    assert_eq!(predecessors.len(), 4);
    assert_eq!(
        predecessors[&3].keys().copied().collect::<Vec<_>>(),
        vec![1, 2]
    );
    assert!(predecessors[&1].is_empty());
    let edge = &predecessors[&3][&1];
    assert_eq!((edge.source, edge.target), (1, 3));
}

#[test]
fn test_edges_lists_each_directed_edge() {
    let graph = directed();
    graph.add_edge(1, 2).expect("edge");
    graph.add_edge(2, 1).expect("edge");
    assert_eq!(graph.edges().expect("edges").len(), 2);
}

#[test]
fn test_new_like_is_empty_with_same_traits() {
    let graph: Box<dyn Graph<i64, i64>> =
        new_graph(int_hash, &GraphConfig::directed().weighted());
    graph.add_vertex(1).expect("vertex");
    let like = graph.new_like();
    assert_eq!(like.traits(), graph.traits());
    assert_eq!(like.order().expect("order"), 0);
    assert_eq!(like.add_vertex(5).expect("vertex"), 5);
}
