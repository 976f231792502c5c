//! Graph store tests: mutation, lookup and structural queries.

use graph_toolkit::graph::{Graph, GraphBuilder, WeightedGraph};
use graph_toolkit::types::{Edge, DEFAULT_WEIGHT};

// ==================== Helpers ====================

fn s(v: &str) -> String {
    v.to_string()
}

// ==================== Vertex Tests ====================

#[test]
fn test_add_vertex_is_idempotent() {
    let mut graph: Graph<String> = Graph::directed();
    graph.add_vertex(s("A"));
    graph.add_vertex(s("A"));
    graph.add_vertex(s("B"));

    assert_eq!(graph.vertex_count(), 2);
    assert_eq!(graph.edge_count(), 0);
    assert!(graph.contains_vertex(&s("A")));
    assert!(!graph.contains_vertex(&s("Z")));
}

#[test]
fn test_vertices_iterate_ascending() {
    let mut graph: Graph<String> = Graph::undirected();
    graph.add_edge(s("D"), s("A"));
    graph.add_edge(s("C"), s("B"));

    let vertices: Vec<&String> = graph.vertices().collect();
    assert_eq!(vertices, vec!["A", "B", "C", "D"]);
}

#[test]
fn test_integer_vertices() {
    let mut graph: Graph<u32> = Graph::directed();
    graph.add_edge(3, 1);
    graph.add_edge(1, 2);

    assert_eq!(graph.vertices().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
    assert!(graph.edge_exists(&1, &2));
}

// ==================== Edge Tests ====================

#[test]
fn test_add_edge_creates_endpoints() {
    let mut graph: Graph<String> = Graph::directed();
    graph.add_edge(s("A"), s("B"));

    assert_eq!(graph.vertex_count(), 2);
    assert_eq!(graph.edge_count(), 1);
    assert!(graph.edge_exists(&s("A"), &s("B")));
    assert!(!graph.edge_exists(&s("B"), &s("A")));
}

#[test]
fn test_default_weight() {
    let mut graph: Graph<String> = Graph::directed();
    graph.add_edge(s("A"), s("B"));
    assert_eq!(graph.neighbors(&s("A")), &[Edge::new(s("B"), DEFAULT_WEIGHT)]);
}

#[test]
fn test_undirected_edge_stored_both_ways() {
    let mut graph: Graph<String> = Graph::undirected();
    graph.add_weighted_edge(s("A"), s("B"), 2.5);

    assert!(graph.edge_exists(&s("A"), &s("B")));
    assert!(graph.edge_exists(&s("B"), &s("A")));
    assert_eq!(graph.neighbors(&s("B"))[0].weight, 2.5);
    assert_eq!(graph.edge_count(), 1);
}

#[test]
fn test_adjacency_keeps_insertion_order_and_duplicates() {
    let mut graph: Graph<String> = Graph::directed();
    graph.add_edge(s("A"), s("C"));
    graph.add_edge(s("A"), s("B"));
    graph.add_weighted_edge(s("A"), s("C"), 4.0);

    let targets: Vec<&str> = graph
        .neighbors(&s("A"))
        .iter()
        .map(|e| e.target.as_str())
        .collect();
    assert_eq!(targets, vec!["C", "B", "C"]);
    assert_eq!(graph.edge_count(), 3);
}

#[test]
fn test_neighbors_of_missing_vertex_is_empty() {
    let graph: Graph<String> = Graph::directed();
    assert!(graph.neighbors(&s("nope")).is_empty());
    assert_eq!(graph.out_degree(&s("nope")), 0);
    assert_eq!(graph.in_degree(&s("nope")), 0);
}

#[test]
fn test_remove_edge_directed() {
    let mut graph: Graph<String> = Graph::directed();
    graph.add_edge(s("A"), s("B"));
    graph.add_edge(s("A"), s("B"));
    graph.add_edge(s("B"), s("A"));

    assert!(graph.remove_edge(&s("A"), &s("B")));
    assert!(!graph.edge_exists(&s("A"), &s("B")));
    // The opposite direction is a separate edge.
    assert!(graph.edge_exists(&s("B"), &s("A")));
    assert_eq!(graph.edge_count(), 1);
    // Vertices survive edge removal.
    assert_eq!(graph.vertex_count(), 2);
}

#[test]
fn test_remove_edge_undirected_removes_reciprocal() {
    let mut graph: Graph<String> = Graph::undirected();
    graph.add_edge(s("A"), s("B"));
    graph.add_edge(s("B"), s("C"));

    assert!(graph.remove_edge(&s("B"), &s("A")));
    assert!(!graph.edge_exists(&s("A"), &s("B")));
    assert!(!graph.edge_exists(&s("B"), &s("A")));
    assert_eq!(graph.edge_count(), 1);
}

#[test]
fn test_remove_missing_edge() {
    let mut graph: Graph<String> = Graph::directed();
    graph.add_edge(s("A"), s("B"));

    assert!(!graph.remove_edge(&s("A"), &s("C")));
    assert!(!graph.remove_edge(&s("X"), &s("B")));
    assert_eq!(graph.edge_count(), 1);
}

// ==================== Degree Tests ====================

#[test]
fn test_degrees_directed() {
    let mut graph: Graph<String> = Graph::directed();
    graph.add_edge(s("A"), s("B"));
    graph.add_edge(s("C"), s("B"));
    graph.add_edge(s("B"), s("D"));

    assert_eq!(graph.out_degree(&s("B")), 1);
    assert_eq!(graph.in_degree(&s("B")), 2);
    assert_eq!(graph.degree(&s("B")), 3);
    assert_eq!(graph.degree(&s("A")), 1);
}

#[test]
fn test_degrees_undirected() {
    let graph: Graph<String> = GraphBuilder::undirected()
        .edge("A", "B")
        .edge("A", "C")
        .edge("A", "D")
        .build();

    assert_eq!(graph.degree(&s("A")), 3);
    assert_eq!(graph.out_degree(&s("A")), 3);
    assert_eq!(graph.degree(&s("B")), 1);
    assert_eq!(graph.edge_count(), 3);
}

// ==================== Builder Tests ====================

#[test]
fn test_builder_path_and_isolated_vertex() {
    let graph: Graph<String> = GraphBuilder::directed()
        .path(["A", "B", "C"])
        .vertex("Z")
        .build();

    assert!(graph.is_directed());
    assert_eq!(graph.vertex_count(), 4);
    assert_eq!(graph.edge_count(), 2);
    assert!(graph.edge_exists(&s("B"), &s("C")));
    assert!(graph.neighbors(&s("Z")).is_empty());
}

// ==================== Weighted Conversion Tests ====================

#[test]
fn test_to_weighted_expands_undirected_edges() {
    let graph: Graph<String> = GraphBuilder::undirected()
        .weighted_edge("A", "B", 3.0)
        .weighted_edge("B", "C", 1.5)
        .build();
    let weighted = graph.to_weighted();

    assert_eq!(weighted.vertex_count(), 3);
    assert_eq!(weighted.edge_count(), 4);
    assert_eq!(weighted.neighbors(&s("B")).len(), 2);
}

#[test]
fn test_weighted_graph_independent_directions() {
    let mut weighted: WeightedGraph<String> = WeightedGraph::new();
    weighted.add_edge(s("A"), s("B"), 5.0);
    weighted.add_edge(s("B"), s("A"), 7.0);
    weighted.add_two_way_edge(s("B"), s("C"), 1.0);

    assert_eq!(weighted.neighbors(&s("A"))[0].weight, 5.0);
    assert_eq!(weighted.neighbors(&s("B"))[0].weight, 7.0);
    assert_eq!(weighted.edge_count(), 4);
    assert!(weighted.contains_vertex(&s("C")));
}
