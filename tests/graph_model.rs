//! Graph model tests: nodes, neighbor sets, builder.

use chroma_graph::graph::{ColorGraph, GraphBuilder};
use chroma_graph::types::error::ChromaError;

// ==================== Node + Graph Tests ====================

#[test]
fn test_add_node_assigns_sequential_ids() {
    let mut graph = ColorGraph::new();
    assert_eq!(graph.add_node(10), 0);
    assert_eq!(graph.add_node(20), 1);
    assert_eq!(graph.add_node(30), 2);
    assert_eq!(graph.node_count(), 3);
    assert_eq!(graph.node_ids(), vec![0, 1, 2]);
    assert_eq!(graph.get_node(1).unwrap().value(), 20);
}

#[test]
fn test_new_node_is_bare() {
    let mut graph = ColorGraph::new();
    let id = graph.add_node(5);
    let node = graph.get_node(id).unwrap();
    assert_eq!(node.degree(), 0);
    assert!(!node.has_color());
    assert!(node.color().is_none());
}

#[test]
fn test_equal_values_stay_distinct() {
    // Two nodes with the same value are different nodes: linking one
    // must not affect the other.
    let mut graph = ColorGraph::new();
    let first = graph.add_node(7);
    let second = graph.add_node(7);
    assert_ne!(first, second);

    graph.add_neighbor(first, second).unwrap();
    assert!(graph.get_node(first).unwrap().neighbors().contains(&second));
    assert!(!graph.get_node(first).unwrap().neighbors().contains(&first));
    assert_eq!(graph.get_node(second).unwrap().degree(), 0);
}

#[test]
fn test_add_neighbor_set_semantics() {
    let mut graph = ColorGraph::new();
    let a = graph.add_node(1);
    let b = graph.add_node(2);

    graph.add_neighbor(a, b).unwrap();
    graph.add_neighbor(a, b).unwrap();

    assert_eq!(graph.get_node(a).unwrap().degree(), 1);
    assert_eq!(graph.edge_count(), 1);
}

#[test]
fn test_add_neighbor_is_directed() {
    let mut graph = ColorGraph::new();
    let a = graph.add_node(1);
    let b = graph.add_node(2);

    graph.add_neighbor(a, b).unwrap();

    assert!(graph.neighbors(a).unwrap().contains(&b));
    assert!(graph.neighbors(b).unwrap().is_empty());
}

#[test]
fn test_add_neighbor_unknown_node_rejected() {
    let mut graph = ColorGraph::new();
    let a = graph.add_node(1);

    let result = graph.add_neighbor(a, 99);
    match result.unwrap_err() {
        ChromaError::NodeNotFound(id) => assert_eq!(id, 99),
        e => panic!("Expected NodeNotFound error, got {:?}", e),
    }

    let result = graph.add_neighbor(99, a);
    assert!(matches!(
        result.unwrap_err(),
        ChromaError::NodeNotFound(99)
    ));
}

#[test]
fn test_self_link_accepted_at_insertion() {
    // A self-loop is only rejected by the coloring pass, not here.
    let mut graph = ColorGraph::new();
    let a = graph.add_node(1);
    graph.add_neighbor(a, a).unwrap();
    assert!(graph.neighbors(a).unwrap().contains(&a));
}

#[test]
fn test_neighbors_lookup_unknown_node() {
    let graph = ColorGraph::new();
    assert!(graph.neighbors(0).is_err());
}

// ==================== Builder Tests ====================

#[test]
fn test_builder_assigns_ids_in_order() {
    let mut builder = GraphBuilder::new();
    let a = builder.add_node(1);
    let b = builder.add_node(2);
    assert_eq!((a, b), (0, 1));

    let graph = builder.build().unwrap();
    assert_eq!(graph.node_count(), 2);
    assert_eq!(graph.get_node(a).unwrap().value(), 1);
    assert_eq!(graph.get_node(b).unwrap().value(), 2);
}

#[test]
fn test_builder_link_is_directed() {
    let mut builder = GraphBuilder::new();
    let a = builder.add_node(1);
    let b = builder.add_node(2);
    builder.link(a, b);

    let graph = builder.build().unwrap();
    assert!(graph.neighbors(a).unwrap().contains(&b));
    assert!(graph.neighbors(b).unwrap().is_empty());
}

#[test]
fn test_builder_link_undirected_adds_both_directions() {
    let mut builder = GraphBuilder::new();
    let a = builder.add_node(1);
    let b = builder.add_node(2);
    builder.link_undirected(a, b);

    let graph = builder.build().unwrap();
    assert!(graph.neighbors(a).unwrap().contains(&b));
    assert!(graph.neighbors(b).unwrap().contains(&a));
    assert_eq!(graph.edge_count(), 2);
}

#[test]
fn test_builder_rejects_dangling_link() {
    let mut builder = GraphBuilder::new();
    let a = builder.add_node(1);
    builder.link(a, 7);

    match builder.build().unwrap_err() {
        ChromaError::NodeNotFound(id) => assert_eq!(id, 7),
        e => panic!("Expected NodeNotFound error, got {:?}", e),
    }
}

#[test]
fn test_builder_self_link_builds() {
    let mut builder = GraphBuilder::new();
    let a = builder.add_node(1);
    builder.link(a, a);

    let graph = builder.build().unwrap();
    assert!(graph.neighbors(a).unwrap().contains(&a));
}
