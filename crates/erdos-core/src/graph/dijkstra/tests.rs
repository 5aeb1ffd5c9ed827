use super::*;

fn graph_from(edges: &[(&str, &str, u32)]) -> DiGraph {
    let mut graph = DiGraph::new();
    for (from, to, cost) in edges {
        graph.add_edge(*from, *to, Cost::from(*cost));
    }
    graph
}

/// Test shorter two-hop route beats the direct edge
#[test]
fn test_distance_prefers_cheaper_route() {
    let graph = graph_from(&[("A", "B", 1), ("A", "C", 4), ("B", "C", 1)]);
    let search = ShortestPaths::new(&graph, "A");

    assert_eq!(search.distance("C"), Some(Cost::from(2)));
    assert_eq!(search.distance("B"), Some(Cost::from(1)));
    assert_eq!(search.predecessors("C"), ["B"]);
}

/// Test the source is reachable from itself at cost zero
#[test]
fn test_source_is_reachable_at_zero() {
    let graph = graph_from(&[("A", "B", 1)]);
    let search = ShortestPaths::new(&graph, "A");

    assert!(search.reachable("A"));
    assert_eq!(search.distance("A"), Some(Cost::ZERO));
    assert!(search.predecessors("A").is_empty());
    assert_eq!(search.source(), "A");
}

/// Test a source missing from the graph still reaches itself
#[test]
fn test_source_without_entry() {
    let graph = DiGraph::new();
    let search = ShortestPaths::new(&graph, "lonely");

    assert!(search.reachable("lonely"));
    assert_eq!(search.reached_count(), 1);
}

/// Test that a disconnected vertex is unreachable
#[test]
fn test_disconnected_vertex_unreachable() {
    let mut graph = graph_from(&[("A", "B", 1)]);
    graph.add_vertex("E");
    let search = ShortestPaths::new(&graph, "A");

    assert!(!search.reachable("E"));
    assert_eq!(search.distance("E"), None);
    assert!(search.predecessors("E").is_empty());
}

/// Test that edges are followed in their direction only
#[test]
fn test_edges_are_directed() {
    let graph = graph_from(&[("B", "A", 1)]);
    let search = ShortestPaths::new(&graph, "A");

    assert!(!search.reachable("B"));
}

/// Test that a diamond records both tied predecessors in discovery order
#[test]
fn test_diamond_records_tied_predecessors() {
    let graph = graph_from(&[("A", "B", 1), ("A", "C", 1), ("B", "D", 1), ("C", "D", 1)]);
    let search = ShortestPaths::new(&graph, "A");

    assert_eq!(search.distance("D"), Some(Cost::from(2)));
    assert_eq!(search.predecessors("D"), ["B", "C"]);
}

/// Test that a strict improvement replaces the predecessor list wholesale
#[test]
fn test_strict_improvement_replaces_predecessors() {
    // D is first reached via B and C at cost 5, then E offers cost 3.
    let graph = graph_from(&[
        ("A", "B", 1),
        ("A", "C", 1),
        ("A", "E", 2),
        ("B", "D", 4),
        ("C", "D", 4),
        ("E", "D", 1),
    ]);
    let search = ShortestPaths::new(&graph, "A");

    assert_eq!(search.distance("D"), Some(Cost::from(3)));
    assert_eq!(search.predecessors("D"), ["E"]);
}

/// Test that a tie found after an improvement is appended to the new list
#[test]
fn test_tie_after_improvement_appends() {
    let graph = graph_from(&[
        ("A", "B", 1),
        ("A", "C", 2),
        ("A", "D", 9),
        ("B", "D", 2),
        ("C", "D", 1),
    ]);
    let search = ShortestPaths::new(&graph, "A");

    assert_eq!(search.distance("D"), Some(Cost::from(3)));
    assert_eq!(search.predecessors("D"), ["B", "C"]);
}

/// Test that a worse route never touches the predecessor list
#[test]
fn test_worse_route_ignored() {
    let graph = graph_from(&[("A", "B", 1), ("A", "C", 1), ("B", "C", 1)]);
    let search = ShortestPaths::new(&graph, "A");

    assert_eq!(search.distance("C"), Some(Cost::from(1)));
    assert_eq!(search.predecessors("C"), ["A"]);
}

/// Test fractional weights
#[test]
fn test_fractional_weights() {
    let mut graph = DiGraph::new();
    graph.add_edge("A", "B", Cost::new(0.25));
    graph.add_edge("B", "C", Cost::new(0.5));
    graph.add_edge("A", "C", Cost::new(1.0));
    let search = ShortestPaths::new(&graph, "A");

    assert_eq!(search.distance("C"), Some(Cost::new(0.75)));
    assert_eq!(search.predecessors("C"), ["B"]);
}

/// Test zero-cost edges tie with the route they shortcut
#[test]
fn test_zero_cost_edges() {
    let graph = graph_from(&[("A", "B", 0), ("B", "C", 1), ("A", "C", 1)]);
    let search = ShortestPaths::new(&graph, "A");

    assert_eq!(search.distance("B"), Some(Cost::ZERO));
    assert_eq!(search.distance("C"), Some(Cost::UNIT));
    assert_eq!(search.predecessors("C"), ["A", "B"]);
}

/// Test that every recorded predecessor satisfies the cost invariant
#[test]
fn test_predecessor_cost_invariant() {
    let mut graph = DiGraph::new();
    for (a, b) in [
        ("C1", "I1"),
        ("I1", "C2"),
        ("C1", "I2"),
        ("I2", "C2"),
        ("C2", "I3"),
        ("I3", "C3"),
        ("C1", "I4"),
        ("I4", "C3"),
    ] {
        graph.add_undirected_edge(a, b, Cost::UNIT);
    }
    let search = ShortestPaths::new(&graph, "C1");

    for (v, cost) in search.costs() {
        for u in search.predecessors(v) {
            let via = search.distance(u).unwrap() + graph.edge_cost(u, v).unwrap();
            assert_eq!(via, cost, "predecessor {u} of {v}");
        }
        for u in graph.vertices() {
            if let (Some(cu), Some(w)) = (search.distance(u), graph.edge_cost(u, v)) {
                assert!(cu + w >= cost, "edge {u} -> {v} undercuts {v}");
            }
        }
    }
    assert_eq!(search.distance("C3"), Some(Cost::from(2)));
}

/// Test that two searches over the same graph agree exactly
#[test]
fn test_search_is_deterministic() {
    let graph = graph_from(&[
        ("A", "B", 1),
        ("A", "C", 1),
        ("A", "D", 1),
        ("B", "E", 1),
        ("C", "E", 1),
        ("D", "E", 1),
    ]);
    let first = ShortestPaths::new(&graph, "A");
    let second = ShortestPaths::new(&graph, "A");

    assert_eq!(first.costs, second.costs);
    assert_eq!(first.predecessors, second.predecessors);
    assert_eq!(first.predecessors("E"), ["B", "C", "D"]);
}

#[test]
fn test_engine_is_shareable_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ShortestPaths>();
}
