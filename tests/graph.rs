//! End-to-end scenario: build, edit, compile, traverse and export a small graph.

use std::collections::HashSet;

use compactgraph::{
    graph::{
        algorithms::{dfs, topological_sort},
        to_dot, write_dot, CompileConfig, DirectedGraph, Edge, GraphTraversal, NodeId,
    },
    Error,
};

fn n(id: u16) -> NodeId {
    NodeId::new(id)
}

/// Builds 0 -> 1, 1 -> 2, 0 -> 2, 3 -> 3
fn build_reference_graph() -> DirectedGraph {
    let mut graph = DirectedGraph::new();
    graph.add_edge(n(0), n(1));
    graph.add_edge(n(1), n(2));
    graph.add_edge(n(0), n(2));
    graph.add_edge(n(3), n(3));
    graph
}

const REFERENCE_DOT: &str = "\
digraph G {
    0;
    1;
    2;
    3;
    0 -> 1;
    0 -> 2;
    1 -> 2;
    3 -> 3;
}
";

#[test]
fn round_trip_counts() {
    let graph = build_reference_graph();
    assert_eq!(graph.node_count(), 4);
    assert_eq!(graph.edge_count(), 4);

    let compiled = graph.compile();
    assert_eq!(compiled.node_count(), 4);
    assert_eq!(compiled.edge_count(), 4);
}

#[test]
fn round_trip_compiled_out_degrees() {
    let compiled = build_reference_graph().compile();

    let degrees: Vec<(NodeId, usize)> = compiled
        .nodes()
        .map(|node| (node, compiled.out_degree(node)))
        .collect();
    assert_eq!(degrees, vec![(n(0), 2), (n(1), 1), (n(2), 0), (n(3), 1)]);
    assert_eq!(
        compiled.successors(n(0)).collect::<Vec<_>>(),
        vec![n(1), n(2)]
    );
}

#[test]
fn round_trip_edges_agree() {
    let graph = build_reference_graph();
    let compiled = graph.compile();

    for edge in compiled.edges() {
        assert!(graph.has_edge(edge.from, edge.to), "{edge} missing");
    }
    assert_eq!(compiled.edges().count(), graph.edge_count());
    assert!(compiled.edges().any(|edge: Edge| edge.is_self_loop()));
}

#[test]
fn round_trip_topological_excludes_self_loop() {
    let graph = build_reference_graph();

    for order in [topological_sort(&graph), topological_sort(&graph.compile())] {
        assert!(!order.is_valid());
        assert_eq!(order.len(), 3);
        assert!(!order.iter().any(|&node| node == n(3)));
    }

    match graph.topological_sort().into_result() {
        Err(Error::CycleDetected { sorted, total }) => assert_eq!((sorted, total), (3, 4)),
        other => panic!("expected CycleDetected, got {other:?}"),
    }
}

#[test]
fn round_trip_dfs_from_zero() {
    let graph = build_reference_graph();

    for visited in [
        dfs(&graph, n(0)).collect::<Vec<_>>(),
        dfs(&graph.compile(), n(0)).collect::<Vec<_>>(),
    ] {
        assert_eq!(visited[0], n(0));
        let set: HashSet<NodeId> = visited.iter().copied().collect();
        assert_eq!(set, HashSet::from([n(0), n(1), n(2)]));
        assert_eq!(visited.len(), 3);
    }
}

#[test]
fn round_trip_dot_export() {
    let compiled = build_reference_graph().compile();
    assert_eq!(to_dot(&compiled), REFERENCE_DOT);

    let mut out = Vec::new();
    write_dot(&compiled, "G", &mut out).unwrap();
    assert_eq!(out, REFERENCE_DOT.as_bytes());
}

#[test]
fn compiled_snapshot_ignores_later_edits() {
    let mut graph = build_reference_graph();
    let compiled = graph.compile();

    graph.add_edge(n(2), n(0));
    graph.remove_edge(n(0), n(1));

    assert!(compiled.has_edge(n(0), n(1)));
    assert!(!compiled.has_edge(n(2), n(0)));
    assert_ne!(graph.compile(), compiled);
}

#[test]
fn removing_edges_keeps_nodes() {
    let mut graph = build_reference_graph();
    graph.remove_edge(n(3), n(3));
    graph.remove_edge(n(9), n(3));

    assert_eq!(graph.node_count(), 4);
    assert_eq!(graph.edge_count(), 3);
    assert!(graph.contains_node(n(3)));

    // The compact form only knows nodes through their edges
    let compiled = graph.compile();
    assert_eq!(compiled.node_count(), 3);
    assert!(topological_sort(&compiled).is_valid());
}

#[test]
fn sparse_identifiers_guarded_by_config() {
    let mut graph = DirectedGraph::new();
    graph.add_edge(n(0), n(65_000));

    let compiled = graph.compile();
    assert_eq!(compiled.offsets().len(), 65_002);
    assert_eq!(compiled.nodes().collect::<Vec<_>>(), vec![n(0), n(65_000)]);

    match graph.compile_with(&CompileConfig::strict()) {
        Err(Error::SparseIdentifiers {
            max_node_id, slots, ..
        }) => {
            assert_eq!(max_node_id, 65_000);
            assert_eq!(slots, 65_002);
        }
        other => panic!("expected SparseIdentifiers, got {other:?}"),
    }
}

#[test]
fn traversals_work_through_generic_bound() {
    fn reachable<G: GraphTraversal>(graph: &G, start: NodeId) -> usize {
        graph.bfs(start).count()
    }

    let graph = build_reference_graph();
    assert_eq!(reachable(&graph, n(0)), 3);
    assert_eq!(reachable(&graph.compile(), n(3)), 1);
    assert_eq!(reachable(&graph, n(500)), 1);
}
