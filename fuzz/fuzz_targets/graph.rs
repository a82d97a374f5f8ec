#![no_main]

use compactgraph::graph::{to_dot, CompileConfig, DirectedGraph, GraphTraversal, NodeId};
use libfuzzer_sys::fuzz_target;

// Input is read as little-endian (from, to) pairs. Identifiers are masked to
// 12 bits to keep offset tables small enough for fast iterations.
fuzz_target!(|data: &[u8]| {
    let mut graph = DirectedGraph::new();
    for chunk in data.chunks_exact(4) {
        let from = u16::from_le_bytes([chunk[0], chunk[1]]) & 0x0fff;
        let to = u16::from_le_bytes([chunk[2], chunk[3]]) & 0x0fff;
        graph.add_edge(NodeId::new(from), NodeId::new(to));
    }

    let Ok(compiled) = graph.compile_with(&CompileConfig::strict()) else {
        return;
    };
    assert_eq!(compiled.edge_count(), graph.edge_count());

    if let Some(start) = compiled.nodes().next() {
        let _ = compiled.dfs(start).count();
        let _ = compiled.bfs(start).count();
    }

    let order = compiled.topological_sort();
    assert!(order.len() <= compiled.node_count());
    let _ = to_dot(&compiled);
});
