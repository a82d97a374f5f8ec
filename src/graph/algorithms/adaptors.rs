//! Method-syntax access to the traversal algorithms.
//!
//! [`GraphTraversal`] is implemented for every [`Successors`] graph, so traversals
//! can be chained off a graph value instead of called as free functions:
//!
//! ```rust
//! use compactgraph::graph::{DirectedGraph, GraphTraversal, NodeId};
//!
//! let mut graph = DirectedGraph::new();
//! graph.add_edge(NodeId::new(0), NodeId::new(1));
//! graph.add_edge(NodeId::new(1), NodeId::new(2));
//!
//! let compiled = graph.compile();
//! let reachable: Vec<NodeId> = compiled.dfs(NodeId::new(1)).collect();
//! assert_eq!(reachable, vec![NodeId::new(1), NodeId::new(2)]);
//! assert!(compiled.topological_sort().is_valid());
//! ```

use crate::graph::{
    algorithms::{
        topological::{topological, topological_sort, TopologicalIterator, TopologicalOrder},
        traversal::{bfs, dfs, BfsIterator, DfsIterator},
    },
    NodeId, Successors,
};

/// Extension trait exposing the traversals as methods.
pub trait GraphTraversal: Successors + Sized {
    /// See [`dfs`](crate::graph::algorithms::dfs).
    fn dfs(&self, start: NodeId) -> DfsIterator<'_, Self> {
        dfs(self, start)
    }

    /// See [`bfs`](crate::graph::algorithms::bfs).
    fn bfs(&self, start: NodeId) -> BfsIterator<'_, Self> {
        bfs(self, start)
    }

    /// See [`topological`](crate::graph::algorithms::topological).
    fn topological(&self) -> TopologicalIterator<'_, Self> {
        topological(self)
    }

    /// See [`topological_sort`](crate::graph::algorithms::topological_sort).
    fn topological_sort(&self) -> TopologicalOrder {
        topological_sort(self)
    }
}

impl<G: Successors> GraphTraversal for G {}
