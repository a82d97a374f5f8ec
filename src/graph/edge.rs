//! Directed edge value type.
//!
//! Edges are not stored as first-class objects by either graph representation:
//! a [`DirectedGraph`](crate::graph::DirectedGraph) keeps them as successor-set
//! membership and a [`CompiledGraph`](crate::graph::CompiledGraph) as contiguous
//! range membership. [`Edge`] is the value produced when edges are enumerated.

use std::fmt;

use crate::graph::NodeId;

/// An ordered `(from, to)` pair of node identifiers.
///
/// Edges carry no weight or payload. Ordering is lexicographic on
/// `(from, to)`, which is also the order [`CompiledGraph::edges`](crate::graph::CompiledGraph::edges)
/// produces them in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Edge {
    /// Source node of the edge
    pub from: NodeId,
    /// Target node of the edge
    pub to: NodeId,
}

impl Edge {
    /// Creates a new edge from `from` to `to`.
    #[must_use]
    #[inline]
    pub const fn new(from: NodeId, to: NodeId) -> Self {
        Edge { from, to }
    }

    /// Returns `true` if the edge starts and ends at the same node.
    #[must_use]
    #[inline]
    pub fn is_self_loop(&self) -> bool {
        self.from == self.to
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)
    }
}

impl From<(NodeId, NodeId)> for Edge {
    fn from((from, to): (NodeId, NodeId)) -> Self {
        Edge { from, to }
    }
}

impl From<Edge> for (NodeId, NodeId) {
    fn from(edge: Edge) -> Self {
        (edge.from, edge.to)
    }
}
