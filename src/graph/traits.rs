//! Trait definitions for graph abstractions.
//!
//! This module defines the capability contract that graph algorithms are written
//! against. By programming against these traits, the traversals in
//! [`algorithms`](crate::graph::algorithms) work unmodified over both the editable
//! [`DirectedGraph`](crate::graph::DirectedGraph) and the compacted
//! [`CompiledGraph`](crate::graph::CompiledGraph).
//!
//! # Architecture
//!
//! - [`GraphBase`] - Node enumeration and node count
//! - [`Successors`] - Forward adjacency and edge existence
//!
//! # Design Principles
//!
//! ## Static Dispatch
//!
//! Algorithms take `G: Successors` type parameters rather than trait objects, so each
//! traversal is monomorphized for the concrete graph type it runs over.
//!
//! ## Iterator-Based Traversal
//!
//! All enumeration methods return iterators rather than collections, enabling lazy
//! evaluation and avoiding allocations for partial traversals.
//!
//! ## Unknown Nodes Are Edgeless
//!
//! Implementations must treat a node they have never seen as present but edgeless:
//! [`successors`](Successors::successors) yields nothing and
//! [`has_edge`](Successors::has_edge) returns `false`. Neither method may panic.

use crate::graph::NodeId;

/// Base trait providing node enumeration.
///
/// # Examples
///
/// ```rust
/// use compactgraph::graph::{DirectedGraph, GraphBase, NodeId};
///
/// fn count<G: GraphBase>(graph: &G) -> usize {
///     graph.nodes().count()
/// }
///
/// let mut graph = DirectedGraph::new();
/// graph.add_edge(NodeId::new(0), NodeId::new(1));
/// assert_eq!(count(&graph), 2);
/// ```
pub trait GraphBase {
    /// Returns an iterator over all node identifiers in the graph.
    ///
    /// The iteration order is defined by the implementation: unspecified for
    /// [`DirectedGraph`](crate::graph::DirectedGraph), ascending for
    /// [`CompiledGraph`](crate::graph::CompiledGraph).
    fn nodes(&self) -> impl Iterator<Item = NodeId>;

    /// Returns the number of nodes in the graph.
    ///
    /// Must equal the number of items yielded by [`nodes`](GraphBase::nodes).
    fn node_count(&self) -> usize {
        self.nodes().count()
    }
}

/// Trait for graphs that support forward edge traversal.
///
/// # Examples
///
/// ```rust
/// use compactgraph::graph::{DirectedGraph, NodeId, Successors};
///
/// fn fan_out<G: Successors>(graph: &G, node: NodeId) -> usize {
///     graph.successors(node).count()
/// }
///
/// let mut graph = DirectedGraph::new();
/// graph.add_edge(NodeId::new(0), NodeId::new(1));
/// graph.add_edge(NodeId::new(0), NodeId::new(2));
///
/// assert_eq!(fan_out(&graph, NodeId::new(0)), 2);
/// assert_eq!(fan_out(&graph.compile(), NodeId::new(0)), 2);
/// ```
pub trait Successors: GraphBase {
    /// Returns an iterator over the successor nodes of the given node.
    ///
    /// For a directed edge `(u, v)`, node `v` is a successor of `u`. Unknown
    /// nodes yield an empty iterator.
    fn successors(&self, node: NodeId) -> impl Iterator<Item = NodeId>;

    /// Returns `true` if the edge `(from, to)` exists.
    ///
    /// Returns `false` when `from` is unknown.
    fn has_edge(&self, from: NodeId, to: NodeId) -> bool;
}
