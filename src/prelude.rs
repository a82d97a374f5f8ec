//! # compactgraph Prelude
//!
//! Convenient re-exports of the types and traits most graph code needs.

/// The error type for checked operations
pub use crate::Error;

/// The result type used throughout compactgraph
pub use crate::Result;

/// Graph representations and their configuration
pub use crate::graph::{CompileConfig, CompiledGraph, DirectedGraph, Edge, NodeId};

/// Capability traits and method-syntax traversals
pub use crate::graph::{GraphBase, GraphTraversal, Successors};

/// Traversal iterators and orderings
pub use crate::graph::algorithms::{
    bfs, dfs, topological, topological_sort, BfsIterator, DfsIterator, TopologicalIterator,
    TopologicalOrder,
};

/// DOT export
pub use crate::graph::{to_dot, to_dot_named, write_dot};
