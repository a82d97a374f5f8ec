//! Directed graphs over 16-bit node identifiers.
//!
//! This module provides two representations of the same directed graph and a set
//! of traversal algorithms that run over either one:
//!
//! - [`DirectedGraph`] - Mutable, hash-based, for construction and editing
//! - [`CompiledGraph`] - Immutable, contiguous and sorted, for traversal-heavy work
//! - [`algorithms`] - DFS, BFS and Kahn's topological ordering
//! - [`to_dot`], [`to_dot_named`], [`write_dot`] - Graphviz export
//!
//! # Architecture
//!
//! ```text
//! DirectedGraph --compile()--> CompiledGraph
//!        \                        /
//!         `--- GraphBase + Successors ---> algorithms, dot
//! ```
//!
//! Compilation is one-way. A [`CompiledGraph`] is a snapshot: it owns its arrays
//! and never observes later edits to the graph it was compiled from.
//!
//! # Design Principles
//!
//! ## Identifiers Are Indices
//!
//! Nodes are plain [`NodeId`] values chosen by the caller. There is no separate
//! node registration step: adding an edge introduces both endpoints. The compact
//! form indexes its offset table directly by identifier, which makes successor
//! lookup O(1) but sizes the table by the largest identifier in use. See
//! [`CompileConfig`] for guarding against sparse identifier ranges.
//!
//! ## Unknown Nodes Are Edgeless
//!
//! Querying a node a graph has never seen is not an error. It has no successors,
//! no edges, and traversals starting from it emit just that node.
//!
//! # Usage Examples
//!
//! ```rust
//! use compactgraph::graph::{DirectedGraph, GraphTraversal, NodeId};
//!
//! let mut graph = DirectedGraph::new();
//! graph.add_edge(NodeId::new(0), NodeId::new(1));
//! graph.add_edge(NodeId::new(1), NodeId::new(2));
//! graph.add_edge(NodeId::new(0), NodeId::new(2));
//! graph.add_edge(NodeId::new(3), NodeId::new(3));
//!
//! let compiled = graph.compile();
//! assert_eq!(compiled.node_count(), 4);
//! assert_eq!(compiled.edge_count(), 4);
//!
//! // Node 3 sits on a self-loop, so it cannot be ordered
//! let order = compiled.topological_sort();
//! assert!(!order.is_valid());
//! assert_eq!(order.len(), 3);
//! ```
//!
//! # Thread Safety
//!
//! Both graph types are [`Send`] and [`Sync`]. [`CompiledGraph`] is never mutated
//! after construction and can be shared across threads without locking.

pub mod algorithms;
mod compiled;
mod config;
mod directed;
mod dot;
mod edge;
mod node;
mod traits;

pub use algorithms::GraphTraversal;
pub use compiled::CompiledGraph;
pub use config::CompileConfig;
pub use directed::DirectedGraph;
pub use dot::{to_dot, to_dot_named, write_dot};
pub use edge::Edge;
pub use node::NodeId;
pub use traits::{GraphBase, Successors};
