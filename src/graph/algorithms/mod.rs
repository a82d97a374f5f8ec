//! Traversal algorithms over the graph capability traits.
//!
//! Every algorithm here is generic over `G: Successors` and runs unchanged on
//! both [`DirectedGraph`](crate::graph::DirectedGraph) and
//! [`CompiledGraph`](crate::graph::CompiledGraph). All of them are lazy,
//! single-use iterators that borrow the graph for their lifetime.
//!
//! # Available Algorithms
//!
//! ## Traversal
//!
//! - [`dfs`] - Depth-first search traversal
//! - [`bfs`] - Breadth-first search traversal
//!
//! ## Topological Ordering
//!
//! - [`topological`] - Lazy Kahn's-algorithm iterator
//! - [`topological_sort`] - Drained ordering with a validity check
//!
//! # Algorithm Selection
//!
//! | Algorithm | Time Complexity | Use Case |
//! |-----------|-----------------|----------|
//! | DFS/BFS | O(V + E) | Reachability, general traversal |
//! | Topological Sort | O(V + E) | Dependency ordering, cycle detection |
//!
//! The same algorithms are available as methods through [`GraphTraversal`].
//!
//! # Examples
//!
//! ```rust
//! use compactgraph::graph::{algorithms, DirectedGraph, NodeId};
//!
//! let mut graph = DirectedGraph::new();
//! graph.add_edge(NodeId::new(0), NodeId::new(1));
//! graph.add_edge(NodeId::new(1), NodeId::new(2));
//!
//! let order: Vec<NodeId> = algorithms::dfs(&graph, NodeId::new(0)).collect();
//! assert_eq!(order, vec![NodeId::new(0), NodeId::new(1), NodeId::new(2)]);
//!
//! let sorted = algorithms::topological_sort(&graph);
//! assert!(sorted.is_valid());
//! ```

mod adaptors;
mod topological;
mod traversal;

pub use adaptors::GraphTraversal;
pub use topological::{topological, topological_sort, TopologicalIterator, TopologicalOrder};
pub use traversal::{bfs, dfs, BfsIterator, DfsIterator};
