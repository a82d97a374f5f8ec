//! Graph traversal algorithms.
//!
//! This module provides depth-first and breadth-first traversal from a single
//! start node. Both are lazy: each call to `next()` does only the work needed to
//! produce one more node, so a caller can stop early without paying for the rest
//! of the graph.
//!
//! # Algorithms
//!
//! - [`dfs`] - Iterative depth-first search (pre-order)
//! - [`bfs`] - Breadth-first search (level order)
//!
//! Both track visited nodes in a [`BitSet`] spanning the whole identifier domain,
//! so any start node is accepted, including one the graph has never seen. Such a
//! node is emitted on its own, since it has no successors.

use std::collections::VecDeque;

use crate::{
    graph::{NodeId, Successors},
    utils::BitSet,
};

/// Depth-first search iterator over graph nodes.
///
/// Emits each node reachable from the start exactly once, in pre-order. The
/// traversal pushes every successor of an emitted node, in the order the graph's
/// successor view yields them, and discards already-visited nodes when they are
/// popped. Successors are therefore explored last-pushed first.
///
/// # Type Parameters
///
/// * `'g` - Lifetime of the graph reference
/// * `G` - Graph type implementing [`Successors`]
///
/// # Examples
///
/// ```rust
/// use compactgraph::graph::{algorithms::dfs, DirectedGraph, NodeId};
///
/// let mut graph = DirectedGraph::new();
/// graph.add_edge(NodeId::new(0), NodeId::new(1));
/// graph.add_edge(NodeId::new(1), NodeId::new(2));
/// graph.add_edge(NodeId::new(5), NodeId::new(0));
///
/// let visited: Vec<NodeId> = dfs(&graph, NodeId::new(0)).collect();
/// assert_eq!(visited, vec![NodeId::new(0), NodeId::new(1), NodeId::new(2)]);
/// ```
pub struct DfsIterator<'g, G: Successors> {
    graph: &'g G,
    stack: Vec<NodeId>,
    visited: BitSet,
}

impl<'g, G: Successors> DfsIterator<'g, G> {
    fn new(graph: &'g G, start: NodeId) -> Self {
        DfsIterator {
            graph,
            stack: vec![start],
            visited: BitSet::new(NodeId::DOMAIN_SIZE),
        }
    }
}

impl<G: Successors> Iterator for DfsIterator<'_, G> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let graph = self.graph;
        while let Some(node) = self.stack.pop() {
            // Nodes can be pushed more than once; only the first pop counts
            if !self.visited.insert(node.index()) {
                continue;
            }

            self.stack.extend(graph.successors(node));
            return Some(node);
        }
        None
    }
}

/// Returns a depth-first search iterator starting from the given node.
///
/// The start node is always emitted first. Nodes not reachable from it are never
/// visited.
///
/// # Arguments
///
/// * `graph` - The graph to traverse
/// * `start` - The starting node for traversal
///
/// # Complexity
///
/// - Time: O(V + E) over the reachable subgraph
/// - Space: O(E) for the stack, plus a fixed 8 KiB visited set
pub fn dfs<G: Successors>(graph: &G, start: NodeId) -> DfsIterator<'_, G> {
    DfsIterator::new(graph, start)
}

/// Breadth-first search iterator over graph nodes.
///
/// Emits each node reachable from the start exactly once, all nodes at distance
/// `d` before any node at distance `d + 1`. Nodes are marked visited when they are
/// enqueued, so each node enters the queue at most once.
///
/// # Type Parameters
///
/// * `'g` - Lifetime of the graph reference
/// * `G` - Graph type implementing [`Successors`]
pub struct BfsIterator<'g, G: Successors> {
    graph: &'g G,
    queue: VecDeque<NodeId>,
    visited: BitSet,
}

impl<'g, G: Successors> BfsIterator<'g, G> {
    fn new(graph: &'g G, start: NodeId) -> Self {
        let mut visited = BitSet::new(NodeId::DOMAIN_SIZE);
        visited.insert(start.index());

        let mut queue = VecDeque::new();
        queue.push_back(start);

        BfsIterator {
            graph,
            queue,
            visited,
        }
    }
}

impl<G: Successors> Iterator for BfsIterator<'_, G> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.queue.pop_front()?;

        for succ in self.graph.successors(node) {
            if self.visited.insert(succ.index()) {
                self.queue.push_back(succ);
            }
        }

        Some(node)
    }
}

/// Returns a breadth-first search iterator starting from the given node.
///
/// # Arguments
///
/// * `graph` - The graph to traverse
/// * `start` - The starting node for traversal
///
/// # Complexity
///
/// - Time: O(V + E) over the reachable subgraph
/// - Space: O(V) for the queue, plus a fixed 8 KiB visited set
///
/// # Examples
///
/// ```rust
/// use compactgraph::graph::{algorithms::bfs, DirectedGraph, NodeId};
///
/// let mut graph = DirectedGraph::new();
/// graph.add_edge(NodeId::new(0), NodeId::new(1));
/// graph.add_edge(NodeId::new(0), NodeId::new(2));
/// graph.add_edge(NodeId::new(1), NodeId::new(3));
/// graph.add_edge(NodeId::new(2), NodeId::new(3));
///
/// let order: Vec<NodeId> = bfs(&graph.compile(), NodeId::new(0)).collect();
/// assert_eq!(order[0], NodeId::new(0));
/// assert_eq!(order[3], NodeId::new(3));
/// ```
pub fn bfs<G: Successors>(graph: &G, start: NodeId) -> BfsIterator<'_, G> {
    BfsIterator::new(graph, start)
}
