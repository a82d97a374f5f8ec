//! Topological ordering for directed graphs.
//!
//! This module provides Kahn's algorithm as a lazy iterator. A topological
//! ordering is a linear ordering of nodes such that for every directed edge
//! `(u, v)`, `u` comes before `v`.
//!
//! Kahn's algorithm only ever emits nodes whose predecessors have all been
//! emitted. Nodes on a cycle, including a node with a self-loop, never reach that
//! state, and neither does anything downstream of them. Such nodes are simply
//! left out; the resulting [`TopologicalOrder`] reports the shortfall through
//! [`is_valid`](TopologicalOrder::is_valid).

use std::collections::{HashMap, VecDeque};

use log::debug;

use crate::{
    graph::{NodeId, Successors},
    Error, Result,
};

/// Lazy Kahn's-algorithm iterator over the whole graph.
///
/// In-degrees are computed eagerly at construction (one pass over every node's
/// successors). Each `next()` then dequeues a zero-in-degree node, emits it and
/// releases its successors.
///
/// The initial queue holds the zero-in-degree nodes in the graph's
/// [`nodes`](crate::graph::GraphBase::nodes) order, so on a
/// [`CompiledGraph`](crate::graph::CompiledGraph) the output is deterministic.
///
/// # Examples
///
/// ```rust
/// use compactgraph::graph::{algorithms::topological, DirectedGraph, NodeId};
///
/// let mut graph = DirectedGraph::new();
/// graph.add_edge(NodeId::new(2), NodeId::new(0));
/// graph.add_edge(NodeId::new(0), NodeId::new(1));
///
/// let order: Vec<NodeId> = topological(&graph.compile()).collect();
/// assert_eq!(order, vec![NodeId::new(2), NodeId::new(0), NodeId::new(1)]);
/// ```
pub struct TopologicalIterator<'g, G: Successors> {
    graph: &'g G,
    in_degree: HashMap<NodeId, usize>,
    queue: VecDeque<NodeId>,
    node_count: usize,
    emitted: usize,
}

impl<'g, G: Successors> TopologicalIterator<'g, G> {
    fn new(graph: &'g G) -> Self {
        let mut in_degree: HashMap<NodeId, usize> = graph.nodes().map(|node| (node, 0)).collect();
        for node in graph.nodes() {
            for succ in graph.successors(node) {
                *in_degree.entry(succ).or_insert(0) += 1;
            }
        }

        let queue: VecDeque<NodeId> = graph
            .nodes()
            .filter(|node| in_degree.get(node) == Some(&0))
            .collect();

        TopologicalIterator {
            graph,
            in_degree,
            queue,
            node_count: graph.node_count(),
            emitted: 0,
        }
    }

    /// Drains the iterator into a [`TopologicalOrder`].
    ///
    /// The order holds the nodes not yet yielded. Nodes already taken through
    /// `next()` still count towards [`TopologicalOrder::emitted`], so validity is
    /// judged over the whole run.
    #[must_use]
    pub fn into_order(mut self) -> TopologicalOrder {
        let order: Vec<NodeId> = self.by_ref().collect();

        debug!(
            "topological order: emitted {} of {} nodes",
            self.emitted, self.node_count
        );

        TopologicalOrder {
            order,
            emitted: self.emitted,
            node_count: self.node_count,
        }
    }
}

impl<G: Successors> Iterator for TopologicalIterator<'_, G> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.queue.pop_front()?;

        for succ in self.graph.successors(node) {
            if let Some(degree) = self.in_degree.get_mut(&succ) {
                *degree -= 1;
                if *degree == 0 {
                    self.queue.push_back(succ);
                }
            }
        }

        self.emitted += 1;
        Some(node)
    }
}

/// Returns a lazy topological ordering of the whole graph.
///
/// # Complexity
///
/// - Time: O(V + E) to construct, O(V + E) total across all `next()` calls
/// - Space: O(V) for the in-degree map and queue
pub fn topological<G: Successors>(graph: &G) -> TopologicalIterator<'_, G> {
    TopologicalIterator::new(graph)
}

/// A fully drained topological ordering.
///
/// Produced by [`topological_sort`] or [`TopologicalIterator::into_order`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopologicalOrder {
    order: Vec<NodeId>,
    emitted: usize,
    node_count: usize,
}

impl TopologicalOrder {
    /// Returns `true` if every node of the graph was ordered, i.e. the graph is
    /// acyclic.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.emitted == self.node_count
    }

    /// Returns the number of ordered nodes held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns `true` if no nodes are held.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Returns the number of nodes emitted over the whole run.
    #[must_use]
    pub fn emitted(&self) -> usize {
        self.emitted
    }

    /// Returns the node count of the graph the order was computed for.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// Returns an iterator over the ordered nodes.
    pub fn iter(&self) -> std::slice::Iter<'_, NodeId> {
        self.order.iter()
    }

    /// Returns the ordered nodes as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[NodeId] {
        &self.order
    }

    /// Converts into the ordered nodes, failing if the graph has a cycle.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CycleDetected`] when not every node could be ordered.
    pub fn into_result(self) -> Result<Vec<NodeId>> {
        if self.is_valid() {
            Ok(self.order)
        } else {
            Err(Error::CycleDetected {
                sorted: self.emitted,
                total: self.node_count,
            })
        }
    }
}

impl IntoIterator for TopologicalOrder {
    type Item = NodeId;
    type IntoIter = std::vec::IntoIter<NodeId>;

    fn into_iter(self) -> Self::IntoIter {
        self.order.into_iter()
    }
}

impl<'a> IntoIterator for &'a TopologicalOrder {
    type Item = &'a NodeId;
    type IntoIter = std::slice::Iter<'a, NodeId>;

    fn into_iter(self) -> Self::IntoIter {
        self.order.iter()
    }
}

/// Computes a topological ordering of the whole graph.
///
/// Uses Kahn's algorithm, which processes nodes with no incoming edges first,
/// then removes those nodes and repeats. The ordering covers every node if and
/// only if the graph is acyclic.
///
/// # Arguments
///
/// * `graph` - The graph to sort topologically
///
/// # Algorithm
///
/// 1. Compute in-degree for all nodes
/// 2. Initialize queue with all nodes having in-degree 0
/// 3. While queue is not empty:
///    - Remove a node from the queue and add to result
///    - For each successor, decrement its in-degree
///    - If successor's in-degree becomes 0, add to queue
/// 4. If result contains all nodes the order is valid; otherwise graph has a cycle
///
/// # Examples
///
/// ```rust
/// use compactgraph::graph::{algorithms::topological_sort, DirectedGraph, NodeId};
///
/// let mut graph = DirectedGraph::new();
/// graph.add_edge(NodeId::new(0), NodeId::new(1));
/// graph.add_edge(NodeId::new(1), NodeId::new(2));
/// graph.add_edge(NodeId::new(3), NodeId::new(3));
///
/// let order = topological_sort(&graph);
/// assert!(!order.is_valid());
/// assert_eq!(order.len(), 3);
/// assert!(order.into_result().is_err());
/// ```
#[must_use]
pub fn topological_sort<G: Successors>(graph: &G) -> TopologicalOrder {
    topological(graph).into_order()
}

#[cfg(test)]
mod tests {
    use crate::{
        graph::{
            algorithms::topological::{topological, topological_sort},
            DirectedGraph, NodeId, Successors,
        },
        Error,
    };

    fn n(id: u16) -> NodeId {
        NodeId::new(id)
    }

    fn create_diamond_graph() -> DirectedGraph {
        [(n(0), n(1)), (n(0), n(2)), (n(1), n(3)), (n(2), n(3))]
            .into_iter()
            .collect()
    }

    fn assert_respects_edges<G: Successors>(graph: &G, order: &[NodeId]) {
        let position = |node: NodeId| order.iter().position(|&x| x == node);
        for &from in order {
            for to in graph.successors(from) {
                assert!(position(from) < position(to), "{from} must precede {to}");
            }
        }
    }

    #[test]
    fn test_topological_diamond() {
        let graph = create_diamond_graph();
        let order = topological_sort(&graph);

        assert!(order.is_valid());
        assert_eq!(order.len(), 4);
        assert_eq!(order.node_count(), 4);
        assert_eq!(order.as_slice()[0], n(0));
        assert_eq!(order.as_slice()[3], n(3));
        assert_respects_edges(&graph, order.as_slice());
    }

    #[test]
    fn test_topological_compiled_deterministic() {
        let compiled = create_diamond_graph().compile();
        let order: Vec<NodeId> = topological(&compiled).collect();
        assert_eq!(order, vec![n(0), n(1), n(2), n(3)]);
    }

    #[test]
    fn test_topological_cycle() {
        let graph: DirectedGraph = [(n(0), n(1)), (n(1), n(2)), (n(2), n(0))]
            .into_iter()
            .collect();
        let order = topological_sort(&graph);

        assert!(!order.is_valid());
        assert!(order.is_empty());
        assert_eq!(order.node_count(), 3);
    }

    #[test]
    fn test_topological_partial_cycle() {
        // 0 -> 1 -> 2 -> 1: only 0 can be ordered
        let graph: DirectedGraph = [(n(0), n(1)), (n(1), n(2)), (n(2), n(1))]
            .into_iter()
            .collect();
        let order = topological_sort(&graph);

        assert!(!order.is_valid());
        assert_eq!(order.as_slice(), &[n(0)]);
    }

    #[test]
    fn test_topological_self_loop_excluded() {
        let mut graph = DirectedGraph::new();
        graph.add_edge(n(0), n(1));
        graph.add_edge(n(1), n(2));
        graph.add_edge(n(0), n(2));
        graph.add_edge(n(3), n(3));

        let order = topological_sort(&graph.compile());
        assert!(!order.is_valid());
        assert_eq!(order.as_slice(), &[n(0), n(1), n(2)]);
    }

    #[test]
    fn test_topological_empty() {
        let graph = DirectedGraph::new();
        let order = topological_sort(&graph);
        assert!(order.is_valid());
        assert!(order.is_empty());
        assert_eq!(order.into_result().unwrap(), Vec::<NodeId>::new());
    }

    #[test]
    fn test_topological_isolated_nodes() {
        let mut graph = DirectedGraph::new();
        graph.add_edge(n(0), n(1));
        graph.remove_edge(n(0), n(1));

        let order = topological_sort(&graph);
        assert!(order.is_valid());
        assert_eq!(order.len(), 2);
    }

    #[test]
    fn test_into_result_cycle_error() {
        let graph: DirectedGraph = [(n(0), n(1)), (n(1), n(0)), (n(2), n(0))]
            .into_iter()
            .collect();

        match topological_sort(&graph).into_result() {
            Err(Error::CycleDetected { sorted, total }) => {
                assert_eq!(sorted, 1);
                assert_eq!(total, 3);
            }
            other => panic!("expected CycleDetected, got {other:?}"),
        }
    }

    #[test]
    fn test_into_order_after_partial_consumption() {
        let compiled = create_diamond_graph().compile();
        let mut iter = topological(&compiled);
        assert_eq!(iter.next(), Some(n(0)));

        let rest = iter.into_order();
        assert_eq!(rest.as_slice(), &[n(1), n(2), n(3)]);
        assert_eq!(rest.emitted(), 4);
        assert!(rest.is_valid());
    }

    #[test]
    fn test_order_into_iter() {
        let compiled = create_diamond_graph().compile();
        let order = topological_sort(&compiled);

        let borrowed: Vec<NodeId> = (&order).into_iter().copied().collect();
        let owned: Vec<NodeId> = order.into_iter().collect();
        assert_eq!(borrowed, owned);
    }
}
