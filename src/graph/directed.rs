//! Mutable directed graph implementation.
//!
//! This module provides [`DirectedGraph`], the editable source of truth for graph
//! construction. The implementation uses a hash map from node to successor set, so
//! edge insertion, removal and lookup are all expected O(1), at the cost of an
//! unspecified iteration order. Once editing is done, [`DirectedGraph::compile`]
//! produces a sorted, contiguous [`CompiledGraph`] for traversal-heavy workloads.

use std::collections::{HashMap, HashSet};

use crate::{
    graph::{
        compiled::CompiledGraph,
        config::CompileConfig,
        node::NodeId,
        traits::{GraphBase, Successors},
    },
    Result,
};

/// A mutable directed graph over caller-chosen node identifiers.
///
/// Nodes come into existence as a side effect of [`add_edge`](Self::add_edge): both
/// endpoints are registered, even a target that has no outgoing edges of its own.
/// Once introduced, a node persists for the life of the graph; removing its last
/// edge leaves it in place as an isolated node.
///
/// Each `(from, to)` pair is stored at most once. Self-loops are permitted.
///
/// # Thread Safety
///
/// `DirectedGraph` is [`Send`] and [`Sync`]. Mutation requires `&mut self`, so
/// concurrent editing needs external synchronization; shared read access is safe.
///
/// # Examples
///
/// ```rust
/// use compactgraph::graph::{DirectedGraph, NodeId};
///
/// let mut graph = DirectedGraph::new();
/// graph.add_edge(NodeId::new(0), NodeId::new(1));
/// graph.add_edge(NodeId::new(1), NodeId::new(2));
/// graph.add_edge(NodeId::new(0), NodeId::new(1)); // already present
///
/// assert_eq!(graph.node_count(), 3);
/// assert_eq!(graph.edge_count(), 2);
///
/// graph.remove_edge(NodeId::new(1), NodeId::new(2));
/// assert!(!graph.has_edge(NodeId::new(1), NodeId::new(2)));
/// assert_eq!(graph.node_count(), 3);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirectedGraph {
    /// Successor set per known node
    adjacency: HashMap<NodeId, HashSet<NodeId>>,
}

impl DirectedGraph {
    /// Creates a new empty directed graph.
    #[must_use]
    pub fn new() -> Self {
        DirectedGraph {
            adjacency: HashMap::new(),
        }
    }

    /// Creates a new empty directed graph with room for `node_capacity` nodes.
    #[must_use]
    pub fn with_capacity(node_capacity: usize) -> Self {
        DirectedGraph {
            adjacency: HashMap::with_capacity(node_capacity),
        }
    }

    /// Adds the directed edge `(from, to)`.
    ///
    /// Both endpoints are registered as nodes. Re-adding an existing edge is a
    /// no-op.
    ///
    /// # Arguments
    ///
    /// * `from` - The source node of the edge
    /// * `to` - The target node of the edge
    ///
    /// # Returns
    ///
    /// `true` if the edge was newly inserted, `false` if it already existed.
    pub fn add_edge(&mut self, from: NodeId, to: NodeId) -> bool {
        let inserted = self.adjacency.entry(from).or_default().insert(to);
        self.adjacency.entry(to).or_default();
        inserted
    }

    /// Removes the directed edge `(from, to)` if present.
    ///
    /// Unknown source nodes and missing edges are silently ignored. Node entries
    /// are never removed.
    ///
    /// # Returns
    ///
    /// `true` if an edge was removed.
    pub fn remove_edge(&mut self, from: NodeId, to: NodeId) -> bool {
        self.adjacency
            .get_mut(&from)
            .is_some_and(|successors| successors.remove(&to))
    }

    /// Returns `true` if the edge `(from, to)` exists.
    ///
    /// Returns `false` for an unknown `from`.
    #[must_use]
    pub fn has_edge(&self, from: NodeId, to: NodeId) -> bool {
        self.adjacency
            .get(&from)
            .is_some_and(|successors| successors.contains(&to))
    }

    /// Returns an iterator over the successors of the given node.
    ///
    /// The order is unspecified. Unknown nodes yield an empty iterator.
    pub fn successors(&self, node: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.adjacency
            .get(&node)
            .into_iter()
            .flat_map(|successors| successors.iter().copied())
    }

    /// Returns an iterator over all known node identifiers, in unspecified order.
    pub fn nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.adjacency.keys().copied()
    }

    /// Returns the number of known nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Returns the number of stored edges (the sum of all successor-set sizes).
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(HashSet::len).sum()
    }

    /// Returns the number of outgoing edges of `node`, 0 for unknown nodes.
    #[must_use]
    pub fn out_degree(&self, node: NodeId) -> usize {
        self.adjacency.get(&node).map_or(0, HashSet::len)
    }

    /// Returns `true` if `node` has been introduced by an edge insertion.
    #[must_use]
    pub fn contains_node(&self, node: NodeId) -> bool {
        self.adjacency.contains_key(&node)
    }

    /// Returns `true` if the graph has no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Returns the largest known node identifier, or `None` for an empty graph.
    #[must_use]
    pub fn max_node_id(&self) -> Option<NodeId> {
        self.adjacency.keys().max().copied()
    }

    /// Compacts a snapshot of this graph into a [`CompiledGraph`].
    ///
    /// The result reflects exactly the edge set at the time of the call and does
    /// not observe later mutations. The output is independent of insertion order.
    ///
    /// Uses [`CompileConfig::default`], whose only effect beyond
    /// [`compile_with`](Self::compile_with) is the sparse-identifier warning, so
    /// this call cannot fail.
    #[must_use]
    pub fn compile(&self) -> CompiledGraph {
        CompiledGraph::build(self, &CompileConfig::default())
    }

    /// Compacts a snapshot of this graph, enforcing the limits in `config`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SparseIdentifiers`](crate::Error::SparseIdentifiers) if the
    /// offset table would exceed [`CompileConfig::max_offset_slots`].
    pub fn compile_with(&self, config: &CompileConfig) -> Result<CompiledGraph> {
        config.check(self)?;
        Ok(CompiledGraph::build(self, config))
    }

    /// Returns the raw successor set of `node`, used during compaction.
    pub(crate) fn successor_set(&self, node: NodeId) -> Option<&HashSet<NodeId>> {
        self.adjacency.get(&node)
    }
}

impl Extend<(NodeId, NodeId)> for DirectedGraph {
    fn extend<T: IntoIterator<Item = (NodeId, NodeId)>>(&mut self, edges: T) {
        for (from, to) in edges {
            self.add_edge(from, to);
        }
    }
}

impl FromIterator<(NodeId, NodeId)> for DirectedGraph {
    fn from_iter<T: IntoIterator<Item = (NodeId, NodeId)>>(edges: T) -> Self {
        let mut graph = DirectedGraph::new();
        graph.extend(edges);
        graph
    }
}

impl GraphBase for DirectedGraph {
    fn nodes(&self) -> impl Iterator<Item = NodeId> {
        self.adjacency.keys().copied()
    }

    fn node_count(&self) -> usize {
        self.adjacency.len()
    }
}

impl Successors for DirectedGraph {
    fn successors(&self, node: NodeId) -> impl Iterator<Item = NodeId> {
        DirectedGraph::successors(self, node)
    }

    fn has_edge(&self, from: NodeId, to: NodeId) -> bool {
        DirectedGraph::has_edge(self, from, to)
    }
}

#[cfg(test)]
mod tests {
    use crate::graph::{
        directed::DirectedGraph,
        node::NodeId,
        traits::{GraphBase, Successors},
    };

    fn n(id: u16) -> NodeId {
        NodeId::new(id)
    }

    /// Creates the reference graph: 0 -> 1, 1 -> 2, 0 -> 2, 3 -> 3
    fn create_reference_graph() -> DirectedGraph {
        let mut graph = DirectedGraph::new();
        graph.add_edge(n(0), n(1));
        graph.add_edge(n(1), n(2));
        graph.add_edge(n(0), n(2));
        graph.add_edge(n(3), n(3));
        graph
    }

    fn sorted(mut nodes: Vec<NodeId>) -> Vec<NodeId> {
        nodes.sort();
        nodes
    }

    #[test]
    fn test_new_graph_is_empty() {
        let graph = DirectedGraph::new();
        assert!(graph.is_empty());
        assert_eq!(graph.node_count(), 0);
        assert_eq!(graph.edge_count(), 0);
        assert_eq!(graph.max_node_id(), None);
        assert_eq!(DirectedGraph::default(), graph);
        assert!(DirectedGraph::with_capacity(64).is_empty());
    }

    #[test]
    fn test_has_edges() {
        let graph = create_reference_graph();
        assert_eq!(graph.node_count(), 4);
        assert_eq!(graph.edge_count(), 4);

        assert!(graph.has_edge(n(0), n(1)));
        assert!(graph.has_edge(n(1), n(2)));
        assert!(graph.has_edge(n(0), n(2)));
        assert!(graph.has_edge(n(3), n(3)));
        assert!(!graph.has_edge(n(2), n(0)));
        assert!(!graph.has_edge(n(1), n(0)));
    }

    #[test]
    fn test_add_edge_registers_target() {
        let mut graph = DirectedGraph::new();
        graph.add_edge(n(5), n(9));

        assert!(graph.contains_node(n(9)));
        assert_eq!(graph.out_degree(n(9)), 0);
        assert_eq!(sorted(graph.nodes().collect()), vec![n(5), n(9)]);
    }

    #[test]
    fn test_add_edge_idempotent() {
        let mut graph = DirectedGraph::new();
        assert!(graph.add_edge(n(0), n(1)));
        assert!(!graph.add_edge(n(0), n(1)));
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn test_successors() {
        let graph = create_reference_graph();

        assert_eq!(sorted(graph.successors(n(0)).collect()), vec![n(1), n(2)]);
        assert_eq!(graph.successors(n(1)).collect::<Vec<_>>(), vec![n(2)]);
        assert!(graph.successors(n(2)).next().is_none());
    }

    #[test]
    fn test_unknown_node_is_edgeless() {
        let graph = create_reference_graph();

        assert!(graph.successors(n(42)).next().is_none());
        assert!(!graph.has_edge(n(42), n(0)));
        assert_eq!(graph.out_degree(n(42)), 0);
        assert!(!graph.contains_node(n(42)));
    }

    #[test]
    fn test_remove_edge() {
        let mut graph = create_reference_graph();

        assert!(graph.remove_edge(n(0), n(2)));
        assert!(!graph.has_edge(n(0), n(2)));
        assert_eq!(graph.edge_count(), 3);
        assert_eq!(graph.node_count(), 4);
    }

    #[test]
    fn test_remove_edge_missing_is_noop() {
        let mut graph = create_reference_graph();

        assert!(!graph.remove_edge(n(2), n(0)));
        assert!(!graph.remove_edge(n(99), n(0)));
        assert_eq!(graph.edge_count(), 4);
        assert_eq!(graph.node_count(), 4);
    }

    #[test]
    fn test_remove_last_edge_keeps_nodes() {
        let mut graph = DirectedGraph::new();
        graph.add_edge(n(0), n(1));
        graph.remove_edge(n(0), n(1));

        assert_eq!(graph.edge_count(), 0);
        assert_eq!(sorted(graph.nodes().collect()), vec![n(0), n(1)]);
    }

    #[test]
    fn test_nodes_view() {
        let graph = create_reference_graph();
        assert_eq!(
            sorted(graph.nodes().collect()),
            vec![n(0), n(1), n(2), n(3)]
        );
        assert_eq!(graph.max_node_id(), Some(n(3)));
    }

    #[test]
    fn test_from_iterator() {
        let graph: DirectedGraph = [(n(0), n(1)), (n(1), n(2)), (n(0), n(1))]
            .into_iter()
            .collect();

        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.edge_count(), 2);
    }

    #[test]
    fn test_compile_is_snapshot() {
        let mut graph = create_reference_graph();
        let compiled = graph.compile();

        graph.add_edge(n(2), n(0));
        graph.remove_edge(n(0), n(1));

        assert!(compiled.has_edge(n(0), n(1)));
        assert!(!compiled.has_edge(n(2), n(0)));
        assert_eq!(compiled.edge_count(), 4);
    }

    #[test]
    fn test_trait_impls_match_inherent() {
        fn via_traits<G: Successors>(g: &G, node: NodeId) -> (usize, Vec<NodeId>, bool) {
            let mut succ: Vec<NodeId> = g.successors(node).collect();
            succ.sort();
            (g.node_count(), succ, g.has_edge(node, NodeId::new(2)))
        }

        let graph = create_reference_graph();
        assert_eq!(via_traits(&graph, n(0)), (4, vec![n(1), n(2)], true));
        assert_eq!(GraphBase::nodes(&graph).count(), 4);
    }
}
