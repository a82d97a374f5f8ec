//! Compact, read-only graph representation.
//!
//! This module provides [`CompiledGraph`], a compressed-sparse-row style snapshot of
//! a [`DirectedGraph`]. All successor lists live in one flat destinations array,
//! each node's range sorted ascending, with an offsets array indexed directly by
//! raw node identifier.
//!
//! # Memory Layout
//!
//! ```text
//! offsets:       [0, 2, 3, 3, 4]        (max_node_id + 2 entries)
//! destinations:  [1, 2, 2, 3]
//!                 ^^^^  ^  ^
//!                 n0    n1 n3           (n2 has the empty range 3..3)
//! ```
//!
//! Node `n`'s successors are `destinations[offsets[n]..offsets[n + 1]]`. This gives
//! O(1) range lookup, O(log k) edge tests by binary search over a node's k
//! successors, and sequential memory access for neighbor scans.
//!
//! # Sparse Identifiers
//!
//! The offsets array is sized by the largest identifier, not by the node count. A
//! graph with a single edge between 0 and 65000 allocates 65002 offset slots.
//! [`CompileConfig`] can warn about or reject such graphs; plain
//! [`DirectedGraph::compile`] keeps the dense layout unconditionally.

use log::{debug, warn};

use crate::{
    graph::{
        config::CompileConfig,
        directed::DirectedGraph,
        edge::Edge,
        node::NodeId,
        traits::{GraphBase, Successors},
    },
    utils::BitSet,
};

/// An immutable, compacted directed graph.
///
/// Built once from a point-in-time snapshot of a [`DirectedGraph`] via
/// [`DirectedGraph::compile`]; it owns its arrays and never observes later
/// edits to its source. Compilation visits identifiers in ascending numeric
/// order, so the same edge set always compiles to identical arrays regardless of
/// the order in which edges were inserted.
///
/// Node existence is reconstructed rather than stored: a node exists if it has an
/// outgoing edge or appears as a destination. A node that lost all of its edges
/// in the source graph therefore does not appear in the compiled form.
///
/// # Thread Safety
///
/// `CompiledGraph` is [`Send`] and [`Sync`] and is never mutated after
/// construction, so it can be shared freely between readers.
///
/// # Examples
///
/// ```rust
/// use compactgraph::graph::{DirectedGraph, NodeId};
///
/// let mut graph = DirectedGraph::new();
/// graph.add_edge(NodeId::new(0), NodeId::new(2));
/// graph.add_edge(NodeId::new(0), NodeId::new(1));
///
/// let compiled = graph.compile();
/// assert_eq!(compiled.successor_slice(NodeId::new(0)), &[NodeId::new(1), NodeId::new(2)]);
/// assert!(compiled.has_edge(NodeId::new(0), NodeId::new(2)));
/// assert_eq!(compiled.out_degree(NodeId::new(5)), 0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledGraph {
    /// Start of each node's destination range, plus a trailing sentinel
    offsets: Vec<usize>,
    /// Concatenated, per-node sorted successor lists
    destinations: Vec<NodeId>,
    /// Largest identifier covered by `offsets`
    max_node_id: NodeId,
    /// Identifiers that appear anywhere in `destinations`
    has_incoming: BitSet,
}

impl CompiledGraph {
    /// Compacts `graph`. Limits in `config` must already have been checked.
    pub(crate) fn build(graph: &DirectedGraph, config: &CompileConfig) -> Self {
        let max_node_id = graph.max_node_id().unwrap_or_default();
        let slots = CompileConfig::offset_slots(max_node_id);

        if config.is_sparse(slots, graph.node_count()) {
            warn!(
                "compiling sparse graph: {} offset slots for {} nodes (max node id {})",
                slots,
                graph.node_count(),
                max_node_id
            );
        }

        let mut offsets = vec![0usize; slots];
        let mut destinations = Vec::with_capacity(graph.edge_count());
        let mut has_incoming = BitSet::new(max_node_id.index() + 1);
        let mut sorted = Vec::new();

        for id in 0..=max_node_id.raw() {
            let node = NodeId::new(id);
            offsets[node.index()] = destinations.len();

            // Identifiers never added to the source graph get an empty range
            let Some(successors) = graph.successor_set(node) else {
                continue;
            };

            sorted.clear();
            sorted.extend(successors.iter().copied());
            sorted.sort_unstable();

            for succ in &sorted {
                has_incoming.insert(succ.index());
            }
            destinations.extend_from_slice(&sorted);
        }
        offsets[slots - 1] = destinations.len();

        debug!(
            "compiled graph: {} nodes, {} edges, {} offset slots",
            graph.node_count(),
            destinations.len(),
            slots
        );

        CompiledGraph {
            offsets,
            destinations,
            max_node_id,
            has_incoming,
        }
    }

    /// Returns the sorted successor range of `node` as a slice.
    ///
    /// Identifiers beyond [`max_node_id`](Self::max_node_id) yield an empty slice.
    #[must_use]
    pub fn successor_slice(&self, node: NodeId) -> &[NodeId] {
        if node > self.max_node_id {
            return &[];
        }
        let start = self.offsets[node.index()];
        let end = self.offsets[node.index() + 1];
        &self.destinations[start..end]
    }

    /// Returns an iterator over the successors of `node`, in ascending order.
    pub fn successors(&self, node: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.successor_slice(node).iter().copied()
    }

    /// Returns `true` if the edge `(from, to)` exists.
    ///
    /// Binary-searches `from`'s sorted successor range.
    #[must_use]
    pub fn has_edge(&self, from: NodeId, to: NodeId) -> bool {
        self.successor_slice(from).binary_search(&to).is_ok()
    }

    /// Returns the number of outgoing edges of `node`.
    #[must_use]
    pub fn out_degree(&self, node: NodeId) -> usize {
        self.successor_slice(node).len()
    }

    /// Returns `true` if `node` has an outgoing edge or is the target of one.
    #[must_use]
    pub fn contains_node(&self, node: NodeId) -> bool {
        self.out_degree(node) != 0 || self.has_incoming.contains(node.index())
    }

    /// Returns an iterator over all nodes, in ascending order.
    ///
    /// Scans `0..=max_node_id` and keeps the identifiers accepted by
    /// [`contains_node`](Self::contains_node).
    pub fn nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        (0..=self.max_node_id.raw())
            .map(NodeId::new)
            .filter(move |&node| self.contains_node(node))
    }

    /// Returns an iterator over all edges, ascending by `from` then by `to`.
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        (0..=self.max_node_id.raw()).map(NodeId::new).flat_map(move |from| {
            self.successor_slice(from)
                .iter()
                .map(move |&to| Edge::new(from, to))
        })
    }

    /// Returns the number of nodes yielded by [`nodes`](Self::nodes).
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes().count()
    }

    /// Returns the number of edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.destinations.len()
    }

    /// Returns `true` if the graph has no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.destinations.is_empty()
    }

    /// Returns the largest identifier covered by the offset table.
    ///
    /// This is 0 for a graph compiled from an empty source.
    #[must_use]
    pub fn max_node_id(&self) -> NodeId {
        self.max_node_id
    }

    /// Returns the raw offsets array (`max_node_id + 2` entries).
    #[must_use]
    pub fn offsets(&self) -> &[usize] {
        &self.offsets
    }

    /// Returns the raw destinations array.
    #[must_use]
    pub fn destinations(&self) -> &[NodeId] {
        &self.destinations
    }
}

impl GraphBase for CompiledGraph {
    fn nodes(&self) -> impl Iterator<Item = NodeId> {
        CompiledGraph::nodes(self)
    }
}

impl Successors for CompiledGraph {
    fn successors(&self, node: NodeId) -> impl Iterator<Item = NodeId> {
        CompiledGraph::successors(self, node)
    }

    fn has_edge(&self, from: NodeId, to: NodeId) -> bool {
        CompiledGraph::has_edge(self, from, to)
    }
}
