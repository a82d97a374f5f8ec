//! Configuration for graph compaction.
//!
//! The compact representation sizes its offset table by the largest node
//! identifier, not by the number of nodes. Dense identifiers make this a cheap
//! O(1) index; sparse identifiers (say, one edge between 0 and 65000) waste
//! memory proportional to the identifier range. [`CompileConfig`] controls how
//! compaction reacts to such distributions.

use crate::{
    graph::{directed::DirectedGraph, NodeId},
    Error, Result,
};

/// Configuration for [`DirectedGraph::compile_with`].
///
/// # Examples
///
/// ```rust
/// use compactgraph::graph::{CompileConfig, DirectedGraph, NodeId};
///
/// let mut graph = DirectedGraph::new();
/// graph.add_edge(NodeId::new(0), NodeId::new(60_000));
///
/// // The default keeps the dense layout regardless of sparsity
/// assert!(graph.compile_with(&CompileConfig::default()).is_ok());
///
/// // The strict preset refuses to allocate 60k offset slots for two nodes
/// assert!(graph.compile_with(&CompileConfig::strict()).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompileConfig {
    /// Upper bound on the number of offset slots (`max_node_id + 2`).
    /// `None` disables the check (default: `None`)
    pub max_offset_slots: Option<usize>,

    /// Log a warning when offset slots exceed `ratio * node_count`.
    /// 0 disables the warning (default: 16)
    pub sparsity_warning_ratio: usize,
}

impl Default for CompileConfig {
    fn default() -> Self {
        Self {
            max_offset_slots: None,
            sparsity_warning_ratio: 16,
        }
    }
}

impl CompileConfig {
    /// Slot limit used by [`strict`](Self::strict).
    pub const STRICT_MAX_OFFSET_SLOTS: usize = 4096;

    /// Creates a configuration that rejects graphs whose offset table would exceed
    /// [`STRICT_MAX_OFFSET_SLOTS`](Self::STRICT_MAX_OFFSET_SLOTS) slots.
    #[must_use]
    pub fn strict() -> Self {
        Self {
            max_offset_slots: Some(Self::STRICT_MAX_OFFSET_SLOTS),
            ..Self::default()
        }
    }

    /// Creates a configuration with the sparsity warning disabled.
    #[must_use]
    pub fn quiet() -> Self {
        Self {
            sparsity_warning_ratio: 0,
            ..Self::default()
        }
    }

    /// Sets the maximum number of offset slots.
    #[must_use]
    pub fn with_max_offset_slots(mut self, slots: usize) -> Self {
        self.max_offset_slots = Some(slots);
        self
    }

    /// Returns the number of offset slots a graph whose largest identifier is
    /// `max_node_id` compiles to.
    #[must_use]
    pub const fn offset_slots(max_node_id: NodeId) -> usize {
        max_node_id.index() + 2
    }

    /// Returns `true` if `slots` offset slots for `node_count` nodes is sparse
    /// enough to warn about.
    #[must_use]
    pub fn is_sparse(&self, slots: usize, node_count: usize) -> bool {
        self.sparsity_warning_ratio != 0
            && slots > self.sparsity_warning_ratio.saturating_mul(node_count.max(1))
    }

    /// Validates `graph` against the configured limits.
    pub(crate) fn check(&self, graph: &DirectedGraph) -> Result<()> {
        let Some(limit) = self.max_offset_slots else {
            return Ok(());
        };

        let max_node_id = graph.max_node_id().unwrap_or_default();
        let slots = Self::offset_slots(max_node_id);
        if slots > limit {
            return Err(Error::SparseIdentifiers {
                max_node_id: max_node_id.raw(),
                node_count: graph.node_count(),
                slots,
            });
        }

        Ok(())
    }
}
