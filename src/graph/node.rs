//! Node identifier implementation for directed graphs.
//!
//! This module provides the [`NodeId`] type, a strongly-typed identifier for nodes
//! within a directed graph. Identifiers are caller-chosen 16-bit values rather than
//! sequentially assigned handles: the same numeric value names the same node in a
//! [`DirectedGraph`](crate::graph::DirectedGraph) and in every
//! [`CompiledGraph`](crate::graph::CompiledGraph) built from it.

use std::fmt;

/// A strongly-typed identifier for nodes within a directed graph.
///
/// `NodeId` wraps a `u16`. The raw value doubles as an array index into the
/// offset table of a [`CompiledGraph`](crate::graph::CompiledGraph), so identifiers
/// are best kept dense: the compact form allocates one offset slot per value up to
/// the largest identifier in use.
///
/// # Examples
///
/// ```rust
/// use compactgraph::graph::NodeId;
/// use std::collections::HashMap;
///
/// let a = NodeId::new(0);
/// let b = NodeId::from(7u16);
/// assert!(a < b);
/// assert_eq!(b.index(), 7);
///
/// let mut labels: HashMap<NodeId, &str> = HashMap::new();
/// labels.insert(a, "entry");
/// ```
///
/// # Thread Safety
///
/// `NodeId` is [`Copy`], [`Send`], and [`Sync`].
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct NodeId(pub(crate) u16);

impl NodeId {
    /// The largest representable node identifier.
    pub const MAX: NodeId = NodeId(u16::MAX);

    /// Number of distinct node identifiers (the size of the identifier domain).
    pub const DOMAIN_SIZE: usize = u16::MAX as usize + 1;

    /// Creates a new `NodeId` from a raw identifier value.
    ///
    /// # Arguments
    ///
    /// * `id` - The raw node identifier
    ///
    /// # Examples
    ///
    /// ```rust
    /// use compactgraph::graph::NodeId;
    ///
    /// let node = NodeId::new(3);
    /// assert_eq!(node.raw(), 3);
    /// ```
    #[must_use]
    #[inline]
    pub const fn new(id: u16) -> Self {
        NodeId(id)
    }

    /// Returns the identifier widened to `usize`, for indexing per-node arrays.
    #[must_use]
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Returns the raw `u16` identifier.
    #[must_use]
    #[inline]
    pub const fn raw(self) -> u16 {
        self.0
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({})", self.0)
    }
}

impl fmt::Display for NodeId {
    /// Formats the bare numeric identifier, which is also its DOT identifier.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u16> for NodeId {
    #[inline]
    fn from(id: u16) -> Self {
        NodeId(id)
    }
}

impl From<NodeId> for u16 {
    #[inline]
    fn from(node: NodeId) -> Self {
        node.0
    }
}

impl From<NodeId> for usize {
    #[inline]
    fn from(node: NodeId) -> Self {
        node.index()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_node_id_new() {
        let node = NodeId::new(42);
        assert_eq!(node.raw(), 42);
        assert_eq!(node.index(), 42);
    }

    #[test]
    fn test_node_id_ordering() {
        let mut nodes = vec![NodeId::new(3), NodeId::new(1), NodeId::new(2)];
        nodes.sort();
        assert_eq!(nodes, vec![NodeId::new(1), NodeId::new(2), NodeId::new(3)]);
    }

    #[test]
    fn test_node_id_hash() {
        let mut set: HashSet<NodeId> = HashSet::new();
        set.insert(NodeId::new(1));
        set.insert(NodeId::new(2));
        set.insert(NodeId::new(1));

        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_node_id_conversions() {
        let node: NodeId = 123u16.into();
        assert_eq!(u16::from(node), 123);
        assert_eq!(usize::from(node), 123);
    }

    #[test]
    fn test_node_id_formatting() {
        let node = NodeId::new(42);
        assert_eq!(format!("{node:?}"), "NodeId(42)");
        assert_eq!(format!("{node}"), "42");
    }

    #[test]
    fn test_node_id_domain() {
        assert_eq!(NodeId::MAX.index() + 1, NodeId::DOMAIN_SIZE);
        assert_eq!(NodeId::default(), NodeId::new(0));
    }
}
