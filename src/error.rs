use thiserror::Error;

/// The error type for the fallible operations of this library.
///
/// Core graph operations never fail: unknown nodes are edgeless, removing a
/// missing edge is a no-op, and a cyclic graph yields an order that reports
/// itself invalid. Errors only come from the opt-in checked surfaces.
///
/// # Error Sources
///
/// - [`Error::CycleDetected`] - [`TopologicalOrder::into_result`](crate::graph::algorithms::TopologicalOrder::into_result)
/// - [`Error::SparseIdentifiers`] - [`DirectedGraph::compile_with`](crate::graph::DirectedGraph::compile_with)
/// - [`Error::Io`] - [`write_dot`](crate::graph::write_dot)
///
/// # Examples
///
/// ```rust
/// use compactgraph::{graph::{DirectedGraph, GraphTraversal, NodeId}, Error};
///
/// let mut graph = DirectedGraph::new();
/// graph.add_edge(NodeId::new(0), NodeId::new(1));
/// graph.add_edge(NodeId::new(1), NodeId::new(0));
///
/// match graph.topological_sort().into_result() {
///     Ok(order) => println!("order: {order:?}"),
///     Err(Error::CycleDetected { sorted, total }) => {
///         assert_eq!((sorted, total), (0, 2));
///     }
///     Err(e) => eprintln!("other error: {e}"),
/// }
/// ```
#[derive(Error, Debug)]
pub enum Error {
    /// The graph contains a cycle, so no complete topological order exists.
    ///
    /// # Fields
    ///
    /// * `sorted` - Number of nodes Kahn's algorithm managed to order
    /// * `total` - Number of nodes in the graph
    #[error("graph contains a cycle - ordered {sorted} of {total} nodes")]
    CycleDetected {
        /// Number of nodes that were ordered
        sorted: usize,
        /// Number of nodes in the graph
        total: usize,
    },

    /// Compaction would allocate more offset slots than the configured limit.
    ///
    /// The compact layout needs one slot per identifier up to the largest one in
    /// use, so a few nodes with large identifiers can require a large table.
    #[error("sparse identifiers - max node id {max_node_id} needs {slots} offset slots for {node_count} nodes")]
    SparseIdentifiers {
        /// Largest node identifier in the graph
        max_node_id: u16,
        /// Number of nodes in the graph
        node_count: usize,
        /// Offset slots the compact layout would need
        slots: usize,
    },

    /// I/O error while writing output.
    #[error("{0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = Error::CycleDetected {
            sorted: 3,
            total: 4,
        };
        assert_eq!(
            err.to_string(),
            "graph contains a cycle - ordered 3 of 4 nodes"
        );

        let err = Error::SparseIdentifiers {
            max_node_id: 65_000,
            node_count: 2,
            slots: 65_002,
        };
        assert_eq!(
            err.to_string(),
            "sparse identifiers - max node id 65000 needs 65002 offset slots for 2 nodes"
        );
    }

    #[test]
    fn test_io_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
        assert_eq!(err.to_string(), "closed");
    }
}
