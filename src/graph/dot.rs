//! DOT (Graphviz) export.
//!
//! Renders any [`Successors`] graph in the DOT language using only the public read
//! contract. The layout is fixed:
//!
//! ```text
//! digraph G {
//!     0;
//!     1;
//!     0 -> 1;
//! }
//! ```
//!
//! One node statement per [`nodes`](crate::graph::GraphBase::nodes) element in
//! yielded order, then one edge statement per node and successor in iteration
//! order, each indented by four spaces. A [`CompiledGraph`](crate::graph::CompiledGraph)
//! therefore renders deterministically; a
//! [`DirectedGraph`](crate::graph::DirectedGraph) renders in hash order.

use std::{fmt::Write as _, io};

use crate::{graph::Successors, utils::dot_identifier, Result};

/// Renders `graph` as a DOT digraph named `G`.
///
/// # Examples
///
/// ```rust
/// use compactgraph::graph::{to_dot, DirectedGraph, NodeId};
///
/// let mut graph = DirectedGraph::new();
/// graph.add_edge(NodeId::new(0), NodeId::new(1));
///
/// assert_eq!(
///     to_dot(&graph.compile()),
///     "digraph G {\n    0;\n    1;\n    0 -> 1;\n}\n"
/// );
/// ```
#[must_use]
pub fn to_dot<G: Successors>(graph: &G) -> String {
    to_dot_named(graph, "G")
}

/// Renders `graph` as a DOT digraph with the given name.
///
/// Names that are not plain DOT identifiers are quoted and escaped.
#[must_use]
pub fn to_dot_named<G: Successors>(graph: &G, name: &str) -> String {
    let mut dot = String::new();

    let _ = writeln!(dot, "digraph {} {{", dot_identifier(name));
    for node in graph.nodes() {
        let _ = writeln!(dot, "    {node};");
    }
    for node in graph.nodes() {
        for succ in graph.successors(node) {
            let _ = writeln!(dot, "    {node} -> {succ};");
        }
    }
    dot.push_str("}\n");

    dot
}

/// Streams the DOT rendering of `graph` into `writer`.
///
/// Produces the same text as [`to_dot_named`] without building it in memory.
///
/// # Errors
///
/// Returns [`Error::Io`](crate::Error::Io) if writing fails.
pub fn write_dot<G: Successors, W: io::Write>(graph: &G, name: &str, mut writer: W) -> Result<()> {
    writeln!(writer, "digraph {} {{", dot_identifier(name))?;
    for node in graph.nodes() {
        writeln!(writer, "    {node};")?;
    }
    for node in graph.nodes() {
        for succ in graph.successors(node) {
            writeln!(writer, "    {node} -> {succ};")?;
        }
    }
    writer.write_all(b"}\n")?;
    writer.flush()?;

    Ok(())
}
