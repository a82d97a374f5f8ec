// Copyright 2025 Johann Kempter
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0

#![doc(html_no_source)]
#![deny(missing_docs)]
#![deny(unsafe_code)]

//! # compactgraph
//!
//! A directed-graph library with two representations of the same graph: a mutable,
//! hash-based [`DirectedGraph`](graph::DirectedGraph) for construction, and an
//! immutable, compressed [`CompiledGraph`](graph::CompiledGraph) for fast traversal.
//! Depth-first, breadth-first and topological traversals are written once against
//! a small trait contract and run over either representation.
//!
//! ## Features
//!
//! - **Cheap editing** - Expected O(1) edge insertion, removal and lookup
//! - **Compact traversal** - One contiguous, per-node sorted destinations array
//! - **Lazy algorithms** - Every traversal is an iterator; stop whenever you like
//! - **Static dispatch** - Algorithms are generic over [`graph::Successors`]
//! - **Graphviz export** - Deterministic DOT output for compiled graphs
//!
//! ## Quick Start
//!
//! ```rust
//! use compactgraph::prelude::*;
//!
//! let mut graph = DirectedGraph::new();
//! graph.add_edge(NodeId::new(0), NodeId::new(1));
//! graph.add_edge(NodeId::new(1), NodeId::new(2));
//! graph.add_edge(NodeId::new(0), NodeId::new(2));
//!
//! let compiled = graph.compile();
//! assert_eq!(compiled.successor_slice(NodeId::new(0)), &[NodeId::new(1), NodeId::new(2)]);
//!
//! let order = compiled.topological_sort().into_result()?;
//! assert_eq!(order, vec![NodeId::new(0), NodeId::new(1), NodeId::new(2)]);
//!
//! let reachable: Vec<NodeId> = compiled.bfs(NodeId::new(1)).collect();
//! assert_eq!(reachable, vec![NodeId::new(1), NodeId::new(2)]);
//! # Ok::<(), compactgraph::Error>(())
//! ```
//!
//! ## Logging
//!
//! The library emits records through the [`log`](https://docs.rs/log) facade:
//! `debug` for compilation and ordering summaries, `warn` when compilation meets
//! a sparse identifier range. No logger is installed; applications choose their
//! own.
//!
//! ## Error Handling
//!
//! Core operations are infallible. The checked surfaces return [`Result`]:
//!
//! ```rust
//! use compactgraph::{graph::{CompileConfig, DirectedGraph, NodeId}, Error};
//!
//! let mut graph = DirectedGraph::new();
//! graph.add_edge(NodeId::new(0), NodeId::new(50_000));
//!
//! match graph.compile_with(&CompileConfig::strict()) {
//!     Ok(_) => unreachable!(),
//!     Err(Error::SparseIdentifiers { slots, .. }) => assert_eq!(slots, 50_002),
//!     Err(e) => panic!("unexpected error: {e}"),
//! }
//! ```
//!
//! ## Testing
//!
//! ```bash
//! cargo test
//! cargo bench
//! ```

mod error;

/// Convenient re-exports of the most commonly used types and traits.
///
/// # Example
///
/// ```rust
/// use compactgraph::prelude::*;
///
/// let graph: DirectedGraph = [(NodeId::new(0), NodeId::new(1))].into_iter().collect();
/// assert_eq!(graph.dfs(NodeId::new(0)).count(), 2);
/// ```
pub mod prelude;

/// Graph representations, traversal algorithms and DOT export.
pub mod graph;

/// Shared helpers: bit sets and DOT identifier formatting.
pub mod utils;

/// A type alias for [`std::result::Result<T, Error>`] where the error type is always [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// `compactgraph` Error type
///
/// Returned only by the checked operations; see [`Error`] for the sources.
pub use error::Error;
