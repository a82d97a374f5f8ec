//! Support code shared by the graph types.
//!
//! - [`BitSet`] - Fixed-capacity bit set used for visited and presence tracking
//! - [`escape_dot`], [`is_plain_identifier`], [`dot_identifier`] - DOT identifier helpers

mod bitset;
mod dot;

pub use bitset::{BitSet, BitSetIter};
pub use dot::{dot_identifier, escape_dot, is_plain_identifier};
