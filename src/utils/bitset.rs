//! A bit vector for efficient set operations.
//!
//! This module provides a compact bit set for tracking sets of entities
//! identified by small integers, such as node identifiers. Graph traversals use
//! it as their visited set and compiled graphs use it to record which
//! identifiers appear as edge destinations.
//!
//! # Example
//!
//! ```rust
//! use compactgraph::utils::BitSet;
//!
//! let mut set = BitSet::new(100);
//! assert!(set.insert(50));
//! assert!(!set.insert(50));
//!
//! assert!(set.contains(50));
//! assert_eq!(set.count(), 1);
//! ```

/// A bit vector for efficient set operations.
///
/// Stores 64 elements per word. The capacity is fixed at construction.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct BitSet {
    /// The bits, stored as a vector of words.
    words: Vec<u64>,
    /// The number of bits in the set.
    len: usize,
}

impl BitSet {
    /// Creates a new empty bit set with the given capacity.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let num_words = capacity.div_ceil(64);
        Self {
            words: vec![0; num_words],
            len: capacity,
        }
    }

    /// Returns the capacity of this bit set.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the bit set has no bits set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.iter().all(|&w| w == 0)
    }

    /// Sets the bit at the given index.
    ///
    /// Returns `true` if the bit was previously clear.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.len()`.
    pub fn insert(&mut self, index: usize) -> bool {
        assert!(index < self.len, "index out of bounds");
        let word = &mut self.words[index / 64];
        let mask = 1u64 << (index % 64);
        let was_clear = *word & mask == 0;
        *word |= mask;
        was_clear
    }

    /// Returns `true` if the bit at the given index is set.
    ///
    /// Indices at or beyond the capacity are reported as not set.
    #[must_use]
    pub fn contains(&self, index: usize) -> bool {
        if index >= self.len {
            return false;
        }
        (self.words[index / 64] & (1u64 << (index % 64))) != 0
    }

    /// Returns the number of bits set.
    #[must_use]
    pub fn count(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// Returns an iterator over the indices of set bits.
    pub fn iter(&self) -> BitSetIter<'_> {
        BitSetIter {
            set: self,
            word_idx: 0,
            bit_idx: 0,
        }
    }
}

impl std::fmt::Debug for BitSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// Iterator over the set bits in a `BitSet`.
pub struct BitSetIter<'a> {
    set: &'a BitSet,
    word_idx: usize,
    bit_idx: usize,
}

impl Iterator for BitSetIter<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        while self.word_idx < self.set.words.len() {
            // Bits below bit_idx in this word have already been yielded
            let remaining = self.set.words[self.word_idx]
                .checked_shr(self.bit_idx as u32)
                .unwrap_or(0);
            if remaining != 0 {
                let bit = self.bit_idx + remaining.trailing_zeros() as usize;
                let idx = self.word_idx * 64 + bit;
                if idx >= self.set.len {
                    return None;
                }
                self.bit_idx = bit + 1;
                return Some(idx);
            }
            self.word_idx += 1;
            self.bit_idx = 0;
        }
        None
    }
}
