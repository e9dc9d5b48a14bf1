//! Byte frequency counting.

use crate::symbol::{BITS_PER_WORD, SYMBOL_COUNT, Symbol};
use oxihuff_core::BitReader;
use oxihuff_core::error::Result;
use std::io::Read;

/// Occurrence count per symbol.
///
/// The sentinel always has a count of exactly 1, whatever the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: [u64; SYMBOL_COUNT],
}

impl FrequencyTable {
    /// Count every byte left in `reader`.
    ///
    /// The reader is consumed to end of data; rewind it before reading the
    /// input a second time.
    pub fn count<R: Read>(reader: &mut BitReader<R>) -> Result<Self> {
        let mut counts = [0u64; SYMBOL_COUNT];

        while let Some(value) = reader.try_read_bits(BITS_PER_WORD)? {
            counts[value as usize] += 1;
        }

        Ok(Self::with_eof(counts))
    }

    /// Count the bytes of an in-memory buffer.
    pub fn from_bytes(data: &[u8]) -> Self {
        let mut counts = [0u64; SYMBOL_COUNT];
        for &byte in data {
            counts[byte as usize] += 1;
        }
        Self::with_eof(counts)
    }

    /// Build a table from explicit byte counts (at most 256 entries).
    ///
    /// Handy for exercising the tree builder on a chosen distribution.
    pub fn from_counts(byte_counts: &[u64]) -> Self {
        let mut counts = [0u64; SYMBOL_COUNT];
        for (slot, &count) in counts.iter_mut().zip(byte_counts.iter().take(256)) {
            *slot = count;
        }
        Self::with_eof(counts)
    }

    fn with_eof(mut counts: [u64; SYMBOL_COUNT]) -> Self {
        counts[Symbol::EOF.index()] = 1;
        Self { counts }
    }

    /// Count for one symbol.
    pub fn get(&self, symbol: Symbol) -> u64 {
        self.counts[symbol.index()]
    }

    /// Symbols with a positive count, in ascending symbol order.
    pub fn iter_nonzero(&self) -> impl Iterator<Item = (Symbol, u64)> + '_ {
        self.counts
            .iter()
            .enumerate()
            .filter(|&(_, &count)| count > 0)
            .filter_map(|(i, &count)| Symbol::new(i as u16).map(|s| (s, count)))
    }

    /// Number of symbols with a positive count (sentinel included).
    pub fn distinct(&self) -> usize {
        self.counts.iter().filter(|&&c| c > 0).count()
    }

    /// Number of input bytes counted (sentinel excluded).
    pub fn total(&self) -> u64 {
        self.counts[..SYMBOL_COUNT - 1].iter().sum()
    }
}
