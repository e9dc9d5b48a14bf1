//! Code table derivation.
//!
//! A symbol's code is the path from the root to its leaf: `0` for every left
//! branch, `1` for every right branch. Codes are kept as bit sequences, never
//! as text, and are written to the output in chunks of up to 32 bits.

use crate::frequency::FrequencyTable;
use crate::symbol::{SYMBOL_COUNT, Symbol};
use crate::tree::HuffNode;
use oxihuff_core::BitWriter;
use oxihuff_core::bitstream::MAX_FIELD_BITS;
use oxihuff_core::error::{OxiHuffError, Result};
use std::fmt;
use std::io::Write;

/// Deepest path a tree over 257 leaves can have.
pub const MAX_CODE_BITS: usize = SYMBOL_COUNT - 1;

const WORDS: usize = MAX_CODE_BITS.div_ceil(64);

/// A variable-length code of up to [`MAX_CODE_BITS`] bits.
///
/// Bits are stored in path order, first bit in the most significant position
/// of the first word.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct BitCode {
    words: [u64; WORDS],
    len: u16,
}

impl BitCode {
    /// The empty code.
    pub const fn new() -> Self {
        Self {
            words: [0; WORDS],
            len: 0,
        }
    }

    /// Build a code from its bits in path order.
    ///
    /// Returns `None` if more than [`MAX_CODE_BITS`] bits are given.
    pub fn from_bits(bits: &[bool]) -> Option<Self> {
        bits.iter()
            .try_fold(Self::new(), |code, &bit| code.with_bit(bit))
    }

    /// Copy of this code with one more bit appended, or `None` when full.
    pub fn with_bit(mut self, bit: bool) -> Option<Self> {
        let len = self.len as usize;
        if len >= MAX_CODE_BITS {
            return None;
        }
        if bit {
            self.words[len / 64] |= 1u64 << (63 - len % 64);
        }
        self.len += 1;
        Some(self)
    }

    /// Number of bits.
    pub fn len(&self) -> usize {
        self.len as usize
    }

    /// True for the empty code.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Bit `index` in path order.
    pub fn bit(&self, index: usize) -> bool {
        debug_assert!(index < self.len());
        (self.words[index / 64] >> (63 - index % 64)) & 1 == 1
    }

    /// Iterate over the bits in path order.
    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        (0..self.len()).map(|i| self.bit(i))
    }

    /// The code as an unsigned number, first bit most significant.
    ///
    /// `None` if the code is longer than 64 bits.
    pub fn value(&self) -> Option<u64> {
        match self.len() {
            0 => Some(0),
            n if n <= 64 => Some(self.words[0] >> (64 - n)),
            _ => None,
        }
    }

    /// True if this code is a prefix of `other` (or equal to it).
    pub fn is_prefix_of(&self, other: &BitCode) -> bool {
        self.len <= other.len && (0..self.len()).all(|i| self.bit(i) == other.bit(i))
    }

    /// Append this code to a bit stream.
    pub fn write_to<W: Write>(&self, writer: &mut BitWriter<W>) -> Result<()> {
        let mut pos = 0;
        while pos < self.len() {
            let count = (self.len() - pos).min(MAX_FIELD_BITS as usize);
            let mut field = 0u32;
            for i in pos..pos + count {
                field = (field << 1) | self.bit(i) as u32;
            }
            writer.write_bits(field, count as u8)?;
            pos += count;
        }
        Ok(())
    }
}

impl fmt::Display for BitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bit in self.iter() {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}

impl fmt::Debug for BitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BitCode({})", self)
    }
}

/// Symbol to code mapping derived from a tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeTable {
    codes: [Option<BitCode>; SYMBOL_COUNT],
}

impl CodeTable {
    /// Derive the code of every leaf of `root`.
    ///
    /// A root that is itself a leaf gets the one-bit code `0`. If a symbol
    /// appears on several leaves, the leftmost one wins.
    pub fn derive(root: &HuffNode) -> Result<Self> {
        let mut table = Self {
            codes: [None; SYMBOL_COUNT],
        };

        if let HuffNode::Leaf { symbol, .. } = root {
            table.codes[symbol.index()] = BitCode::new().with_bit(false);
            return Ok(table);
        }

        table.visit(root, BitCode::new())?;
        Ok(table)
    }

    fn visit(&mut self, node: &HuffNode, path: BitCode) -> Result<()> {
        match node {
            HuffNode::Leaf { symbol, .. } => {
                self.codes[symbol.index()].get_or_insert(path);
                Ok(())
            }
            HuffNode::Internal { left, right, .. } => {
                for (child, bit) in [(left, false), (right, true)] {
                    let path = path.with_bit(bit).ok_or_else(|| {
                        OxiHuffError::invalid_header(format!(
                            "tree deeper than {} levels",
                            MAX_CODE_BITS
                        ))
                    })?;
                    self.visit(child, path)?;
                }
                Ok(())
            }
        }
    }

    /// Code for `symbol`, if it has a leaf.
    pub fn get(&self, symbol: Symbol) -> Option<&BitCode> {
        self.codes[symbol.index()].as_ref()
    }

    /// Symbols with a code, in ascending symbol order.
    pub fn iter(&self) -> impl Iterator<Item = (Symbol, &BitCode)> + '_ {
        self.codes.iter().enumerate().filter_map(|(i, code)| {
            let code = code.as_ref()?;
            Symbol::new(i as u16).map(|s| (s, code))
        })
    }

    /// Number of symbols with a code.
    pub fn len(&self) -> usize {
        self.codes.iter().filter(|c| c.is_some()).count()
    }

    /// True if no symbol has a code.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Total encoded length in bits: sum of count times code length.
    pub fn weighted_length(&self, table: &FrequencyTable) -> u64 {
        self.iter()
            .map(|(symbol, code)| table.get(symbol) * code.len() as u64)
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(s: &str) -> BitCode {
        let bits: Vec<bool> = s.chars().map(|c| c == '1').collect();
        BitCode::from_bits(&bits).unwrap()
    }

    #[test]
    fn test_bitcode_basics() {
        let c = code("101");
        assert_eq!(c.len(), 3);
        assert_eq!(c.value(), Some(5));
        assert_eq!(c.to_string(), "101");
        assert!(BitCode::new().is_empty());
        assert_eq!(BitCode::new().value(), Some(0));
    }

    #[test]
    fn test_bitcode_capacity() {
        let full = BitCode::from_bits(&[true; MAX_CODE_BITS]).unwrap();
        assert_eq!(full.len(), 256);
        assert!(full.with_bit(false).is_none());
        assert!(full.value().is_none());
        assert!(BitCode::from_bits(&[false; MAX_CODE_BITS + 1]).is_none());
    }

    #[test]
    fn test_bitcode_prefix() {
        assert!(code("10").is_prefix_of(&code("101")));
        assert!(code("101").is_prefix_of(&code("101")));
        assert!(!code("11").is_prefix_of(&code("101")));
        assert!(!code("1010").is_prefix_of(&code("101")));
    }

    #[test]
    fn test_write_short_code() {
        let mut writer = BitWriter::new(Vec::new());
        code("101").write_to(&mut writer).unwrap();
        code("11001").write_to(&mut writer).unwrap();
        assert_eq!(writer.finish().unwrap(), vec![0xB9]);
    }

    #[test]
    fn test_write_long_code() {
        // 40 bits: 0xFF00FF00 followed by 0xAA
        let mut bits = Vec::new();
        for byte in [0xFFu8, 0x00, 0xFF, 0x00, 0xAA] {
            for i in (0..8).rev() {
                bits.push((byte >> i) & 1 == 1);
            }
        }
        let long = BitCode::from_bits(&bits).unwrap();

        let mut writer = BitWriter::new(Vec::new());
        long.write_to(&mut writer).unwrap();
        assert_eq!(writer.bits_written(), 40);
        assert_eq!(writer.finish().unwrap(), vec![0xFF, 0x00, 0xFF, 0x00, 0xAA]);
    }

    #[test]
    fn test_derive_aaab() {
        let table = FrequencyTable::from_bytes(b"AAAB");
        let tree = HuffNode::build(&table);
        let codes = CodeTable::derive(&tree).unwrap();

        assert_eq!(codes.get(Symbol::from(b'A')), Some(&code("1")));
        assert_eq!(codes.get(Symbol::from(b'B')), Some(&code("00")));
        assert_eq!(codes.get(Symbol::EOF), Some(&code("01")));
        assert_eq!(codes.get(Symbol::from(b'C')), None);
        assert_eq!(codes.len(), 3);
        // 3*1 + 1*2 + 1*2
        assert_eq!(codes.weighted_length(&table), 7);
    }

    #[test]
    fn test_derive_root_leaf() {
        let codes = CodeTable::derive(&HuffNode::leaf(Symbol::EOF, 1)).unwrap();
        assert_eq!(codes.get(Symbol::EOF), Some(&code("0")));
    }

    #[test]
    fn test_derive_empty_input_tree() {
        let tree = HuffNode::build(&FrequencyTable::from_bytes(&[]));
        let codes = CodeTable::derive(&tree).unwrap();
        assert_eq!(codes.len(), 1);
        assert_eq!(codes.get(Symbol::EOF), Some(&code("0")));
    }

    #[test]
    fn test_codes_are_prefix_free() {
        let data = b"she sells sea shells by the sea shore";
        let codes = CodeTable::derive(&HuffNode::build(&FrequencyTable::from_bytes(data))).unwrap();

        let all: Vec<_> = codes.iter().collect();
        for (i, (_, a)) in all.iter().enumerate() {
            assert!(!a.is_empty());
            for (j, (_, b)) in all.iter().enumerate() {
                if i != j {
                    assert!(!a.is_prefix_of(b), "{} is a prefix of {}", a, b);
                }
            }
        }
    }

    #[test]
    fn test_derive_too_deep() {
        // A left-leaning chain one level deeper than any real tree
        let mut node = HuffNode::leaf(Symbol::EOF, 0);
        for i in 0..=MAX_CODE_BITS {
            node = HuffNode::internal(node, HuffNode::leaf(Symbol::from_byte(i as u8), 0));
        }
        let err = CodeTable::derive(&node).unwrap_err();
        assert!(err.is_format_error());
    }
}
