//! Tree header serialization.
//!
//! The header is a pre-order walk of the tree shape:
//!
//! ```text
//! internal node : 0 <left subtree> <right subtree>
//! leaf          : 1 <symbol, 9 bits>
//! ```
//!
//! Weights are not stored. The writer and reader must agree on the 9-bit
//! field width; [`SYMBOL_BITS`] is the single source for both.

use crate::code::MAX_CODE_BITS;
use crate::symbol::{SYMBOL_BITS, Symbol};
use crate::tree::HuffNode;
use oxihuff_core::error::{OxiHuffError, Result};
use oxihuff_core::{BitReader, BitWriter};
use std::io::{Read, Write};

/// Deepest nesting the reader accepts.
pub const MAX_TREE_DEPTH: usize = MAX_CODE_BITS;

/// Write the shape of `root` to the stream.
pub fn write_header<W: Write>(root: &HuffNode, writer: &mut BitWriter<W>) -> Result<()> {
    match root {
        HuffNode::Leaf { symbol, .. } => {
            writer.write_bit(true)?;
            writer.write_bits(symbol.value() as u32, SYMBOL_BITS)
        }
        HuffNode::Internal { left, right, .. } => {
            writer.write_bit(false)?;
            write_header(left, writer)?;
            write_header(right, writer)
        }
    }
}

/// Number of bits [`write_header`] produces for `root`.
pub fn header_bits(root: &HuffNode) -> u64 {
    let leaves = root.leaf_count() as u64;
    // one flag per node (2n - 1 nodes) plus a symbol field per leaf
    (2 * leaves - 1) + leaves * SYMBOL_BITS as u64
}

/// Read a tree shape from the stream.
///
/// Fails with a truncation error if the stream ends inside the header, and
/// with a format error on an out-of-range symbol or implausibly deep nesting.
pub fn read_header<R: Read>(reader: &mut BitReader<R>) -> Result<HuffNode> {
    read_node(reader, 0)
}

fn read_node<R: Read>(reader: &mut BitReader<R>, depth: usize) -> Result<HuffNode> {
    if depth > MAX_TREE_DEPTH {
        return Err(OxiHuffError::invalid_header(format!(
            "tree nesting exceeds {} levels at bit position {}",
            MAX_TREE_DEPTH,
            reader.bit_position()
        )));
    }

    if reader.read_bit()? {
        let value = reader.read_bits(SYMBOL_BITS)? as u16;
        let symbol = Symbol::new(value)
            .ok_or_else(|| OxiHuffError::invalid_symbol(value, reader.bit_position()))?;
        Ok(HuffNode::leaf(symbol, 0))
    } else {
        let left = read_node(reader, depth + 1)?;
        let right = read_node(reader, depth + 1)?;
        Ok(HuffNode::internal(left, right))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frequency::FrequencyTable;
    use std::io::Cursor;

    fn header_bytes(root: &HuffNode) -> Vec<u8> {
        let mut writer = BitWriter::new(Vec::new());
        write_header(root, &mut writer).unwrap();
        assert_eq!(writer.bits_written(), header_bits(root));
        writer.finish().unwrap()
    }

    #[test]
    fn test_write_single_leaf() {
        // 1 + 100000000 (256) -> 1100_0000 0000_0000 (padded)
        let bytes = header_bytes(&HuffNode::leaf(Symbol::EOF, 1));
        assert_eq!(bytes, vec![0xC0, 0x00]);
    }

    #[test]
    fn test_write_aaab_layout() {
        let tree = HuffNode::build(&FrequencyTable::from_bytes(b"AAAB"));
        // 0 0 1[066] 1[256] 1[065]
        let mut expected = BitWriter::new(Vec::new());
        for (bits, count) in [
            (0, 1),
            (0, 1),
            (1, 1),
            (66, 9),
            (1, 1),
            (256, 9),
            (1, 1),
            (65, 9),
        ] {
            expected.write_bits(bits, count).unwrap();
        }
        assert_eq!(header_bytes(&tree), expected.finish().unwrap());
        assert_eq!(header_bits(&tree), 32);
    }

    #[test]
    fn test_header_roundtrip() {
        let cases: [&[u8]; 5] = [
            b"",
            b"A",
            b"AAAB",
            b"abracadabra",
            &[0, 255, 255, 128, 1, 1, 1],
        ];
        for data in cases {
            let tree = HuffNode::build(&FrequencyTable::from_bytes(data));
            let bytes = header_bytes(&tree);
            let decoded = read_header(&mut BitReader::new(Cursor::new(bytes))).unwrap();
            assert!(decoded.structurally_eq(&tree));
            assert_eq!(decoded.weight(), 0);
        }
    }

    #[test]
    fn test_truncated_header() {
        let tree = HuffNode::build(&FrequencyTable::from_bytes(b"hello world"));
        let bytes = header_bytes(&tree);

        for cut in 0..bytes.len() - 1 {
            let err = read_header(&mut BitReader::new(Cursor::new(&bytes[..cut]))).unwrap_err();
            assert!(err.is_truncated(), "cut at {}: {:?}", cut, err);
        }
    }

    #[test]
    fn test_invalid_symbol() {
        // leaf flag then 9-bit value 300
        let mut writer = BitWriter::new(Vec::new());
        writer.write_bit(true).unwrap();
        writer.write_bits(300, 9).unwrap();
        let bytes = writer.finish().unwrap();

        let err = read_header(&mut BitReader::new(Cursor::new(bytes))).unwrap_err();
        assert!(matches!(
            err,
            OxiHuffError::InvalidSymbol { symbol: 300, .. }
        ));
    }

    #[test]
    fn test_runaway_nesting() {
        // nothing but internal-node flags
        let bytes = vec![0u8; 64];
        let err = read_header(&mut BitReader::new(Cursor::new(bytes))).unwrap_err();
        assert!(matches!(err, OxiHuffError::InvalidHeader { .. }));
    }
}
