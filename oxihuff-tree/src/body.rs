//! Compressed body transcoding.
//!
//! Encoding replaces every input byte with its code and ends with the code of
//! the sentinel. Decoding walks the tree one bit at a time:
//!
//! ```text
//! current = root
//! loop:
//!     bit     <- input          (end of data here is an error)
//!     current <- child(current, bit)
//!     if current is a leaf:
//!         sentinel -> stop
//!         byte     -> emit, current = root
//! ```

use crate::code::CodeTable;
use crate::symbol::{BITS_PER_WORD, Symbol};
use crate::tree::HuffNode;
use oxihuff_core::error::{OxiHuffError, Result};
use oxihuff_core::{BitReader, BitWriter};
use std::io::{Read, Write};

/// Encode the rest of `reader` followed by the sentinel.
///
/// Returns the number of input bytes encoded.
pub fn write_body<R: Read, W: Write>(
    codes: &CodeTable,
    reader: &mut BitReader<R>,
    writer: &mut BitWriter<W>,
) -> Result<u64> {
    let mut bytes = 0u64;

    while let Some(value) = reader.try_read_bits(BITS_PER_WORD)? {
        let symbol = Symbol::from_byte(value as u8);
        codes
            .get(symbol)
            .ok_or_else(|| OxiHuffError::missing_code(symbol.value()))?
            .write_to(writer)?;
        bytes += 1;
    }

    codes
        .get(Symbol::EOF)
        .ok_or_else(|| OxiHuffError::missing_code(Symbol::EOF.value()))?
        .write_to(writer)?;

    Ok(bytes)
}

/// Decode codes until the sentinel, writing the bytes to `output`.
///
/// Returns the number of bytes written. Running out of bits before the
/// sentinel is a truncation error.
pub fn read_body<R: Read, W: Write>(
    root: &HuffNode,
    reader: &mut BitReader<R>,
    output: &mut W,
) -> Result<u64> {
    let mut current = root;
    let mut bytes = 0u64;

    loop {
        current = current.child(reader.read_bit()?);

        if let HuffNode::Leaf { symbol, .. } = current {
            match symbol.byte() {
                None => return Ok(bytes),
                Some(byte) => {
                    output.write_all(&[byte])?;
                    bytes += 1;
                    current = root;
                }
            }
        }
    }
}
