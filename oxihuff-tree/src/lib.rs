//! # OxiHuff-Tree: Huffman Coding with a Tree Header
//!
//! This crate provides lossless single-stream compression with a static
//! Huffman code. The code is built from the byte frequencies of the whole
//! input and stored in front of the data as a serialized tree, so the
//! decoder needs no outside knowledge.
//!
//! ## Features
//!
//! - **Pure Rust**: No C dependencies, 100% safe Rust
//! - **Optimal codes**: Classic greedy Huffman construction with a
//!   deterministic tie-break
//! - **Self-describing**: The tree shape travels with the data
//! - **Fail-fast decoding**: Wrong magic, truncated streams and malformed
//!   headers are errors, never partial output
//!
//! ## Stream Format
//!
//! All fields are packed MSB-first:
//!
//! ```text
//! ┌──────────────┬──────────────────────────┬──────────────────────────────┐
//! │ magic (32)   │ tree header (pre-order)  │ codes..., sentinel code, pad │
//! │ 0xface8201   │ 0 = node, 1 + 9-bit leaf │ zero bits to a byte boundary │
//! └──────────────┴──────────────────────────┴──────────────────────────────┘
//! ```
//!
//! The alphabet is the 256 byte values plus a sentinel (symbol 256) that
//! marks the end of the body.
//!
//! ## Example
//!
//! ```rust
//! use oxihuff_tree::{compress_bytes, decompress_bytes};
//!
//! let original = b"TOBEORNOTTOBEORTOBEORNOT";
//!
//! // Compress
//! let compressed = compress_bytes(original).unwrap();
//!
//! // Decompress
//! let decompressed = decompress_bytes(&compressed).unwrap();
//!
//! assert_eq!(decompressed, original);
//! ```
//!
//! ## Streaming Sources
//!
//! [`compress`] reads its input twice (once to count, once to encode), so it
//! takes any `Read + Seek` source, such as a `File` or a `Cursor`:
//!
//! ```rust
//! use oxihuff_tree::{compress, decompress};
//! use std::io::Cursor;
//!
//! let mut compressed = Vec::new();
//! compress(Cursor::new(b"AAAB"), &mut compressed).unwrap();
//!
//! let mut restored = Vec::new();
//! decompress(&compressed[..], &mut restored).unwrap();
//! assert_eq!(restored, b"AAAB");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod body;
pub mod code;
mod config;
mod decoder;
mod encoder;
pub mod frequency;
pub mod header;
mod stats;
pub mod symbol;
pub mod tree;

pub use code::{BitCode, CodeTable};
pub use config::{DebugLevel, HuffConfig};
pub use decoder::{HeaderInfo, HuffDecoder};
pub use encoder::HuffEncoder;
pub use frequency::FrequencyTable;
pub use oxihuff_core::error::{OxiHuffError, Result};
pub use stats::CodecStats;
pub use symbol::{HUFF_TREE, PSEUDO_EOF, Symbol};
pub use tree::HuffNode;

use std::io::{Read, Seek, Write};

/// Compress `input` into `output` with the default configuration.
///
/// The input is read twice and must therefore be seekable. Both passes start
/// at the source's current position. The output is flushed before returning.
///
/// # Example
///
/// ```rust
/// use oxihuff_tree::compress;
/// use std::io::Cursor;
///
/// let mut out = Vec::new();
/// compress(Cursor::new(b"hello"), &mut out).unwrap();
/// assert_eq!(&out[..4], &[0xFA, 0xCE, 0x82, 0x01]);
/// ```
pub fn compress<R: Read + Seek, W: Write>(input: R, output: W) -> Result<()> {
    HuffEncoder::default().encode(input, output)?;
    Ok(())
}

/// Decompress `input` into `output` with the default configuration.
///
/// Fails before writing anything if the stream does not start with
/// [`HUFF_TREE`], or if it ends before the sentinel.
///
/// # Example
///
/// ```rust
/// use oxihuff_tree::{decompress, OxiHuffError};
///
/// let mut out = Vec::new();
/// let err = decompress(&b"not a huffman stream"[..], &mut out).unwrap_err();
/// assert!(matches!(err, OxiHuffError::InvalidMagic { .. }));
/// assert!(out.is_empty());
/// ```
pub fn decompress<R: Read, W: Write>(input: R, output: W) -> Result<()> {
    HuffDecoder::default().decode(input, output)?;
    Ok(())
}

/// Compress an in-memory buffer (convenience function).
pub fn compress_bytes(data: &[u8]) -> Result<Vec<u8>> {
    HuffEncoder::default().encode_to_vec(data)
}

/// Decompress an in-memory buffer (convenience function).
pub fn decompress_bytes(data: &[u8]) -> Result<Vec<u8>> {
    HuffDecoder::default().decode_to_vec(data)
}

/// Read the magic tag and tree header of a compressed buffer.
///
/// # Example
///
/// ```rust
/// use oxihuff_tree::{compress_bytes, inspect, Symbol};
///
/// let info = inspect(&compress_bytes(b"AAAB").unwrap()).unwrap();
/// assert_eq!(info.tree.leaf_count(), 3);
/// assert_eq!(info.codes.get(Symbol::from(b'A')).unwrap().to_string(), "1");
/// ```
pub fn inspect(data: &[u8]) -> Result<HeaderInfo> {
    HuffDecoder::default().read_preamble(data)
}
