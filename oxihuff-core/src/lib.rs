//! # OxiHuff Core
//!
//! Bit-level plumbing shared by the OxiHuff crates:
//!
//! - [`bitstream`]: MSB-first [`BitReader`] and [`BitWriter`] over any
//!   `Read`/`Write`, with fields of 1 to 32 bits
//! - [`error`]: [`OxiHuffError`] and the crate-wide [`Result`] alias
//!
//! The codec itself lives in `oxihuff-tree`; the `oxihuff` binary sits on top.
//!
//! ```text
//!   oxihuff (CLI)
//!        │
//!   oxihuff-tree   frequency count, tree, header, body
//!        │
//!   oxihuff-core   BitReader / BitWriter, errors
//! ```
//!
//! ## Example
//!
//! ```rust
//! use oxihuff_core::BitReader;
//!
//! let mut reader = BitReader::new(&[0xAB, 0xCD][..]);
//! assert_eq!(reader.read_bits(12).unwrap(), 0xABC);
//!
//! // only 4 bits remain, so an 8-bit field is unavailable
//! assert_eq!(reader.try_read_bits(8).unwrap(), None);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod bitstream;
pub mod error;

pub use bitstream::{BitReader, BitWriter};
pub use error::{OxiHuffError, Result};
