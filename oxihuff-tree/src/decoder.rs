//! Huffman decoder (decompression).

use crate::body::read_body;
use crate::code::CodeTable;
use crate::config::HuffConfig;
use crate::header::{header_bits, read_header};
use crate::stats::CodecStats;
use crate::symbol::{BITS_PER_INT, HUFF_NUMBER, HUFF_TREE};
use crate::tree::HuffNode;
use oxihuff_core::BitReader;
use oxihuff_core::error::{OxiHuffError, Result};
use std::io::{Read, Write};

/// Magic tag and tree of a compressed stream.
#[derive(Debug, Clone)]
pub struct HeaderInfo {
    /// The 32-bit magic tag.
    pub magic: u32,
    /// Tree rebuilt from the header (zero weights).
    pub tree: HuffNode,
    /// Codes implied by the tree.
    pub codes: CodeTable,
    /// Size of the tree header in bits.
    pub header_bits: u64,
}

/// Huffman decoder for decompression.
#[derive(Debug, Clone, Default)]
pub struct HuffDecoder {
    config: HuffConfig,
}

impl HuffDecoder {
    /// Create a new decoder with the given configuration.
    pub fn new(config: HuffConfig) -> Self {
        Self { config }
    }

    /// Get the configuration.
    pub fn config(&self) -> &HuffConfig {
        &self.config
    }

    /// Read and check the magic tag.
    ///
    /// The tag of the older counts-header variant is reported separately so
    /// that such files get a clearer message than "invalid magic".
    fn read_magic<R: Read>(reader: &mut BitReader<R>) -> Result<u32> {
        let magic = reader.read_bits(BITS_PER_INT)?;
        match magic {
            HUFF_TREE => Ok(magic),
            HUFF_NUMBER => Err(OxiHuffError::legacy_format(magic)),
            found => Err(OxiHuffError::invalid_magic(HUFF_TREE, found)),
        }
    }

    /// Read the magic tag and tree header without decoding the body.
    pub fn read_preamble<R: Read>(&self, input: R) -> Result<HeaderInfo> {
        let mut reader = BitReader::new(input);
        let magic = Self::read_magic(&mut reader)?;
        let tree = read_header(&mut reader)?;
        let codes = CodeTable::derive(&tree)?;

        Ok(HeaderInfo {
            magic,
            header_bits: header_bits(&tree),
            tree,
            codes,
        })
    }

    /// Decompress `input` into `output`.
    ///
    /// Nothing is written to `output` unless the whole stream decodes: the
    /// body is decoded into memory first and handed over only once the
    /// sentinel has been reached. The output is flushed before returning.
    pub fn decode<R: Read, W: Write>(&self, input: R, mut output: W) -> Result<CodecStats> {
        let mut reader = BitReader::new(input);

        Self::read_magic(&mut reader)?;
        let root = read_header(&mut reader)?;
        let header_bits = reader.bits_read() - BITS_PER_INT as u64;

        if self.config.summaries() {
            log::debug!(
                "read tree header: {} leaves, height {}, {} bits",
                root.leaf_count(),
                root.height(),
                header_bits
            );
        }
        if self.config.details() {
            for (symbol, depth) in root.leaves() {
                log::trace!("leaf {} at depth {}", symbol, depth);
            }
        }

        let mut decoded = Vec::new();
        let output_bytes = read_body(&root, &mut reader, &mut decoded)?;
        let total_bits = reader.bits_read();

        output.write_all(&decoded)?;
        output.flush()?;

        let stats = CodecStats {
            input_bytes: total_bits.div_ceil(8),
            output_bytes,
            header_bits,
            body_bits: total_bits - BITS_PER_INT as u64 - header_bits,
            distinct_symbols: root.leaf_count(),
        };

        if self.config.summaries() {
            log::debug!(
                "decoded {} body bits into {} bytes",
                stats.body_bits,
                stats.output_bytes
            );
        }

        Ok(stats)
    }

    /// Decompress an in-memory buffer.
    pub fn decode_to_vec(&self, data: &[u8]) -> Result<Vec<u8>> {
        let mut output = Vec::new();
        self.decode(data, &mut output)?;
        Ok(output)
    }
}
