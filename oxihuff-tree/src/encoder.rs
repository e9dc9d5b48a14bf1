//! Huffman encoder (compression).

use crate::body::write_body;
use crate::code::CodeTable;
use crate::config::HuffConfig;
use crate::frequency::FrequencyTable;
use crate::header::write_header;
use crate::stats::CodecStats;
use crate::symbol::{BITS_PER_INT, HUFF_TREE};
use crate::tree::HuffNode;
use oxihuff_core::error::Result;
use oxihuff_core::{BitReader, BitWriter};
use std::io::{Read, Seek, Write};

/// Huffman encoder for compression.
#[derive(Debug, Clone, Default)]
pub struct HuffEncoder {
    config: HuffConfig,
}

impl HuffEncoder {
    /// Create a new encoder with the given configuration.
    pub fn new(config: HuffConfig) -> Self {
        Self { config }
    }

    /// Get the configuration.
    pub fn config(&self) -> &HuffConfig {
        &self.config
    }

    /// Compress `input` into `output`.
    ///
    /// # Algorithm
    ///
    /// 1. Count byte frequencies over the whole input
    /// 2. Build the Huffman tree and derive the code table
    /// 3. Write the magic tag and the tree header
    /// 4. Rewind the input and write every byte's code, then the sentinel
    /// 5. Pad the last byte with zeros and flush
    ///
    /// The input is read twice, hence the `Seek` bound. Both passes start
    /// at the source's current position, so bytes before it are neither
    /// counted nor encoded. The output is flushed before returning.
    pub fn encode<R: Read + Seek, W: Write>(&self, mut input: R, output: W) -> Result<CodecStats> {
        let start = input.stream_position()?;
        let mut reader = BitReader::new(input);

        let counts = FrequencyTable::count(&mut reader)?;
        let root = HuffNode::build(&counts);
        let codes = CodeTable::derive(&root)?;

        if self.config.summaries() {
            log::debug!(
                "counted {} bytes, {} distinct symbols, tree height {}",
                counts.total(),
                counts.distinct(),
                root.height()
            );
        }
        if self.config.details() {
            for (symbol, code) in codes.iter() {
                log::trace!("{:>6} x{:<10} {}", symbol, counts.get(symbol), code);
            }
        }

        let mut writer = BitWriter::new(output);
        writer.write_bits(HUFF_TREE, BITS_PER_INT)?;
        write_header(&root, &mut writer)?;
        let header_bits = writer.bits_written() - BITS_PER_INT as u64;

        reader.reset_to(start)?;
        let input_bytes = write_body(&codes, &mut reader, &mut writer)?;
        let total_bits = writer.bits_written();
        writer.finish()?;

        let stats = CodecStats {
            input_bytes,
            output_bytes: total_bits.div_ceil(8),
            header_bits,
            body_bits: total_bits - BITS_PER_INT as u64 - header_bits,
            distinct_symbols: root.leaf_count(),
        };

        if self.config.summaries() {
            log::debug!(
                "wrote {} header bits, {} body bits ({} -> {} bytes)",
                stats.header_bits,
                stats.body_bits,
                stats.input_bytes,
                stats.output_bytes
            );
        }

        Ok(stats)
    }

    /// Compress an in-memory buffer.
    pub fn encode_to_vec(&self, data: &[u8]) -> Result<Vec<u8>> {
        let mut output = Vec::new();
        self.encode(std::io::Cursor::new(data), &mut output)?;
        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decoder::HuffDecoder;
    use std::io::Cursor;

    #[test]
    fn test_encode_aaab_bytes() {
        let compressed = HuffEncoder::default().encode_to_vec(b"AAAB").unwrap();
        // magic, 32 header bits, 7 body bits + 1 padding bit
        assert_eq!(&compressed[..4], &[0xFA, 0xCE, 0x82, 0x01]);
        assert_eq!(compressed.len(), 4 + 4 + 1);
        assert_eq!(compressed[8], 0b1110_0010);
    }

    #[test]
    fn test_encode_stats() {
        let data = b"AAAB";
        let mut output = Vec::new();
        let stats = HuffEncoder::new(HuffConfig::TRACE)
            .encode(Cursor::new(data), &mut output)
            .unwrap();

        assert_eq!(stats.input_bytes, 4);
        assert_eq!(stats.header_bits, 32);
        assert_eq!(stats.body_bits, 7);
        assert_eq!(stats.distinct_symbols, 3);
        assert_eq!(stats.output_bytes, output.len() as u64);
    }

    #[test]
    fn test_encode_empty() {
        let compressed = HuffEncoder::default().encode_to_vec(b"").unwrap();
        // magic + 0 1[256] 1[256] + 1-bit sentinel = 32 + 21 + 1 bits
        assert_eq!(compressed.len(), 4 + 3);

        let decompressed = HuffDecoder::default().decode_to_vec(&compressed).unwrap();
        assert!(decompressed.is_empty());
    }

    #[test]
    fn test_encode_repeating() {
        let original = vec![b'X'; 1000];
        let compressed = HuffEncoder::default().encode_to_vec(&original).unwrap();

        // one bit per byte plus a small header
        assert!(compressed.len() < original.len() / 7);

        let decompressed = HuffDecoder::default().decode_to_vec(&compressed).unwrap();
        assert_eq!(decompressed, original);
    }

    #[test]
    fn test_encode_from_advanced_source() {
        let mut source = Cursor::new(b"AAAAAhello".to_vec());
        source.set_position(5);

        let mut output = Vec::new();
        let stats = HuffEncoder::default().encode(&mut source, &mut output).unwrap();
        assert_eq!(stats.input_bytes, 5);
        assert_eq!(output, HuffEncoder::default().encode_to_vec(b"hello").unwrap());

        let decompressed = HuffDecoder::default().decode_to_vec(&output).unwrap();
        assert_eq!(decompressed, b"hello");
    }

    #[test]
    fn test_encode_all_bytes() {
        let original: Vec<u8> = (0..=255).collect();
        let compressed = HuffEncoder::default().encode_to_vec(&original).unwrap();
        let decompressed = HuffDecoder::default().decode_to_vec(&compressed).unwrap();
        assert_eq!(decompressed, original);
    }
}
