//! Per-run statistics.

/// What one encode or decode run read and wrote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CodecStats {
    /// Bytes consumed from the input.
    pub input_bytes: u64,
    /// Bytes produced on the output.
    pub output_bytes: u64,
    /// Bits taken by the tree header (magic tag excluded).
    pub header_bits: u64,
    /// Bits taken by the body, sentinel included, padding excluded.
    pub body_bits: u64,
    /// Leaves in the tree (sentinel included).
    pub distinct_symbols: usize,
}

impl CodecStats {
    /// Output size as a percentage of input size.
    pub fn ratio(&self) -> f64 {
        if self.input_bytes == 0 {
            return 0.0;
        }
        self.output_bytes as f64 / self.input_bytes as f64 * 100.0
    }
}
