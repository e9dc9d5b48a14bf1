//! Alphabet and format constants.
//!
//! The alphabet is the 256 byte values plus one pseudo-EOF sentinel, so every
//! symbol fits the 9-bit leaf field of the tree header.

use std::fmt;

/// Bits per literal input unit.
pub const BITS_PER_WORD: u8 = 8;

/// Width of the magic tag.
pub const BITS_PER_INT: u8 = 32;

/// Number of literal byte values.
pub const ALPHABET_SIZE: usize = 1 << BITS_PER_WORD;

/// Symbol value of the end-of-stream sentinel.
pub const PSEUDO_EOF: u16 = ALPHABET_SIZE as u16;

/// Total number of symbols (bytes plus sentinel).
pub const SYMBOL_COUNT: usize = ALPHABET_SIZE + 1;

/// Width of a leaf symbol field in the tree header.
pub const SYMBOL_BITS: u8 = BITS_PER_WORD + 1;

/// Magic number shared by every Huffman format variant.
pub const HUFF_NUMBER: u32 = 0xface_8200;

/// Magic tag of the tree-header variant written by this crate.
pub const HUFF_TREE: u32 = HUFF_NUMBER | 1;

/// One element of the 257-symbol alphabet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Symbol(u16);

impl Symbol {
    /// The end-of-stream sentinel.
    pub const EOF: Self = Self(PSEUDO_EOF);

    /// Create a symbol, or `None` if `value` is outside `0..=256`.
    pub fn new(value: u16) -> Option<Self> {
        (value <= PSEUDO_EOF).then_some(Self(value))
    }

    /// Symbol for a literal byte.
    pub const fn from_byte(byte: u8) -> Self {
        Self(byte as u16)
    }

    /// Numeric symbol value.
    pub const fn value(self) -> u16 {
        self.0
    }

    /// Index into per-symbol tables.
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// True for the sentinel.
    pub const fn is_eof(self) -> bool {
        self.0 == PSEUDO_EOF
    }

    /// The literal byte, or `None` for the sentinel.
    pub fn byte(self) -> Option<u8> {
        u8::try_from(self.0).ok()
    }
}

impl From<u8> for Symbol {
    fn from(byte: u8) -> Self {
        Self::from_byte(byte)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self.byte() {
            None => "EOF".to_string(),
            Some(b) if b.is_ascii_graphic() => format!("{:?}", b as char),
            Some(b) => format!("0x{:02x}", b),
        };
        f.pad(&text)
    }
}
