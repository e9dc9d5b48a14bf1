//! Error types for OxiHuff operations.
//!
//! Every failure is fatal for the operation that raised it. Errors fall into
//! two broad families that callers usually want to tell apart:
//!
//! - **format errors**: the stream is not something this codec produced
//!   (wrong magic tag, impossible header contents);
//! - **truncation errors**: the stream looked right but ran out of bits
//!   before the header or the body reached a proper end.
//!
//! Use [`OxiHuffError::is_format_error`] and [`OxiHuffError::is_truncated`]
//! to classify them.

use std::io;
use thiserror::Error;

/// The main error type for OxiHuff operations.
#[derive(Debug, Error)]
pub enum OxiHuffError {
    /// I/O error from underlying reader/writer.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The leading 32-bit tag does not identify a tree-header stream.
    #[error("Invalid magic number: expected {expected:#010x}, found {found:#010x}")]
    InvalidMagic {
        /// Expected magic tag.
        expected: u32,
        /// Tag actually read from the stream.
        found: u32,
    },

    /// The stream carries the tag of the older counts-header format.
    #[error("Unsupported legacy format (magic {found:#010x}): counts header is not supported")]
    LegacyFormat {
        /// Tag read from the stream.
        found: u32,
    },

    /// The stream ended before a well-formed header or sentinel was reached.
    #[error("Unexpected end of stream at bit position {bit_position}")]
    UnexpectedEof {
        /// Bit position where the read ran out of data.
        bit_position: u64,
    },

    /// A header leaf carries a value outside the symbol alphabet.
    #[error("Invalid symbol {symbol} in tree header at bit position {bit_position}")]
    InvalidSymbol {
        /// The out-of-range value.
        symbol: u16,
        /// Bit position just after the offending field.
        bit_position: u64,
    },

    /// Invalid tree header structure.
    #[error("Invalid header: {message}")]
    InvalidHeader {
        /// Description of the header error.
        message: String,
    },

    /// A symbol read from the input has no code in the table.
    #[error("No code assigned to symbol {symbol}")]
    MissingCode {
        /// The symbol without a code.
        symbol: u16,
    },

    /// Requested bit field width is outside the supported range.
    #[error("Invalid bit width: {0} (must be 1-32)")]
    InvalidBitWidth(u8),
}

/// Result type alias for OxiHuff operations.
pub type Result<T> = std::result::Result<T, OxiHuffError>;

impl OxiHuffError {
    /// Create an invalid magic error.
    pub fn invalid_magic(expected: u32, found: u32) -> Self {
        Self::InvalidMagic { expected, found }
    }

    /// Create a legacy format error.
    pub fn legacy_format(found: u32) -> Self {
        Self::LegacyFormat { found }
    }

    /// Create an unexpected end-of-stream error.
    pub fn unexpected_eof(bit_position: u64) -> Self {
        Self::UnexpectedEof { bit_position }
    }

    /// Create an invalid symbol error.
    pub fn invalid_symbol(symbol: u16, bit_position: u64) -> Self {
        Self::InvalidSymbol {
            symbol,
            bit_position,
        }
    }

    /// Create an invalid header error.
    pub fn invalid_header(message: impl Into<String>) -> Self {
        Self::InvalidHeader {
            message: message.into(),
        }
    }

    /// Create a missing code error.
    pub fn missing_code(symbol: u16) -> Self {
        Self::MissingCode { symbol }
    }

    /// True if the stream was rejected as not being a valid OxiHuff stream.
    pub fn is_format_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidMagic { .. }
                | Self::LegacyFormat { .. }
                | Self::InvalidSymbol { .. }
                | Self::InvalidHeader { .. }
        )
    }

    /// True if the stream ended before decoding could finish.
    pub fn is_truncated(&self) -> bool {
        match self {
            Self::UnexpectedEof { .. } => true,
            Self::Io(e) => e.kind() == io::ErrorKind::UnexpectedEof,
            _ => false,
        }
    }
}
