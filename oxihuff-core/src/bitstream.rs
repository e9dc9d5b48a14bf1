//! Bit-level I/O for the Huffman tree-header format.
//!
//! This module provides `BitReader` and `BitWriter`, the two collaborators the
//! codec is built on: one yields arbitrary-width fields of bits from a byte
//! stream, the other accepts them and packs them into bytes.
//!
//! # Bit Ordering
//!
//! Unlike DEFLATE, the tree-header format is MSB-first (Most Significant Bit
//! first): the first bit of a field lands in the highest free bit of the
//! current byte, and multi-bit fields are written high bit first. A 3-bit
//! code `101` followed by a 5-bit field `11001` produces the byte `0xB9`.
//!
//! # End of Data
//!
//! [`BitReader::try_read_bits`] reports the end of the stream out of band as
//! `Ok(None)`, which is what a byte-counting pass wants. Decoders that cannot
//! legitimately hit the end use [`BitReader::read_bits`], which turns the same
//! condition into [`OxiHuffError::UnexpectedEof`].
//!
//! # Example
//!
//! ```
//! use oxihuff_core::bitstream::{BitReader, BitWriter};
//! use std::io::Cursor;
//!
//! // Writing bits
//! let mut writer = BitWriter::new(Vec::new());
//! writer.write_bits(0b101, 3).unwrap();
//! writer.write_bits(0b1100, 4).unwrap();
//! let output = writer.finish().unwrap();
//!
//! // Reading bits
//! let mut reader = BitReader::new(Cursor::new(&output));
//! assert_eq!(reader.read_bits(3).unwrap(), 0b101);
//! assert_eq!(reader.read_bits(4).unwrap(), 0b1100);
//! ```

use crate::error::{OxiHuffError, Result};
use std::io::{self, ErrorKind, Read, Seek, SeekFrom, Write};

/// Widest field a single read or write may carry.
pub const MAX_FIELD_BITS: u8 = 32;

#[inline]
fn low_mask(count: u8) -> u64 {
    (1u64 << count).wrapping_sub(1)
}

/// A bit-level reader that wraps any `Read` implementation.
///
/// Bits are delivered MSB-first. The reader pulls only as many bytes as it
/// needs to satisfy the current request, so it never reads ahead past the
/// byte holding the last requested bit.
#[derive(Debug)]
pub struct BitReader<R: Read> {
    /// Underlying reader.
    reader: R,
    /// Bit buffer (MSB-first, only the low `bits_in_buffer` bits are valid).
    buffer: u64,
    /// Number of valid bits in buffer.
    bits_in_buffer: u8,
    /// Total bits read (for error reporting).
    total_bits_read: u64,
    /// Set once the underlying reader has returned end of file.
    exhausted: bool,
}

impl<R: Read> BitReader<R> {
    /// Create a new `BitReader` wrapping the given reader.
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buffer: 0,
            bits_in_buffer: 0,
            total_bits_read: 0,
            exhausted: false,
        }
    }

    /// Get a reference to the underlying reader.
    pub fn get_ref(&self) -> &R {
        &self.reader
    }

    /// Get a mutable reference to the underlying reader.
    pub fn get_mut(&mut self) -> &mut R {
        &mut self.reader
    }

    /// Consume this `BitReader` and return the underlying reader.
    pub fn into_inner(self) -> R {
        self.reader
    }

    /// Get the total number of bits read so far.
    pub fn bits_read(&self) -> u64 {
        self.total_bits_read
    }

    /// Get the current bit position (for error reporting).
    pub fn bit_position(&self) -> u64 {
        self.total_bits_read
    }

    /// Ensure at least `count` bits are buffered.
    ///
    /// Returns `false` if the stream ended first.
    fn fill_buffer(&mut self, count: u8) -> Result<bool> {
        let mut temp_buf = [0u8; 4];

        while self.bits_in_buffer < count && !self.exhausted {
            let bytes_needed = (count - self.bits_in_buffer).div_ceil(8) as usize;

            match self.reader.read(&mut temp_buf[..bytes_needed]) {
                Ok(0) => self.exhausted = true,
                Ok(n) => {
                    for &byte in &temp_buf[..n] {
                        self.buffer = (self.buffer << 8) | byte as u64;
                        self.bits_in_buffer += 8;
                    }
                }
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            }
        }

        Ok(self.bits_in_buffer >= count)
    }

    /// Read a field of `count` bits, or `None` at end of data.
    ///
    /// If fewer than `count` bits remain, the leftover bits are discarded and
    /// the reader stays at end of data until it is reset.
    ///
    /// # Arguments
    ///
    /// * `count` - Number of bits to read (1-32)
    pub fn try_read_bits(&mut self, count: u8) -> Result<Option<u32>> {
        if count == 0 || count > MAX_FIELD_BITS {
            return Err(OxiHuffError::InvalidBitWidth(count));
        }

        if !self.fill_buffer(count)? {
            self.buffer = 0;
            self.bits_in_buffer = 0;
            return Ok(None);
        }

        let shift = self.bits_in_buffer - count;
        let value = (self.buffer >> shift) & low_mask(count);

        self.bits_in_buffer = shift;
        self.buffer &= low_mask(shift);
        self.total_bits_read += count as u64;

        Ok(Some(value as u32))
    }

    /// Read a field of `count` bits, failing at end of data.
    ///
    /// # Arguments
    ///
    /// * `count` - Number of bits to read (1-32)
    ///
    /// # Returns
    ///
    /// The bits read as a u32, with the first bit read in the most
    /// significant position of the field.
    pub fn read_bits(&mut self, count: u8) -> Result<u32> {
        let position = self.total_bits_read;
        self.try_read_bits(count)?
            .ok_or_else(|| OxiHuffError::unexpected_eof(position))
    }

    /// Read a single bit.
    pub fn read_bit(&mut self) -> Result<bool> {
        Ok(self.read_bits(1)? != 0)
    }

    /// Read a single bit, or `None` at end of data.
    pub fn try_read_bit(&mut self) -> Result<Option<bool>> {
        Ok(self.try_read_bits(1)?.map(|bit| bit != 0))
    }
}

impl<R: Read + Seek> BitReader<R> {
    /// Rewind to the start of the underlying stream.
    ///
    /// All buffered bits and counters are discarded, so the next read
    /// returns the first bit of the stream again.
    pub fn reset(&mut self) -> Result<()> {
        self.reset_to(0)
    }

    /// Seek the underlying stream to byte `offset` and discard all state.
    ///
    /// Used to re-read a source that did not start at offset 0.
    pub fn reset_to(&mut self, offset: u64) -> Result<()> {
        self.reader.seek(SeekFrom::Start(offset))?;
        self.buffer = 0;
        self.bits_in_buffer = 0;
        self.total_bits_read = 0;
        self.exhausted = false;
        Ok(())
    }
}

/// A bit-level writer that wraps any `Write` implementation.
///
/// `BitWriter` accumulates bits and hands complete bytes to the underlying
/// writer. A trailing partial byte is written, zero-padded, by
/// [`BitWriter::flush`] or [`BitWriter::finish`]. Dropping the writer
/// flushes too, but errors are lost there; call `finish` to see them.
#[derive(Debug)]
pub struct BitWriter<W: Write> {
    /// Underlying writer, taken by `finish`.
    writer: Option<W>,
    /// Bit buffer (MSB-first, fewer than 8 bits between calls).
    buffer: u64,
    /// Number of bits in buffer.
    bits_in_buffer: u8,
    /// Total bits written.
    total_bits_written: u64,
}

impl<W: Write> BitWriter<W> {
    /// Create a new `BitWriter` wrapping the given writer.
    pub fn new(writer: W) -> Self {
        Self {
            writer: Some(writer),
            buffer: 0,
            bits_in_buffer: 0,
            total_bits_written: 0,
        }
    }

    fn sink(&mut self) -> Result<&mut W> {
        self.writer
            .as_mut()
            .ok_or_else(|| io::Error::other("bit writer already finished").into())
    }

    /// Get the total number of bits written so far (padding excluded).
    pub fn bits_written(&self) -> u64 {
        self.total_bits_written
    }

    /// Move complete bytes from the buffer to the writer.
    #[inline]
    fn flush_bytes(&mut self) -> Result<()> {
        let mut bytes = [0u8; 5];
        let mut n = 0;

        while self.bits_in_buffer >= 8 {
            self.bits_in_buffer -= 8;
            bytes[n] = (self.buffer >> self.bits_in_buffer) as u8;
            n += 1;
        }
        self.buffer &= low_mask(self.bits_in_buffer);

        if n > 0 {
            self.sink()?.write_all(&bytes[..n])?;
        }
        Ok(())
    }

    /// Append the low `count` bits of `value`, most significant bit first.
    ///
    /// # Arguments
    ///
    /// * `value` - The field to write; bits above `count` are ignored
    /// * `count` - Number of bits to write (0-32, 0 is a no-op)
    #[inline]
    pub fn write_bits(&mut self, value: u32, count: u8) -> Result<()> {
        if count > MAX_FIELD_BITS {
            return Err(OxiHuffError::InvalidBitWidth(count));
        }
        if count == 0 {
            return Ok(());
        }

        let value = value as u64 & low_mask(count);
        self.buffer = (self.buffer << count) | value;
        self.bits_in_buffer += count;
        self.total_bits_written += count as u64;

        self.flush_bytes()
    }

    /// Write a single bit.
    #[inline]
    pub fn write_bit(&mut self, bit: bool) -> Result<()> {
        self.write_bits(bit as u32, 1)
    }

    /// Pad the current byte with zero bits.
    ///
    /// Padding bits are not counted in [`BitWriter::bits_written`].
    pub fn align_to_byte(&mut self) -> Result<()> {
        if self.bits_in_buffer > 0 {
            let padding = 8 - self.bits_in_buffer;
            self.buffer <<= padding;
            self.bits_in_buffer += padding;
            self.flush_bytes()?;
        }
        Ok(())
    }

    /// Write any partial byte (zero-padded) and flush the underlying writer.
    pub fn flush(&mut self) -> Result<()> {
        self.align_to_byte()?;
        self.sink()?.flush()?;
        Ok(())
    }

    /// Flush and return the underlying writer.
    ///
    /// This is the "close" of the stream: nothing can be appended afterwards.
    pub fn finish(mut self) -> Result<W> {
        self.flush()?;
        self.writer
            .take()
            .ok_or_else(|| io::Error::other("bit writer already finished").into())
    }
}

impl<W: Write> Drop for BitWriter<W> {
    fn drop(&mut self) {
        if self.writer.is_some() {
            let _ = self.flush();
        }
    }
}
