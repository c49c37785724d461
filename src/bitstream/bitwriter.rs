use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::bitstream::bitbuffer::BitBuffer;
use crate::error::{Error, Result};

const MASK: u8 = 0b1000_0000;

/// Writes individual bits into a byte sink, most-significant bit of each
/// byte first. A completed byte is flushed as soon as its eighth bit lands;
/// call flush() before dropping the writer or the 0-7 bits still in flight
/// are lost.
#[derive(Debug)]
pub struct BitWriter<W> {
    sink: W,
    /// The byte currently being assembled.
    byte: u8,
    /// Position of the next bit within `byte`, always in 0..8.
    bit_offset: u8,
    /// Total bits accepted so far, padding not included.
    bit_len: u64,
}

impl BitWriter<BufWriter<File>> {
    /// Create (truncate) a file for bit-level writing.
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self> {
        Ok(Self::new(BufWriter::new(File::create(path)?)))
    }
}

impl<W: Write> BitWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            sink,
            byte: 0,
            bit_offset: 0,
            bit_len: 0,
        }
    }

    /// Set or clear the next mask position in the in-progress byte. Only 0
    /// and 1 are bits; anything else is refused before the offset moves.
    pub fn write_bit(&mut self, bit: u8) -> Result<()> {
        match bit {
            0 => self.byte &= !(MASK >> self.bit_offset),
            1 => self.byte |= MASK >> self.bit_offset,
            other => return Err(Error::InvalidBit(other)),
        }
        self.bit_offset += 1;
        self.bit_len += 1;
        if self.bit_offset == 8 {
            self.sink.write_all(&[self.byte])?;
            self.byte = 0;
            self.bit_offset = 0;
        }
        Ok(())
    }

    /// Write every bit of the buffer in order, stopping at the first failure.
    pub fn write_buffer(&mut self, code: &BitBuffer) -> Result<()> {
        for &bit in code.bits() {
            self.write_bit(bit)?;
        }
        Ok(())
    }

    /// Pad the final partial byte with trailing zero bits, write it, and
    /// flush the sink.
    pub fn flush(&mut self) -> Result<()> {
        if self.bit_offset > 0 {
            self.sink.write_all(&[self.byte])?;
            self.byte = 0;
            self.bit_offset = 0;
        }
        self.sink.flush()?;
        Ok(())
    }

    /// Total bits written so far, excluding any flush padding.
    pub fn bit_len(&self) -> u64 {
        self.bit_len
    }

    pub fn get_ref(&self) -> &W {
        &self.sink
    }
}
