//! BitReader: reads a byte source one bit at a time.
//!
//! The reader primes one byte ahead: opening a stream pulls the first byte
//! immediately, so an empty file is a legal, already-exhausted stream rather
//! than an error.
//!
//! NOTE: This module can read from any source that supports the read() call.
//!

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use log::error;

use crate::error::{Error, Result};

const MASK: u8 = 0b1000_0000;

/// Reads individual bits, most-significant bit of each byte first.
#[derive(Debug)]
pub struct BitReader<R> {
    source: R,
    /// The byte currently being consumed.
    byte: u8,
    /// Position of the next bit within `byte`, always in 0..8.
    bit_offset: u8,
    at_end: bool,
}

impl BitReader<BufReader<File>> {
    /// Open a file for bit-level reading.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Ok(Self::new(BufReader::new(File::open(path)?)))
    }
}

impl<R: Read> BitReader<R> {
    /// Create a reader and prime the first byte.
    pub fn new(source: R) -> Self {
        let mut reader = Self {
            source,
            byte: 0,
            bit_offset: 0,
            at_end: false,
        };
        reader.next_byte();
        reader
    }

    /// Pull the next byte from the source, or latch end-of-stream.
    fn next_byte(&mut self) {
        let mut buf = [0_u8; 1];
        match self.source.read(&mut buf) {
            Ok(0) => self.at_end = true,
            Ok(_) => {
                self.byte = buf[0];
                self.bit_offset = 0;
            }
            Err(e) => {
                error!("Unable to read source data: {}", e);
                self.at_end = true;
            }
        }
    }

    /// Return the next bit (0 or 1), advancing through the primed byte and
    /// on to the next one when all eight bits are spent.
    pub fn read_bit(&mut self) -> Result<u8> {
        if self.at_end {
            return Err(Error::EndOfStream);
        }
        let bit = if self.byte & (MASK >> self.bit_offset) == 0 {
            0
        } else {
            1
        };
        self.bit_offset += 1;
        if self.bit_offset == 8 {
            self.next_byte();
        }
        Ok(bit)
    }

    /// True once end-of-stream has been observed: the source was empty, or
    /// the final primed byte has been fully consumed.
    pub fn at_end(&self) -> bool {
        self.at_end
    }
}

#[cfg(test)]
mod test {
    use super::BitReader;
    use crate::error::Error;

    #[test]
    fn basic_test() {
        let x = [0b10000001_u8].as_slice();
        let mut br = BitReader::new(x);
        assert_eq!(br.read_bit().unwrap(), 1);
        assert_eq!(br.read_bit().unwrap(), 0);
        assert_eq!(br.read_bit().unwrap(), 0);
        assert_eq!(br.read_bit().unwrap(), 0);
        assert_eq!(br.read_bit().unwrap(), 0);
        assert_eq!(br.read_bit().unwrap(), 0);
        assert_eq!(br.read_bit().unwrap(), 0);
        assert_eq!(br.read_bit().unwrap(), 1);
        assert!(matches!(br.read_bit(), Err(Error::EndOfStream)));
    }

    #[test]
    fn empty_source_test() {
        let x = [].as_slice();
        let br = BitReader::new(x);
        assert!(br.at_end());
    }

    #[test]
    fn msb_first_test() {
        let x = [0b1100_0000_u8].as_slice();
        let mut br = BitReader::new(x);
        // Offset 0 is the top bit
        assert_eq!(br.read_bit().unwrap(), 1);
        assert_eq!(br.read_bit().unwrap(), 1);
        assert_eq!(br.read_bit().unwrap(), 0);
    }

    #[test]
    fn two_byte_test() {
        let x = [0xff_u8, 0x00].as_slice();
        let mut br = BitReader::new(x);
        for _ in 0..8 {
            assert_eq!(br.read_bit().unwrap(), 1);
        }
        assert!(!br.at_end());
        for _ in 0..8 {
            assert_eq!(br.read_bit().unwrap(), 0);
        }
        assert!(br.at_end());
        assert!(matches!(br.read_bit(), Err(Error::EndOfStream)));
    }
}
