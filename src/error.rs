//! Error types shared across the crate.
//!
//! Nothing here is retried internally. Every failure is surfaced as a
//! `Result` the immediate caller must check; `EndOfStream` is the expected
//! way a read loop learns it is finished.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// The read stream has no more bits to give.
    #[error("end of bit stream")]
    EndOfStream,

    /// A bit value other than 0 or 1 was handed to the bit writer.
    #[error("invalid bit value {0}, must be 0 or 1")]
    InvalidBit(u8),

    /// Caller-supplied storage cannot hold the rendered bits.
    #[error("buffer too small: need {required} bytes, got {actual}")]
    BufferTooSmall { required: usize, actual: usize },

    /// Encoding needs at least two distinct symbols, otherwise the single
    /// code is empty and would write nothing.
    #[error("input needs at least two distinct byte values to encode")]
    TooFewSymbols,

    /// Underlying file open, read or flush failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
