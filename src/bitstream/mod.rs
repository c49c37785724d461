//! The bitstream module forms the bit-granular I/O subsystem for the Huffman coder.
//!
//! Huffman codes are sequences of individual bits, so the byte-oriented file
//! API is wrapped here by a reader and a writer that move one bit at a time,
//! each tracking the partially-filled byte in flight. Bit 0 of every byte is
//! its most-significant bit; both directions use the same ordering, so a
//! stream written here reads back bit-for-bit.
//!
//! The BitBuffer is the in-memory side: a growable sequence of bits used as a
//! path stack while walking the code tree, and drained into a write-mode
//! stream when a code is emitted.
//!
pub mod bitbuffer;
pub mod bitreader;
pub mod bitwriter;
