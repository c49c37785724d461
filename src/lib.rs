//! Huffman code builder with bit-granular file I/O.
//!
//! Builds a prefix-free binary code for the byte alphabet from observed
//! symbol frequencies, using the classic greedy forest merge. The bitstream
//! module packs and unpacks individual bits against byte-oriented files so
//! the generated codes can be written out.
//!
//! Basic usage to show the frequency table and code table for a file:
//!
//! `$> huffman stat test.txt`
//!
//! To write test.txt.huf holding the raw code bitstream:
//!
//! `$> huffman encode test.txt`
//!
//! Decoding an encoded stream is not implemented - there is no container
//! format (no header and no persisted code table), so the output is only
//! useful for size measurement and as codec plumbing.
//!
pub mod bitstream;
pub mod error;
pub mod huffman_coding;
pub mod tools;
