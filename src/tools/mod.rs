//! The tools module provides the helpers around the core coder.
//!
//! The tools are:
//! - cli: Command line interface for the huffman tool.
//! - freq_count: Frequency table built by scanning a byte source.
//!
pub mod cli;
pub mod freq_count;
