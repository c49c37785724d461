//! The huffman_coding module turns a frequency table into a prefix-free
//! binary code.
//!
//! Construction is the classic greedy forest merge: every symbol that
//! occurred becomes a leaf weighted by its count, and the two lightest
//! surviving nodes are joined under a new parent until one root remains.
//! The path from the root to a leaf, left as 0 and right as 1, is that
//! symbol's code.
//!
//! Ties between equal weights are broken deterministically (see the merge
//! order in tree.rs), so two builds from the same table always assign the
//! same codes. The process is inherently sequential and does not benefit
//! from multithreading.
//!
pub mod codes;
pub mod tree;
