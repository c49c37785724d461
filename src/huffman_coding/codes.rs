//! Code extraction: walk the built tree and read each leaf's code off the
//! path taken to reach it.

use rustc_hash::FxHashMap;

use crate::bitstream::bitbuffer::{BitBuffer, GROW_SIZE};
use crate::huffman_coding::tree::{HuffmanTree, Node, NodeData};
use crate::tools::freq_count::FreqTable;

/// Return (symbol, code) for every leaf, in left-to-right leaf order.
///
/// The walk shares one BitBuffer as a path register: push 0 before taking a
/// left child, 1 before a right child, pop on the way back. Whatever the
/// buffer holds at a leaf is that symbol's code. A tree whose root is itself
/// a leaf yields a single empty code - a one-symbol alphabet needs no bits
/// to distinguish anything.
pub fn extract_codes(tree: &HuffmanTree) -> Vec<(u16, BitBuffer)> {
    let mut codes = vec![];
    if let Some(root) = &tree.root {
        let mut path = BitBuffer::new(GROW_SIZE);
        walk(root, &mut path, &mut codes);
    }
    codes
}

fn walk(node: &Node, path: &mut BitBuffer, codes: &mut Vec<(u16, BitBuffer)>) {
    match &node.node_data {
        NodeData::Leaf(symbol) => codes.push((*symbol, path.clone())),
        NodeData::Kids(left, right) => {
            path.push(0);
            walk(left, path, codes);
            path.pop();

            path.push(1);
            walk(right, path, codes);
            path.pop();
        }
    }
}

/// Symbol-keyed lookup for the encoder's inner loop.
pub fn code_map(codes: &[(u16, BitBuffer)]) -> FxHashMap<u16, BitBuffer> {
    codes.iter().cloned().collect()
}

/// Print each leaf's code alongside its count, in the stat listing format.
pub fn show_codes(tree: &HuffmanTree, table: &FreqTable) {
    if tree.root.is_none() {
        println!("Tree not built yet");
        return;
    }
    for (symbol, code) in extract_codes(tree) {
        println!(
            "({})'{}' [{}]: {}",
            symbol,
            printable(symbol),
            table.get(symbol),
            code
        );
    }
}

/// The symbol as a displayable character, '.' when it has none.
pub fn printable(symbol: u16) -> char {
    match u8::try_from(symbol) {
        Ok(b) if b == b' ' || b.is_ascii_graphic() => b as char,
        _ => '.',
    }
}
