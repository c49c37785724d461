use std::cmp::Ordering;

use log::{debug, trace};

use crate::tools::freq_count::FreqTable;

#[derive(Eq, PartialEq, Debug, Clone)]
pub enum NodeData {
    Kids(Box<Node>, Box<Node>),
    Leaf(u16),
}

/// One node of the code tree. A leaf carries a real symbol; a merge point
/// carries only the combined weight of everything below it.
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct Node {
    pub weight: u64,
    pub node_data: NodeData,
}

impl Node {
    pub fn new(weight: u64, node_data: NodeData) -> Node {
        Node { weight, node_data }
    }

    /// Merge priority. The window is kept with heavy nodes at the front so
    /// the two nodes that sort last are the two to merge next. On equal
    /// weight a merge point outranks a leaf, and of two leaves the larger
    /// symbol value sorts first - this exact order decides which symbols
    /// get which code lengths when counts tie, so it must not change.
    fn merge_order(&self, other: &Self) -> Ordering {
        if other.weight != self.weight {
            return other.weight.cmp(&self.weight);
        }
        match (&self.node_data, &other.node_data) {
            (NodeData::Kids(..), NodeData::Leaf(_)) => Ordering::Less,
            (NodeData::Leaf(_), NodeData::Kids(..)) => Ordering::Greater,
            (NodeData::Leaf(a), NodeData::Leaf(b)) => b.cmp(a),
            // Equal-weight merge points keep their working order
            (NodeData::Kids(..), NodeData::Kids(..)) => Ordering::Equal,
        }
    }
}

/// The built code tree. `root` is None when the frequency table had no
/// nonzero counts - callers must handle the empty tree.
#[derive(Debug, Clone, Default)]
pub struct HuffmanTree {
    pub root: Option<Box<Node>>,
}

impl HuffmanTree {
    /// Build the code tree for every symbol with a nonzero count.
    ///
    /// Seeds one leaf per occurring symbol in ascending symbol order, then
    /// repeatedly sorts the survivors and joins the two lightest under a new
    /// merge point (lighter of the pair on the right). The sort is stable,
    /// which keeps equal-weight merge points in their insertion order - the
    /// same total order the original repeated adjacent-swap pass converges
    /// to.
    pub fn build(table: &FreqTable) -> HuffmanTree {
        let mut working: Vec<Node> = table
            .iter()
            .filter(|&(_, count)| count > 0)
            .map(|(symbol, count)| Node::new(count, NodeData::Leaf(symbol)))
            .collect();
        debug!("Seeded {} leaves", working.len());

        while working.len() > 1 {
            working.sort_by(|a, b| a.merge_order(b));
            let right = working.pop().unwrap();
            let left = working.pop().unwrap();
            trace!(
                "Merging weights {} + {}, {} nodes left",
                left.weight,
                right.weight,
                working.len() + 1
            );
            working.push(Node::new(
                left.weight + right.weight,
                NodeData::Kids(Box::new(left), Box::new(right)),
            ));
        }

        let root = working.pop().map(Box::new);
        match &root {
            Some(node) => debug!("Tree complete, root weight is {}", node.weight),
            None => debug!("No symbols occurred, tree is empty"),
        }
        HuffmanTree { root }
    }
}
