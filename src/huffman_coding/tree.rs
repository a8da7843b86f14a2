//! Builds the Huffman merge tree from a frequency table.
//!
//! The encoder and the decoder each build their own tree from the same table, so the build must
//! be reproducible bit for bit. Every node carries a rank next to its weight: leaves are ranked by
//! symbol ordinal (bytes 0-255, then end-of-stream at 256), merged nodes get 257, 258, ... in the
//! order they are created. Nodes are popped lowest (weight, rank) first, and no two nodes share a
//! rank, so there is exactly one possible tree per table.
//!

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use log::{debug, trace};

use super::symbol::{FrequencyTable, Symbol};
use crate::error::CodecError;

/// Rank handed to the first merged node. Leaf ranks stop at Symbol::EndOfStream.ordinal().
const FIRST_MERGED_RANK: u32 = 257;

#[derive(Debug, Clone)]
pub enum NodeData {
    /// Internal node: (zero-branch, one-branch)
    Kids(Box<Node>, Box<Node>),
    Leaf(Symbol),
}

#[derive(Debug, Clone)]
pub struct Node {
    pub weight: u64,
    rank: u32,
    pub node_data: NodeData,
}

impl Node {
    /// Create a new leaf. Its rank is the symbol ordinal.
    pub fn leaf(symbol: Symbol, weight: u64) -> Node {
        Node {
            weight,
            rank: symbol.ordinal(),
            node_data: NodeData::Leaf(symbol),
        }
    }

    /// Merge two nodes under a new parent. `zero` hangs off the 0 branch. Fails if the combined
    /// weight doesn't fit in a u64.
    fn merge(zero: Node, one: Node, rank: u32) -> Result<Node, CodecError> {
        let weight = zero.weight.checked_add(one.weight).ok_or_else(|| {
            CodecError::InvalidFrequencyTable(format!(
                "weights {} and {} overflow when merged",
                zero.weight, one.weight
            ))
        })?;
        Ok(Node {
            weight,
            rank,
            node_data: NodeData::Kids(Box::new(zero), Box::new(one)),
        })
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self.node_data, NodeData::Leaf(_))
    }

    /// Longest root-to-leaf path below (and including) this node.
    pub fn depth(&self) -> usize {
        match &self.node_data {
            NodeData::Kids(zero, one) => 1 + zero.depth().max(one.depth()),
            NodeData::Leaf(_) => 0,
        }
    }

    fn leaf_count(&self) -> usize {
        match &self.node_data {
            NodeData::Kids(zero, one) => zero.leaf_count() + one.leaf_count(),
            NodeData::Leaf(_) => 1,
        }
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.weight == other.weight && self.rank == other.rank
    }
}
impl Eq for Node {}

impl Ord for Node {
    /// Sort Nodes by decreasing weight and decreasing rank, so the max-heap pops the lightest node
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .weight
            .cmp(&self.weight)
            .then_with(|| other.rank.cmp(&self.rank))
    }
}
impl PartialOrd for Node {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// A finished Huffman tree. Owns every node; dropping it frees the whole tree.
#[derive(Debug, Clone)]
pub struct HuffmanTree {
    root: Node,
}

impl HuffmanTree {
    pub fn root(&self) -> &Node {
        &self.root
    }

    /// True when the alphabet has a single symbol, so the root is itself a leaf.
    pub fn is_degenerate(&self) -> bool {
        self.root.is_leaf()
    }

    /// Number of symbols (leaves) in the tree.
    pub fn symbol_count(&self) -> usize {
        self.root.leaf_count()
    }

    /// Length of the longest code the tree produces.
    pub fn depth(&self) -> usize {
        self.root.depth()
    }
}

/// Build a Huffman tree from the frequency table. A table with one entry gives a degenerate tree
/// whose root is that entry's leaf; an empty table is an error.
pub fn build_tree(freqs: &FrequencyTable) -> Result<HuffmanTree, CodecError> {
    if freqs.is_empty() {
        return Err(CodecError::InvalidFrequencyTable(
            "no symbols to build a tree from".to_string(),
        ));
    }

    let mut heap: BinaryHeap<Node> = freqs
        .iter()
        .map(|(sym, weight)| Node::leaf(sym, weight))
        .collect();

    let mut rank = FIRST_MERGED_RANK;
    // Pare the heap down to one single node with child nodes. The last node left is the root.
    let root = loop {
        let zero = heap.pop().ok_or_else(|| {
            CodecError::InvalidFrequencyTable("tree build left no root".to_string())
        })?;
        let one = match heap.pop() {
            Some(one) => one,
            None => break zero,
        };
        trace!(
            "Merging weight {} (rank {}) and weight {} (rank {}) into rank {}",
            zero.weight,
            zero.rank,
            one.weight,
            one.rank,
            rank
        );
        heap.push(Node::merge(zero, one, rank)?);
        rank += 1;
    };

    let tree = HuffmanTree { root };
    debug!(
        "Built Huffman tree with {} symbols, total weight {}, depth {}.",
        tree.symbol_count(),
        tree.root.weight,
        tree.depth()
    );
    Ok(tree)
}
