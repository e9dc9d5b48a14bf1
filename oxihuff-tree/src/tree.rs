//! Huffman tree construction.
//!
//! The tree is built with the classic greedy merge: every symbol with a
//! positive count starts as a leaf in a min-priority queue, and the two
//! lightest nodes are repeatedly merged until one root remains.
//!
//! Equal weights are ordered by creation sequence number (leaves in ascending
//! symbol order first, then merged nodes in the order they were made), so a
//! given frequency table always produces the same tree.

use crate::frequency::FrequencyTable;
use crate::symbol::Symbol;
use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// A node of a Huffman tree.
///
/// Internal nodes always have exactly two children. Weights only matter while
/// building; trees read back from a header carry zero weights.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HuffNode {
    /// A symbol.
    Leaf {
        /// Symbol stored at this leaf.
        symbol: Symbol,
        /// Occurrence count.
        weight: u64,
    },
    /// Two subtrees joined under one node.
    Internal {
        /// Sum of the children's weights.
        weight: u64,
        /// Subtree reached with a `0` bit.
        left: Box<HuffNode>,
        /// Subtree reached with a `1` bit.
        right: Box<HuffNode>,
    },
}

impl HuffNode {
    /// Create a leaf.
    pub fn leaf(symbol: Symbol, weight: u64) -> Self {
        Self::Leaf { symbol, weight }
    }

    /// Join two subtrees; the weight is the sum of theirs.
    pub fn internal(left: HuffNode, right: HuffNode) -> Self {
        Self::Internal {
            weight: left.weight().saturating_add(right.weight()),
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    /// Build the Huffman tree for a frequency table.
    ///
    /// The root is always an internal node. When the sentinel is the only
    /// symbol (empty input) it is placed under both branches of a synthetic
    /// root, which gives it a one-bit code.
    pub fn build(table: &FrequencyTable) -> Self {
        let mut heap = BinaryHeap::new();
        let mut seq = 0u64;

        for (symbol, count) in table.iter_nonzero() {
            heap.push(QueueEntry {
                seq,
                node: HuffNode::leaf(symbol, count),
            });
            seq += 1;
        }

        let root = loop {
            let Some(first) = heap.pop() else {
                break HuffNode::leaf(Symbol::EOF, 1);
            };
            let Some(second) = heap.pop() else {
                break first.node;
            };

            heap.push(QueueEntry {
                seq,
                node: HuffNode::internal(first.node, second.node),
            });
            seq += 1;
        };

        match root {
            HuffNode::Leaf { symbol, weight } => HuffNode::internal(
                HuffNode::leaf(symbol, weight),
                HuffNode::leaf(symbol, 0),
            ),
            internal => internal,
        }
    }

    /// Aggregate weight of this subtree.
    pub fn weight(&self) -> u64 {
        match self {
            Self::Leaf { weight, .. } | Self::Internal { weight, .. } => *weight,
        }
    }

    /// True for leaves.
    pub fn is_leaf(&self) -> bool {
        matches!(self, Self::Leaf { .. })
    }

    /// The leaf symbol, or `None` for internal nodes.
    pub fn symbol(&self) -> Option<Symbol> {
        match self {
            Self::Leaf { symbol, .. } => Some(*symbol),
            Self::Internal { .. } => None,
        }
    }

    /// Child selected by one bit (`false` = left, `true` = right).
    ///
    /// A leaf is its own child; this only matters for a tree whose root is
    /// a leaf, where any single bit then selects the root symbol.
    pub fn child(&self, bit: bool) -> &HuffNode {
        match self {
            Self::Leaf { .. } => self,
            Self::Internal { left, right, .. } => {
                if bit {
                    right
                } else {
                    left
                }
            }
        }
    }

    /// Number of leaves.
    pub fn leaf_count(&self) -> usize {
        match self {
            Self::Leaf { .. } => 1,
            Self::Internal { left, right, .. } => left.leaf_count() + right.leaf_count(),
        }
    }

    /// Length of the longest root-to-leaf path.
    pub fn height(&self) -> usize {
        match self {
            Self::Leaf { .. } => 0,
            Self::Internal { left, right, .. } => 1 + left.height().max(right.height()),
        }
    }

    /// Leaves in left-to-right order with their depth.
    pub fn leaves(&self) -> Vec<(Symbol, usize)> {
        fn walk(node: &HuffNode, depth: usize, out: &mut Vec<(Symbol, usize)>) {
            match node {
                HuffNode::Leaf { symbol, .. } => out.push((*symbol, depth)),
                HuffNode::Internal { left, right, .. } => {
                    walk(left, depth + 1, out);
                    walk(right, depth + 1, out);
                }
            }
        }

        let mut out = Vec::new();
        walk(self, 0, &mut out);
        out
    }

    /// Same shape and same leaf symbols, ignoring weights.
    pub fn structurally_eq(&self, other: &HuffNode) -> bool {
        match (self, other) {
            (Self::Leaf { symbol: a, .. }, Self::Leaf { symbol: b, .. }) => a == b,
            (
                Self::Internal {
                    left: l1,
                    right: r1,
                    ..
                },
                Self::Internal {
                    left: l2,
                    right: r2,
                    ..
                },
            ) => l1.structurally_eq(l2) && r1.structurally_eq(r2),
            _ => false,
        }
    }
}

/// Priority queue slot: lighter first, then older first.
#[derive(Debug)]
struct QueueEntry {
    seq: u64,
    node: HuffNode,
}

impl QueueEntry {
    fn key(&self) -> (u64, u64) {
        (self.node.weight(), self.seq)
    }
}

impl PartialEq for QueueEntry {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for QueueEntry {}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed: BinaryHeap is a max-heap
        other.key().cmp(&self.key())
    }
}
