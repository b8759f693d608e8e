// src/huffman/tree.rs

//! Huffman tree construction over the static frequency table.
//!
//! The whole tree lives in one fixed array of `MAX_NODES` slots. Slots
//! `0..MAX_SYMBOLS` are the leaves (slot index == symbol value) and slots
//! `MAX_SYMBOLS..MAX_NODES` are the merge nodes in creation order. Children
//! are referenced by index, so a built tree is plain data that can be shared
//! across threads as is.

use super::freq_table::weight;
use super::{MAX_NODES, MAX_SYMBOLS};
use log::debug;

/// Index of a node inside [`HuffmanTree::nodes`].
pub type NodeId = u16;

/// A slot of the node array.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Node {
    /// A concrete symbol. `code` holds `length` bits, first bit in bit 0.
    Leaf { symbol: u16, code: u32, length: u8 },
    /// A merge point. `children[b]` is taken when the next stream bit is `b`.
    Internal { children: [NodeId; 2] },
}

impl Node {
    #[inline]
    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf { .. })
    }

    /// The symbol value of a leaf.
    #[inline]
    pub fn symbol(&self) -> Option<u16> {
        match *self {
            Node::Leaf { symbol, .. } => Some(symbol),
            Node::Internal { .. } => None,
        }
    }

    #[inline]
    pub fn children(&self) -> Option<[NodeId; 2]> {
        match *self {
            Node::Internal { children } => Some(children),
            Node::Leaf { .. } => None,
        }
    }

    /// Code bits of a leaf; 0 for internal nodes.
    #[inline]
    pub fn code(&self) -> u32 {
        match *self {
            Node::Leaf { code, .. } => code,
            Node::Internal { .. } => 0,
        }
    }

    /// Code length in bits; 0 for internal nodes.
    #[inline]
    pub fn length(&self) -> u8 {
        match *self {
            Node::Leaf { length, .. } => length,
            Node::Internal { .. } => 0,
        }
    }
}

/// Working record of the merge loop: a subtree root and its total weight.
#[derive(Debug, Clone, Copy)]
struct ConstructNode {
    node_id: NodeId,
    frequency: u32,
}

/// The fixed-alphabet Huffman tree with per-leaf codes assigned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HuffmanTree {
    nodes: [Node; MAX_NODES],
    root: NodeId,
}

impl HuffmanTree {
    /// Builds the tree from the built-in frequency table.
    ///
    /// The result is identical on every platform: ordering between records
    /// only ever comes from `bubble_sort_descending`, whose tie-break is
    /// fully specified.
    pub fn build() -> Self {
        // Every slot at or beyond MAX_SYMBOLS is overwritten by the merge loop.
        let mut nodes = [Node::Internal { children: [0, 0] }; MAX_NODES];
        let mut pending = Vec::with_capacity(MAX_SYMBOLS);

        for symbol in 0..MAX_SYMBOLS {
            nodes[symbol] = Node::Leaf {
                symbol: symbol as u16,
                code: 0,
                length: 0,
            };
            pending.push(ConstructNode {
                node_id: symbol as NodeId,
                frequency: weight(symbol),
            });
        }

        let mut next_free = MAX_SYMBOLS;
        while pending.len() > 1 {
            bubble_sort_descending(&mut pending, |record| record.frequency);

            let n = pending.len();
            let lowest = pending[n - 1];
            let second = pending[n - 2];

            nodes[next_free] = Node::Internal {
                children: [lowest.node_id, second.node_id],
            };
            pending[n - 2] = ConstructNode {
                node_id: next_free as NodeId,
                frequency: lowest.frequency + second.frequency,
            };
            pending.pop();
            next_free += 1;
        }
        debug_assert_eq!(next_free, MAX_NODES);

        let root = pending[0].node_id;
        assign_codes(&mut nodes, root, 0, 0);

        let tree = Self { nodes, root };
        debug!(
            "Built Huffman tree: root node {}, longest code {} bits",
            tree.root,
            tree.max_code_length()
        );
        tree
    }

    #[inline]
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Looks up a node by index. `None` means the index is out of range.
    #[inline]
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id as usize)
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Returns `(code, length)` for a symbol in `0..MAX_SYMBOLS`.
    #[inline]
    pub fn code(&self, symbol: usize) -> Option<(u32, u8)> {
        match self.nodes[..MAX_SYMBOLS].get(symbol)? {
            Node::Leaf { code, length, .. } => Some((*code, *length)),
            Node::Internal { .. } => None,
        }
    }

    pub fn max_code_length(&self) -> u8 {
        self.nodes[..MAX_SYMBOLS]
            .iter()
            .map(Node::length)
            .max()
            .unwrap_or(0)
    }
}

impl Default for HuffmanTree {
    fn default() -> Self {
        Self::build()
    }
}

/// Sorts by `key` descending with an adjacent-swap pass.
///
/// Equal keys never swap, so the order of ties is exactly the input order.
/// Each pass sinks the smallest remaining element to the end, so the
/// scanned window shrinks by one per pass.
fn bubble_sort_descending<T, F>(list: &mut [T], key: F)
where
    F: Fn(&T) -> u32,
{
    let mut size = list.len();
    let mut changed = true;
    while changed {
        changed = false;
        for i in 0..size.saturating_sub(1) {
            if key(&list[i]) < key(&list[i + 1]) {
                list.swap(i, i + 1);
                changed = true;
            }
        }
        size = size.saturating_sub(1);
    }
}

/// Depth-first code assignment. Child 1 is visited first with bit `depth`
/// set, then child 0 with it clear.
fn assign_codes(nodes: &mut [Node; MAX_NODES], id: NodeId, bits: u32, depth: u8) {
    let index = id as usize;
    match nodes[index] {
        Node::Internal { children } => {
            assign_codes(nodes, children[1], bits | (1 << depth), depth + 1);
            assign_codes(nodes, children[0], bits, depth + 1);
        }
        Node::Leaf { symbol, .. } => {
            nodes[index] = Node::Leaf {
                symbol,
                code: bits,
                length: depth,
            };
        }
    }
}
