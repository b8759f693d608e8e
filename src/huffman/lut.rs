//! Direct-lookup table over the first `LUT_BITS` bits of a code.

use super::tree::{HuffmanTree, Node, NodeId};
use super::{LUT_BITS, LUT_MASK, LUT_SIZE};

/// Maps every `LUT_BITS`-bit window, read least-significant bit first, to
/// the node reached from the root: the leaf if its code fits in the window,
/// otherwise the internal node after `LUT_BITS` descents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodeLut {
    entries: [NodeId; LUT_SIZE],
}

impl DecodeLut {
    pub fn build(tree: &HuffmanTree) -> Self {
        let mut entries = [tree.root(); LUT_SIZE];
        for (window, entry) in entries.iter_mut().enumerate() {
            *entry = walk(tree, window as u32);
        }
        Self { entries }
    }

    /// Entry for the low `LUT_BITS` bits of `bits`.
    #[inline(always)]
    pub fn get(&self, bits: u32) -> NodeId {
        self.entries[(bits & LUT_MASK) as usize]
    }

    pub fn entries(&self) -> &[NodeId] {
        &self.entries
    }
}

fn walk(tree: &HuffmanTree, mut bits: u32) -> NodeId {
    let mut id = tree.root();
    for _ in 0..LUT_BITS {
        let Some(&Node::Internal { children }) = tree.node(id) else {
            break;
        };
        id = children[(bits & 1) as usize];
        bits >>= 1;
    }
    id
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Independent reference: descend one bit at a time, counting steps.
    fn manual_walk(tree: &HuffmanTree, window: u32) -> (NodeId, u32) {
        let mut id = tree.root();
        let mut steps = 0;
        while steps < LUT_BITS {
            match tree.node(id).unwrap() {
                Node::Internal { children } => {
                    id = children[((window >> steps) & 1) as usize];
                    steps += 1;
                }
                Node::Leaf { .. } => break,
            }
        }
        (id, steps)
    }

    #[test]
    fn test_lut_matches_tree_walk() {
        let tree = HuffmanTree::build();
        let lut = DecodeLut::build(&tree);
        assert_eq!(lut.entries().len(), LUT_SIZE);

        for window in 0..LUT_SIZE as u32 {
            let (expected, steps) = manual_walk(&tree, window);
            assert_eq!(lut.get(window), expected, "window {:#012b}", window);

            let node = tree.node(expected).unwrap();
            if node.is_leaf() {
                assert_eq!(node.length() as u32, steps);
            } else {
                assert_eq!(steps, LUT_BITS);
            }
        }
    }

    #[test]
    fn test_lut_resolves_short_codes() {
        let tree = HuffmanTree::build();
        let lut = DecodeLut::build(&tree);

        // Byte 0 owns the one-bit code `1`: every odd window resolves to it.
        for window in (1..LUT_SIZE as u32).step_by(2) {
            assert_eq!(tree.node(lut.get(window)).unwrap().symbol(), Some(0));
        }
        // Only the low bits are consulted.
        assert_eq!(lut.get(0xFFFF_FC01), lut.get(1));
    }

    #[test]
    fn test_long_codes_land_on_internal_nodes() {
        let tree = HuffmanTree::build();
        let lut = DecodeLut::build(&tree);
        let (eos_code, eos_len) = tree.code(crate::huffman::EOS_SYMBOL).unwrap();
        assert!(eos_len as u32 > LUT_BITS);

        let id = lut.get(eos_code);
        assert!(!tree.node(id).unwrap().is_leaf());
    }

    #[test]
    fn test_lut_is_deterministic() {
        let tree = HuffmanTree::build();
        assert_eq!(DecodeLut::build(&tree), DecodeLut::build(&HuffmanTree::build()));
    }
}
