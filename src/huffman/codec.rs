// src/huffman/codec.rs

use super::MAX_SYMBOLS;
use super::lut::DecodeLut;
use super::tree::HuffmanTree;
use std::sync::OnceLock;

/// Limits for the allocating decode entry points.
#[derive(Debug, Clone)]
pub struct DecodeParams {
    /// Largest decompressed size accepted, in bytes (default: 65536)
    pub max_output_len: usize,
}

impl Default for DecodeParams {
    fn default() -> Self {
        Self {
            max_output_len: 1 << 16,
        }
    }
}

/// Immutable codec state: the tree, its decode LUT and the per-symbol codes.
///
/// Nothing here changes after [`Huffman::new`], so one instance can serve
/// any number of threads; all per-call state lives on the caller's stack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Huffman {
    pub(crate) tree: HuffmanTree,
    pub(crate) lut: DecodeLut,
    /// `(code, length)` per symbol, copied out of the leaves for the encoder.
    pub(crate) codes: [(u32, u8); MAX_SYMBOLS],
}

impl Huffman {
    /// Builds the tree, then the LUT over the finished tree.
    pub fn new() -> Self {
        let tree = HuffmanTree::build();
        let lut = DecodeLut::build(&tree);
        let leaves = &tree.nodes()[..MAX_SYMBOLS];
        let codes = std::array::from_fn(|symbol| {
            let leaf = &leaves[symbol];
            (leaf.code(), leaf.length())
        });
        Self { tree, lut, codes }
    }

    /// Process-wide instance, built on first use.
    pub fn shared() -> &'static Huffman {
        static SHARED: OnceLock<Huffman> = OnceLock::new();
        SHARED.get_or_init(Huffman::new)
    }

    pub fn tree(&self) -> &HuffmanTree {
        &self.tree
    }

    pub fn lut(&self) -> &DecodeLut {
        &self.lut
    }
}

impl Default for Huffman {
    fn default() -> Self {
        Self::new()
    }
}
