//! Static 257-symbol Huffman codec.
//!
//! ## Architecture
//!
//! The code table is fixed: it is derived once from a built-in frequency
//! model (256 byte values plus an end-of-stream symbol) and never adapted
//! per stream.
//!
//! 1. **Tree construction** (`tree`) - Deterministic merge over `freq_table`
//! 2. **Decode table** (`lut`) - 1024-entry lookup over the first 10 code bits
//! 3. **Decoding** (`decoder`) - LUT fast path, bit-by-bit walk for long codes
//! 4. **Encoding** (`encoder`) - Dual of the decoder, used to produce streams
//!
//! ## Wire format
//!
//! A stream is the codes of its bytes followed by the EOS code, packed
//! least-significant bit first across byte boundaries and zero padded to a
//! whole byte. There is no header, length prefix or checksum.

pub mod codec;
pub mod decoder;
pub mod encoder;
pub mod error;
pub mod freq_table;
pub mod lut;
pub mod tree;

pub use codec::{DecodeParams, Huffman};
pub use error::HuffmanError;
pub use lut::DecodeLut;
pub use tree::{HuffmanTree, Node, NodeId};

/// Symbol value reserved for end of stream.
pub const EOS_SYMBOL: usize = 256;
pub const MAX_SYMBOLS: usize = EOS_SYMBOL + 1;
pub const MAX_NODES: usize = MAX_SYMBOLS * 2 - 1;

pub const LUT_BITS: u32 = 10;
pub const LUT_SIZE: usize = 1 << LUT_BITS;
pub const LUT_MASK: u32 = (LUT_SIZE - 1) as u32;

/// The decoder keeps at least this many bits buffered while input remains.
pub const REFILL_BITS: u32 = 24;
