//! A static, fixed-alphabet Huffman codec.
//!
//! The code table is built once from a hard-coded frequency model over the
//! 256 byte values plus an end-of-stream symbol, and is shared read-only by
//! every encode and decode call.
//!
//! # Quick Start
//!
//! ```
//! use static_huffman::Huffman;
//!
//! let codec = Huffman::shared();
//! let packed = codec.compress(b"hello");
//!
//! let mut out = [0u8; 64];
//! let n = codec.decompress(&packed, &mut out)?;
//! assert_eq!(&out[..n], b"hello");
//! # Ok::<(), static_huffman::HuffmanError>(())
//! ```
//!
//! # Features
//!
//! - **Deterministic tables**: identical codes on every platform
//! - **Bounded decoding**: never writes past the caller's buffer
//! - **Optional parallelism**: enable `rayon` for batch decoding

// Core modules
pub mod huffman;
pub mod utils;

pub use huffman::{DecodeLut, DecodeParams, Huffman, HuffmanError, HuffmanTree, Node, NodeId};
pub use huffman::{EOS_SYMBOL, LUT_BITS, LUT_SIZE, MAX_NODES, MAX_SYMBOLS};

// Error types
pub use utils::error::{CodecError, Result};
