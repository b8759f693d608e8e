// src/huffman/error.rs
use thiserror::Error;

/// Failures reported by a single decode or buffer-bounded encode call.
///
/// Every variant is fatal to the call that produced it; any partially
/// written output must be discarded.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum HuffmanError {
    #[error("Compressed stream ended in the middle of a code")]
    Truncated,

    #[error("Bit pattern does not resolve to a tree node")]
    InvalidCode,

    #[error("Output exceeds buffer capacity of {capacity} bytes")]
    OutputOverflow { capacity: usize },
}
