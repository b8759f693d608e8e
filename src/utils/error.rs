// src/utils/error.rs

use crate::huffman::HuffmanError;
use std::fmt;

/// The primary error type for the I/O-facing operations of the library.
#[derive(Debug)]
pub enum CodecError {
    /// Writing a compressed stream to its destination failed.
    Io(std::io::Error),
    /// The codec rejected the stream or the buffer it was given.
    Huffman(HuffmanError),
}

impl std::error::Error for CodecError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CodecError::Io(err) => Some(err),
            CodecError::Huffman(err) => Some(err),
        }
    }
}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CodecError::Io(err) => write!(f, "I/O error: {}", err),
            CodecError::Huffman(err) => write!(f, "Huffman error: {}", err),
        }
    }
}

impl From<std::io::Error> for CodecError {
    fn from(err: std::io::Error) -> Self {
        CodecError::Io(err)
    }
}

impl From<HuffmanError> for CodecError {
    fn from(err: HuffmanError) -> Self {
        CodecError::Huffman(err)
    }
}

/// A specialized `Result` type for codec operations.
pub type Result<T> = std::result::Result<T, CodecError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_display_and_source() {
        let err = CodecError::from(HuffmanError::OutputOverflow { capacity: 8 });
        assert_eq!(
            err.to_string(),
            "Huffman error: Output exceeds buffer capacity of 8 bytes"
        );
        assert!(err.source().is_some());

        let io = CodecError::from(std::io::Error::new(std::io::ErrorKind::Other, "disk"));
        assert_eq!(io.to_string(), "I/O error: disk");
    }
}
