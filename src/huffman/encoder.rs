// src/huffman/encoder.rs

//! Encoder side of the codec: emits each byte's code followed by the EOS
//! code, packed least-significant bit first and zero padded to a byte.

use super::codec::Huffman;
use super::error::HuffmanError;
use super::EOS_SYMBOL;
use crate::utils::error::Result;
use bitvec::prelude::*;
use log::trace;
use std::io::Write;

impl Huffman {
    /// Exact size in bytes of `compress(data)`.
    pub fn encoded_len(&self, data: &[u8]) -> usize {
        self.encoded_bits(data).div_ceil(8)
    }

    fn encoded_bits(&self, data: &[u8]) -> usize {
        let payload: usize = data
            .iter()
            .map(|&byte| self.codes[byte as usize].1 as usize)
            .sum();
        payload + self.codes[EOS_SYMBOL].1 as usize
    }

    fn pack(&self, data: &[u8]) -> BitVec<u8, Lsb0> {
        let mut bits: BitVec<u8, Lsb0> = BitVec::with_capacity(self.encoded_bits(data));
        let symbols = data
            .iter()
            .map(|&byte| byte as usize)
            .chain(std::iter::once(EOS_SYMBOL));

        for symbol in symbols {
            let (code, length) = self.codes[symbol];
            for i in 0..length {
                bits.push((code >> i) & 1 == 1);
            }
        }

        let padded = bits.len().div_ceil(8) * 8;
        bits.resize(padded, false);
        bits
    }

    /// Compresses `data` into a new terminated stream.
    pub fn compress(&self, data: &[u8]) -> Vec<u8> {
        let packed = self.pack(data).into_vec();
        trace!("Compressed {} bytes into {}", data.len(), packed.len());
        packed
    }

    /// Compresses into a caller-provided buffer, returning the bytes used.
    pub fn compress_into(&self, data: &[u8], output: &mut [u8]) -> std::result::Result<usize, HuffmanError> {
        let capacity = output.len();
        let packed = self.compress(data);
        output
            .get_mut(..packed.len())
            .ok_or(HuffmanError::OutputOverflow { capacity })?
            .copy_from_slice(&packed);
        Ok(packed.len())
    }

    /// Compresses `data` and writes the stream to `writer`.
    pub fn write_compressed<W: Write>(&self, data: &[u8], writer: &mut W) -> Result<usize> {
        let packed = self.compress(data);
        writer.write_all(&packed)?;
        Ok(packed.len())
    }
}
