// src/huffman/decoder.rs

//! Bit-level decoder: LUT fast path with a bit-by-bit tree walk for codes
//! longer than `LUT_BITS`.

use super::codec::{DecodeParams, Huffman};
use super::error::HuffmanError;
use super::tree::{Node, NodeId};
use super::{EOS_SYMBOL, LUT_BITS, REFILL_BITS};
use log::{debug, trace};

/// Least-significant-bit-first accumulator over an input slice.
struct BitBuffer<'a> {
    src: std::slice::Iter<'a, u8>,
    bits: u32,
    count: u32,
}

impl<'a> BitBuffer<'a> {
    fn new(input: &'a [u8]) -> Self {
        Self {
            src: input.iter(),
            bits: 0,
            count: 0,
        }
    }

    /// Tops the accumulator up to at least `REFILL_BITS` bits, or until the
    /// input runs out. Never holds more than `REFILL_BITS + 7` bits.
    #[inline(always)]
    fn refill(&mut self) {
        while self.count < REFILL_BITS {
            match self.src.next() {
                Some(&byte) => {
                    self.bits |= u32::from(byte) << self.count;
                    self.count += 8;
                }
                None => break,
            }
        }
    }

    #[inline(always)]
    fn consume(&mut self, n: u32) -> Result<(), HuffmanError> {
        if n > self.count {
            return Err(HuffmanError::Truncated);
        }
        self.bits >>= n;
        self.count -= n;
        Ok(())
    }
}

impl Huffman {
    /// Decodes `input` into `output`, returning the number of bytes written
    /// before the end-of-stream code.
    ///
    /// `output.len()` is the capacity. On error the contents of `output` are
    /// unspecified.
    pub fn decompress(&self, input: &[u8], output: &mut [u8]) -> Result<usize, HuffmanError> {
        let result = self.decompress_inner(input, output);
        match &result {
            Ok(written) => trace!("Decompressed {} bytes into {}", input.len(), written),
            Err(err) => debug!("Decompression of {} bytes failed: {}", input.len(), err),
        }
        result
    }

    fn decompress_inner(&self, input: &[u8], output: &mut [u8]) -> Result<usize, HuffmanError> {
        let capacity = output.len();
        let mut buffer = BitBuffer::new(input);
        let mut written = 0;

        loop {
            // Look up before refilling when enough bits are already held; the
            // refill does not change the low LUT_BITS bits.
            let early = (buffer.count >= LUT_BITS).then(|| self.lut.get(buffer.bits));

            buffer.refill();

            let id = match early {
                Some(id) => id,
                None => self.lut.get(buffer.bits),
            };

            let symbol = match *self.resolve(id)? {
                Node::Leaf { symbol, length, .. } => {
                    buffer.consume(u32::from(length))?;
                    symbol
                }
                Node::Internal { children } => {
                    buffer.consume(LUT_BITS)?;
                    self.descend(children, &mut buffer)?
                }
            };

            if symbol as usize == EOS_SYMBOL {
                return Ok(written);
            }

            let slot = output
                .get_mut(written)
                .ok_or(HuffmanError::OutputOverflow { capacity })?;
            *slot = symbol as u8;
            written += 1;
        }
    }

    /// Continues a code past the LUT window one bit at a time.
    fn descend(&self, mut children: [NodeId; 2], buffer: &mut BitBuffer<'_>) -> Result<u16, HuffmanError> {
        loop {
            if buffer.count == 0 {
                return Err(HuffmanError::Truncated);
            }
            let next = self.resolve(children[(buffer.bits & 1) as usize])?;
            buffer.consume(1)?;

            match *next {
                Node::Leaf { symbol, .. } => return Ok(symbol),
                Node::Internal { children: deeper } => children = deeper,
            }
        }
    }

    #[inline(always)]
    fn resolve(&self, id: NodeId) -> Result<&Node, HuffmanError> {
        self.tree.node(id).ok_or(HuffmanError::InvalidCode)
    }

    /// Decodes into a freshly allocated buffer of at most
    /// `params.max_output_len` bytes.
    pub fn decompress_to_vec(&self, input: &[u8], params: &DecodeParams) -> Result<Vec<u8>, HuffmanError> {
        let mut output = vec![0u8; params.max_output_len];
        let written = self.decompress(input, &mut output)?;
        output.truncate(written);
        Ok(output)
    }

    /// Decodes independent streams against this shared table.
    ///
    /// With the `rayon` feature the streams are decoded in parallel; results
    /// keep the order of `inputs` either way.
    pub fn decompress_batch<I>(&self, inputs: &[I], params: &DecodeParams) -> Vec<Result<Vec<u8>, HuffmanError>>
    where
        I: AsRef<[u8]> + Sync,
    {
        #[cfg(feature = "rayon")]
        {
            use rayon::prelude::*;
            inputs
                .par_iter()
                .map(|input| self.decompress_to_vec(input.as_ref(), params))
                .collect()
        }
        #[cfg(not(feature = "rayon"))]
        {
            inputs
                .iter()
                .map(|input| self.decompress_to_vec(input.as_ref(), params))
                .collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_eos_only_stream() {
        let codec = Huffman::new();
        let mut out = [0u8; 4];
        assert_eq!(codec.decompress(&[0x8a, 0x1b], &mut out), Ok(0));
        // A zero-capacity buffer is fine when nothing is produced.
        assert_eq!(codec.decompress(&[0x8a, 0x1b], &mut []), Ok(0));
    }

    #[test]
    fn test_known_streams() {
        let codec = Huffman::new();
        let mut out = [0u8; 16];

        let n = codec
            .decompress(&[0xbc, 0x79, 0xf3, 0xe6, 0xad, 0xb8, 0x01], &mut out)
            .unwrap();
        assert_eq!(&out[..n], b"AAAA");

        let hello = [0xae, 0x95, 0x13, 0x5c, 0x09, 0x57, 0xc2, 0x16, 0x29, 0x6e, 0x00];
        let n = codec.decompress(&hello, &mut out).unwrap();
        assert_eq!(&out[..n], b"hello");

        let zeros = [0xff, 0x2b, 0x6e, 0x00];
        let n = codec.decompress(&zeros, &mut out).unwrap();
        assert_eq!(&out[..n], &[0u8; 10]);
    }

    #[test]
    fn test_bytes_after_eos_are_ignored() {
        let codec = Huffman::new();
        let mut out = [0u8; 8];
        let n = codec
            .decompress(&[0xbc, 0x79, 0xf3, 0xe6, 0xad, 0xb8, 0x01, 0xde, 0xad], &mut out)
            .unwrap();
        assert_eq!(&out[..n], b"AAAA");
    }

    #[test]
    fn test_empty_input_is_truncated() {
        let codec = Huffman::new();
        let mut out = [0u8; 8];
        assert_eq!(codec.decompress(&[], &mut out), Err(HuffmanError::Truncated));
    }

    #[test]
    fn test_stream_without_eos_is_truncated() {
        let codec = Huffman::new();
        let mut out = [0u8; 64];
        assert_eq!(codec.decompress(&[0xff; 4], &mut out), Err(HuffmanError::Truncated));
        // Half of the EOS code.
        assert_eq!(codec.decompress(&[0x8a], &mut out), Err(HuffmanError::Truncated));
    }

    #[test]
    fn test_output_overflow() {
        let codec = Huffman::new();
        let mut out = [0u8; 3];
        assert_eq!(
            codec.decompress(&[0xbc, 0x79, 0xf3, 0xe6, 0xad, 0xb8, 0x01], &mut out),
            Err(HuffmanError::OutputOverflow { capacity: 3 })
        );
    }

    #[test]
    fn test_decompress_to_vec_respects_limit() {
        let codec = Huffman::new();
        let stream = [0xbc, 0x79, 0xf3, 0xe6, 0xad, 0xb8, 0x01];

        let params = DecodeParams::default();
        assert_eq!(codec.decompress_to_vec(&stream, &params).unwrap(), b"AAAA");

        let tight = DecodeParams { max_output_len: 2 };
        assert_eq!(
            codec.decompress_to_vec(&stream, &tight),
            Err(HuffmanError::OutputOverflow { capacity: 2 })
        );
    }

    #[test]
    fn test_bit_buffer_refill_bounds() {
        let data = [0x01, 0x02, 0x03, 0x04, 0x05];
        let mut buffer = BitBuffer::new(&data);
        buffer.refill();
        assert_eq!(buffer.count, 24);
        assert_eq!(buffer.bits, 0x03_02_01);

        buffer.consume(20).unwrap();
        assert_eq!(buffer.bits, 0x03 >> 4);
        buffer.refill();
        // Input runs out before the threshold.
        assert_eq!(buffer.count, 20);
        assert_eq!(buffer.bits, 0x05_04_0);
        assert_eq!(buffer.consume(21), Err(HuffmanError::Truncated));
    }
}
