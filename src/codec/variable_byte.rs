//! Variable-byte integer codec.
//!
//! A number is split into 7-bit segments which are written most significant first,
//! one byte per segment. The high bit of a byte is the stop flag: it is set only on
//! the last byte of a number, so the decoder never needs to know the length up
//! front. Zero is written as the single byte `1000_0000`.
//!
//! A `u64` needs at most [`MAX_BYTES`] bytes; longer sequences are rejected on decode.

use crate::codec::IntegerCodec;
use crate::error::{PilumError, Result};
use crate::util::bits::BitBuffer;

const STOP_FLAG: u64 = 0b1000_0000;
const PAYLOAD_MASK: u64 = 0b0111_1111;

/// Maximum number of bytes used to encode a `u64`.
pub const MAX_BYTES: usize = 10;

/// Codec for variable-byte codes.
#[derive(Clone, Copy, Debug, Default)]
pub struct VariableByteCodec;

impl IntegerCodec for VariableByteCodec {
    fn encode(&self, number: u64, destination: &mut BitBuffer) -> Result<usize> {
        // Collected least significant first, emitted in reverse.
        let mut segments = Vec::with_capacity(MAX_BYTES);
        let mut remaining = number;
        loop {
            segments.push(remaining & PAYLOAD_MASK);
            remaining >>= 7;
            if remaining == 0 {
                break;
            }
        }
        segments[0] |= STOP_FLAG;

        for segment in segments.iter().rev() {
            destination.push_bits(*segment, 8);
        }

        Ok(segments.len() * 8)
    }

    fn decode(&self, source: &BitBuffer, start: usize) -> Result<(u64, usize)> {
        let mut number = 0u64;
        for n_bytes in 1..=MAX_BYTES {
            let segment = source.read_bits(start + (n_bytes - 1) * 8, 8)?;
            if number >> 57 != 0 {
                return Err(PilumError::out_of_range(
                    "variable-byte value does not fit in 64 bits",
                ));
            }
            number = (number << 7) | (segment & PAYLOAD_MASK);

            if segment & STOP_FLAG != 0 {
                return Ok((number, n_bytes * 8));
            }
        }

        Err(PilumError::out_of_range(format!(
            "no stop flag within {MAX_BYTES} bytes at bit offset {start}"
        )))
    }

    fn name(&self) -> &'static str {
        "variable_byte"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encoded(number: u64) -> String {
        let mut buffer = BitBuffer::new();
        VariableByteCodec.encode(number, &mut buffer).unwrap();
        buffer.to_bit_string()
    }

    #[test]
    fn test_known_encodings() {
        assert_eq!(encoded(0), "10000000");
        assert_eq!(encoded(5), "10000101");
        assert_eq!(encoded(127), "11111111");
        assert_eq!(encoded(128), "0000000110000000");
        assert_eq!(encoded(130), "0000000110000010");
        assert_eq!(encoded(214_577), "000011010000110010110001");
    }

    #[test]
    fn test_bits_written() {
        let mut buffer = BitBuffer::new();
        assert_eq!(VariableByteCodec.encode(0, &mut buffer).unwrap(), 8);
        assert_eq!(VariableByteCodec.encode(127, &mut buffer).unwrap(), 8);
        assert_eq!(VariableByteCodec.encode(128, &mut buffer).unwrap(), 16);
        assert_eq!(VariableByteCodec.encode(16_384, &mut buffer).unwrap(), 24);
        assert_eq!(VariableByteCodec.encode(u64::MAX, &mut buffer).unwrap(), 80);
    }

    #[test]
    fn test_decode_sequence() {
        let mut buffer = BitBuffer::new();
        let numbers = [824u64, 5, 214_577, 0, 1];
        for &number in &numbers {
            VariableByteCodec.encode(number, &mut buffer).unwrap();
        }

        let mut offset = 0;
        for &expected in &numbers {
            let (number, read) = VariableByteCodec.decode(&buffer, offset).unwrap();
            assert_eq!(number, expected);
            offset += read;
        }
        assert_eq!(offset, buffer.len());
    }

    #[test]
    fn test_truncated_input() {
        let mut buffer = BitBuffer::new();
        // A single byte without the stop flag.
        buffer.push_bits(0b0000_0001, 8);

        assert!(matches!(
            VariableByteCodec.decode(&buffer, 0),
            Err(PilumError::OutOfRange(_))
        ));
        assert!(matches!(
            VariableByteCodec.decode(&buffer, 8),
            Err(PilumError::OutOfRange(_))
        ));
    }

    #[test]
    fn test_overflow() {
        let mut buffer = BitBuffer::new();
        for _ in 0..MAX_BYTES {
            buffer.push_bits(0b0111_1111, 8);
        }
        buffer.push_bits(0b1111_1111, 8);

        assert!(VariableByteCodec.decode(&buffer, 0).is_err());
    }
}
