//! Oneshot integer codec.
//!
//! Tuned for streams where most values are `1`, such as term frequencies and gaps in
//! dense posting lists: `1` is stored as a single set bit, anything else as a clear
//! bit followed by its variable-byte code.

use crate::codec::IntegerCodec;
use crate::codec::variable_byte::VariableByteCodec;
use crate::error::Result;
use crate::util::bits::BitBuffer;

/// Codec that spends one bit on the value `1`.
#[derive(Clone, Copy, Debug, Default)]
pub struct OneshotCodec;

impl IntegerCodec for OneshotCodec {
    fn encode(&self, number: u64, destination: &mut BitBuffer) -> Result<usize> {
        if number == 1 {
            destination.push(true);
            return Ok(1);
        }

        destination.push(false);
        let written = VariableByteCodec.encode(number, destination)?;
        Ok(written + 1)
    }

    fn decode(&self, source: &BitBuffer, start: usize) -> Result<(u64, usize)> {
        if source.get(start)? {
            return Ok((1, 1));
        }

        let (number, read) = VariableByteCodec.decode(source, start + 1)?;
        Ok((number, read + 1))
    }

    fn name(&self) -> &'static str {
        "oneshot"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PilumError;

    #[test]
    fn test_one_is_a_single_bit() {
        let mut buffer = BitBuffer::new();
        assert_eq!(OneshotCodec.encode(1, &mut buffer).unwrap(), 1);
        assert_eq!(buffer.to_bit_string(), "1");
    }

    #[test]
    fn test_other_values_are_prefixed() {
        let mut buffer = BitBuffer::new();
        assert_eq!(OneshotCodec.encode(0, &mut buffer).unwrap(), 9);
        assert_eq!(OneshotCodec.encode(2, &mut buffer).unwrap(), 9);
        assert_eq!(buffer.to_bit_string(), "010000000010000010");
    }

    #[test]
    fn test_mixed_stream() {
        let numbers = [1u64, 1, 7, 1, 300, 0, 1];
        let mut buffer = BitBuffer::new();
        let mut total = 0;
        for &number in &numbers {
            total += OneshotCodec.encode(number, &mut buffer).unwrap();
        }
        assert_eq!(total, buffer.len());

        let mut offset = 0;
        for &expected in &numbers {
            let (number, read) = OneshotCodec.decode(&buffer, offset).unwrap();
            assert_eq!(number, expected);
            offset += read;
        }
        assert_eq!(offset, total);
        assert!(matches!(
            OneshotCodec.decode(&buffer, offset),
            Err(PilumError::OutOfRange(_))
        ));
    }
}
