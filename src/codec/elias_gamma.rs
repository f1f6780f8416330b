//! Elias-Gamma integer codec.
//!
//! For `n >= 1` with bit length `k`, the code is `k` zero bits followed by the `k`
//! bits of `n` (which always start with a one). The decoder counts the leading zeros
//! and then reads that many bits, so every value occupies exactly `2k` bits.

use crate::codec::IntegerCodec;
use crate::error::{PilumError, Result};
use crate::util::bits::BitBuffer;

/// Codec for Elias-Gamma codes. Only positive numbers can be encoded.
#[derive(Clone, Copy, Debug, Default)]
pub struct EliasGammaCodec;

impl IntegerCodec for EliasGammaCodec {
    fn encode(&self, number: u64, destination: &mut BitBuffer) -> Result<usize> {
        if number == 0 {
            return Err(PilumError::invalid_argument(
                "Elias-Gamma cannot encode 0",
            ));
        }

        let length = (u64::BITS - number.leading_zeros()) as usize;
        for _ in 0..length {
            destination.push(false);
        }
        destination.push_bits(number, length);

        Ok(2 * length)
    }

    fn decode(&self, source: &BitBuffer, start: usize) -> Result<(u64, usize)> {
        if start >= source.len() {
            return Err(PilumError::out_of_range(format!(
                "start offset {start} is past the end of a {}-bit buffer",
                source.len()
            )));
        }

        let mut length = 0;
        while !source.get(start + length)? {
            length += 1;
            if length > u64::BITS as usize {
                return Err(PilumError::out_of_range(
                    "Elias-Gamma prefix longer than 64 bits",
                ));
            }
        }
        if length == 0 {
            return Err(PilumError::out_of_range(
                "malformed Elias-Gamma code: empty length prefix",
            ));
        }

        let number = source.read_bits(start + length, length)?;
        Ok((number, 2 * length))
    }

    fn name(&self) -> &'static str {
        "elias_gamma"
    }
}
