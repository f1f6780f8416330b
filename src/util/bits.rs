//! Append-only bit buffer used as the backing store for compressed posting lists.
//!
//! Bits are appended one at a time (or as a most-significant-bit-first group) and read
//! back by absolute bit offset. Reads past the end fail with
//! [`PilumError::OutOfRange`](crate::error::PilumError::OutOfRange).

use bit_vec::BitVec;

use crate::error::{PilumError, Result};

/// A growable, append-only sequence of bits.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BitBuffer {
    bits: BitVec,
}

impl BitBuffer {
    /// Create a new empty buffer.
    pub fn new() -> Self {
        BitBuffer { bits: BitVec::new() }
    }

    /// Number of bits currently stored.
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// Check if the buffer holds no bits.
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Append a single bit.
    pub fn push(&mut self, bit: bool) {
        self.bits.push(bit);
    }

    /// Append the low `width` bits of `value`, most significant first.
    pub fn push_bits(&mut self, value: u64, width: usize) {
        debug_assert!(width <= 64);
        for shift in (0..width).rev() {
            self.bits.push((value >> shift) & 1 == 1);
        }
    }

    /// Read the bit at `offset`.
    pub fn get(&self, offset: usize) -> Result<bool> {
        self.bits.get(offset).ok_or_else(|| {
            PilumError::out_of_range(format!(
                "bit offset {offset} is past the end of a {}-bit buffer",
                self.bits.len()
            ))
        })
    }

    /// Read `width` bits starting at `offset` as an unsigned integer, most
    /// significant first.
    pub fn read_bits(&self, offset: usize, width: usize) -> Result<u64> {
        if width > 64 {
            return Err(PilumError::invalid_argument(format!(
                "cannot read {width} bits into a 64-bit integer"
            )));
        }
        let mut value = 0u64;
        for i in 0..width {
            value = (value << 1) | self.get(offset + i)? as u64;
        }
        Ok(value)
    }

    /// Render the buffer as a string of `0`/`1` characters.
    pub fn to_bit_string(&self) -> String {
        self.bits
            .iter()
            .map(|bit| if bit { '1' } else { '0' })
            .collect()
    }
}
