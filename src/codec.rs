//! Self-delimiting integer codecs over a [`BitBuffer`].
//!
//! Every codec appends the representation of one non-negative integer to a bit
//! buffer and can decode it again from an arbitrary start offset, reporting how
//! many bits it consumed. Consecutive values can therefore be concatenated without
//! separators and decoded sequentially.
//!
//! # Available Codecs
//!
//! - [`variable_byte::VariableByteCodec`] - base-128 bytes with a stop flag
//! - [`elias_gamma::EliasGammaCodec`] - unary length prefix plus binary value, `n >= 1`
//! - [`oneshot::OneshotCodec`] - a single bit for `1`, variable-byte otherwise
//!
//! # Examples
//!
//! ```
//! use pilum::codec::{CodecKind, IntegerCodec};
//! use pilum::util::bits::BitBuffer;
//!
//! let codec = CodecKind::VariableByte.codec();
//! let mut buffer = BitBuffer::new();
//! let written = codec.encode(300, &mut buffer).unwrap();
//! assert_eq!(codec.decode(&buffer, 0).unwrap(), (300, written));
//! ```

use std::fmt::Debug;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::util::bits::BitBuffer;

pub mod elias_gamma;
pub mod oneshot;
pub mod variable_byte;

pub use elias_gamma::EliasGammaCodec;
pub use oneshot::OneshotCodec;
pub use variable_byte::VariableByteCodec;

/// Trait for integer codecs that write into a bit buffer.
pub trait IntegerCodec: Send + Sync + Debug {
    /// Append `number` to `destination`, returning the number of bits written.
    fn encode(&self, number: u64, destination: &mut BitBuffer) -> Result<usize>;

    /// Decode the value starting at bit `start`, returning the value and the
    /// number of bits read.
    fn decode(&self, source: &BitBuffer, start: usize) -> Result<(u64, usize)>;

    /// Get the name of this codec.
    fn name(&self) -> &'static str;
}

/// Codec selector used by configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CodecKind {
    VariableByte,
    EliasGamma,
    Oneshot,
}

impl CodecKind {
    /// Get the codec implementation for this selector.
    pub fn codec(self) -> &'static dyn IntegerCodec {
        match self {
            CodecKind::VariableByte => &VariableByteCodec,
            CodecKind::EliasGamma => &EliasGammaCodec,
            CodecKind::Oneshot => &OneshotCodec,
        }
    }

    /// Smallest value the codec accepts.
    pub fn min_value(self) -> u64 {
        match self {
            CodecKind::EliasGamma => 1,
            CodecKind::VariableByte | CodecKind::Oneshot => 0,
        }
    }
}
