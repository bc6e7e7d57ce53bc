//! Scalar bit-vector descriptor.
//!
//! `BitsType` is the leaf of every type tree. It has no internal structure
//! below its width.

use crate::TypeError;

/// A vector of `bit_count` individual bits.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BitsType {
    bit_count: u32,
}

impl BitsType {
    /// Create a bit-vector descriptor of the given width.
    pub const fn new(bit_count: u32) -> Self {
        Self { bit_count }
    }

    /// Create a bit-vector descriptor from a signed width.
    ///
    /// Negative widths and widths above `u32::MAX` are rejected here, at
    /// construction, rather than surfacing later as a wrong count.
    pub fn try_new(bit_count: i64) -> Result<Self, TypeError> {
        match u32::try_from(bit_count) {
            Ok(bit_count) => Ok(Self::new(bit_count)),
            Err(_) => {
                tracing::debug!(bit_count, "rejected bit count");
                Err(TypeError::InvalidBitCount(bit_count))
            }
        }
    }

    /// Number of bits in the vector.
    pub const fn bit_count(&self) -> u32 {
        self.bit_count
    }
}

impl From<u32> for BitsType {
    fn from(bit_count: u32) -> Self {
        Self::new(bit_count)
    }
}
