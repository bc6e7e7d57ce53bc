//! Errors reported by type construction and flattening.

use alloc::string::String;

/// Contract violations detected by the type engine.
///
/// Equality never produces one of these; it is total over all type pairs.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TypeError {
    /// A bit count that is negative or does not fit in `u32`.
    #[error("invalid bit count {0}: must be in 0..={max}", max = u32::MAX)]
    InvalidBitCount(i64),

    /// An array size that is negative or does not fit in `u32`.
    #[error("invalid array size {0}: must be in 0..={max}", max = u32::MAX)]
    InvalidArraySize(i64),

    /// Leaf or bit counting was requested on a type that is, or contains,
    /// a function type.
    #[error("type {ty} cannot be flattened: it is or contains a function type")]
    NotFlattenable { ty: String },

    /// The leaf count does not fit in `u64`.
    #[error("leaf count of {ty} overflows u64")]
    LeafCountOverflow { ty: String },

    /// The flattened bit count does not fit in `u64`.
    #[error("flat bit count of {ty} overflows u64")]
    BitCountOverflow { ty: String },
}
