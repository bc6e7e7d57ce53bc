//! Flattening metrics: how many leaves (or bits) a type expands to.
//!
//! Arrays are counted by multiplication, never by enumerating elements, so
//! the cost of either metric is bounded by the size of the type graph and
//! not by the array sizes in it. Counts are `u64` and checked: an overflow
//! is an error, not a saturated value.

use super::{BitsType, TypeBuilder, TypeFlags, TypeFormatter, TypeKind, TypeView};
use crate::TypeError;

/// Number of bit-vector leaves `ty` expands to when fully flattened.
///
/// A bit vector is one leaf whatever its width, a tuple is the sum of its
/// members (an empty tuple has none), and an array is `size` times its
/// element. Function types, and aggregates containing them, are rejected.
///
/// # Example
///
/// ```
/// use hwir_types::{ArenaBuilder, TypeBuilder, leaf_count};
/// use bumpalo::Bump;
///
/// let arena = Bump::new();
/// let builder = ArenaBuilder::new(&arena);
///
/// let pair = builder.tuple([builder.bits(42), builder.bits(42)]);
/// let bank = builder.array(42, pair);
/// assert_eq!(leaf_count(&bank, builder), Ok(84));
/// ```
pub fn leaf_count<B: TypeBuilder>(ty: &impl TypeView<B>, builder: B) -> Result<u64, TypeError> {
    let count = flatten(ty, builder, |_| 1).map_err(|err| match err {
        FlattenError::Function => not_flattenable(ty, builder),
        FlattenError::Overflow => {
            let ty = TypeFormatter::format(ty, builder);
            tracing::debug!(%ty, "leaf count overflow");
            TypeError::LeafCountOverflow { ty }
        }
    })?;
    tracing::trace!(count, "computed leaf count");
    Ok(count)
}

/// Total number of bits `ty` expands to when fully flattened.
///
/// Same traversal as [`leaf_count`], but each bit vector contributes its
/// width instead of one.
pub fn flat_bit_count<B: TypeBuilder>(
    ty: &impl TypeView<B>,
    builder: B,
) -> Result<u64, TypeError> {
    let count = flatten(ty, builder, |bits| u64::from(bits.bit_count())).map_err(|err| {
        match err {
            FlattenError::Function => not_flattenable(ty, builder),
            FlattenError::Overflow => {
                let ty = TypeFormatter::format(ty, builder);
                tracing::debug!(%ty, "flat bit count overflow");
                TypeError::BitCountOverflow { ty }
            }
        }
    })?;
    tracing::trace!(count, "computed flat bit count");
    Ok(count)
}

enum FlattenError {
    Function,
    Overflow,
}

fn not_flattenable<B: TypeBuilder>(ty: &impl TypeView<B>, builder: B) -> TypeError {
    let ty = TypeFormatter::format(ty, builder);
    tracing::debug!(%ty, "flattening requested on a function type");
    TypeError::NotFlattenable { ty }
}

fn flatten<B: TypeBuilder>(
    ty: &impl TypeView<B>,
    builder: B,
    weight: fn(BitsType) -> u64,
) -> Result<u64, FlattenError> {
    let data = ty.data(builder);
    if data.flags.contains(TypeFlags::HAS_FUNCTION) {
        return Err(FlattenError::Function);
    }

    match &data.kind {
        TypeKind::Bits(bits) => Ok(weight(*bits)),

        TypeKind::Tuple(members) => {
            builder
                .types_data(members)
                .iter()
                .try_fold(0u64, |total, member| {
                    total
                        .checked_add(flatten(member, builder, weight)?)
                        .ok_or(FlattenError::Overflow)
                })
        }

        TypeKind::Array { size: 0, .. } => Ok(0),

        TypeKind::Array { size, elem } => flatten(elem, builder, weight)?
            .checked_mul(u64::from(*size))
            .ok_or(FlattenError::Overflow),

        TypeKind::Function { .. } => Err(FlattenError::Function),
    }
}
