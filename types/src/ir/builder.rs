//! TypeBuilder trait - unified type construction and storage abstraction.
//!
//! This trait combines:
//! - Construction entry points for the four type variants
//! - Low-level storage management (allocation, handle lookup)
//! - Pluggable storage strategies (arena, Arc)

use crate::{BitsType, TyData, TypeError, TypeKind};
use core::fmt::Debug;
use core::hash::Hash;

/// Abstraction over type construction and storage.
///
/// A builder is a cheap, `Copy` view of a type universe: the storage that
/// owns every type of a compilation unit. The engine only ever reads the
/// handles a builder hands out; it never frees them.
///
/// The builder separates:
/// - **What a type is** (`TypeKind<B>`) - the logical structure
/// - **How types are stored** (`B::InternedTy`) - the representation
/// - **How to construct types** (`B::bits()`, `B::array()`, etc.) - the API
///
/// # Example
///
/// ```
/// use hwir_types::{ArenaBuilder, TypeBuilder};
/// use bumpalo::Bump;
///
/// let arena = Bump::new();
/// let builder = ArenaBuilder::new(&arena);
///
/// let word = builder.bits(32);
/// let pair = builder.tuple([word, word]);
/// let bank = builder.array(16, pair);
/// assert_eq!(bank.leaf_count(builder), Ok(32));
/// ```
///
/// # Nesting depth
///
/// Equality, flattening, formatting and conversion recurse once per level
/// of nesting, and dropping the last handle of an `ArcBuilder` chain does
/// too. Width and array size cost nothing, but depth costs stack: keep type
/// trees to a few thousand levels on a default thread stack. Hardware IR
/// types are rarely more than a few dozen levels deep.
pub trait TypeBuilder: Copy + Clone + Debug + Eq {
    /// The type handle returned by this builder.
    ///
    /// This is what users interact with - it implements `TypeView`.
    type TypeView: crate::TypeView<Self> + Clone + Debug + Eq + Hash;

    /// The internal interned representation of a type.
    ///
    /// This is opaque to generic code - could be:
    /// - `&'arena TyData<B>` (arena)
    /// - `Arc<TyData<B>>` (shared)
    type InternedTy: Clone + Debug + Eq + Hash;

    /// Interned list of types (tuple members, function parameters).
    type InternedTypes: Clone + Debug + Eq + Hash;

    // ========================================================================
    // Construction entry points
    // ========================================================================

    /// Construct a bit-vector type of the given width.
    fn bits(self, bit_count: u32) -> Self::TypeView;

    /// Construct a tuple type. Member order is significant.
    fn tuple(self, members: impl IntoIterator<Item = Self::TypeView>) -> Self::TypeView;

    /// Construct an array of `size` elements of type `elem`.
    fn array(self, size: u32, elem: Self::TypeView) -> Self::TypeView;

    /// Construct a function type with parameters and return type.
    fn function(
        self,
        params: impl IntoIterator<Item = Self::TypeView>,
        ret: Self::TypeView,
    ) -> Self::TypeView;

    /// Construct a bit-vector type from a signed width.
    ///
    /// Fails with `TypeError::InvalidBitCount` for negative or oversized widths.
    fn try_bits(self, bit_count: i64) -> Result<Self::TypeView, TypeError> {
        let bits = BitsType::try_new(bit_count)?;
        Ok(self.bits(bits.bit_count()))
    }

    /// Construct an array type from a signed size.
    ///
    /// Fails with `TypeError::InvalidArraySize` for negative or oversized sizes.
    fn try_array(self, size: i64, elem: Self::TypeView) -> Result<Self::TypeView, TypeError> {
        let Ok(checked) = u32::try_from(size) else {
            tracing::debug!(size, "rejected array size");
            return Err(TypeError::InvalidArraySize(size));
        };
        Ok(self.array(checked, elem))
    }

    // ========================================================================
    // Low-level internals (implementation details)
    // ========================================================================

    /// Intern a type kind, returning a handle.
    ///
    /// The implementation is responsible for:
    /// 1. Computing the type flags via `kind.compute_flags(self)`
    /// 2. Wrapping the kind in TyData { kind, flags }
    /// 3. Storing the TyData and returning a handle
    fn intern_ty(self, kind: TypeKind<Self>) -> Self::InternedTy;

    /// Retrieve the type data (kind + flags) for an interned type.
    fn ty_data(self, ty: &Self::InternedTy) -> &TyData<Self>;

    /// Whether two handles refer to the same stored type.
    ///
    /// Only used as a fast path; `false` says nothing about structure.
    fn same_ty(self, a: &Self::InternedTy, b: &Self::InternedTy) -> bool;

    /// Intern a list of types (tuple members, function parameters).
    fn intern_types<E>(self, data: impl IntoIterator<Item = E>) -> Self::InternedTypes
    where
        E: Into<Self::TypeView>;

    /// Retrieve the interned type list.
    fn types_data(self, types: &Self::InternedTypes) -> &[Self::TypeView];
}
