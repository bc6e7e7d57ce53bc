use super::{BitsType, TypeBuilder};
use crate::{TypeError, TypeView};
use core::fmt;

use bitflags::bitflags;

bitflags! {
    /// Flags indicating structural properties of a type.
    ///
    /// Computed once when a type is interned and cached, so queries do not
    /// need a recursive traversal.
    #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
    pub struct TypeFlags: u8 {
        /// The type is, or transitively contains, a function type.
        /// Such types have no flattened form.
        const HAS_FUNCTION = 1;
    }
}

/// Data for a type: kind + cached flags.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct TyData<B: TypeBuilder> {
    /// The actual type structure
    pub kind: TypeKind<B>,

    /// Cached properties for efficient queries
    pub flags: TypeFlags,
}

/// Logical structure of a type.
///
/// The variant set is closed: every value in the IR is a bit vector, a
/// tuple, or an array, and callable entities are typed by `Function`.
/// Child types are handles into the universe owned by the builder `B`, so
/// the same kind works with arena or reference-counted storage.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeKind<B: TypeBuilder> {
    /// Fixed-width bit vector; the leaf of every type tree.
    Bits(BitsType),

    /// Ordered heterogeneous aggregate. May be empty, and may repeat a member.
    Tuple(B::InternedTypes),

    /// `size` repetitions of `elem`.
    ///
    /// The element type is stored once regardless of `size`.
    Array { size: u32, elem: B::TypeView },

    /// Signature of a callable IR entity. Not a data value.
    Function {
        params: B::InternedTypes,
        ret: B::TypeView,
    },
}

impl<B: TypeBuilder> TypeKind<B> {
    /// Compute type flags for this type kind.
    ///
    /// Called by the builder during interning. Children are already
    /// interned, so this only looks one level down.
    pub fn compute_flags(&self, builder: B) -> TypeFlags {
        match self {
            TypeKind::Bits(_) => TypeFlags::empty(),

            TypeKind::Tuple(members) => builder
                .types_data(members)
                .iter()
                .fold(TypeFlags::empty(), |flags, member| {
                    flags | member.data(builder).flags
                }),

            TypeKind::Array { elem, .. } => elem.data(builder).flags,

            TypeKind::Function { .. } => TypeFlags::HAS_FUNCTION,
        }
    }

    /// Intern this type kind into a Ty handle.
    pub fn intern(self, builder: B) -> Ty<B> {
        Ty::new(builder.intern_ty(self))
    }
}

/// Handle to an interned type.
///
/// This is a lightweight wrapper around the builder's representation.
/// Equality and hashing are structural: two handles built separately from
/// the same shape compare equal.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Ty<B: TypeBuilder> {
    interned: B::InternedTy,
}

// Implement Copy when InternedTy is Copy (e.g., for ArenaBuilder)
impl<B: TypeBuilder> Copy for Ty<B> where B::InternedTy: Copy {}

impl<B: TypeBuilder> Ty<B> {
    /// Create a new type from an interned handle.
    pub fn new(interned: B::InternedTy) -> Self {
        Self { interned }
    }

    /// Get the interned representation (for internal use).
    pub fn interned(&self) -> &B::InternedTy {
        &self.interned
    }

    /// Get the full type data (kind + flags) by looking up in the builder.
    pub fn data(&self, builder: B) -> &TyData<B> {
        builder.ty_data(&self.interned)
    }

    /// Get the type kind by looking up in the builder.
    pub fn kind(&self, builder: B) -> &TypeKind<B> {
        &self.data(builder).kind
    }

    pub fn flags(&self, builder: B) -> TypeFlags {
        self.data(builder).flags
    }

    /// Check if this is a bit-vector type.
    pub fn is_bits(&self, builder: B) -> bool {
        matches!(self.kind(builder), TypeKind::Bits(_))
    }

    /// Check if this is a tuple type.
    pub fn is_tuple(&self, builder: B) -> bool {
        matches!(self.kind(builder), TypeKind::Tuple(_))
    }

    /// Check if this is an array type.
    pub fn is_array(&self, builder: B) -> bool {
        matches!(self.kind(builder), TypeKind::Array { .. })
    }

    /// Check if this is a function type.
    pub fn is_function(&self, builder: B) -> bool {
        matches!(self.kind(builder), TypeKind::Function { .. })
    }

    /// Width of a bit-vector type, `None` for other variants.
    pub fn bit_count(&self, builder: B) -> Option<u32> {
        match self.kind(builder) {
            TypeKind::Bits(bits) => Some(bits.bit_count()),
            _ => None,
        }
    }

    /// Members of a tuple type in declaration order.
    pub fn tuple_members(&self, builder: B) -> Option<&[B::TypeView]> {
        match self.kind(builder) {
            TypeKind::Tuple(members) => Some(builder.types_data(members)),
            _ => None,
        }
    }

    pub fn array_size(&self, builder: B) -> Option<u32> {
        match self.kind(builder) {
            TypeKind::Array { size, .. } => Some(*size),
            _ => None,
        }
    }

    pub fn array_element(&self, builder: B) -> Option<&B::TypeView> {
        match self.kind(builder) {
            TypeKind::Array { elem, .. } => Some(elem),
            _ => None,
        }
    }

    /// Parameters of a function type in declaration order.
    pub fn function_params(&self, builder: B) -> Option<&[B::TypeView]> {
        match self.kind(builder) {
            TypeKind::Function { params, .. } => Some(builder.types_data(params)),
            _ => None,
        }
    }

    pub fn function_return(&self, builder: B) -> Option<&B::TypeView> {
        match self.kind(builder) {
            TypeKind::Function { ret, .. } => Some(ret),
            _ => None,
        }
    }

    /// Structural equality against another type of the same universe.
    ///
    /// Two handles to the same allocation are equal without a walk.
    pub fn is_equal_to(&self, other: &Self, builder: B) -> bool {
        builder.same_ty(&self.interned, &other.interned)
            || super::types_equal(self, builder, other, builder)
    }

    /// Number of bit-vector leaves this type expands to when flattened.
    ///
    /// Fails for function types and for aggregates containing one.
    pub fn leaf_count(&self, builder: B) -> Result<u64, TypeError> {
        super::leaf_count(self, builder)
    }

    /// Total number of bits this type expands to when flattened.
    pub fn flat_bit_count(&self, builder: B) -> Result<u64, TypeError> {
        super::flat_bit_count(self, builder)
    }
}

impl<B: TypeBuilder> fmt::Debug for Ty<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Ty({:?})", self.interned)
    }
}
