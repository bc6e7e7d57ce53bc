use crate::ir::{BitsType, TyData, TypeBuilder, TypeKind};
use alloc::vec::Vec;
use bumpalo::Bump;

/// Builder that allocates types in a caller-owned arena.
///
/// The `Bump` is the type universe: every type built here lives until the
/// arena is dropped, and is never freed individually. No deduplication is
/// performed, so building the same shape twice yields two allocations that
/// still compare equal.
///
/// Handles (`Ty<ArenaBuilder>`) are `Copy`, `Send` and `Sync`. The builder
/// itself borrows the arena and stays on the thread that owns it; use
/// [`convert_ty`](crate::convert_ty) into an [`ArcBuilder`](crate::ArcBuilder)
/// universe to hand types to other threads.
///
/// # Example
///
/// ```
/// use hwir_types::{ArenaBuilder, BitsType, TypeBuilder, TypeKind};
/// use bumpalo::Bump;
///
/// let arena = Bump::new();
/// let builder = ArenaBuilder::new(&arena);
///
/// let b42 = TypeKind::Bits(BitsType::new(42)).intern(builder);
/// let arr = TypeKind::Array { size: 7, elem: b42 }.intern(builder);
/// assert_eq!(arr, builder.array(7, builder.bits(42)));
/// ```
#[derive(Copy, Clone, Debug)]
pub struct ArenaBuilder<'arena> {
    arena: &'arena Bump,
}

// Manual implementations since Bump doesn't implement PartialEq/Eq/Hash
// We use pointer equality - two builders are equal if they point to the same arena
impl<'arena> PartialEq for ArenaBuilder<'arena> {
    fn eq(&self, other: &Self) -> bool {
        core::ptr::eq(self.arena, other.arena)
    }
}

impl<'arena> Eq for ArenaBuilder<'arena> {}

impl<'arena> core::hash::Hash for ArenaBuilder<'arena> {
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        core::ptr::hash(self.arena, state)
    }
}

impl<'arena> ArenaBuilder<'arena> {
    /// Create a new arena builder.
    pub fn new(arena: &'arena Bump) -> Self {
        Self { arena }
    }
}

impl<'arena> TypeBuilder for ArenaBuilder<'arena> {
    type TypeView = crate::Ty<Self>;
    type InternedTy = &'arena TyData<Self>;
    type InternedTypes = &'arena [crate::Ty<Self>];

    // ========================================================================
    // Construction entry points
    // ========================================================================

    fn bits(self, bit_count: u32) -> Self::TypeView {
        TypeKind::Bits(BitsType::new(bit_count)).intern(self)
    }

    fn tuple(self, members: impl IntoIterator<Item = Self::TypeView>) -> Self::TypeView {
        TypeKind::Tuple(self.intern_types(members)).intern(self)
    }

    fn array(self, size: u32, elem: Self::TypeView) -> Self::TypeView {
        TypeKind::Array { size, elem }.intern(self)
    }

    fn function(
        self,
        params: impl IntoIterator<Item = Self::TypeView>,
        ret: Self::TypeView,
    ) -> Self::TypeView {
        TypeKind::Function {
            params: self.intern_types(params),
            ret,
        }
        .intern(self)
    }

    // ========================================================================
    // Low-level internals
    // ========================================================================

    fn intern_ty(self, kind: TypeKind<Self>) -> Self::InternedTy {
        let flags = kind.compute_flags(self);
        self.arena.alloc(TyData { kind, flags })
    }

    fn ty_data(self, ty: &Self::InternedTy) -> &TyData<Self> {
        ty
    }

    fn same_ty(self, a: &Self::InternedTy, b: &Self::InternedTy) -> bool {
        core::ptr::eq(*a, *b)
    }

    fn intern_types<E>(self, data: impl IntoIterator<Item = E>) -> Self::InternedTypes
    where
        E: Into<crate::Ty<Self>>,
    {
        let types: Vec<_> = data.into_iter().map(|e| e.into()).collect();
        self.arena.alloc_slice_copy(&types)
    }

    fn types_data(self, types: &Self::InternedTypes) -> &[crate::Ty<Self>] {
        types
    }
}
