use crate::ir::{BitsType, TyData, TypeBuilder, TypeKind};
use alloc::sync::Arc;
use alloc::vec::Vec;

/// Builder that uses atomic reference counting (no deduplication).
///
/// Every type is an `Arc<TyData>`; a composite keeps its components alive
/// through shared ownership, so there is no arena lifetime to thread
/// through. Both the builder and its handles are `Send + Sync`, which makes
/// this the universe to publish types to concurrent passes.
///
/// # Example
///
/// ```
/// use hwir_types::{ArcBuilder, TypeBuilder};
///
/// let builder = ArcBuilder::new();
/// let word = builder.bits(32);
/// let pair = builder.tuple([word.clone(), word]);
///
/// let handle = std::thread::spawn({
///     let pair = pair.clone();
///     move || pair.leaf_count(builder)
/// });
/// assert_eq!(handle.join().unwrap(), Ok(2));
/// ```
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct ArcBuilder;

impl ArcBuilder {
    /// Create a new Arc builder.
    pub fn new() -> Self {
        Self
    }
}

impl TypeBuilder for ArcBuilder {
    type TypeView = crate::Ty<Self>;
    type InternedTy = Arc<TyData<Self>>;
    type InternedTypes = Arc<[crate::Ty<Self>]>;

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
        Arc::new(TyData { kind, flags })
    }

    fn ty_data(self, ty: &Self::InternedTy) -> &TyData<Self> {
        ty
    }

    fn same_ty(self, a: &Self::InternedTy, b: &Self::InternedTy) -> bool {
        Arc::ptr_eq(a, b)
    }

    fn intern_types<E>(self, data: impl IntoIterator<Item = E>) -> Self::InternedTypes
    where
        E: Into<crate::Ty<Self>>,
    {
        let types: Vec<_> = data.into_iter().map(|e| e.into()).collect();
        types.into()
    }

    fn types_data(self, types: &Self::InternedTypes) -> &[crate::Ty<Self>] {
        types.as_ref()
    }
}
