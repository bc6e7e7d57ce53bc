//! Cross-universe operations for types.
//!
//! This module provides functions for:
//! - Structural comparison of types, possibly built by different builders
//! - Type conversion between builder representations
//!
//! Both work by recursively traversing type structures, independently of
//! how the types are stored.

use super::{StructuralEq, Ty, TyData, TypeBuilder, TypeKind, Zip};
use alloc::vec::Vec;

/// Structurally compare two types from potentially different builders.
///
/// Returns `true` if the types have the same structure, regardless of which
/// builders created them or whether they share storage. Cross-variant pairs
/// are never equal, and the walk stops at the first mismatch.
///
/// # Example
///
/// ```
/// use hwir_types::{ArcBuilder, ArenaBuilder, TypeBuilder, types_equal};
/// use bumpalo::Bump;
///
/// let arena = Bump::new();
/// let arena_builder = ArenaBuilder::new(&arena);
/// let arc_builder = ArcBuilder::new();
///
/// let arr1 = arena_builder.array(7, arena_builder.bits(42));
/// let arr2 = arc_builder.array(7, arc_builder.bits(42));
///
/// assert!(types_equal(&arr1, arena_builder, &arr2, arc_builder));
/// ```
pub fn types_equal<B1, B2>(
    ty1: &impl TypeView<B1>,
    builder1: B1,
    ty2: &impl TypeView<B2>,
    builder2: B2,
) -> bool
where
    B1: TypeBuilder,
    B2: TypeBuilder,
{
    let mut zipper = StructuralEq::new(builder1, builder2);
    <TypeKind<B1> as Zip<B1, B2, TypeKind<B2>>>::zip_with(
        &mut zipper,
        ty1.view(builder1),
        ty2.view(builder2),
    )
    .is_ok()
}

/// Convert a type from one builder to another.
///
/// This creates a structurally equivalent type in the target universe by
/// traversing the source type and reconstructing it. Arrays are rebuilt by
/// size, not element by element.
///
/// # Example
///
/// ```
/// use hwir_types::{ArcBuilder, ArenaBuilder, TypeBuilder, convert_ty, types_equal};
/// use bumpalo::Bump;
///
/// let arena = Bump::new();
/// let arena_builder = ArenaBuilder::new(&arena);
/// let arc_builder = ArcBuilder::new();
///
/// let word = arena_builder.bits(32);
/// let pair = arena_builder.tuple([word, word]);
///
/// let shared = convert_ty(&pair, arena_builder, arc_builder);
/// assert!(types_equal(&pair, arena_builder, &shared, arc_builder));
/// ```
pub fn convert_ty<B1, B2>(
    ty: &impl TypeView<B1>,
    from_builder: B1,
    to_builder: B2,
) -> B2::TypeView
where
    B1: TypeBuilder,
    B2: TypeBuilder,
    B2::TypeView: From<Ty<B2>>,
{
    let kind = match ty.view(from_builder) {
        TypeKind::Bits(bits) => TypeKind::Bits(*bits),

        TypeKind::Tuple(members) => {
            let new_members = from_builder
                .types_data(members)
                .iter()
                .map(|member| convert_ty(member, from_builder, to_builder))
                .collect::<Vec<_>>();
            TypeKind::Tuple(to_builder.intern_types(new_members))
        }

        TypeKind::Array { size, elem } => TypeKind::Array {
            size: *size,
            elem: convert_ty(elem, from_builder, to_builder),
        },

        TypeKind::Function { params, ret } => {
            let new_params = from_builder
                .types_data(params)
                .iter()
                .map(|param| convert_ty(param, from_builder, to_builder))
                .collect::<Vec<_>>();
            TypeKind::Function {
                params: to_builder.intern_types(new_params),
                ret: convert_ty(ret, from_builder, to_builder),
            }
        }
    };
    kind.intern(to_builder).into()
}

/// TypeView trait for viewing types uniformly across different builders.
///
/// This trait provides a common interface for accessing type structure
/// regardless of which TypeBuilder was used to create the type.
pub trait TypeView<B: TypeBuilder>: Sized + Clone {
    /// View the structure of this type.
    fn view(&self, builder: B) -> &TypeKind<B>;

    /// Get the full type data including flags.
    fn data(&self, builder: B) -> &TyData<B>;
}

impl<B: TypeBuilder> TypeView<B> for Ty<B> {
    fn view(&self, builder: B) -> &TypeKind<B> {
        self.kind(builder)
    }

    fn data(&self, builder: B) -> &TyData<B> {
        self.data(builder)
    }
}
