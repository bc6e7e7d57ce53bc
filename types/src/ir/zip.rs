//! Traits for "zipping" types, walking through two structures and checking that they match.
//!
//! ## Design
//!
//! The zip pattern separates two concerns:
//!
//! 1. **Structural recursion** - How to walk through type structures (`Zip` trait)
//! 2. **Leaf handling** - What to do when you reach matching children (`Zipper` trait)
//!
//! `TypeKind` implements `Zip`: it checks that the variants and their
//! scalar attributes (bit count, array size, arity) match, then hands each
//! pair of child types to the zipper. `StructuralEq` is the zipper behind
//! `types_equal`; it recursively zips every child pair.
//!
//! Every check returns `Err(())` at the first mismatch, so no walk goes
//! further than the first differing position.

use super::{TypeBuilder, TypeKind, TypeView};

/// Callback trait for zipping two types.
///
/// Implement this trait to define custom behavior when walking two types in
/// parallel. The `Zip` implementations call `zip_tys` whenever they reach a
/// pair of child types in matching positions.
pub trait Zipper<B1: TypeBuilder, B2: TypeBuilder> {
    /// Called when two types are found in matching positions.
    fn zip_tys(&mut self, a: &B1::TypeView, b: &B2::TypeView) -> Result<(), ()>;

    /// Get the first type builder.
    fn builder1(&self) -> B1;

    /// Get the second type builder.
    fn builder2(&self) -> B2;
}

/// Trait for types that can be structurally zipped.
pub trait Zip<B1, B2, Other: ?Sized = Self>
where
    B1: TypeBuilder,
    B2: TypeBuilder,
{
    /// Uses the zipper to walk through two values, ensuring that they match.
    fn zip_with<Z: Zipper<B1, B2>>(zipper: &mut Z, a: &Self, b: &Other) -> Result<(), ()>;
}

impl<B1, B2> Zip<B1, B2, TypeKind<B2>> for TypeKind<B1>
where
    B1: TypeBuilder,
    B2: TypeBuilder,
{
    fn zip_with<Z: Zipper<B1, B2>>(zipper: &mut Z, a: &Self, b: &TypeKind<B2>) -> Result<(), ()> {
        match (a, b) {
            // Bit vectors - widths must be identical
            (TypeKind::Bits(bits1), TypeKind::Bits(bits2)) => {
                if bits1 == bits2 {
                    Ok(())
                } else {
                    Err(())
                }
            }

            // Tuples - same arity, then members pairwise in order
            (TypeKind::Tuple(members1), TypeKind::Tuple(members2)) => {
                let builder1 = zipper.builder1();
                let builder2 = zipper.builder2();
                zip_lists::<B1, B2, Z>(
                    zipper,
                    builder1.types_data(members1),
                    builder2.types_data(members2),
                )
            }

            // Arrays - size first, element types only if sizes agree
            (
                TypeKind::Array {
                    size: size1,
                    elem: elem1,
                },
                TypeKind::Array {
                    size: size2,
                    elem: elem2,
                },
            ) => {
                if size1 != size2 {
                    return Err(());
                }
                zipper.zip_tys(elem1, elem2)
            }

            // Functions - zip parameter types, then return types
            (
                TypeKind::Function {
                    params: params1,
                    ret: ret1,
                },
                TypeKind::Function {
                    params: params2,
                    ret: ret2,
                },
            ) => {
                let builder1 = zipper.builder1();
                let builder2 = zipper.builder2();
                zip_lists::<B1, B2, Z>(
                    zipper,
                    builder1.types_data(params1),
                    builder2.types_data(params2),
                )?;
                zipper.zip_tys(ret1, ret2)
            }

            // Mismatched variants are never equal
            _ => Err(()),
        }
    }
}

fn zip_lists<B1, B2, Z>(
    zipper: &mut Z,
    a: &[B1::TypeView],
    b: &[B2::TypeView],
) -> Result<(), ()>
where
    B1: TypeBuilder,
    B2: TypeBuilder,
    Z: Zipper<B1, B2>,
{
    if a.len() != b.len() {
        return Err(());
    }

    for (a_elem, b_elem) in a.iter().zip(b.iter()) {
        zipper.zip_tys(a_elem, b_elem)?;
    }

    Ok(())
}

/// Zipper that succeeds only when both types have identical structure.
#[derive(Clone, Copy, Debug)]
pub struct StructuralEq<B1, B2> {
    builder1: B1,
    builder2: B2,
}

impl<B1: TypeBuilder, B2: TypeBuilder> StructuralEq<B1, B2> {
    pub fn new(builder1: B1, builder2: B2) -> Self {
        Self { builder1, builder2 }
    }
}

impl<B1: TypeBuilder, B2: TypeBuilder> Zipper<B1, B2> for StructuralEq<B1, B2> {
    fn zip_tys(&mut self, a: &B1::TypeView, b: &B2::TypeView) -> Result<(), ()> {
        <TypeKind<B1> as Zip<B1, B2, TypeKind<B2>>>::zip_with(
            self,
            a.view(self.builder1),
            b.view(self.builder2),
        )
    }

    fn builder1(&self) -> B1 {
        self.builder1
    }

    fn builder2(&self) -> B2 {
        self.builder2
    }
}
