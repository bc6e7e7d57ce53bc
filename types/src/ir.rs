//! Intermediate Representation (IR) of hardware types.
//!
//! This module contains the generic, builder-agnostic representation of
//! types. The IR is parameterized by the `TypeBuilder` trait, which lets
//! different type universes choose how types are stored in memory.
//!
//! ## Structure
//!
//! - **Core types**: `TypeKind`, `Ty`, `BitsType` - the logical structure of types
//! - **TypeBuilder trait**: Construction entry points and storage
//! - **TypeView trait**: Unified view over types from different builders
//! - **Algorithms**: structural equality (`zip`), flattening (`flatten`)
//! - **Display**: Pretty-printing for diagnostics

pub mod bits;
pub mod builder;
pub mod display;
pub mod flatten;
pub mod ty;
pub mod view;
pub mod zip;

pub use bits::BitsType;
pub use builder::TypeBuilder;
pub use display::{TyDisplay, TypeFormatter};
pub use flatten::{flat_bit_count, leaf_count};
pub use ty::{Ty, TyData, TypeFlags, TypeKind};
pub use view::{TypeView, convert_ty, types_equal};
pub use zip::{StructuralEq, Zip, Zipper};
