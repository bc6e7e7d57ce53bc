//! Hardware IR type descriptors with pluggable storage.
//!
//! Every value in the IR carries a type drawn from a closed set: bit
//! vectors, tuples, arrays, and (for callable entities) function
//! signatures. This crate builds those descriptors, decides whether two of
//! them denote the same type, and counts the leaves a type flattens to.
//!
//! # Example
//!
//! ```
//! use hwir_types::{ArenaBuilder, TypeBuilder};
//! use bumpalo::Bump;
//!
//! let arena = Bump::new();
//! let builder = ArenaBuilder::new(&arena);
//!
//! let a = builder.array(7, builder.bits(42));
//! let b = builder.array(7, builder.bits(42));
//! assert!(a.is_equal_to(&b, builder));
//! assert_eq!(a.leaf_count(builder), Ok(7));
//! ```

#![no_std]
extern crate alloc;

pub mod error;

// Intermediate Representation - generic type system
pub mod ir;

// Concrete builder implementations
pub mod arc_builder;
pub mod arena_builder;

pub use error::TypeError;

// Re-export IR types for convenience
pub use ir::{
    BitsType, StructuralEq, Ty, TyData, TyDisplay, TypeBuilder, TypeFlags, TypeFormatter,
    TypeKind, TypeView, Zip, Zipper, convert_ty, flat_bit_count, leaf_count, types_equal,
};

// Re-export concrete builders
pub use arc_builder::ArcBuilder;
pub use arena_builder::ArenaBuilder;
