//! Integration tests for hwir-types.
//!
//! These tests build the same fixtures in both ArenaBuilder and ArcBuilder
//! universes and check equality and leaf counts end to end.

use bumpalo::Bump;
use hwir_types::{ArcBuilder, ArenaBuilder, TyDisplay, TypeBuilder, TypeError, TypeKind, TypeView};
use pretty_assertions::assert_eq;

#[test]
fn test_bits_types() {
    let arena = Bump::new();
    let builder = ArenaBuilder::new(&arena);

    let b42 = builder.bits(42);
    let b42_2 = builder.bits(42);
    let b123 = builder.bits(123);

    assert!(b42.is_equal_to(&b42, builder));
    assert!(b42.is_equal_to(&b42_2, builder));
    assert!(!b42.is_equal_to(&b123, builder));

    assert_eq!(b42.leaf_count(builder), Ok(1));
    assert_eq!(b42_2.leaf_count(builder), Ok(1));
    assert_eq!(b123.leaf_count(builder), Ok(1));
}

#[test]
fn test_tuple_types() {
    let arena = Bump::new();
    let builder = ArenaBuilder::new(&arena);

    let b42 = builder.bits(42);
    let b42_2 = builder.bits(42);

    let t_empty = builder.tuple([]);
    let t1 = builder.tuple([b42, b42]);
    let t2 = builder.tuple([b42, b42]);
    let t3 = builder.tuple([b42, b42_2]);
    let t4 = builder.tuple([b42, b42, b42]);

    assert!(t_empty.is_equal_to(&t_empty, builder));
    assert!(!t_empty.is_equal_to(&t1, builder));
    assert!(!t_empty.is_equal_to(&b42, builder));
    assert!(t1.is_equal_to(&t1, builder));
    assert!(t1.is_equal_to(&t2, builder));
    assert!(t1.is_equal_to(&t3, builder));
    assert!(!t1.is_equal_to(&t4, builder));

    assert_eq!(t_empty.leaf_count(builder), Ok(0));
    assert_eq!(t4.leaf_count(builder), Ok(3));

    let t_nested_empty = builder.tuple([t_empty]);
    let t_nested1 = builder.tuple([t1, t2]);
    let t_nested2 = builder.tuple([t2, t1]);
    let t_nested3 = builder.tuple([t1, t3]);
    let t_nested4 = builder.tuple([t1, t4]);

    assert!(t_nested_empty.is_equal_to(&t_nested_empty, builder));
    assert!(!t_nested_empty.is_equal_to(&t_empty, builder));
    assert!(t_nested1.is_equal_to(&t_nested2, builder));
    assert!(t_nested1.is_equal_to(&t_nested3, builder));
    assert!(!t_nested1.is_equal_to(&t_nested4, builder));

    assert_eq!(t_nested_empty.leaf_count(builder), Ok(0));
    assert_eq!(t_nested3.leaf_count(builder), Ok(4));
}

#[test]
fn test_tuple_order_matters() {
    let arena = Bump::new();
    let builder = ArenaBuilder::new(&arena);

    let narrow = builder.bits(1);
    let wide = builder.bits(64);

    let forward = builder.tuple([narrow, wide]);
    let backward = builder.tuple([wide, narrow]);
    let same_twice = builder.tuple([narrow, narrow]);

    assert!(!forward.is_equal_to(&backward, builder));
    // A permutation that coincides element-wise is still equal.
    assert!(same_twice.is_equal_to(&builder.tuple([narrow, narrow]), builder));
}

#[test]
fn test_array_types() {
    let arena = Bump::new();
    let builder = ArenaBuilder::new(&arena);

    let b42 = builder.bits(42);
    let b42_2 = builder.bits(42);
    let b123 = builder.bits(123);

    let a1 = builder.array(7, b42);
    let a2 = builder.array(7, b42_2);
    let a3 = builder.array(3, b42);
    let a4 = builder.array(7, b123);

    assert!(a1.is_equal_to(&a1, builder));
    assert!(a1.is_equal_to(&a2, builder));
    assert!(!a1.is_equal_to(&a3, builder));
    assert!(!a1.is_equal_to(&a4, builder));

    assert_eq!(a1.leaf_count(builder), Ok(7));
    assert_eq!(a3.leaf_count(builder), Ok(3));
}

#[test]
fn test_arrays_of_tuples() {
    let arena = Bump::new();
    let builder = ArenaBuilder::new(&arena);

    let b42 = builder.bits(42);
    let t1 = builder.tuple([b42, b42]);
    let t2 = builder.tuple([b42, b42]);
    let t4 = builder.tuple([b42, b42, b42]);

    let a_of_t1 = builder.array(42, t1);
    let a_of_t2 = builder.array(42, t2);
    let a_of_t3 = builder.array(42, t4);

    assert!(a_of_t1.is_equal_to(&a_of_t2, builder));
    assert!(!a_of_t1.is_equal_to(&a_of_t3, builder));

    assert_eq!(a_of_t1.leaf_count(builder), Ok(84));
    assert_eq!(a_of_t3.leaf_count(builder), Ok(126));
}

#[test]
fn test_tuples_of_arrays() {
    let arena = Bump::new();
    let builder = ArenaBuilder::new(&arena);

    let b42 = builder.bits(42);
    let b42_2 = builder.bits(42);
    let a1 = builder.array(7, b42);
    let a2 = builder.array(7, b42_2);
    let a3 = builder.array(3, b42);

    let t_of_a1 = builder.tuple([a1, a1, a2]);
    let t_of_a2 = builder.tuple([a1, a1, a1]);
    let t_of_a3 = builder.tuple([a1, a2, a3]);

    assert!(t_of_a1.is_equal_to(&t_of_a2, builder));
    assert!(!t_of_a1.is_equal_to(&t_of_a3, builder));
    assert!(!t_of_a1.is_equal_to(&b42, builder));

    assert_eq!(t_of_a1.leaf_count(builder), Ok(21));
    assert_eq!(t_of_a3.leaf_count(builder), Ok(17));
}

#[test]
fn test_function_types() {
    let arena = Bump::new();
    let builder = ArenaBuilder::new(&arena);

    let b42 = builder.bits(42);
    let b123 = builder.bits(123);
    let a1 = builder.array(7, b42);
    let a2 = builder.array(7, builder.bits(42));

    let f_type1 = builder.function([b42, a1], b42);
    let f_type2 = builder.function([b42, a2], b42);
    let f_type3 = builder.function([b42], b42);
    let f_type4 = builder.function([], b42);
    let f_type5 = builder.function([b42, a1], b123);
    let f_type6 = builder.function([b123, a1], b42);

    assert!(f_type1.is_equal_to(&f_type2, builder));
    assert!(!f_type1.is_equal_to(&f_type3, builder));
    assert!(!f_type1.is_equal_to(&f_type4, builder));
    assert!(!f_type1.is_equal_to(&f_type5, builder));
    assert!(!f_type1.is_equal_to(&f_type6, builder));

    // Parameter order matters.
    let swapped = builder.function([a1, b42], b42);
    assert!(!f_type1.is_equal_to(&swapped, builder));
}

#[test]
fn test_cross_variant_inequality() {
    let builder = ArcBuilder::new();

    // Every value here flattens to 42 leaves or has 42 bits somewhere.
    let bits = builder.bits(42);
    let tuple = builder.tuple((0..42).map(|_| builder.bits(1)));
    let array = builder.array(42, builder.bits(1));
    let function = builder.function([], builder.bits(42));
    let all = [bits, tuple, array, function];

    for (i, a) in all.iter().enumerate() {
        for (j, b) in all.iter().enumerate() {
            assert_eq!(a.is_equal_to(b, builder), i == j, "{i} vs {j}");
        }
    }
}

#[test]
fn test_empty_tuple_only_equals_empty_tuple() {
    let builder = ArcBuilder::new();
    let empty = builder.tuple([]);

    assert!(empty.is_equal_to(&builder.tuple([]), builder));
    assert!(!empty.is_equal_to(&builder.bits(0), builder));
    assert!(!empty.is_equal_to(&builder.array(0, builder.bits(1)), builder));
    assert!(!empty.is_equal_to(&builder.function([], builder.tuple([])), builder));
}

#[test]
fn test_accessors() {
    let arena = Bump::new();
    let builder = ArenaBuilder::new(&arena);

    let b8 = builder.bits(8);
    let pair = builder.tuple([b8, builder.bits(3)]);
    let bank = builder.array(16, pair);
    let f = builder.function([bank], b8);

    assert_eq!(b8.bit_count(builder), Some(8));
    assert_eq!(pair.bit_count(builder), None);

    let members = pair.tuple_members(builder).unwrap_or_default();
    assert_eq!(members.len(), 2);
    assert_eq!(members[1].bit_count(builder), Some(3));

    assert_eq!(bank.array_size(builder), Some(16));
    assert_eq!(bank.array_element(builder), Some(&pair));
    assert_eq!(pair.array_size(builder), None);

    assert_eq!(f.function_params(builder), Some(&[bank][..]));
    assert_eq!(f.function_return(builder), Some(&b8));
    assert_eq!(bank.function_return(builder), None);

    assert!(b8.is_bits(builder) && pair.is_tuple(builder));
    assert!(bank.is_array(builder) && f.is_function(builder));
    assert!(matches!(bank.view(builder), TypeKind::Array { size: 16, .. }));
}

#[test]
fn test_leaf_count_rejects_function_types() {
    let arena = Bump::new();
    let builder = ArenaBuilder::new(&arena);

    let f = builder.function([builder.bits(8)], builder.bits(8));
    assert_eq!(
        f.leaf_count(builder),
        Err(TypeError::NotFlattenable {
            ty: "(bits[8]) -> bits[8]".to_string()
        })
    );

    let wrapped = builder.tuple([builder.bits(1), f]);
    assert!(matches!(
        wrapped.leaf_count(builder),
        Err(TypeError::NotFlattenable { .. })
    ));
}

#[test]
fn test_fallible_construction() {
    let builder = ArcBuilder::new();

    assert_eq!(
        builder.try_bits(-1).map(|_| ()),
        Err(TypeError::InvalidBitCount(-1))
    );
    assert_eq!(
        builder.try_array(-7, builder.bits(1)).map(|_| ()),
        Err(TypeError::InvalidArraySize(-7))
    );
    assert_eq!(
        builder.try_array(1 << 40, builder.bits(1)).map(|_| ()),
        Err(TypeError::InvalidArraySize(1 << 40))
    );

    let ok = builder.try_array(7, builder.bits(42)).map(|ty| ty.display(builder));
    assert_eq!(ok, Ok("bits[42][7]".to_string()));
}

#[test]
fn test_error_messages() {
    assert_eq!(
        TypeError::InvalidBitCount(-3).to_string(),
        "invalid bit count -3: must be in 0..=4294967295"
    );
    assert_eq!(
        TypeError::NotFlattenable {
            ty: "() -> bits[1]".to_string()
        }
        .to_string(),
        "type () -> bits[1] cannot be flattened: it is or contains a function type"
    );
}

#[test]
fn test_deeply_nested_arrays_count_by_multiplication() {
    let builder = ArcBuilder::new();

    // 1000^6 leaves; enumerating them would never finish.
    let mut ty = builder.bits(1);
    for _ in 0..6 {
        ty = builder.array(1000, ty);
    }
    assert_eq!(ty.leaf_count(builder), Ok(1_000_000_000_000_000_000));
    assert_eq!(ty.flat_bit_count(builder), Ok(1_000_000_000_000_000_000));
}

#[test]
fn test_handles_are_shareable_across_threads() {
    let builder = ArcBuilder::new();
    let word = builder.bits(32);
    let bank = builder.array(1024, builder.tuple([word.clone(), word.clone()]));
    let same_bank = builder.array(1024, builder.tuple([word.clone(), word]));

    std::thread::scope(|scope| {
        let workers: Vec<_> = (0..4)
            .map(|_| {
                scope.spawn(|| {
                    (
                        bank.is_equal_to(&same_bank, builder),
                        bank.leaf_count(builder),
                    )
                })
            })
            .collect();

        for worker in workers {
            assert_eq!(worker.join().ok(), Some((true, Ok(2048))));
        }
    });
}
