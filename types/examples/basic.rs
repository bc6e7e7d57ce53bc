//! Basic example: describing a register file and a read port.
//!
//! Run with: cargo run --example basic

use bumpalo::Bump;
use hwir_types::{ArcBuilder, ArenaBuilder, TyDisplay, TypeBuilder, convert_ty};

fn main() {
    println!("=== hwir-types example ===\n");

    let arena = Bump::new();
    let builder = ArenaBuilder::new(&arena);

    let word = builder.bits(32);
    let valid = builder.bits(1);
    let entry = builder.tuple([word, valid]);
    let regfile = builder.array(64, entry);
    let addr = builder.bits(6);
    let read_port = builder.function([regfile, addr], entry);

    println!("1. Types:");
    for ty in [word, entry, regfile, read_port] {
        println!("   {}", ty.display(builder));
    }

    println!("\n2. Flattening:");
    for ty in [entry, regfile, read_port] {
        match (ty.leaf_count(builder), ty.flat_bit_count(builder)) {
            (Ok(leaves), Ok(bits)) => {
                println!("   {}: {} leaves, {} bits", ty.display(builder), leaves, bits)
            }
            (Err(err), _) | (_, Err(err)) => println!("   {}: {}", ty.display(builder), err),
        }
    }

    println!("\n3. Structural equality:");
    let rebuilt = builder.array(64, builder.tuple([builder.bits(32), builder.bits(1)]));
    println!("   rebuilt register file equal: {}", regfile.is_equal_to(&rebuilt, builder));
    println!(
        "   different depth equal: {}",
        regfile.is_equal_to(&builder.array(32, entry), builder)
    );

    println!("\n4. Publishing to a shared universe:");
    let shared_builder = ArcBuilder::new();
    let shared = convert_ty(&regfile, builder, shared_builder);
    let worker = std::thread::spawn(move || shared.leaf_count(shared_builder));
    match worker.join() {
        Ok(count) => println!("   leaf count from worker thread: {:?}", count),
        Err(_) => println!("   worker thread panicked"),
    }
}
