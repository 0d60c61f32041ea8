//! Compile-fail test: a record needs at least one annotated field.

use enumfield::EnumFields;

#[derive(EnumFields)]
struct Plain {
    name: String,
}

fn main() {}
