//! Compile-fail test: values must be string literals.

use enumfield::EnumFields;

#[derive(EnumFields)]
struct Computer {
    #[enum_field(values = ["on", 1])]
    status: String,
}

fn main() {}
