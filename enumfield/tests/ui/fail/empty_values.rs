//! Compile-fail test: enum_field with an empty values list.

use enumfield::EnumFields;

#[derive(EnumFields)]
struct Computer {
    #[enum_field(values = [])]
    status: String,
}

fn main() {}
