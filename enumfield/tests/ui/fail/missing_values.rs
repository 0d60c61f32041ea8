//! Compile-fail test: enum_field without a values list.

use enumfield::EnumFields;

#[derive(EnumFields)]
struct Computer {
    #[enum_field(message = "incorrect status")]
    status: String,
}

fn main() {}
